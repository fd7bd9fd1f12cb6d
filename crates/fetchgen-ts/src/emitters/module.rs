use fetchgen_core::diagnostics::Diagnostics;
use fetchgen_core::ir::OperationDescriptor;
use minijinja::{Environment, context};

use crate::base_url::BaseUrl;
use crate::synth;

/// Escape `*/` sequences that would prematurely close JSDoc comment blocks.
fn escape_jsdoc(value: String) -> String {
    value.replace("*/", "*\\/")
}

/// Emit the client module: the typed response alias, the header merge
/// helper, then one function per operation in document order.
pub fn emit_module(
    ops: &[OperationDescriptor],
    base: Option<&BaseUrl>,
    diags: &mut Diagnostics,
) -> String {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_filter("escape_jsdoc", escape_jsdoc);
    env.add_template("module.ts.j2", include_str!("../../templates/module.ts.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("module.ts.j2").unwrap();

    let operations: Vec<minijinja::Value> = ops
        .iter()
        .map(|op| synth::synthesize(op, base, diags))
        .collect();

    tmpl.render(context! {
        operations => operations,
    })
    .expect("render should succeed")
}
