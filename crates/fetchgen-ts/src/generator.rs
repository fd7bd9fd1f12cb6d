use fetchgen_core::GeneratedModule;
use fetchgen_core::diagnostics::Diagnostics;
use fetchgen_core::ir::OperationDescriptor;

use crate::base_url::BaseUrl;
use crate::emitters;

/// Options controlling client generation.
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Raw `--base-url` value, classified at generation time.
    pub base_url: Option<String>,
}

/// TypeScript fetch-client generator.
pub struct TsClientGenerator;

impl TsClientGenerator {
    /// Generate the client module for the walked operations. Generation is
    /// total: every locally-recoverable condition lands in the returned
    /// diagnostics instead of failing.
    pub fn generate(
        &self,
        ops: &[OperationDescriptor],
        options: &ClientOptions,
    ) -> GeneratedModule {
        let base = options.base_url.as_deref().map(BaseUrl::classify);
        let mut diagnostics = Diagnostics::new();
        let content = emitters::module::emit_module(ops, base.as_ref(), &mut diagnostics);
        GeneratedModule {
            content,
            diagnostics,
        }
    }
}
