use fetchgen_core::diagnostics::Diagnostics;
use fetchgen_core::ir::{HttpMethod, OperationDescriptor, TypeNode};
use fetchgen_core::path_template::{self, PathTemplate};
use fetchgen_core::typemap;
use minijinja::context;

use crate::base_url::BaseUrl;
use crate::type_render::type_to_ts;

/// Build the render context for one callable unit: signature, URL
/// expression, default headers, and return type.
pub fn synthesize(
    op: &OperationDescriptor,
    base: Option<&BaseUrl>,
    diags: &mut Diagnostics,
) -> minijinja::Value {
    let template = path_template::parse_path(&op.path);
    let return_type = type_to_ts(&response_union(op, diags));

    context! {
        fn_name => op.name.camel_case.clone(),
        http_method => op.method.as_str(),
        summary => op.summary.clone(),
        description => op.description.clone(),
        has_params => !template.params.is_empty(),
        params_signature => params_signature(&template),
        url_expr => url_expr(&template),
        base_expr => BaseUrl::to_expr(base),
        default_headers => default_headers(op.method),
        return_type => return_type,
    }
}

/// The return type is the union of the mapped JSON body of every response,
/// in declaration order. Responses without a JSON media type contribute
/// nothing; a JSON media type without a schema contributes `unknown`.
fn response_union(op: &OperationDescriptor, diags: &mut Diagnostics) -> TypeNode {
    let mut members = Vec::new();
    for resp in &op.responses {
        let Some(body) = resp.json_body() else {
            continue;
        };
        match body {
            Some(schema) => {
                let origin = format!("{}: response {}", op.name.original, resp.status);
                members.push(typemap::map_schema_or_ref(schema, &origin, diags));
            }
            None => members.push(TypeNode::Unknown),
        }
    }
    if members.len() == 1 {
        members.remove(0)
    } else {
        TypeNode::Union(members)
    }
}

/// The options parameter. Path parameters, when present, arrive as a
/// required `params` object whose keys are exactly the extracted names;
/// duplicates collapse to a single key.
fn params_signature(template: &PathTemplate) -> String {
    if template.is_static() {
        return "options: { search?: string } & Omit<RequestInit, \"method\"> = {}".to_string();
    }

    let mut unique: Vec<&str> = Vec::new();
    for name in &template.params {
        if !unique.contains(&name.as_str()) {
            unique.push(name);
        }
    }
    let keys: Vec<String> = unique.iter().map(|name| format!("{name}: string")).collect();
    format!(
        "options: {{ params: {{ {} }}; search?: string }} & Omit<RequestInit, \"method\">",
        keys.join("; ")
    )
}

/// The first argument of `new URL`: a plain string literal for static
/// paths, a template literal interpolating `params.<name>` otherwise.
fn url_expr(template: &PathTemplate) -> String {
    if template.is_static() {
        return format!("\"{}\"", template.literals[0]);
    }

    let mut expr = String::from("`");
    expr.push_str(&template.literals[0]);
    for (name, literal) in template.params.iter().zip(&template.literals[1..]) {
        expr.push_str("${params.");
        expr.push_str(name);
        expr.push('}');
        expr.push_str(literal);
    }
    expr.push('`');
    expr
}

fn default_headers(method: HttpMethod) -> &'static str {
    if method.is_bodied() {
        r#"{ Accept: "application/json", "Content-Type": "application/json" }"#
    } else {
        r#"{ Accept: "application/json" }"#
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_path_signature_has_no_params() {
        let template = path_template::parse_path("/widgets");
        assert_eq!(
            params_signature(&template),
            "options: { search?: string } & Omit<RequestInit, \"method\"> = {}"
        );
    }

    #[test]
    fn parameterized_signature_lists_each_name_once() {
        let template = path_template::parse_path("/pairs/{id}/{id}");
        assert_eq!(
            params_signature(&template),
            "options: { params: { id: string }; search?: string } & Omit<RequestInit, \"method\">"
        );
    }

    #[test]
    fn static_url_is_a_string_literal() {
        let template = path_template::parse_path("/widgets");
        assert_eq!(url_expr(&template), "\"/widgets\"");
    }

    #[test]
    fn parameterized_url_interpolates_each_occurrence() {
        let template = path_template::parse_path("/orgs/{org}/repos/{repo}");
        assert_eq!(url_expr(&template), "`/orgs/${params.org}/repos/${params.repo}`");

        let doubled = path_template::parse_path("/pairs/{id}/{id}");
        assert_eq!(url_expr(&doubled), "`/pairs/${params.id}/${params.id}`");
    }

    #[test]
    fn bodied_methods_default_content_type() {
        assert!(default_headers(HttpMethod::Post).contains("Content-Type"));
        assert!(default_headers(HttpMethod::Put).contains("Content-Type"));
        assert!(default_headers(HttpMethod::Patch).contains("Content-Type"));
        assert!(!default_headers(HttpMethod::Get).contains("Content-Type"));
        assert!(!default_headers(HttpMethod::Delete).contains("Content-Type"));
    }
}
