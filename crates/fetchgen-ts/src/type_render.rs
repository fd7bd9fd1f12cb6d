use fetchgen_core::ir::{Primitive, TypeNode};

/// Render a [`TypeNode`] as TypeScript type syntax.
pub fn type_to_ts(node: &TypeNode) -> String {
    match node {
        TypeNode::Primitive(Primitive::String) => "string".to_string(),
        TypeNode::Primitive(Primitive::Number) => "number".to_string(),
        TypeNode::Primitive(Primitive::Boolean) => "boolean".to_string(),
        TypeNode::Unknown => "unknown".to_string(),
        TypeNode::Array(inner) => {
            let inner_ts = type_to_ts(inner);
            if inner_ts.contains('|') {
                format!("({inner_ts})[]")
            } else {
                format!("{inner_ts}[]")
            }
        }
        TypeNode::Map { key, value } => {
            format!("Record<{}, {}>", type_to_ts(key), type_to_ts(value))
        }
        TypeNode::Struct(fields) => {
            if fields.is_empty() {
                return "Record<string, unknown>".to_string();
            }
            let field_strs: Vec<String> = fields
                .iter()
                .map(|f| {
                    let ts_type = type_to_ts(&f.ty);
                    let name = property_name(&f.name);
                    if f.required {
                        format!("{name}: {ts_type}")
                    } else {
                        format!("{name}?: {ts_type}")
                    }
                })
                .collect();
            format!("{{ {} }}", field_strs.join("; "))
        }
        TypeNode::Union(variants) => {
            if variants.is_empty() {
                return "unknown".to_string();
            }
            let variant_strs: Vec<String> = variants.iter().map(type_to_ts).collect();
            variant_strs.join(" | ")
        }
    }
}

/// Quote property names that are not plain identifiers.
fn property_name(name: &str) -> String {
    let plain = !name.is_empty()
        && name
            .chars()
            .enumerate()
            .all(|(i, c)| c == '_' || c == '$' || c.is_ascii_alphabetic() || (i > 0 && c.is_ascii_digit()));
    if plain {
        name.to_string()
    } else {
        format!("\"{name}\"")
    }
}
