use indexmap::IndexMap;

use crate::diagnostics::Diagnostics;
use crate::ir::{Field, Primitive, TypeNode};
use crate::parse::schema::{Schema, SchemaOrRef};

/// Map a resolved schema, or a reference that survived cycle breaking, to a
/// type node. Total: anything unrecognized becomes [`TypeNode::Unknown`]
/// plus a diagnostic under `origin`.
pub fn map_schema_or_ref(
    schema_or_ref: &SchemaOrRef,
    origin: &str,
    diags: &mut Diagnostics,
) -> TypeNode {
    match schema_or_ref {
        SchemaOrRef::Ref { ref_path } => {
            diags.push(origin, format!("unresolved reference `{ref_path}` mapped to unknown"));
            TypeNode::Unknown
        }
        SchemaOrRef::Schema(schema) => map_schema(schema, origin, diags),
    }
}

/// Map a schema node to a type node. Rules in priority order:
///
/// 1. declared `properties` → struct, field required iff listed in `required`
/// 2. `type: object` without properties → string-or-number keyed dictionary
/// 3. `type: array` → array of the mapped `items` (unknown when absent)
/// 4. `type` integer/number/string/boolean → primitive
/// 5. `allOf` → shallow-merge the parts into one synthetic object, rule 1
/// 6. anything else → unknown + diagnostic
pub fn map_schema(schema: &Schema, origin: &str, diags: &mut Diagnostics) -> TypeNode {
    if !schema.properties.is_empty() {
        return TypeNode::Struct(build_fields(
            &schema.properties,
            &schema.required,
            origin,
            diags,
        ));
    }

    match schema.type_str() {
        Some("object") => TypeNode::Map {
            key: Box::new(TypeNode::Union(vec![
                TypeNode::Primitive(Primitive::String),
                TypeNode::Primitive(Primitive::Number),
            ])),
            value: Box::new(TypeNode::Unknown),
        },
        Some("array") => match &schema.items {
            Some(items) => TypeNode::Array(Box::new(map_schema_or_ref(items, origin, diags))),
            None => TypeNode::Array(Box::new(TypeNode::Unknown)),
        },
        Some("integer" | "number") => TypeNode::Primitive(Primitive::Number),
        Some("string") => TypeNode::Primitive(Primitive::String),
        Some("boolean") => TypeNode::Primitive(Primitive::Boolean),
        _ if !schema.all_of.is_empty() => {
            let merged = merge_all_of(&schema.all_of, origin, diags);
            TypeNode::Struct(build_fields(
                &merged.properties,
                &merged.required,
                origin,
                diags,
            ))
        }
        other => {
            diags.push(origin, describe_unrecognized(other, schema));
            TypeNode::Unknown
        }
    }
}

fn build_fields(
    properties: &IndexMap<String, SchemaOrRef>,
    required: &[String],
    origin: &str,
    diags: &mut Diagnostics,
) -> Vec<Field> {
    properties
        .iter()
        .map(|(name, prop)| Field {
            name: name.clone(),
            ty: map_schema_or_ref(prop, origin, diags),
            required: required.iter().any(|r| r == name),
        })
        .collect()
}

/// Shallow merge of `allOf` parts into one synthetic object: a later part's
/// property overwrites an earlier one's on name collision (keeping the first
/// occurrence's position), `required` lists concatenate. No conflict
/// diagnostics are emitted for overwrites.
fn merge_all_of(parts: &[SchemaOrRef], origin: &str, diags: &mut Diagnostics) -> Schema {
    let mut merged = Schema::default();
    for part in parts {
        match part {
            SchemaOrRef::Schema(schema) => {
                for (name, prop) in &schema.properties {
                    merged.properties.insert(name.clone(), prop.clone());
                }
                merged.required.extend(schema.required.iter().cloned());
            }
            SchemaOrRef::Ref { ref_path } => {
                diags.push(origin, format!("unresolved `allOf` part `{ref_path}` skipped"));
            }
        }
    }
    merged
}

fn describe_unrecognized(type_str: Option<&str>, schema: &Schema) -> String {
    match type_str {
        Some(other) => format!("unrecognized schema type `{other}` mapped to unknown"),
        None if schema.schema_type.is_some() => {
            "non-string `type` value mapped to unknown".to_string()
        }
        None => "schema with no recognizable shape mapped to unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema(yaml: &str) -> Schema {
        serde_yaml_ng::from_str(yaml).expect("test schema should parse")
    }

    fn map(yaml: &str, diags: &mut Diagnostics) -> TypeNode {
        map_schema(&schema(yaml), "test", diags)
    }

    #[test]
    fn struct_field_optional_iff_absent_from_required() {
        let mut diags = Diagnostics::new();
        let node = map(
            r#"
properties:
  a:
    type: string
  b:
    type: string
required:
  - a
"#,
            &mut diags,
        );
        let TypeNode::Struct(fields) = node else {
            panic!("expected struct, got {node:?}");
        };
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].name, "a");
        assert!(fields[0].required);
        assert_eq!(fields[1].name, "b");
        assert!(!fields[1].required);
        assert!(diags.is_empty());
    }

    #[test]
    fn nested_objects_map_recursively() {
        let mut diags = Diagnostics::new();
        let node = map(
            r#"
properties:
  inner:
    properties:
      flag:
        type: boolean
    required:
      - flag
"#,
            &mut diags,
        );
        let TypeNode::Struct(fields) = node else {
            panic!("expected struct");
        };
        let TypeNode::Struct(inner) = &fields[0].ty else {
            panic!("expected nested struct");
        };
        assert_eq!(inner[0].ty, TypeNode::Primitive(Primitive::Boolean));
        assert!(inner[0].required);
    }

    #[test]
    fn bare_object_maps_to_dictionary() {
        let mut diags = Diagnostics::new();
        let node = map("type: object", &mut diags);
        let TypeNode::Map { key, value } = node else {
            panic!("expected map, got {node:?}");
        };
        assert_eq!(
            *key,
            TypeNode::Union(vec![
                TypeNode::Primitive(Primitive::String),
                TypeNode::Primitive(Primitive::Number),
            ])
        );
        assert_eq!(*value, TypeNode::Unknown);
        assert!(diags.is_empty());
    }

    #[test]
    fn array_without_items_holds_unknown() {
        let mut diags = Diagnostics::new();
        let node = map("type: array", &mut diags);
        assert_eq!(node, TypeNode::Array(Box::new(TypeNode::Unknown)));
        assert!(diags.is_empty());
    }

    #[test]
    fn primitives_map_directly() {
        let mut diags = Diagnostics::new();
        assert_eq!(
            map("type: string", &mut diags),
            TypeNode::Primitive(Primitive::String)
        );
        assert_eq!(
            map("type: integer", &mut diags),
            TypeNode::Primitive(Primitive::Number)
        );
        assert_eq!(
            map("type: number", &mut diags),
            TypeNode::Primitive(Primitive::Number)
        );
        assert_eq!(
            map("type: boolean", &mut diags),
            TypeNode::Primitive(Primitive::Boolean)
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn unrecognized_type_is_unknown_with_diagnostic() {
        let mut diags = Diagnostics::new();
        let node = map("type: widget", &mut diags);
        assert_eq!(node, TypeNode::Unknown);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn non_string_type_value_is_unknown_not_a_failure() {
        let mut diags = Diagnostics::new();
        let node = map(
            r#"
type:
  - string
  - "null"
"#,
            &mut diags,
        );
        assert_eq!(node, TypeNode::Unknown);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn empty_schema_is_unknown_with_diagnostic() {
        let mut diags = Diagnostics::new();
        let node = map_schema(&Schema::default(), "test", &mut diags);
        assert_eq!(node, TypeNode::Unknown);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn leftover_ref_is_unknown_with_diagnostic() {
        let mut diags = Diagnostics::new();
        let node = map_schema_or_ref(
            &SchemaOrRef::Ref {
                ref_path: "#/components/schemas/Loop".to_string(),
            },
            "test",
            &mut diags,
        );
        assert_eq!(node, TypeNode::Unknown);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn all_of_merges_parts_into_one_struct() {
        let mut diags = Diagnostics::new();
        let node = map(
            r#"
allOf:
  - properties:
      id:
        type: string
    required:
      - id
  - properties:
      name:
        type: string
"#,
            &mut diags,
        );
        let TypeNode::Struct(fields) = node else {
            panic!("expected struct, got {node:?}");
        };
        assert_eq!(fields.len(), 2);
        assert!(fields[0].required);
        assert!(!fields[1].required);
        assert!(diags.is_empty());
    }

    #[test]
    fn all_of_later_part_overwrites_colliding_property() {
        let mut diags = Diagnostics::new();
        let node = map(
            r#"
allOf:
  - properties:
      value:
        type: string
      extra:
        type: boolean
  - properties:
      value:
        type: number
"#,
            &mut diags,
        );
        let TypeNode::Struct(fields) = node else {
            panic!("expected struct");
        };
        // Overwrite keeps the first occurrence's position but takes the
        // later part's type; no diagnostic is emitted for the collision.
        assert_eq!(fields[0].name, "value");
        assert_eq!(fields[0].ty, TypeNode::Primitive(Primitive::Number));
        assert_eq!(fields[1].name, "extra");
        assert!(diags.is_empty());
    }

    #[test]
    fn declared_properties_take_priority_over_all_of() {
        let mut diags = Diagnostics::new();
        let node = map(
            r#"
properties:
  own:
    type: string
allOf:
  - properties:
      ignored:
        type: number
"#,
            &mut diags,
        );
        let TypeNode::Struct(fields) = node else {
            panic!("expected struct");
        };
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].name, "own");
    }
}
