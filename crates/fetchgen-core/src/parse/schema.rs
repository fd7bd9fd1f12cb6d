use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A reference or inline schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

/// The subset of JSON Schema the generator consumes. Unknown keys are
/// ignored. `type` is kept as a raw value so unrecognized forms degrade to
/// `unknown` during mapping instead of failing the parse.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<serde_json::Value>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub properties: IndexMap<String, SchemaOrRef>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaOrRef>>,

    #[serde(rename = "allOf", default, skip_serializing_if = "Vec::is_empty")]
    pub all_of: Vec<SchemaOrRef>,
}

impl Schema {
    /// The `type` keyword, when it is a plain string.
    pub fn type_str(&self) -> Option<&str> {
        self.schema_type.as_ref().and_then(|v| v.as_str())
    }
}
