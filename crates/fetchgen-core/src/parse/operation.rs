use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::response::ResponseOrRef;

/// An API operation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Operation {
    #[serde(rename = "operationId", skip_serializing_if = "Option::is_none")]
    pub operation_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseOrRef>,
}

/// A raw path-item entry. Values that do not deserialize as an operation
/// object are kept as-is so the walker can reject them with a precise
/// error instead of a serde message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OperationEntry {
    Operation(Box<Operation>),
    Malformed(serde_json::Value),
}

/// A path item. All keys are captured through the flattened map so the
/// walker sees the HTTP methods in their declared order; non-method keys
/// (`summary`, extensions, ...) are simply skipped during the walk.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PathItem {
    #[serde(flatten)]
    pub entries: IndexMap<String, OperationEntry>,
}
