use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::operation::PathItem;
use super::response::ResponseOrRef;
use super::schema::SchemaOrRef;

/// Top-level API document. Absent and empty `paths` are distinct: a
/// document with no paths section is rejected by the walker.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paths: Option<IndexMap<String, PathItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub components: Option<Components>,
}

/// Reusable definitions addressable through `$ref`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Components {
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub schemas: IndexMap<String, SchemaOrRef>,

    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub responses: IndexMap<String, ResponseOrRef>,
}
