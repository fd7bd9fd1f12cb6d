pub mod document;
pub mod operation;
pub mod ref_resolve;
pub mod response;
pub mod schema;

use crate::error::ParseError;
use document::Document;

/// Parse an API document from YAML.
pub fn from_yaml(input: &str) -> Result<Document, ParseError> {
    Ok(serde_yaml_ng::from_str(input)?)
}

/// Parse an API document from JSON.
pub fn from_json(input: &str) -> Result<Document, ParseError> {
    Ok(serde_json::from_str(input)?)
}
