use thiserror::Error;

use crate::ir::HttpMethod;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid reference format: {0}")]
    InvalidRefFormat(String),

    #[error("reference target not found: {0}")]
    RefTargetNotFound(String),
}

/// Fatal conditions found while walking the document. Any of these aborts
/// the run before output is produced.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("document has no paths section")]
    MissingPaths,

    #[error("malformed operation entry at {method} {path}: expected an object, found {found}")]
    MalformedOperation {
        path: String,
        method: HttpMethod,
        found: &'static str,
    },

    #[error("operation {method} {path} has no operationId")]
    MissingOperationId { path: String, method: HttpMethod },
}
