use indexmap::IndexMap;

use crate::error::WalkError;
use crate::ir::{HttpMethod, OpName, OperationDescriptor, ResponseDescriptor};
use crate::parse::document::Document;
use crate::parse::operation::{Operation, OperationEntry};
use crate::parse::response::ResponseOrRef;
use crate::parse::schema::SchemaOrRef;

/// Walk the resolved document and produce one descriptor per operation, in
/// document order: paths as declared, methods as declared within each path
/// item. Shape violations abort the walk.
pub fn walk(doc: &Document) -> Result<Vec<OperationDescriptor>, WalkError> {
    let paths = doc.paths.as_ref().ok_or(WalkError::MissingPaths)?;

    let mut operations = Vec::new();
    for (path, item) in paths {
        for (key, entry) in &item.entries {
            let Some(method) = HttpMethod::from_key(key) else {
                continue;
            };
            match entry {
                OperationEntry::Operation(op) => {
                    operations.push(build_descriptor(path, method, op)?);
                }
                OperationEntry::Malformed(value) => {
                    return Err(WalkError::MalformedOperation {
                        path: path.clone(),
                        method,
                        found: json_type_name(value),
                    });
                }
            }
        }
    }

    Ok(operations)
}

fn build_descriptor(
    path: &str,
    method: HttpMethod,
    op: &Operation,
) -> Result<OperationDescriptor, WalkError> {
    let operation_id = op
        .operation_id
        .as_deref()
        .filter(|id| !id.is_empty())
        .ok_or_else(|| WalkError::MissingOperationId {
            path: path.to_string(),
            method,
        })?;

    let responses = op
        .responses
        .iter()
        .map(|(status, resp)| ResponseDescriptor {
            status: status.clone(),
            media_types: response_media_types(resp),
        })
        .collect();

    Ok(OperationDescriptor {
        name: OpName::new(operation_id),
        method,
        path: path.to_string(),
        summary: op.summary.clone(),
        description: op.description.clone(),
        responses,
    })
}

fn response_media_types(resp: &ResponseOrRef) -> IndexMap<String, Option<SchemaOrRef>> {
    match resp {
        ResponseOrRef::Response(r) => r
            .content
            .iter()
            .map(|(media_type, mt)| (media_type.clone(), mt.schema.clone()))
            .collect(),
        // Only possible when the resolver broke a response cycle; the entry
        // then contributes nothing to the return type.
        ResponseOrRef::Ref { .. } => IndexMap::new(),
    }
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
