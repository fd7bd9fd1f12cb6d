use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::ResolveError;

use super::document::{Components, Document};
use super::operation::OperationEntry;
use super::response::{MediaType, Response, ResponseOrRef};
use super::schema::{Schema, SchemaOrRef};

/// Resolves `$ref` pointers in a parsed document so the mapper only ever
/// sees inline schemas. A visited set breaks reference cycles by leaving
/// the offending `$ref` in place; the mapper reports it as unknown.
pub struct RefResolver<'a> {
    components: Option<&'a Components>,
    visited: HashSet<String>,
}

impl<'a> RefResolver<'a> {
    pub fn new(doc: &'a Document) -> Self {
        Self {
            components: doc.components.as_ref(),
            visited: HashSet::new(),
        }
    }

    /// Resolve every reference reachable from the paths section, returning
    /// a document with no remaining `$ref` nodes (cycles excepted).
    pub fn resolve_document(&mut self, doc: &Document) -> Result<Document, ResolveError> {
        let mut resolved = doc.clone();

        if let Some(ref mut paths) = resolved.paths {
            for (_path, item) in paths.iter_mut() {
                for (_key, entry) in item.entries.iter_mut() {
                    if let OperationEntry::Operation(op) = entry {
                        let mut responses = IndexMap::new();
                        for (status, resp) in &op.responses {
                            responses.insert(status.clone(), self.resolve_response_or_ref(resp)?);
                        }
                        op.responses = responses;
                    }
                }
            }
        }

        Ok(resolved)
    }

    fn resolve_response_or_ref(
        &mut self,
        resp: &ResponseOrRef,
    ) -> Result<ResponseOrRef, ResolveError> {
        match resp {
            ResponseOrRef::Ref { ref_path } => {
                let mut resolved = self.lookup_response(ref_path)?;
                self.resolve_media_types(&mut resolved.content)?;
                Ok(ResponseOrRef::Response(resolved))
            }
            ResponseOrRef::Response(r) => {
                let mut resolved = r.clone();
                self.resolve_media_types(&mut resolved.content)?;
                Ok(ResponseOrRef::Response(resolved))
            }
        }
    }

    fn resolve_media_types(
        &mut self,
        content: &mut IndexMap<String, MediaType>,
    ) -> Result<(), ResolveError> {
        for (_media_type, mt) in content.iter_mut() {
            if let Some(schema) = mt.schema.take() {
                mt.schema = Some(self.resolve_schema_or_ref(&schema)?);
            }
        }
        Ok(())
    }

    pub fn resolve_schema_or_ref(
        &mut self,
        schema_or_ref: &SchemaOrRef,
    ) -> Result<SchemaOrRef, ResolveError> {
        match schema_or_ref {
            SchemaOrRef::Ref { ref_path } => {
                if self.visited.contains(ref_path) {
                    // Circular reference: leave the ref in place instead of
                    // recursing forever. The mapper turns it into unknown.
                    log::debug!("breaking reference cycle at {ref_path}");
                    return Ok(schema_or_ref.clone());
                }
                self.visited.insert(ref_path.clone());
                let target = self.lookup_schema(ref_path)?;
                let result = self.resolve_schema(&target)?;
                self.visited.remove(ref_path);
                Ok(SchemaOrRef::Schema(Box::new(result)))
            }
            SchemaOrRef::Schema(schema) => {
                let resolved = self.resolve_schema(schema)?;
                Ok(SchemaOrRef::Schema(Box::new(resolved)))
            }
        }
    }

    fn resolve_schema(&mut self, schema: &Schema) -> Result<Schema, ResolveError> {
        let mut resolved = schema.clone();

        let mut properties = IndexMap::new();
        for (name, prop) in &schema.properties {
            properties.insert(name.clone(), self.resolve_schema_or_ref(prop)?);
        }
        resolved.properties = properties;

        if let Some(ref items) = schema.items {
            resolved.items = Some(Box::new(self.resolve_schema_or_ref(items)?));
        }

        resolved.all_of = schema
            .all_of
            .iter()
            .map(|s| self.resolve_schema_or_ref(s))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(resolved)
    }

    fn lookup_schema(&self, ref_path: &str) -> Result<Schema, ResolveError> {
        let name = parse_ref_name(ref_path, "schemas")?;
        self.components
            .and_then(|c| c.schemas.get(name))
            .and_then(|s| match s {
                SchemaOrRef::Schema(schema) => Some(schema.as_ref().clone()),
                SchemaOrRef::Ref { .. } => None,
            })
            .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.to_string()))
    }

    fn lookup_response(&self, ref_path: &str) -> Result<Response, ResolveError> {
        let name = parse_ref_name(ref_path, "responses")?;
        self.components
            .and_then(|c| c.responses.get(name))
            .and_then(|r| match r {
                ResponseOrRef::Response(resp) => Some(resp.clone()),
                ResponseOrRef::Ref { .. } => None,
            })
            .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.to_string()))
    }
}

/// Parse a `$ref` path like `#/components/schemas/Foo` and extract the name.
fn parse_ref_name<'a>(ref_path: &'a str, expected_section: &str) -> Result<&'a str, ResolveError> {
    let stripped = ref_path
        .strip_prefix("#/components/")
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    let (section, name) = stripped
        .split_once('/')
        .ok_or_else(|| ResolveError::InvalidRefFormat(ref_path.to_string()))?;
    if section != expected_section {
        return Err(ResolveError::InvalidRefFormat(format!(
            "expected section '{expected_section}', got '{section}' in {ref_path}"
        )));
    }
    Ok(name)
}
