use std::fmt;

use heck::ToLowerCamelCase;
use indexmap::IndexMap;

use crate::parse::schema::SchemaOrRef;

/// The media type consumed when deriving return types.
pub const JSON_MEDIA_TYPE: &str = "application/json";

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Options,
    Head,
    Trace,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
            HttpMethod::Trace => "TRACE",
        }
    }

    /// The lowercase path-item key for this method, if `key` names one.
    pub fn from_key(key: &str) -> Option<HttpMethod> {
        match key {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "options" => Some(HttpMethod::Options),
            "head" => Some(HttpMethod::Head),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }

    /// Bodied methods get a `Content-Type` entry in their default headers.
    pub fn is_bodied(&self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put | HttpMethod::Patch)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operation name with the TypeScript-facing casing precomputed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpName {
    pub original: String,
    pub camel_case: String,
}

impl OpName {
    pub fn new(raw: &str) -> Self {
        Self {
            original: raw.to_string(),
            camel_case: raw.to_lower_camel_case(),
        }
    }
}

impl fmt::Display for OpName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

/// A validated API operation, produced by the walker once per
/// (path, method) pair and never mutated afterward.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    pub name: OpName,
    pub method: HttpMethod,
    pub path: String,
    pub summary: Option<String>,
    pub description: Option<String>,
    pub responses: Vec<ResponseDescriptor>,
}

/// One response entry: its status key (a code or `default`) and the schema
/// attached to each media type. Schemas are already dereferenced; a media
/// type may carry none.
#[derive(Debug, Clone)]
pub struct ResponseDescriptor {
    pub status: String,
    pub media_types: IndexMap<String, Option<SchemaOrRef>>,
}

impl ResponseDescriptor {
    /// The JSON body schema slot, if this response declares a JSON media
    /// type at all. `Some(None)` means the media type is present but has no
    /// schema.
    pub fn json_body(&self) -> Option<Option<&SchemaOrRef>> {
        self.media_types.get(JSON_MEDIA_TYPE).map(|s| s.as_ref())
    }
}

/// Target-type representation derived from a schema node.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    /// An object with a fixed field list, in declaration order.
    Struct(Vec<Field>),
    Array(Box<TypeNode>),
    /// An object with no declared properties, typed as a dictionary.
    Map {
        key: Box<TypeNode>,
        value: Box<TypeNode>,
    },
    Primitive(Primitive),
    Union(Vec<TypeNode>),
    /// Explicit fallback for anything the mapper does not recognize.
    Unknown,
}

/// A field on a [`TypeNode::Struct`].
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub ty: TypeNode,
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Boolean,
}
