//! Logical request paths.
//!
//! The gateway speaks an HTTP-shaped contract without a literal HTTP
//! server: `/api/{resource}/{idOrSubresource}/{subvalue}`. Segment 2,
//! when equal to `timeframe`, makes segment 3 a timeframe name;
//! otherwise segment 2 is an opaque record identifier. Identifiers
//! are never interpreted numerically.

use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

use thyk_core::storage::Timeframe;

use super::error::{GatewayError, Result};

/// The request methods the gateway understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl Method {
    /// Returns the method's wire name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = GatewayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            "PATCH" => Ok(Method::Patch),
            "DELETE" => Ok(Method::Delete),
            other => Err(GatewayError::UnsupportedOperation(format!(
                "unknown method {other}"
            ))),
        }
    }
}

/// The resource a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Tasks,
    Categories,
}

impl Resource {
    /// Entity type name used in not-found errors.
    pub fn entity_type(&self) -> &'static str {
        match self {
            Resource::Tasks => "Task",
            Resource::Categories => "Category",
        }
    }
}

/// What a path selects within its resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    /// The whole collection (`/api/tasks`).
    Collection,
    /// One record by opaque identifier (`/api/tasks/{id}`).
    Record(Uuid),
    /// A timeframe-scoped view (`/api/tasks/timeframe/daily`).
    Timeframe(Timeframe),
}

/// A parsed request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub resource: Resource,
    pub selector: Selector,
}

impl Route {
    /// Parses a logical request path.
    ///
    /// An identifier segment that is not a well-formed id cannot
    /// resolve to any record, so it fails as not-found rather than as
    /// an unsupported path.
    pub fn parse(path: &str) -> Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let (resource, rest) = match segments.as_slice() {
            ["api", "tasks", rest @ ..] => (Resource::Tasks, rest),
            ["api", "categories", rest @ ..] => (Resource::Categories, rest),
            _ => {
                return Err(GatewayError::UnsupportedOperation(format!(
                    "unrecognized path {path}"
                )))
            }
        };

        let selector = match rest {
            [] => Selector::Collection,
            ["timeframe", name] => {
                let timeframe = name.parse::<Timeframe>().map_err(|e| {
                    GatewayError::UnsupportedOperation(e.to_string())
                })?;
                Selector::Timeframe(timeframe)
            }
            ["timeframe"] => {
                return Err(GatewayError::UnsupportedOperation(format!(
                    "missing timeframe name in {path}"
                )))
            }
            [id] => {
                let id = Uuid::parse_str(id).map_err(|_| GatewayError::NotFound {
                    entity_type: resource.entity_type(),
                    id: (*id).to_string(),
                })?;
                Selector::Record(id)
            }
            _ => {
                return Err(GatewayError::UnsupportedOperation(format!(
                    "unrecognized path {path}"
                )))
            }
        };

        Ok(Route { resource, selector })
    }
}
