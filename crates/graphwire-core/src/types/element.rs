//! Graph reference elements returned by a traversal server.
//!
//! Vertices and edges arrive as *references*: an identifier and a label,
//! with properties usually absent (null). The identifier is itself a wire
//! value, since servers are free to use integers, strings or UUIDs as ids.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// A vertex reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    id: Value,
    label: String,
    properties: Value,
}

impl Vertex {
    /// Creates a vertex reference with no properties.
    #[must_use]
    pub fn new(id: Value, label: impl Into<String>) -> Self {
        Self { id, label: label.into(), properties: Value::Null }
    }

    /// Creates a vertex carrying a properties value.
    #[must_use]
    pub fn with_properties(id: Value, label: impl Into<String>, properties: Value) -> Self {
        Self { id, label: label.into(), properties }
    }

    /// The vertex identifier, any wire value the server chose.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &Value {
        &self.id
    }

    /// The vertex label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The properties value; `Null` for reference elements.
    #[inline]
    #[must_use]
    pub const fn properties(&self) -> &Value {
        &self.properties
    }
}

/// An edge reference with its incident vertex references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    id: Value,
    label: String,
    in_v: Vertex,
    out_v: Vertex,
    properties: Value,
}

impl Edge {
    /// Creates an edge reference with no properties.
    #[must_use]
    pub fn new(id: Value, label: impl Into<String>, in_v: Vertex, out_v: Vertex) -> Self {
        Self { id, label: label.into(), in_v, out_v, properties: Value::Null }
    }

    /// Creates an edge carrying a properties value.
    #[must_use]
    pub fn with_properties(
        id: Value,
        label: impl Into<String>,
        in_v: Vertex,
        out_v: Vertex,
        properties: Value,
    ) -> Self {
        Self { id, label: label.into(), in_v, out_v, properties }
    }

    /// The edge identifier.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> &Value {
        &self.id
    }

    /// The edge label.
    #[inline]
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The incoming vertex reference.
    #[inline]
    #[must_use]
    pub const fn in_v(&self) -> &Vertex {
        &self.in_v
    }

    /// The outgoing vertex reference.
    #[inline]
    #[must_use]
    pub const fn out_v(&self) -> &Vertex {
        &self.out_v
    }

    /// The properties value; `Null` for reference elements.
    #[inline]
    #[must_use]
    pub const fn properties(&self) -> &Value {
        &self.properties
    }
}
