//! Wire values exchanged with a traversal server.
//!
//! This module provides the [`Value`] enum, which represents every value type
//! the GraphWire binary protocol can carry.
//!
//! # Example
//!
//! ```
//! use graphwire_core::Value;
//!
//! // Create values via From trait
//! let name: Value = "Alice".into();
//! let age: Value = 30i32.into();
//! let weight: Value = 62.5f64.into();
//! let active: Value = true.into();
//!
//! // Access typed values
//! assert_eq!(name.as_str(), Some("Alice"));
//! assert_eq!(age.as_int(), Some(30));
//! assert_eq!(weight.as_double(), Some(62.5));
//! assert_eq!(active.as_bool(), Some(true));
//!
//! // Collections nest arbitrarily
//! let row: Value = vec![Value::from(1i32), Value::from("a")].into();
//! assert_eq!(row.as_list().map(|l| l.len()), Some(2));
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::bytecode::{Bytecode, Traversal};
use super::element::{Edge, Vertex};
use super::enums::EnumValue;
use super::traverser::Traverser;

/// A value that can be sent to or received from a traversal server.
///
/// This enum is the closed catalogue of types the binary wire format
/// understands. Every variant maps to exactly one wire type code.
///
/// # Supported Types
///
/// | Variant | Rust Type | Use Case |
/// |---------|-----------|----------|
/// | `Null` | - | Absent/unspecified values |
/// | `Bool` | `bool` | Predicate results, flags |
/// | `Byte` | `u8` | Single octets |
/// | `Short` | `i16` | Small integers |
/// | `Int` | `i32` | Counts, ids, arguments |
/// | `Long` | `i64` | Large ids, timestamps, bulk |
/// | `Float` | `f32` | Single-precision measures |
/// | `Double` | `f64` | Scores, weights |
/// | `String` | `String` | Labels, keys, text |
/// | `Uuid` | `Uuid` | Request and element identifiers |
/// | `Date` / `Timestamp` | `DateTime<Utc>` | Wall-clock instants |
/// | `List` / `Set` | `Vec<Value>` | Ordered / deduplicated sequences |
/// | `Map` | `Vec<(Value, Value)>` | Key/value pairs, any key type |
/// | `Enum` | [`EnumValue`] | Symbolic constants (OUT, desc, ...) |
/// | `Bytecode` | [`Bytecode`] | Traversal programs |
/// | `Traversal` | [`Traversal`] | Program builders (boundary type) |
/// | `Traverser` | [`Traverser`] | Traversal results |
/// | `Vertex` / `Edge` | [`Vertex`] / [`Edge`] | Graph reference elements |
///
/// Map entries are kept as ordered pairs rather than a hash map so that keys
/// of any type (including floats and collections) are representable and the
/// wire order survives a decode/encode round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// Null/absent value
    Null,
    /// Boolean value
    Bool(bool),
    /// Single octet
    Byte(u8),
    /// 16-bit signed integer
    Short(i16),
    /// 32-bit signed integer
    Int(i32),
    /// 64-bit signed integer
    Long(i64),
    /// 32-bit floating point number
    Float(f32),
    /// 64-bit floating point number
    Double(f64),
    /// UTF-8 string
    String(String),
    /// Universally unique identifier
    Uuid(Uuid),
    /// Wall-clock instant with millisecond precision
    Date(DateTime<Utc>),
    /// Millisecond timestamp, distinct wire type from `Date`
    Timestamp(DateTime<Utc>),
    /// Ordered sequence of values
    List(Vec<Value>),
    /// Deduplicated sequence; framing is identical to `List`, only the
    /// type code and membership semantics differ
    Set(Vec<Value>),
    /// Key/value pairs in wire order
    Map(Vec<(Value, Value)>),
    /// Symbolic enumeration constant
    Enum(EnumValue),
    /// Traversal program
    Bytecode(Bytecode),
    /// Traversal program builder; serializes as its underlying bytecode
    Traversal(Traversal),
    /// Traversal result: a value with a repetition count
    Traverser(Box<Traverser>),
    /// Graph vertex reference
    Vertex(Box<Vertex>),
    /// Graph edge reference
    Edge(Box<Edge>),
}

impl Value {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value as a boolean if it is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as a 32-bit integer if it is one.
    #[inline]
    #[must_use]
    pub const fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a 64-bit integer if it is one.
    #[inline]
    #[must_use]
    pub const fn as_long(&self) -> Option<i64> {
        match self {
            Self::Long(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a double if it is one.
    #[inline]
    #[must_use]
    pub const fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is one.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as a UUID if it is one.
    #[inline]
    #[must_use]
    pub const fn as_uuid(&self) -> Option<Uuid> {
        match self {
            Self::Uuid(u) => Some(*u),
            _ => None,
        }
    }

    /// Returns the list elements if the value is a list.
    #[inline]
    #[must_use]
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the set elements if the value is a set.
    #[inline]
    #[must_use]
    pub fn as_set(&self) -> Option<&[Value]> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the map entries, in wire order, if the value is a map.
    #[inline]
    #[must_use]
    pub fn as_map(&self) -> Option<&[(Value, Value)]> {
        match self {
            Self::Map(entries) => Some(entries),
            _ => None,
        }
    }

    /// Returns the enumeration constant if the value is one.
    #[inline]
    #[must_use]
    pub const fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            Self::Enum(e) => Some(e),
            _ => None,
        }
    }

    /// Returns the traversal program if the value is one.
    ///
    /// A [`Traversal`] builder also answers here with its underlying
    /// bytecode, since the two serialize identically.
    #[inline]
    #[must_use]
    pub fn as_bytecode(&self) -> Option<&Bytecode> {
        match self {
            Self::Bytecode(bc) => Some(bc),
            Self::Traversal(t) => Some(t.bytecode()),
            _ => None,
        }
    }

    /// Returns the traverser if the value is one.
    #[inline]
    #[must_use]
    pub fn as_traverser(&self) -> Option<&Traverser> {
        match self {
            Self::Traverser(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the vertex if the value is one.
    #[inline]
    #[must_use]
    pub fn as_vertex(&self) -> Option<&Vertex> {
        match self {
            Self::Vertex(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the edge if the value is one.
    #[inline]
    #[must_use]
    pub fn as_edge(&self) -> Option<&Edge> {
        match self {
            Self::Edge(e) => Some(e),
            _ => None,
        }
    }

    /// Creates a map value from key/value pairs, preserving their order.
    #[must_use]
    pub fn map(entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        Self::Map(entries.into_iter().collect())
    }

    /// Creates a date value.
    #[inline]
    #[must_use]
    pub const fn date(instant: DateTime<Utc>) -> Self {
        Self::Date(instant)
    }

    /// Creates a timestamp value.
    #[inline]
    #[must_use]
    pub const fn timestamp(instant: DateTime<Utc>) -> Self {
        Self::Timestamp(instant)
    }

    /// A short static name for the variant, used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Byte(_) => "byte",
            Self::Short(_) => "short",
            Self::Int(_) => "int",
            Self::Long(_) => "long",
            Self::Float(_) => "float",
            Self::Double(_) => "double",
            Self::String(_) => "string",
            Self::Uuid(_) => "uuid",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
            Self::Set(_) => "set",
            Self::Map(_) => "map",
            Self::Enum(_) => "enum",
            Self::Bytecode(_) => "bytecode",
            Self::Traversal(_) => "traversal",
            Self::Traverser(_) => "traverser",
            Self::Vertex(_) => "vertex",
            Self::Edge(_) => "edge",
        }
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u8> for Value {
    #[inline]
    fn from(b: u8) -> Self {
        Self::Byte(b)
    }
}

impl From<i16> for Value {
    #[inline]
    fn from(i: i16) -> Self {
        Self::Short(i)
    }
}

impl From<i32> for Value {
    #[inline]
    fn from(i: i32) -> Self {
        Self::Int(i)
    }
}

impl From<i64> for Value {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Long(i)
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(f: f32) -> Self {
        Self::Float(f)
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(f: f64) -> Self {
        Self::Double(f)
    }
}

impl From<String> for Value {
    #[inline]
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(s: &str) -> Self {
        Self::String(s.to_owned())
    }
}

impl From<Uuid> for Value {
    #[inline]
    fn from(u: Uuid) -> Self {
        Self::Uuid(u)
    }
}

impl From<Vec<Value>> for Value {
    #[inline]
    fn from(items: Vec<Value>) -> Self {
        Self::List(items)
    }
}

impl From<EnumValue> for Value {
    #[inline]
    fn from(e: EnumValue) -> Self {
        Self::Enum(e)
    }
}

impl From<Bytecode> for Value {
    #[inline]
    fn from(bc: Bytecode) -> Self {
        Self::Bytecode(bc)
    }
}

impl From<Traversal> for Value {
    #[inline]
    fn from(t: Traversal) -> Self {
        Self::Traversal(t)
    }
}

impl From<Traverser> for Value {
    #[inline]
    fn from(t: Traverser) -> Self {
        Self::Traverser(Box::new(t))
    }
}

impl From<Vertex> for Value {
    #[inline]
    fn from(v: Vertex) -> Self {
        Self::Vertex(Box::new(v))
    }
}

impl From<Edge> for Value {
    #[inline]
    fn from(e: Edge) -> Self {
        Self::Edge(Box::new(e))
    }
}
