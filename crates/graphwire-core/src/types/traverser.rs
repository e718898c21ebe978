//! Traversal results.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// One result of executing a traversal program: a value paired with a
/// repetition count.
///
/// Servers fold identical results into a single traverser with `bulk > 1`
/// rather than repeating the value on the wire.
///
/// # Example
///
/// ```
/// use graphwire_core::{Traverser, Value};
///
/// let t = Traverser::new(16, Value::from("A1"));
/// assert_eq!(t.bulk(), 16);
/// assert_eq!(t.value().as_str(), Some("A1"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traverser {
    bulk: i64,
    value: Value,
}

impl Traverser {
    /// Creates a traverser carrying `value` repeated `bulk` times.
    #[must_use]
    pub fn new(bulk: i64, value: Value) -> Self {
        Self { bulk, value }
    }

    /// The repetition count. Valid wire data never carries a negative bulk.
    #[inline]
    #[must_use]
    pub const fn bulk(&self) -> i64 {
        self.bulk
    }

    /// The carried value.
    #[inline]
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Consumes the traverser, yielding its value.
    #[must_use]
    pub fn into_value(self) -> Value {
        self.value
    }
}

impl Default for Traverser {
    /// A traverser wrapping a null value once, the documented fallback for
    /// value-only null decoding.
    fn default() -> Self {
        Self { bulk: 1, value: Value::Null }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_bulk_and_value() {
        let t = Traverser::new(2, Value::from(7i32));
        assert_eq!(t.bulk(), 2);
        assert_eq!(t.into_value(), Value::Int(7));
    }

    #[test]
    fn default_is_single_null() {
        let t = Traverser::default();
        assert_eq!(t.bulk(), 1);
        assert!(t.value().is_null());
    }
}
