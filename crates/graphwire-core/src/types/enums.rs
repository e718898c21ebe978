//! Symbolic enumeration constants.
//!
//! Traversal arguments include symbolic constants drawn from a fixed set of
//! families (`Direction`, `Order`, `Scope`, ...). On the wire each family has
//! its own type code; the symbol itself is carried as a string, so a family
//! can grow new symbols without a protocol revision.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The enumeration families the protocol knows about.
///
/// Each family maps to its own wire type code; a `Direction` value can never
/// decode through the `Cardinality` family, even though both carry a string
/// symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnumFamily {
    /// Barrier consumption policies (`normSack`, ...)
    Barrier,
    /// Property cardinality (`single`, `list`, `set`)
    Cardinality,
    /// Map column selection (`keys`, `values`)
    Column,
    /// Edge direction (`OUT`, `IN`, `BOTH`)
    Direction,
    /// Sack/aggregate operators (`sum`, `addAll`, ...)
    Operator,
    /// Ordering (`asc`, `desc`, `shuffle`)
    Order,
    /// Branch pick tokens (`any`, `none`)
    Pick,
    /// Path pop policies (`first`, `last`, `all`, `mixed`)
    Pop,
    /// Scope of an operation (`local`, `global`)
    Scope,
    /// Element tokens (`id`, `label`, `key`, `value`)
    T,
}

impl EnumFamily {
    /// The family name as it appears in diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Barrier => "Barrier",
            Self::Cardinality => "Cardinality",
            Self::Column => "Column",
            Self::Direction => "Direction",
            Self::Operator => "Operator",
            Self::Order => "Order",
            Self::Pick => "Pick",
            Self::Pop => "Pop",
            Self::Scope => "Scope",
            Self::T => "T",
        }
    }

    /// All families, in wire-type-code order.
    #[must_use]
    pub const fn all() -> [Self; 10] {
        [
            Self::Barrier,
            Self::Cardinality,
            Self::Column,
            Self::Direction,
            Self::Operator,
            Self::Order,
            Self::Pick,
            Self::Pop,
            Self::Scope,
            Self::T,
        ]
    }
}

impl fmt::Display for EnumFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A symbolic constant tagged with its family.
///
/// A `None` symbol is the valid "null of this family" case: the wire carries
/// the family's type code with the null flag set, so the family survives even
/// when the symbol is absent.
///
/// # Example
///
/// ```
/// use graphwire_core::{EnumFamily, EnumValue};
///
/// let out = EnumValue::direction("OUT");
/// assert_eq!(out.family(), EnumFamily::Direction);
/// assert_eq!(out.symbol(), Some("OUT"));
///
/// let absent = EnumValue::null(EnumFamily::Direction);
/// assert!(absent.symbol().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EnumValue {
    family: EnumFamily,
    symbol: Option<String>,
}

impl EnumValue {
    /// Creates a constant in the given family.
    #[must_use]
    pub fn new(family: EnumFamily, symbol: impl Into<String>) -> Self {
        Self { family, symbol: Some(symbol.into()) }
    }

    /// Creates the null constant of the given family.
    #[must_use]
    pub const fn null(family: EnumFamily) -> Self {
        Self { family, symbol: None }
    }

    /// Creates a `Barrier` constant.
    #[must_use]
    pub fn barrier(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Barrier, symbol)
    }

    /// Creates a `Cardinality` constant.
    #[must_use]
    pub fn cardinality(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Cardinality, symbol)
    }

    /// Creates a `Column` constant.
    #[must_use]
    pub fn column(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Column, symbol)
    }

    /// Creates a `Direction` constant.
    #[must_use]
    pub fn direction(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Direction, symbol)
    }

    /// Creates an `Operator` constant.
    #[must_use]
    pub fn operator(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Operator, symbol)
    }

    /// Creates an `Order` constant.
    #[must_use]
    pub fn order(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Order, symbol)
    }

    /// Creates a `Pick` constant.
    #[must_use]
    pub fn pick(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Pick, symbol)
    }

    /// Creates a `Pop` constant.
    #[must_use]
    pub fn pop(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Pop, symbol)
    }

    /// Creates a `Scope` constant.
    #[must_use]
    pub fn scope(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::Scope, symbol)
    }

    /// Creates a `T` token constant.
    #[must_use]
    pub fn t(symbol: impl Into<String>) -> Self {
        Self::new(EnumFamily::T, symbol)
    }

    /// The family this constant belongs to.
    #[inline]
    #[must_use]
    pub const fn family(&self) -> EnumFamily {
        self.family
    }

    /// The symbol, or `None` for the family's null constant.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> Option<&str> {
        self.symbol.as_deref()
    }
}

impl fmt::Display for EnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.symbol {
            Some(symbol) => write!(f, "{}.{symbol}", self.family),
            None => write!(f, "{}.<null>", self.family),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn families_are_distinct() {
        let d = EnumValue::direction("OUT");
        let c = EnumValue::cardinality("single");
        assert_ne!(d.family(), c.family());
    }

    #[test]
    fn null_symbol_keeps_family() {
        let v = EnumValue::null(EnumFamily::Scope);
        assert_eq!(v.family(), EnumFamily::Scope);
        assert!(v.symbol().is_none());
    }

    #[test]
    fn display_includes_family() {
        assert_eq!(EnumValue::order("desc").to_string(), "Order.desc");
        assert_eq!(EnumValue::null(EnumFamily::T).to_string(), "T.<null>");
    }

    #[test]
    fn all_families_have_unique_names() {
        let names: Vec<&str> = EnumFamily::all().iter().map(|f| f.name()).collect();
        let mut deduped = names.clone();
        deduped.dedup();
        assert_eq!(names.len(), deduped.len());
    }
}
