//! GraphWire Core
//!
//! This crate provides the in-memory value model exchanged between a
//! graph-traversal client and a traversal execution server.
//!
//! # Overview
//!
//! The core crate defines the types the wire codec serializes:
//!
//! - **Values**: [`Value`] enum covering every type the wire format can carry
//! - **Traversal programs**: [`Bytecode`] and its [`Instruction`] steps, plus
//!   the [`Traversal`] builder boundary
//! - **Traversal results**: [`Traverser`], a value paired with a repetition
//!   count
//! - **Symbolic enumerations**: [`EnumValue`] tagged with its [`EnumFamily`]
//! - **Graph elements**: [`Vertex`] and [`Edge`] reference elements
//!
//! # Example
//!
//! ```
//! use graphwire_core::{Bytecode, EnumFamily, EnumValue, Value};
//!
//! // Values convert from native types
//! let name: Value = "Alice".into();
//! let age: Value = 30i32.into();
//! assert_eq!(name.as_str(), Some("Alice"));
//! assert_eq!(age.as_int(), Some(30));
//!
//! // A traversal program is an ordered list of named instructions
//! let bytecode = Bytecode::new()
//!     .with_step("V", vec![])
//!     .with_step("has", vec!["age".into(), 30i32.into()]);
//! assert_eq!(bytecode.steps().len(), 2);
//!
//! // Symbolic enumerations carry their family tag
//! let out = EnumValue::direction("OUT");
//! assert_eq!(out.family(), EnumFamily::Direction);
//! ```
//!
//! # Modules
//!
//! - [`types`] - The value model ([`Value`], [`Bytecode`], [`Traverser`], ...)

// Deny unwrap in library code to ensure proper error handling
#![deny(clippy::unwrap_used)]

pub mod types;

// Re-export commonly used types
pub use types::{
    Bytecode, Edge, EnumFamily, EnumValue, Instruction, Traversal, Traverser, Value, Vertex,
};
