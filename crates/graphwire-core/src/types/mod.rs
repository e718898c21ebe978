//! The value model for the GraphWire protocol.
//!
//! This module defines the types that travel over the wire between a
//! traversal client and a traversal server.

mod bytecode;
mod element;
mod enums;
mod traverser;
mod value;

pub use bytecode::{Bytecode, Instruction, Traversal};
pub use element::{Edge, Vertex};
pub use enums::{EnumFamily, EnumValue};
pub use traverser::Traverser;
pub use value::Value;
