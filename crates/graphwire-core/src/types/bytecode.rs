//! Traversal programs and the builder boundary.
//!
//! A traversal program ([`Bytecode`]) is an ordered sequence of *steps* plus
//! an ordered sequence of *source instructions*, each a named operation with
//! heterogeneous arguments. Programs are produced by a step-builder DSL that
//! lives outside this crate; [`Traversal`] is the boundary type through which
//! a builder hands its program to the codec.

use serde::{Deserialize, Serialize};

use super::value::Value;

/// One named operation inside a traversal program.
///
/// # Example
///
/// ```
/// use graphwire_core::Instruction;
///
/// let step = Instruction::new("has", vec!["age".into(), 42i32.into()]);
/// assert_eq!(step.operator(), "has");
/// assert_eq!(step.args().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    operator: String,
    args: Vec<Value>,
}

impl Instruction {
    /// Creates an instruction from an operator name and its arguments.
    #[must_use]
    pub fn new(operator: impl Into<String>, args: Vec<Value>) -> Self {
        Self { operator: operator.into(), args }
    }

    /// The operator name, e.g. `"V"`, `"hasLabel"`, `"withStrategies"`.
    #[inline]
    #[must_use]
    pub fn operator(&self) -> &str {
        &self.operator
    }

    /// The ordered, heterogeneous arguments.
    #[inline]
    #[must_use]
    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

/// A traversal program: steps plus source instructions.
///
/// # Example
///
/// ```
/// use graphwire_core::Bytecode;
///
/// let bc = Bytecode::new()
///     .with_step("V", vec![])
///     .with_step("hasLabel", vec!["Person".into()]);
/// assert_eq!(bc.steps().len(), 2);
/// assert!(bc.sources().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bytecode {
    steps: Vec<Instruction>,
    sources: Vec<Instruction>,
}

impl Bytecode {
    /// Creates an empty program.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a program from already-built instruction lists.
    #[must_use]
    pub fn from_parts(steps: Vec<Instruction>, sources: Vec<Instruction>) -> Self {
        Self { steps, sources }
    }

    /// Appends a step instruction.
    #[must_use]
    pub fn with_step(mut self, operator: impl Into<String>, args: Vec<Value>) -> Self {
        self.steps.push(Instruction::new(operator, args));
        self
    }

    /// Appends a source instruction.
    #[must_use]
    pub fn with_source(mut self, operator: impl Into<String>, args: Vec<Value>) -> Self {
        self.sources.push(Instruction::new(operator, args));
        self
    }

    /// The ordered step instructions.
    #[inline]
    #[must_use]
    pub fn steps(&self) -> &[Instruction] {
        &self.steps
    }

    /// The ordered source instructions.
    #[inline]
    #[must_use]
    pub fn sources(&self) -> &[Instruction] {
        &self.sources
    }

    /// Returns `true` if the program has no steps and no sources.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.sources.is_empty()
    }
}

/// A traversal-program builder at the codec boundary.
///
/// The step-builder DSL that constructs programs is an external collaborator;
/// the codec only requires that a builder expose its underlying [`Bytecode`]
/// on demand. A builder and its extracted program serialize byte-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Traversal {
    bytecode: Bytecode,
}

impl Traversal {
    /// Wraps a program as a builder-side traversal.
    #[must_use]
    pub fn new(bytecode: Bytecode) -> Self {
        Self { bytecode }
    }

    /// The underlying program representation.
    #[inline]
    #[must_use]
    pub fn bytecode(&self) -> &Bytecode {
        &self.bytecode
    }

    /// Consumes the traversal, yielding its program.
    #[must_use]
    pub fn into_bytecode(self) -> Bytecode {
        self.bytecode
    }
}

impl From<Traversal> for Bytecode {
    fn from(t: Traversal) -> Self {
        t.into_bytecode()
    }
}
