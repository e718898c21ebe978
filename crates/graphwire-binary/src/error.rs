//! Error types for the wire codec.
//!
//! Decoding failures inside nested values are wrapped with a positional
//! context (`{item_2}: ...`, `{steps_length}: ...`) so a failure deep inside
//! a large program still names the exact field that broke, without losing
//! the original error. The rendered messages match the diagnostic vocabulary
//! existing protocol tooling expects.

use thiserror::Error;

/// Errors produced while encoding or decoding wire values.
#[derive(Debug, Error)]
pub enum CodecError {
    /// No input buffer was supplied at all.
    #[error("buffer is missing")]
    BufferMissing,

    /// An empty buffer was supplied where at least one byte is required.
    #[error("buffer is empty")]
    BufferEmpty,

    /// The leading type code has no registered serializer.
    #[error("unknown {{type_code}}: 0x{0:02X}")]
    UnknownTypeCode(u8),

    /// A serializer was handed a buffer framed for a different type.
    #[error("unexpected {{type_code}}: expected 0x{expected:02X}, found 0x{actual:02X}")]
    UnexpectedTypeCode {
        /// The serializer's own type code.
        expected: u8,
        /// The code actually present in the buffer.
        actual: u8,
    },

    /// The buffer ended before the null flag.
    #[error("{{value_flag}} is missing")]
    MissingValueFlag,

    /// The null flag was neither 0x00 nor 0x01.
    #[error("unexpected {{value_flag}}: 0x{0:02X}")]
    UnexpectedValueFlag(u8),

    /// A decoded length field was negative.
    #[error("{{{field}}} is less than zero")]
    NegativeLength {
        /// Which length field was negative.
        field: &'static str,
        /// The decoded value.
        value: i32,
    },

    /// A fixed-width field was truncated.
    #[error("unexpected {{{field}}} length")]
    UnexpectedLengthFieldSize {
        /// The field that could not be read in full.
        field: &'static str,
    },

    /// A length beyond what the format (or a safety cap) supports.
    #[error("length {length} is greater than supported max_length {max}")]
    LengthOverflow {
        /// The length that overflowed.
        length: usize,
        /// The limit it exceeded.
        max: usize,
    },

    /// No registered serializer accepts the value being encoded.
    #[error("no serializer supports values of type {0}")]
    UnsupportedType(&'static str),

    /// A decoded traverser bulk or bulk-set repetition was negative.
    #[error("{{bulk}} is less than zero: {0}")]
    NegativeBulk(i64),

    /// A boolean payload byte other than 0x00 or 0x01.
    #[error("unexpected {{value}}: 0x{0:02X}")]
    UnexpectedBoolean(u8),

    /// A string payload was not valid UTF-8.
    #[error("invalid UTF-8 in string payload")]
    InvalidUtf8,

    /// An epoch-millisecond instant outside the representable range.
    #[error("timestamp out of range: {0}ms")]
    InvalidTimestamp(i64),

    /// Value nesting exceeded the depth guard.
    #[error("nesting depth exceeds {0}")]
    RecursionLimitExceeded(usize),

    /// A failure inside a nested field, carrying the breadcrumb context.
    #[error("{{{context}}}: {source}")]
    Nested {
        /// The field or element that failed (`item_2`, `steps_length`, ...).
        context: String,
        /// Byte offset at which the failure surfaced.
        offset: usize,
        /// The underlying failure.
        #[source]
        source: Box<CodecError>,
    },
}

impl CodecError {
    /// Wraps this error with a positional context, producing the
    /// `"{context}: ..."` breadcrumb trail on display.
    #[must_use]
    pub fn nested(self, context: impl Into<String>, offset: usize) -> Self {
        Self::Nested { context: context.into(), offset, source: Box::new(self) }
    }

    /// The innermost error of a breadcrumb chain.
    #[must_use]
    pub fn root_cause(&self) -> &CodecError {
        let mut current = self;
        while let Self::Nested { source, .. } = current {
            current = source.as_ref();
        }
        current
    }
}

/// Convenience alias for codec results.
pub type CodecResult<T> = Result<T, CodecError>;
