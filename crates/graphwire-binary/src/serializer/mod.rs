//! Per-type wire serializers.
//!
//! Every wire type implements [`TypeSerializer`]: a type code, an encode-side
//! applicability predicate, and symmetric serialize/deserialize halves.
//! Serializers never walk nested values themselves: element-level work is
//! routed back through the [`TypeRegistry`](crate::registry::TypeRegistry),
//! which is what makes the protocol self-describing at every level.
//!
//! # Framing
//!
//! In fully-qualified mode a value is `{type_code}{null_flag}{payload}`;
//! in value-only mode the payload stands alone. Each serializer documents how
//! it renders a null value in value-only mode, since the reference format is
//! not uniform there (collections become empty, traversers become a single
//! null, fixed-width primitives become zeroes).

use graphwire_core::Value;

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

mod bulk_set;
mod bytecode;
mod collections;
mod element;
mod enums;
mod primitives;
mod traverser;

pub use bulk_set::BulkSetSerializer;
pub use bytecode::BytecodeSerializer;
pub use collections::{ListSerializer, MapSerializer, SetSerializer};
pub use element::{EdgeSerializer, VertexSerializer};
pub use enums::EnumSerializer;
pub use primitives::{
    BooleanSerializer, ByteSerializer, DateSerializer, DoubleSerializer, FloatSerializer,
    IntSerializer, LongSerializer, ShortSerializer, StringSerializer, TimestampSerializer,
    UnspecifiedNullSerializer, UuidSerializer,
};
pub use traverser::TraverserSerializer;

/// Null-flag byte marking a present value.
pub const VALUE_FLAG_NONE: u8 = 0x00;
/// Null-flag byte marking a null value.
pub const VALUE_FLAG_NULL: u8 = 0x01;

/// A codec for one wire type.
///
/// Implementations are registered with the
/// [`TypeRegistry`](crate::registry::TypeRegistry), which owns type-code
/// lookup on decode and predicate-ordered inference on encode.
pub trait TypeSerializer: Send + Sync {
    /// The type code this serializer owns.
    fn data_type(&self) -> DataType;

    /// Encode-side applicability: whether this serializer handles `value`.
    ///
    /// The registry probes serializers in a fixed priority order; the first
    /// accepting serializer wins, so predicates need not be mutually
    /// exclusive.
    fn can_serialize(&self, value: &Value) -> bool;

    /// Writes `value` in the requested framing.
    ///
    /// # Errors
    ///
    /// Fails on overflowing lengths, unsupported values, or nesting beyond
    /// the depth guard.
    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()>;

    /// Reads one value in the requested framing, consuming exactly the bytes
    /// that [`TypeSerializer::serialize`] would have produced for it.
    ///
    /// In fully-qualified mode the serializer re-reads and re-validates its
    /// own type code, so the whole buffer (type code included) is handed in.
    ///
    /// # Errors
    ///
    /// Fails on framing violations; failures inside nested fields carry a
    /// positional breadcrumb context.
    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value>;
}

/// Writes the fully-qualified prefix when requested.
///
/// Returns `true` when the caller must still emit a payload; a
/// fully-qualified null is complete after its two prefix bytes.
pub(crate) fn write_prefix(
    writer: &mut Writer,
    data_type: DataType,
    fully_qualified: bool,
    is_null: bool,
) -> bool {
    if !fully_qualified {
        return true;
    }
    writer.write_u8(data_type.code());
    writer.write_u8(if is_null { VALUE_FLAG_NULL } else { VALUE_FLAG_NONE });
    !is_null
}

/// Reads and validates the fully-qualified prefix.
///
/// Returns `true` when the null flag was set (no payload follows).
pub(crate) fn read_prefix(reader: &mut Reader<'_>, expected: DataType) -> CodecResult<bool> {
    let Some(code) = reader.read_u8() else {
        return Err(CodecError::BufferEmpty);
    };
    if code != expected.code() {
        return Err(CodecError::UnexpectedTypeCode { expected: expected.code(), actual: code });
    }
    match reader.read_u8() {
        None => Err(CodecError::MissingValueFlag),
        Some(VALUE_FLAG_NONE) => Ok(false),
        Some(VALUE_FLAG_NULL) => Ok(true),
        Some(flag) => Err(CodecError::UnexpectedValueFlag(flag)),
    }
}

/// Writes a string in value-only form: 4-byte length plus UTF-8 bytes.
pub(crate) fn write_string_value(writer: &mut Writer, s: &str) -> CodecResult<()> {
    writer.write_length(s.len())?;
    writer.write_bytes(s.as_bytes());
    Ok(())
}

/// Reads a string in value-only form.
pub(crate) fn read_string_value(reader: &mut Reader<'_>) -> CodecResult<String> {
    let length = read_sequence_length(reader)?;
    let bytes = reader.read_exact(length, "text_value")?;
    String::from_utf8(bytes.to_vec()).map_err(|_| CodecError::InvalidUtf8)
}

/// Reads a 4-byte element count, wrapping truncation as a `{length}`
/// breadcrumb and rejecting negative counts.
pub(crate) fn read_sequence_length(reader: &mut Reader<'_>) -> CodecResult<usize> {
    let value = match reader.read_i32("int") {
        Ok(value) => value,
        Err(err) => return Err(err.nested("length", reader.position())),
    };
    if value < 0 {
        return Err(CodecError::NegativeLength { field: "length", value });
    }
    Ok(value as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefix_round_trip() {
        let mut writer = Writer::new();
        assert!(write_prefix(&mut writer, DataType::List, true, false));
        let bytes = writer.into_bytes();
        assert_eq!(bytes, [0x09, 0x00]);

        let mut reader = Reader::new(&bytes);
        assert!(!read_prefix(&mut reader, DataType::List).expect("prefix"));
    }

    #[test]
    fn null_prefix_needs_no_payload() {
        let mut writer = Writer::new();
        assert!(!write_prefix(&mut writer, DataType::Map, true, true));
        assert_eq!(writer.into_bytes(), [0x0A, 0x01]);
    }

    #[test]
    fn value_only_prefix_is_empty() {
        let mut writer = Writer::new();
        assert!(write_prefix(&mut writer, DataType::Int, false, false));
        assert!(writer.is_empty());
    }

    #[test]
    fn wrong_type_code_is_rejected() {
        let mut reader = Reader::new(&[0x09, 0x00]);
        let err = read_prefix(&mut reader, DataType::Map).expect_err("mismatch");
        assert!(matches!(err, CodecError::UnexpectedTypeCode { expected: 0x0A, actual: 0x09 }));
    }

    #[test]
    fn missing_flag_is_distinguished_from_empty_buffer() {
        let mut reader = Reader::new(&[]);
        assert!(matches!(
            read_prefix(&mut reader, DataType::Int).expect_err("empty"),
            CodecError::BufferEmpty
        ));

        let mut reader = Reader::new(&[0x01]);
        assert!(matches!(
            read_prefix(&mut reader, DataType::Int).expect_err("no flag"),
            CodecError::MissingValueFlag
        ));
    }

    #[test]
    fn stray_flag_bytes_are_rejected() {
        for flag in [0x02, 0x0F, 0x10, 0xFF] {
            let buf = [0x01, flag];
            let mut reader = Reader::new(&buf);
            assert!(matches!(
                read_prefix(&mut reader, DataType::Int).expect_err("bad flag"),
                CodecError::UnexpectedValueFlag(f) if f == flag
            ));
        }
    }

    #[test]
    fn string_value_round_trip() {
        let mut writer = Writer::new();
        write_string_value(&mut writer, "Ab0").expect("write");
        let bytes = writer.into_bytes();
        assert_eq!(bytes, [0x00, 0x00, 0x00, 0x03, 0x41, 0x62, 0x30]);

        let mut reader = Reader::new(&bytes);
        assert_eq!(read_string_value(&mut reader).expect("read"), "Ab0");
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let bytes = [0x00, 0x00, 0x00, 0x02, 0xFF, 0xFE];
        let mut reader = Reader::new(&bytes);
        assert!(matches!(
            read_string_value(&mut reader).expect_err("bad utf8"),
            CodecError::InvalidUtf8
        ));
    }

    #[test]
    fn truncated_sequence_length_gets_breadcrumb() {
        let mut reader = Reader::new(&[0x00, 0x00]);
        let err = read_sequence_length(&mut reader).expect_err("truncated");
        assert_eq!(err.to_string(), "{length}: unexpected {int} length");
    }
}
