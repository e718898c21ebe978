//! Scalar serializers: fixed-width numerics, strings, UUIDs, instants and
//! the typeless null.
//!
//! All numerics are big-endian. In value-only mode a null scalar encodes as
//! a zeroed payload of its fixed width (a null string as length 0), matching
//! the reference wire behavior.

use chrono::{DateTime, TimeZone, Utc};
use graphwire_core::Value;
use uuid::Uuid;

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{
    read_prefix, read_string_value, write_prefix, write_string_value, TypeSerializer,
    VALUE_FLAG_NULL,
};

/// 32-bit signed integers (type code 0x01).
#[derive(Debug, Default)]
pub struct IntSerializer;

impl TypeSerializer for IntSerializer {
    fn data_type(&self) -> DataType {
        DataType::Int
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Int(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i32(0);
                }
                return Ok(());
            }
            Value::Int(i) => *i,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_i32(v);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Int(reader.read_i32("int")?))
    }
}

/// 64-bit signed integers (type code 0x02).
#[derive(Debug, Default)]
pub struct LongSerializer;

impl TypeSerializer for LongSerializer {
    fn data_type(&self) -> DataType {
        DataType::Long
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Long(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i64(0);
                }
                return Ok(());
            }
            Value::Long(i) => *i,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_i64(v);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Long(reader.read_i64("long")?))
    }
}

/// 16-bit signed integers (type code 0x26).
#[derive(Debug, Default)]
pub struct ShortSerializer;

impl TypeSerializer for ShortSerializer {
    fn data_type(&self) -> DataType {
        DataType::Short
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Short(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i16(0);
                }
                return Ok(());
            }
            Value::Short(i) => *i,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_i16(v);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Short(reader.read_i16("short")?))
    }
}

/// Single octets (type code 0x24).
#[derive(Debug, Default)]
pub struct ByteSerializer;

impl TypeSerializer for ByteSerializer {
    fn data_type(&self) -> DataType {
        DataType::Byte
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Byte(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_u8(0);
                }
                return Ok(());
            }
            Value::Byte(b) => *b,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_u8(v);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        let byte = reader.read_exact(1, "byte")?[0];
        Ok(Value::Byte(byte))
    }
}

/// Booleans (type code 0x27). The payload byte must be 0x00 or 0x01.
#[derive(Debug, Default)]
pub struct BooleanSerializer;

impl TypeSerializer for BooleanSerializer {
    fn data_type(&self) -> DataType {
        DataType::Boolean
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Bool(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_u8(0);
                }
                return Ok(());
            }
            Value::Bool(b) => *b,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_u8(u8::from(v));
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        match reader.read_exact(1, "value")?[0] {
            0x00 => Ok(Value::Bool(false)),
            0x01 => Ok(Value::Bool(true)),
            other => Err(CodecError::UnexpectedBoolean(other)),
        }
    }
}

/// 32-bit IEEE 754 floats (type code 0x08).
#[derive(Debug, Default)]
pub struct FloatSerializer;

impl TypeSerializer for FloatSerializer {
    fn data_type(&self) -> DataType {
        DataType::Float
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Float(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_f32(0.0);
                }
                return Ok(());
            }
            Value::Float(f) => *f,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_f32(v);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Float(reader.read_f32("float")?))
    }
}

/// 64-bit IEEE 754 floats (type code 0x07).
#[derive(Debug, Default)]
pub struct DoubleSerializer;

impl TypeSerializer for DoubleSerializer {
    fn data_type(&self) -> DataType {
        DataType::Double
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Double(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let v = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_f64(0.0);
                }
                return Ok(());
            }
            Value::Double(f) => *f,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_f64(v);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Double(reader.read_f64("double")?))
    }
}

/// Length-prefixed UTF-8 strings (type code 0x03).
#[derive(Debug, Default)]
pub struct StringSerializer;

impl TypeSerializer for StringSerializer {
    fn data_type(&self) -> DataType {
        DataType::String
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::String(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let s = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i32(0);
                }
                return Ok(());
            }
            Value::String(s) => s,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        write_string_value(writer, s)
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::String(read_string_value(reader)?))
    }
}

/// UUIDs as 16 raw bytes (type code 0x0C).
#[derive(Debug, Default)]
pub struct UuidSerializer;

impl TypeSerializer for UuidSerializer {
    fn data_type(&self) -> DataType {
        DataType::Uuid
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Uuid(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let u = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_bytes(&[0u8; 16]);
                }
                return Ok(());
            }
            Value::Uuid(u) => *u,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_bytes(u.as_bytes());
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        let bytes = reader.read_exact(16, "uuid")?;
        let mut raw = [0u8; 16];
        raw.copy_from_slice(bytes);
        Ok(Value::Uuid(Uuid::from_bytes(raw)))
    }
}

fn write_instant(writer: &mut Writer, instant: &DateTime<Utc>) {
    writer.write_i64(instant.timestamp_millis());
}

fn read_instant(reader: &mut Reader<'_>) -> CodecResult<DateTime<Utc>> {
    let millis = reader.read_i64("long")?;
    Utc.timestamp_millis_opt(millis).single().ok_or(CodecError::InvalidTimestamp(millis))
}

/// Wall-clock instants as epoch milliseconds (type code 0x04).
#[derive(Debug, Default)]
pub struct DateSerializer;

impl TypeSerializer for DateSerializer {
    fn data_type(&self) -> DataType {
        DataType::Date
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Date(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let instant = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i64(0);
                }
                return Ok(());
            }
            Value::Date(d) => d,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        write_instant(writer, instant);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Date(read_instant(reader)?))
    }
}

/// Millisecond timestamps (type code 0x05); framing identical to `Date`,
/// only the type code differs.
#[derive(Debug, Default)]
pub struct TimestampSerializer;

impl TypeSerializer for TimestampSerializer {
    fn data_type(&self) -> DataType {
        DataType::Timestamp
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Timestamp(_))
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let instant = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i64(0);
                }
                return Ok(());
            }
            Value::Timestamp(t) => t,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        write_instant(writer, instant);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        Ok(Value::Timestamp(read_instant(reader)?))
    }
}

/// The typeless null (type code 0xFE).
///
/// The fully-qualified form is always the two bytes `0xFE 0x01`; a 0x00 flag is invalid
/// since there is no payload a present typeless value could carry. This is
/// the encode-side fallback for `Value::Null`.
#[derive(Debug, Default)]
pub struct UnspecifiedNullSerializer;

impl TypeSerializer for UnspecifiedNullSerializer {
    fn data_type(&self) -> DataType {
        DataType::UnspecifiedNull
    }

    fn can_serialize(&self, value: &Value) -> bool {
        value.is_null()
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        if !value.is_null() {
            return Err(CodecError::UnsupportedType(value.type_name()));
        }
        if fully_qualified {
            writer.write_u8(self.data_type().code());
        }
        writer.write_u8(VALUE_FLAG_NULL);
        Ok(())
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            let Some(code) = reader.read_u8() else {
                return Err(CodecError::BufferEmpty);
            };
            if code != self.data_type().code() {
                return Err(CodecError::UnexpectedTypeCode {
                    expected: self.data_type().code(),
                    actual: code,
                });
            }
        }
        match reader.read_u8() {
            None => Err(CodecError::MissingValueFlag),
            Some(VALUE_FLAG_NULL) => Ok(Value::Null),
            Some(flag) => Err(CodecError::UnexpectedValueFlag(flag)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;

    fn registry() -> TypeRegistry {
        TypeRegistry::with_defaults()
    }

    fn fq(serializer: &dyn TypeSerializer, value: &Value) -> Vec<u8> {
        let registry = registry();
        let mut writer = Writer::new();
        serializer.serialize(value, &registry, &mut writer, true).expect("serialize");
        writer.into_bytes()
    }

    fn value_only(serializer: &dyn TypeSerializer, value: &Value) -> Vec<u8> {
        let registry = registry();
        let mut writer = Writer::new();
        serializer.serialize(value, &registry, &mut writer, false).expect("serialize");
        writer.into_bytes()
    }

    #[test]
    fn int_wire_layout() {
        let bytes = fq(&IntSerializer, &Value::Int(1));
        assert_eq!(bytes, [0x01, 0x00, 0x00, 0x00, 0x00, 0x01]);
        assert_eq!(value_only(&IntSerializer, &Value::Int(1)), bytes[2..]);
    }

    #[test]
    fn long_wire_layout() {
        let bytes = fq(&LongSerializer, &Value::Long(1));
        assert_eq!(bytes, [0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01]);
    }

    #[test]
    fn string_wire_layout() {
        let bytes = fq(&StringSerializer, &Value::from("Ab0"));
        assert_eq!(bytes, [0x03, 0x00, 0x00, 0x00, 0x00, 0x03, 0x41, 0x62, 0x30]);
    }

    #[test]
    fn negative_int_round_trips() {
        let registry = registry();
        let bytes = fq(&IntSerializer, &Value::Int(-1));
        assert_eq!(bytes, [0x01, 0x00, 0xFF, 0xFF, 0xFF, 0xFF]);
        let mut reader = Reader::new(&bytes);
        let value = IntSerializer.deserialize(&mut reader, &registry, true).expect("deserialize");
        assert_eq!(value, Value::Int(-1));
    }

    #[test]
    fn null_encodes_as_two_bytes() {
        assert_eq!(fq(&IntSerializer, &Value::Null), [0x01, 0x01]);
        assert_eq!(fq(&StringSerializer, &Value::Null), [0x03, 0x01]);
        assert_eq!(fq(&UuidSerializer, &Value::Null), [0x0C, 0x01]);
    }

    #[test]
    fn value_only_null_is_zeroed_payload() {
        assert_eq!(value_only(&IntSerializer, &Value::Null), [0x00; 4]);
        assert_eq!(value_only(&LongSerializer, &Value::Null), [0x00; 8]);
        assert_eq!(value_only(&StringSerializer, &Value::Null), [0x00; 4]);
        assert_eq!(value_only(&UuidSerializer, &Value::Null), [0x00; 16]);
    }

    #[test]
    fn boolean_payload_validation() {
        let registry = registry();
        for (byte, expected) in [(0x00_u8, false), (0x01, true)] {
            let buf = [0x27, 0x00, byte];
            let mut reader = Reader::new(&buf);
            let value =
                BooleanSerializer.deserialize(&mut reader, &registry, true).expect("deserialize");
            assert_eq!(value, Value::Bool(expected));
        }
        let buf = [0x27, 0x00, 0x02];
        let mut reader = Reader::new(&buf);
        assert!(matches!(
            BooleanSerializer.deserialize(&mut reader, &registry, true).expect_err("bad payload"),
            CodecError::UnexpectedBoolean(0x02)
        ));
    }

    #[test]
    fn uuid_round_trips_raw_bytes() {
        let registry = registry();
        let raw: [u8; 16] = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15];
        let value = Value::Uuid(Uuid::from_bytes(raw));
        let bytes = fq(&UuidSerializer, &value);
        assert_eq!(bytes[0], 0x0C);
        assert_eq!(&bytes[2..], raw);
        let mut reader = Reader::new(&bytes);
        assert_eq!(
            UuidSerializer.deserialize(&mut reader, &registry, true).expect("deserialize"),
            value
        );
    }

    #[test]
    fn date_round_trips_millis() {
        let registry = registry();
        let instant = Utc.timestamp_millis_opt(1_481_750_076_295).single().expect("valid");
        let bytes = fq(&DateSerializer, &Value::Date(instant));
        let mut reader = Reader::new(&bytes);
        assert_eq!(
            DateSerializer.deserialize(&mut reader, &registry, true).expect("deserialize"),
            Value::Date(instant)
        );
    }

    #[test]
    fn timestamp_uses_its_own_type_code() {
        let instant = Utc.timestamp_millis_opt(0).single().expect("valid");
        assert_eq!(fq(&DateSerializer, &Value::Date(instant))[0], 0x04);
        assert_eq!(fq(&TimestampSerializer, &Value::Timestamp(instant))[0], 0x05);
    }

    #[test]
    fn unspecified_null_layout() {
        let registry = registry();
        assert_eq!(fq(&UnspecifiedNullSerializer, &Value::Null), [0xFE, 0x01]);

        let buf = [0xFE, 0x01];
        let mut reader = Reader::new(&buf);
        assert_eq!(
            UnspecifiedNullSerializer.deserialize(&mut reader, &registry, true).expect("null"),
            Value::Null
        );

        // A "present" typeless value is a contradiction.
        let buf = [0xFE, 0x00];
        let mut reader = Reader::new(&buf);
        assert!(matches!(
            UnspecifiedNullSerializer.deserialize(&mut reader, &registry, true).expect_err("flag"),
            CodecError::UnexpectedValueFlag(0x00)
        ));
    }

    #[test]
    fn truncated_payload_names_the_field() {
        let registry = registry();
        let buf = [0x01, 0x00, 0x00, 0x00];
        let mut reader = Reader::new(&buf);
        let err = IntSerializer.deserialize(&mut reader, &registry, true).expect_err("truncated");
        assert_eq!(err.to_string(), "unexpected {int} length");
    }

    #[test]
    fn value_only_empty_buffer_is_reported() {
        let registry = registry();
        let mut reader = Reader::new(&[]);
        assert!(matches!(
            IntSerializer.deserialize(&mut reader, &registry, false).expect_err("empty"),
            CodecError::BufferEmpty
        ));
    }

    #[test]
    fn serializer_rejects_foreign_variants() {
        let registry = registry();
        let mut writer = Writer::new();
        assert!(matches!(
            IntSerializer
                .serialize(&Value::from("nope"), &registry, &mut writer, true)
                .expect_err("foreign"),
            CodecError::UnsupportedType("string")
        ));
    }
}
