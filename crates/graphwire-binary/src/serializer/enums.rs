//! The shared enumeration-family serializer.
//!
//! One implementation serves every symbolic family; each registered instance
//! is parameterized with its family and therefore its type code. The symbol
//! travels as a value-only string, so families gain new symbols without
//! protocol changes, while the type code keeps families apart: a `Direction`
//! buffer never decodes through the `Cardinality` serializer.

use graphwire_core::{EnumFamily, EnumValue, Value};

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{read_prefix, read_string_value, write_prefix, write_string_value, TypeSerializer};

/// Symbolic enumeration constants, one instance per [`EnumFamily`].
#[derive(Debug)]
pub struct EnumSerializer {
    family: EnumFamily,
}

impl EnumSerializer {
    /// Creates the serializer for one family.
    #[must_use]
    pub fn new(family: EnumFamily) -> Self {
        Self { family }
    }

    /// The family this instance serves.
    #[must_use]
    pub const fn family(&self) -> EnumFamily {
        self.family
    }
}

impl TypeSerializer for EnumSerializer {
    fn data_type(&self) -> DataType {
        DataType::for_enum_family(self.family)
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Enum(e) if e.family() == self.family)
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let symbol = match value {
            Value::Null => None,
            Value::Enum(e) if e.family() == self.family => e.symbol(),
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        match symbol {
            None => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i32(0);
                }
                Ok(())
            }
            Some(symbol) => {
                write_prefix(writer, self.data_type(), fully_qualified, false);
                write_string_value(writer, symbol)
            }
        }
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        _registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                // The null constant of this family, not a typeless null.
                return Ok(Value::Enum(EnumValue::null(self.family)));
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        let symbol = read_string_value(reader)?;
        Ok(Value::Enum(EnumValue::new(self.family, symbol)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;

    fn encode(value: &Value) -> Vec<u8> {
        TypeRegistry::with_defaults().encode_any(value, true).expect("encode")
    }

    #[test]
    fn direction_wire_layout() {
        assert_eq!(
            encode(&Value::Enum(EnumValue::direction("OUT"))),
            [0x18, 0x00, 0x00, 0x00, 0x00, 0x03, 0x4F, 0x55, 0x54]
        );
    }

    #[test]
    fn every_family_round_trips() {
        let registry = TypeRegistry::with_defaults();
        let symbols = [
            "normSack", "single", "keys", "OUT", "addAll", "desc", "any", "first", "local", "id",
        ];
        for (family, symbol) in EnumFamily::all().into_iter().zip(symbols) {
            let value = Value::Enum(EnumValue::new(family, symbol));
            let bytes = registry.encode_any(&value, true).expect("encode");
            let (decoded, consumed) = registry.decode_any(&bytes).expect("decode");
            assert_eq!(decoded, value);
            assert_eq!(consumed, bytes.len());
        }
    }

    #[test]
    fn null_symbol_keeps_its_family() {
        let registry = TypeRegistry::with_defaults();
        let bytes = [0x13, 0x01];
        let (decoded, consumed) = registry.decode_any(&bytes).expect("decode");
        assert_eq!(decoded, Value::Enum(EnumValue::null(EnumFamily::Barrier)));
        assert_eq!(consumed, 2);
    }

    #[test]
    fn null_enum_value_encodes_with_family_code() {
        assert_eq!(encode(&Value::Enum(EnumValue::null(EnumFamily::Scope))), [0x1F, 0x01]);
    }

    #[test]
    fn families_reject_each_other() {
        let registry = TypeRegistry::with_defaults();
        let direction_out = registry
            .encode_any(&Value::Enum(EnumValue::direction("OUT")), true)
            .expect("encode");

        let cardinality = EnumSerializer::new(EnumFamily::Cardinality);
        let mut reader = Reader::new(&direction_out);
        assert!(matches!(
            cardinality.deserialize(&mut reader, &registry, true).expect_err("cross-family"),
            CodecError::UnexpectedTypeCode { expected: 0x16, actual: 0x18 }
        ));

        let direction = EnumSerializer::new(EnumFamily::Direction);
        let mut reader = Reader::new(&direction_out);
        let decoded = direction.deserialize(&mut reader, &registry, true).expect("same family");
        assert_eq!(decoded, Value::Enum(EnumValue::direction("OUT")));
    }
}
