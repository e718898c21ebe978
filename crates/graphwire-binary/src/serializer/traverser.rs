//! Traversal-result serializer.
//!
//! Payload shape: `{bulk}{value}`, an 8-byte big-endian bulk followed by a
//! fully-qualified value. The bulk is
//! the only 64-bit counter in the core framing. A negative decoded bulk is
//! rejected; the reference marks the policy as unresolved but currently
//! rejects, and clamping would silently alter result multiplicity.

use graphwire_core::{Traverser, Value};

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{read_prefix, write_prefix, TypeSerializer, VALUE_FLAG_NULL};

/// Traversal results (type code 0x21).
#[derive(Debug, Default)]
pub struct TraverserSerializer;

impl TypeSerializer for TraverserSerializer {
    fn data_type(&self) -> DataType {
        DataType::Traverser
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Traverser(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let traverser = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    // Null in value-only mode: a single typeless null.
                    writer.write_i64(1);
                    writer.write_u8(DataType::UnspecifiedNull.code());
                    writer.write_u8(VALUE_FLAG_NULL);
                }
                return Ok(());
            }
            Value::Traverser(t) => t,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_i64(traverser.bulk());
        registry.write_any(traverser.value(), writer, true)
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        if fully_qualified {
            if read_prefix(reader, self.data_type())? {
                return Ok(Value::Null);
            }
        } else if reader.remaining() == 0 {
            return Err(CodecError::BufferEmpty);
        }
        let bulk = reader.read_i64("bulk")?;
        if bulk < 0 {
            return Err(CodecError::NegativeBulk(bulk));
        }
        let value =
            registry.read_any(reader).map_err(|e| e.nested("value", reader.position()))?;
        Ok(Value::Traverser(Box::new(Traverser::new(bulk, value))))
    }
}
