//! Composite serializers: List, Set and Map.
//!
//! All three share the `{length}{item_0}...{item_n}` payload shape with every
//! element routed through the dispatcher in fully-qualified form. Set framing
//! is byte-identical to List; only the type code and the value-model variant
//! differ. Map interleaves key then value per entry.
//!
//! A null collection in value-only mode encodes as a zero length, which makes
//! it indistinguishable from an empty collection once the null flag is gone.
//! That collapse is part of the wire contract peers rely on, so it is
//! reproduced here rather than repaired.

use graphwire_core::Value;

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{read_prefix, read_sequence_length, write_prefix, TypeSerializer};

fn serialize_sequence(
    data_type: DataType,
    items: &[Value],
    registry: &TypeRegistry,
    writer: &mut Writer,
    fully_qualified: bool,
) -> CodecResult<()> {
    write_prefix(writer, data_type, fully_qualified, false);
    writer.write_length(items.len())?;
    for item in items {
        registry.write_any(item, writer, true)?;
    }
    Ok(())
}

fn deserialize_sequence(
    data_type: DataType,
    reader: &mut Reader<'_>,
    registry: &TypeRegistry,
    fully_qualified: bool,
) -> CodecResult<Option<Vec<Value>>> {
    if fully_qualified {
        if read_prefix(reader, data_type)? {
            return Ok(None);
        }
    } else if reader.remaining() == 0 {
        return Err(CodecError::BufferEmpty);
    }
    let length = read_sequence_length(reader)?;
    // Capacity is bounded by the bytes actually present; a fully-qualified
    // element is at least two bytes, so a forged length cannot force a
    // huge allocation.
    let mut items = Vec::with_capacity(length.min(reader.remaining() / 2));
    for i in 0..length {
        let item = registry
            .read_any(reader)
            .map_err(|e| e.nested(format!("item_{i}"), reader.position()))?;
        items.push(item);
    }
    Ok(Some(items))
}

/// Ordered sequences (type code 0x09).
#[derive(Debug, Default)]
pub struct ListSerializer;

impl TypeSerializer for ListSerializer {
    fn data_type(&self) -> DataType {
        DataType::List
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::List(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i32(0);
                }
                Ok(())
            }
            Value::List(items) => {
                serialize_sequence(self.data_type(), items, registry, writer, fully_qualified)
            }
            other => Err(CodecError::UnsupportedType(other.type_name())),
        }
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        match deserialize_sequence(self.data_type(), reader, registry, fully_qualified)? {
            None => Ok(Value::Null),
            Some(items) => Ok(Value::List(items)),
        }
    }
}

/// Deduplicated sequences (type code 0x0B).
///
/// Membership semantics live in the value model; the wire framing is the
/// List framing under a different code.
#[derive(Debug, Default)]
pub struct SetSerializer;

impl TypeSerializer for SetSerializer {
    fn data_type(&self) -> DataType {
        DataType::Set
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Set(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i32(0);
                }
                Ok(())
            }
            Value::Set(items) => {
                serialize_sequence(self.data_type(), items, registry, writer, fully_qualified)
            }
            other => Err(CodecError::UnsupportedType(other.type_name())),
        }
    }

    fn deserialize(
        &self,
        reader: &mut Reader<'_>,
        registry: &TypeRegistry,
        fully_qualified: bool,
    ) -> CodecResult<Value> {
        match deserialize_sequence(self.data_type(), reader, registry, fully_qualified)? {
            None => Ok(Value::Null),
            Some(items) => Ok(Value::Set(items)),
        }
    }
}

/// Key/value maps (type code 0x0A).
#[derive(Debug, Default)]
pub struct MapSerializer;

impl TypeSerializer for MapSerializer {
    fn data_type(&self) -> DataType {
        DataType::Map
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Map(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let entries = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    writer.write_i32(0);
                }
                return Ok(());
            }
            Value::Map(entries) => entries,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_length(entries.len())?;
        for (key, val) in entries {
            registry.write_any(key, writer, true)?;
            registry.write_any(val, writer, true)?;
        }
        Ok(())
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
        let length = read_sequence_length(reader)?;
        // Each entry is two fully-qualified values, four bytes minimum.
        let mut entries = Vec::with_capacity(length.min(reader.remaining() / 4));
        for i in 0..length {
            let key = registry
                .read_any(reader)
                .map_err(|e| e.nested(format!("key_{i}"), reader.position()))?;
            let val = registry
                .read_any(reader)
                .map_err(|e| e.nested(format!("value_{i}"), reader.position()))?;
            entries.push((key, val));
        }
        Ok(Value::Map(entries))
    }
}
