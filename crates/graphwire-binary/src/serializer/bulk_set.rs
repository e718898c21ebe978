//! Bulked result collections.
//!
//! A bulk set is `{count}{item_0}{repetition_0}...{item_n}{repetition_n}`,
//! with fully-qualified items and 8-byte repetitions. Servers use it to
//! fold repeated traversal results; clients flatten it back out, so decoding
//! yields a plain `List` with each value repeated `repetition` times. There
//! is no encode side: clients never produce bulk sets.
//!
//! Repetition counters are adversarial input (a 20-byte buffer could demand
//! a multi-gigabyte expansion), so the flattened size is capped.

use graphwire_core::Value;

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{read_prefix, read_sequence_length, TypeSerializer};

/// Upper bound on the flattened element count of one bulk set.
pub const MAX_BULK_SET_EXPANSION: usize = 1 << 24;

/// Server-folded result collections (type code 0x2A), decode-only.
#[derive(Debug, Default)]
pub struct BulkSetSerializer;

impl TypeSerializer for BulkSetSerializer {
    fn data_type(&self) -> DataType {
        DataType::BulkSet
    }

    fn can_serialize(&self, _value: &Value) -> bool {
        false
    }

    fn serialize(
        &self,
        value: &Value,
        _registry: &TypeRegistry,
        _writer: &mut Writer,
        _fully_qualified: bool,
    ) -> CodecResult<()> {
        Err(CodecError::UnsupportedType(value.type_name()))
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
        let count = read_sequence_length(reader)?;
        let mut items = Vec::new();
        for i in 0..count {
            let value = registry
                .read_any(reader)
                .map_err(|e| e.nested(format!("item_{i}"), reader.position()))?;
            let repetition = reader.read_i64("bulk")?;
            if repetition < 0 {
                return Err(CodecError::NegativeBulk(repetition));
            }
            let repetition = repetition as usize;
            let expanded = items.len().saturating_add(repetition);
            if expanded > MAX_BULK_SET_EXPANSION {
                return Err(CodecError::LengthOverflow {
                    length: expanded,
                    max: MAX_BULK_SET_EXPANSION,
                });
            }
            for _ in 0..repetition {
                items.push(value.clone());
            }
        }
        Ok(Value::List(items))
    }
}
