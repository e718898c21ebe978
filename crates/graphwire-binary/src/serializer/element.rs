//! Graph-element serializers: Vertex and Edge references.
//!
//! Vertex payload: `{id}{label}{properties}` with a fully-qualified id, a
//! value-only String label and fully-qualified properties. Edge payload:
//! `{id}{label}{in_v_id}{in_v_label}{out_v_id}{out_v_label}{parent}{properties}`
//! with the same per-field framing and a parent slot that is always a
//! fully-qualified null. The identifier is any wire value the server chose;
//! reference elements carry null properties.

use graphwire_core::{Edge, Value, Vertex};

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{read_prefix, read_string_value, write_prefix, write_string_value, TypeSerializer};

fn write_reference(
    id: &Value,
    label: &str,
    registry: &TypeRegistry,
    writer: &mut Writer,
) -> CodecResult<()> {
    registry.write_any(id, writer, true)?;
    write_string_value(writer, label)
}

/// Vertex references (type code 0x11).
#[derive(Debug, Default)]
pub struct VertexSerializer;

impl TypeSerializer for VertexSerializer {
    fn data_type(&self) -> DataType {
        DataType::Vertex
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Vertex(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let vertex = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    // Null in value-only mode: null id, empty label, null
                    // properties.
                    registry.write_any(&Value::Null, writer, true)?;
                    write_string_value(writer, "")?;
                    registry.write_any(&Value::Null, writer, true)?;
                }
                return Ok(());
            }
            Value::Vertex(v) => v,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        write_reference(vertex.id(), vertex.label(), registry, writer)?;
        registry.write_any(vertex.properties(), writer, true)
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
        let id = registry.read_any(reader).map_err(|e| e.nested("id", reader.position()))?;
        let label =
            read_string_value(reader).map_err(|e| e.nested("label", reader.position()))?;
        let properties =
            registry.read_any(reader).map_err(|e| e.nested("properties", reader.position()))?;
        Ok(Value::from(Vertex::with_properties(id, label, properties)))
    }
}

/// Edge references (type code 0x0D).
#[derive(Debug, Default)]
pub struct EdgeSerializer;

impl TypeSerializer for EdgeSerializer {
    fn data_type(&self) -> DataType {
        DataType::Edge
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Edge(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let edge = match value {
            Value::Null => {
                write_prefix(writer, self.data_type(), fully_qualified, true);
                return Ok(());
            }
            Value::Edge(e) => e,
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        write_reference(edge.id(), edge.label(), registry, writer)?;
        write_reference(edge.in_v().id(), edge.in_v().label(), registry, writer)?;
        write_reference(edge.out_v().id(), edge.out_v().label(), registry, writer)?;
        // The parent slot is always null on the wire.
        registry.write_any(&Value::Null, writer, true)?;
        registry.write_any(edge.properties(), writer, true)
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
        let id = registry.read_any(reader).map_err(|e| e.nested("id", reader.position()))?;
        let label =
            read_string_value(reader).map_err(|e| e.nested("label", reader.position()))?;
        let in_v_id =
            registry.read_any(reader).map_err(|e| e.nested("in_v_id", reader.position()))?;
        let in_v_label =
            read_string_value(reader).map_err(|e| e.nested("in_v_label", reader.position()))?;
        let out_v_id =
            registry.read_any(reader).map_err(|e| e.nested("out_v_id", reader.position()))?;
        let out_v_label =
            read_string_value(reader).map_err(|e| e.nested("out_v_label", reader.position()))?;
        let _parent =
            registry.read_any(reader).map_err(|e| e.nested("parent", reader.position()))?;
        let properties =
            registry.read_any(reader).map_err(|e| e.nested("properties", reader.position()))?;
        Ok(Value::from(Edge::with_properties(
            id,
            label,
            Vertex::new(in_v_id, in_v_label),
            Vertex::new(out_v_id, out_v_label),
            properties,
        )))
    }
}
