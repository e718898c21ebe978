//! The type registry and dispatcher.
//!
//! The registry is the root of the codec's call graph: every composite
//! serializer routes element-level work back through it, which is what makes
//! the protocol self-describing at every nesting level.
//!
//! Decoding dispatches on the buffer's leading type code. Encoding has no
//! type code to read, since the wire never carries the caller's runtime
//! type, so the registry probes serializers in a fixed priority order and
//! the first whose predicate accepts the value wins. That order is part of
//! the contract: a traversal builder must resolve to bytecode before
//! anything else gets a look, and `Int` must be probed before `Long`.
//!
//! Registries are built explicitly (no global mutable state) and are
//! immutable once shared by reference, which makes concurrent encode/decode
//! safe without coordination.

use std::collections::HashMap;
use std::sync::Arc;

use graphwire_core::{EnumFamily, Value};
use tracing::trace;

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::serializer::{
    BooleanSerializer, BulkSetSerializer, ByteSerializer, BytecodeSerializer, DateSerializer,
    DoubleSerializer, EdgeSerializer, EnumSerializer, FloatSerializer, IntSerializer,
    ListSerializer, LongSerializer, MapSerializer, SetSerializer, ShortSerializer,
    StringSerializer, TimestampSerializer, TraverserSerializer, TypeSerializer,
    UnspecifiedNullSerializer, UuidSerializer, VertexSerializer,
};

/// A registry of wire-type serializers.
///
/// Holds the type-code lookup table used on decode and the ordered inference
/// list used on encode. Registering a serializer whose type code is already
/// present replaces the previous one in place, keeping its inference
/// priority; last registration wins, which is how tests substitute doubles.
///
/// # Example
///
/// ```
/// use graphwire_binary::TypeRegistry;
/// use graphwire_core::Value;
///
/// let registry = TypeRegistry::with_defaults();
/// let bytes = registry.encode_any(&Value::from(42i32), true)?;
/// let (decoded, consumed) = registry.decode_any(&bytes)?;
/// assert_eq!(decoded, Value::Int(42));
/// assert_eq!(consumed, bytes.len());
/// # Ok::<(), graphwire_binary::CodecError>(())
/// ```
#[derive(Default)]
pub struct TypeRegistry {
    /// Decode-side lookup: type code to serializer.
    by_code: HashMap<u8, Arc<dyn TypeSerializer>>,
    /// Encode-side inference, probed front to back.
    inference: Vec<Arc<dyn TypeSerializer>>,
}

impl TypeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with every built-in serializer, registered in the
    /// documented inference order: enumeration families, traversal
    /// builder/bytecode, traverser, collections, numerics (`Int` before
    /// `Long`), remaining scalars, graph elements, bulk set, and the
    /// typeless-null fallback last.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        for family in EnumFamily::all() {
            registry.register(Arc::new(EnumSerializer::new(family)));
        }
        registry.register(Arc::new(BytecodeSerializer));
        registry.register(Arc::new(TraverserSerializer));
        registry.register(Arc::new(ListSerializer));
        registry.register(Arc::new(SetSerializer));
        registry.register(Arc::new(MapSerializer));
        registry.register(Arc::new(IntSerializer));
        registry.register(Arc::new(LongSerializer));
        registry.register(Arc::new(FloatSerializer));
        registry.register(Arc::new(DoubleSerializer));
        registry.register(Arc::new(BooleanSerializer));
        registry.register(Arc::new(ByteSerializer));
        registry.register(Arc::new(ShortSerializer));
        registry.register(Arc::new(StringSerializer));
        registry.register(Arc::new(UuidSerializer));
        registry.register(Arc::new(DateSerializer));
        registry.register(Arc::new(TimestampSerializer));
        registry.register(Arc::new(VertexSerializer));
        registry.register(Arc::new(EdgeSerializer));
        registry.register(Arc::new(BulkSetSerializer));
        registry.register(Arc::new(UnspecifiedNullSerializer));
        registry
    }

    /// Registers a serializer under its own type code.
    ///
    /// A serializer for an already-registered code replaces the previous one
    /// in place; a new code joins the end of the inference order.
    pub fn register(&mut self, serializer: Arc<dyn TypeSerializer>) {
        let code = serializer.data_type().code();
        trace!(code, "registering serializer");
        if let Some(slot) =
            self.inference.iter_mut().find(|s| s.data_type().code() == code)
        {
            *slot = Arc::clone(&serializer);
        } else {
            self.inference.push(Arc::clone(&serializer));
        }
        self.by_code.insert(code, serializer);
    }

    /// Returns `true` if a serializer is registered for the type.
    #[must_use]
    pub fn contains(&self, data_type: DataType) -> bool {
        self.by_code.contains_key(&data_type.code())
    }

    /// Number of registered serializers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_code.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_code.is_empty()
    }

    /// Encodes a value, inferring its wire type from the inference order.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::UnsupportedType`] when no serializer's
    /// predicate accepts the value, or with the serializer's own error.
    pub fn encode_any(&self, value: &Value, fully_qualified: bool) -> CodecResult<Vec<u8>> {
        let mut writer = Writer::new();
        self.write_any(value, &mut writer, fully_qualified)?;
        Ok(writer.into_bytes())
    }

    /// Decodes one fully-qualified value from the front of `bytes`.
    ///
    /// Returns the value and the number of bytes consumed; trailing bytes
    /// are left for the caller. Value-only framing never appears here; it
    /// is internal to serializers decoding their own sub-fields.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::BufferEmpty`] on empty input and
    /// [`CodecError::UnknownTypeCode`] when the leading byte is not in the
    /// catalogue.
    pub fn decode_any(&self, bytes: &[u8]) -> CodecResult<(Value, usize)> {
        let mut reader = Reader::new(bytes);
        let value = self.read_any(&mut reader)?;
        Ok((value, reader.position()))
    }

    /// Transport-boundary decode entry that distinguishes an absent buffer
    /// from an empty one.
    ///
    /// # Errors
    ///
    /// Fails with [`CodecError::BufferMissing`] when no buffer was supplied.
    pub fn decode_optional(&self, bytes: Option<&[u8]>) -> CodecResult<(Value, usize)> {
        match bytes {
            None => Err(CodecError::BufferMissing),
            Some(bytes) => self.decode_any(bytes),
        }
    }

    /// Recursive encode entry used by composite serializers.
    pub(crate) fn write_any(
        &self,
        value: &Value,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let serializer = self
            .inference
            .iter()
            .find(|s| s.can_serialize(value))
            .ok_or_else(|| CodecError::UnsupportedType(value.type_name()))?;
        writer.descend()?;
        let result = serializer.serialize(value, self, writer, fully_qualified);
        writer.ascend();
        result
    }

    /// Recursive decode entry used by composite serializers.
    pub(crate) fn read_any(&self, reader: &mut Reader<'_>) -> CodecResult<Value> {
        let Some(code) = reader.peek() else {
            return Err(CodecError::BufferEmpty);
        };
        let serializer =
            self.by_code.get(&code).ok_or(CodecError::UnknownTypeCode(code))?;
        reader.descend()?;
        let result = serializer.deserialize(reader, self, true);
        reader.ascend();
        result
    }
}

impl std::fmt::Debug for TypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let codes: Vec<u8> = self.inference.iter().map(|s| s.data_type().code()).collect();
        f.debug_struct("TypeRegistry").field("codes", &codes).finish()
    }
}
