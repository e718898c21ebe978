//! Traversal-program serializer.
//!
//! Payload shape:
//!
//! ```text
//! {steps_length}{step_0}...{step_n}{sources_length}{source_0}...{source_n}
//! ```
//!
//! where each instruction is `{name}{args_length}{arg_0}...{arg_k}`: the
//! name in String value-only form and every argument through the dispatcher in
//! fully-qualified form. A program builder ([`graphwire_core::Traversal`]) is
//! resolved to its underlying bytecode first, so builder and extracted
//! program serialize byte-identically.

use graphwire_core::{Bytecode, Instruction, Value};

use crate::data_type::DataType;
use crate::error::{CodecError, CodecResult};
use crate::io::{Reader, Writer};
use crate::registry::TypeRegistry;

use super::{read_prefix, read_string_value, write_prefix, write_string_value, TypeSerializer};

/// Traversal programs (type code 0x15).
#[derive(Debug, Default)]
pub struct BytecodeSerializer;

impl BytecodeSerializer {
    fn write_instruction(
        instruction: &Instruction,
        registry: &TypeRegistry,
        writer: &mut Writer,
    ) -> CodecResult<()> {
        write_string_value(writer, instruction.operator())?;
        writer.write_length(instruction.args().len())?;
        for arg in instruction.args() {
            registry.write_any(arg, writer, true)?;
        }
        Ok(())
    }

    fn read_instruction(
        reader: &mut Reader<'_>,
        registry: &TypeRegistry,
    ) -> CodecResult<Instruction> {
        let operator =
            read_string_value(reader).map_err(|e| e.nested("name", reader.position()))?;
        let args_length = reader.read_length("args_length")?;
        let mut args = Vec::with_capacity(args_length.min(reader.remaining() / 2));
        for j in 0..args_length {
            let arg = registry
                .read_any(reader)
                .map_err(|e| e.nested(format!("arg_{j}"), reader.position()))?;
            args.push(arg);
        }
        Ok(Instruction::new(operator, args))
    }
}

impl TypeSerializer for BytecodeSerializer {
    fn data_type(&self) -> DataType {
        DataType::Bytecode
    }

    fn can_serialize(&self, value: &Value) -> bool {
        matches!(value, Value::Bytecode(_) | Value::Traversal(_))
    }

    fn serialize(
        &self,
        value: &Value,
        registry: &TypeRegistry,
        writer: &mut Writer,
        fully_qualified: bool,
    ) -> CodecResult<()> {
        let bytecode: &Bytecode = match value {
            Value::Null => {
                if write_prefix(writer, self.data_type(), fully_qualified, true) {
                    // Null in value-only mode is the empty program.
                    writer.write_i32(0);
                    writer.write_i32(0);
                }
                return Ok(());
            }
            Value::Bytecode(bc) => bc,
            Value::Traversal(t) => t.bytecode(),
            other => return Err(CodecError::UnsupportedType(other.type_name())),
        };
        write_prefix(writer, self.data_type(), fully_qualified, false);
        writer.write_length(bytecode.steps().len())?;
        for step in bytecode.steps() {
            Self::write_instruction(step, registry, writer)?;
        }
        writer.write_length(bytecode.sources().len())?;
        for source in bytecode.sources() {
            Self::write_instruction(source, registry, writer)?;
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

        let steps_length = reader.read_length("steps_length")?;
        let mut steps = Vec::with_capacity(steps_length.min(reader.remaining() / 8));
        for i in 0..steps_length {
            let step = Self::read_instruction(reader, registry)
                .map_err(|e| e.nested(format!("step_{i}"), reader.position()))?;
            steps.push(step);
        }

        let sources_length = reader.read_length("sources_length")?;
        let mut sources = Vec::with_capacity(sources_length.min(reader.remaining() / 8));
        for i in 0..sources_length {
            let source = Self::read_instruction(reader, registry)
                .map_err(|e| e.nested(format!("source_{i}"), reader.position()))?;
            sources.push(source);
        }

        Ok(Value::Bytecode(Bytecode::from_parts(steps, sources)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::TypeRegistry;
    use graphwire_core::Traversal;

    fn encode(value: &Value, fully_qualified: bool) -> Vec<u8> {
        TypeRegistry::with_defaults().encode_any(value, fully_qualified).expect("encode")
    }

    #[test]
    fn empty_program_layout() {
        let bytes = encode(&Value::Bytecode(Bytecode::new()), true);
        assert_eq!(bytes, [0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]);
    }

    #[test]
    fn single_step_layout() {
        let bc = Bytecode::new().with_step("V", vec![]);
        assert_eq!(
            encode(&Value::Bytecode(bc), true),
            [
                0x15, 0x00, // type code, present
                0x00, 0x00, 0x00, 0x01, // steps_length
                0x00, 0x00, 0x00, 0x01, 0x56, // "V"
                0x00, 0x00, 0x00, 0x00, // no args
                0x00, 0x00, 0x00, 0x00, // sources_length
            ]
        );
    }

    #[test]
    fn nested_arguments_layout() {
        let bc = Bytecode::new()
            .with_step("V", vec![])
            .with_step("hasLabel", vec!["Person".into()])
            .with_step("has", vec!["age".into(), Value::Int(42)]);
        assert_eq!(
            encode(&Value::Bytecode(bc), true),
            [
                0x15, 0x00, //
                0x00, 0x00, 0x00, 0x03, // steps_length
                0x00, 0x00, 0x00, 0x01, 0x56, // "V"
                0x00, 0x00, 0x00, 0x00, //
                0x00, 0x00, 0x00, 0x08, 0x68, 0x61, 0x73, 0x4C, 0x61, 0x62, 0x65,
                0x6C, // "hasLabel"
                0x00, 0x00, 0x00, 0x01, // one arg
                0x03, 0x00, 0x00, 0x00, 0x00, 0x06, 0x50, 0x65, 0x72, 0x73, 0x6F,
                0x6E, // "Person"
                0x00, 0x00, 0x00, 0x03, 0x68, 0x61, 0x73, // "has"
                0x00, 0x00, 0x00, 0x02, // two args
                0x03, 0x00, 0x00, 0x00, 0x00, 0x03, 0x61, 0x67, 0x65, // "age"
                0x01, 0x00, 0x00, 0x00, 0x00, 0x2A, // 42
                0x00, 0x00, 0x00, 0x00, // sources_length
            ]
        );
    }

    #[test]
    fn builder_serializes_like_its_program() {
        let bc = Bytecode::new().with_step("V", vec![]);
        let as_program = encode(&Value::Bytecode(bc.clone()), true);
        let as_builder = encode(&Value::Traversal(Traversal::new(bc)), true);
        assert_eq!(as_program, as_builder);
    }

    #[test]
    fn value_only_null_is_the_empty_program() {
        let registry = TypeRegistry::with_defaults();
        let mut writer = Writer::new();
        BytecodeSerializer
            .serialize(&Value::Null, &registry, &mut writer, false)
            .expect("serialize");
        let bytes = writer.into_bytes();
        assert_eq!(bytes, [0x00; 8]);

        let mut reader = Reader::new(&bytes);
        let decoded =
            BytecodeSerializer.deserialize(&mut reader, &registry, false).expect("deserialize");
        assert_eq!(decoded, Value::Bytecode(Bytecode::new()));
    }

    #[test]
    fn sources_round_trip() {
        let registry = TypeRegistry::with_defaults();
        let bc = Bytecode::new()
            .with_source("withStrategies", vec!["ReadOnlyStrategy".into()])
            .with_step("V", vec![]);
        let bytes = encode(&Value::Bytecode(bc.clone()), true);
        let (decoded, consumed) = registry.decode_any(&bytes).expect("decode");
        assert_eq!(decoded, Value::Bytecode(bc));
        assert_eq!(consumed, bytes.len());
    }

    #[test]
    fn truncated_steps_length() {
        let registry = TypeRegistry::with_defaults();
        let buf = [0x15, 0x00];
        let err = registry.decode_any(&buf).expect_err("truncated");
        assert_eq!(err.to_string(), "unexpected {steps_length} length");
    }

    #[test]
    fn negative_lengths_name_their_field() {
        let registry = TypeRegistry::with_defaults();

        let buf = [0x15, 0x00, 0xFF, 0xFF, 0xFF, 0xFF];
        let err = registry.decode_any(&buf).expect_err("negative steps");
        assert_eq!(err.to_string(), "{steps_length} is less than zero");

        let buf = [0x15, 0x00, 0x00, 0x00, 0x00, 0x00, 0x80, 0x00, 0x00, 0x00];
        let err = registry.decode_any(&buf).expect_err("negative sources");
        assert_eq!(err.to_string(), "{sources_length} is less than zero");
    }

    #[test]
    fn wrong_type_code_is_rejected() {
        let registry = TypeRegistry::with_defaults();
        for code in [0x00_u8, 0x14, 0x16, 0xFF] {
            let buf = [code, 0x00];
            let mut reader = Reader::new(&buf);
            assert!(matches!(
                BytecodeSerializer.deserialize(&mut reader, &registry, true).expect_err("code"),
                CodecError::UnexpectedTypeCode { expected: 0x15, .. }
            ));
        }
    }

    #[test]
    fn step_failures_carry_their_index() {
        let registry = TypeRegistry::with_defaults();
        // One step whose name claims 10 bytes but the buffer ends first.
        let buf = [0x15, 0x00, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x0A, 0x61];
        let err = registry.decode_any(&buf).expect_err("truncated name");
        let rendered = err.to_string();
        assert!(rendered.contains("{step_0}"), "got: {rendered}");
        assert!(rendered.contains("{name}"), "got: {rendered}");
    }
}
