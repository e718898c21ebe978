//! Encode/decode throughput benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use graphwire_binary::TypeRegistry;
use graphwire_core::{Bytecode, Traverser, Value};

fn sample_program() -> Value {
    Value::Bytecode(
        Bytecode::new()
            .with_step("V", vec![])
            .with_step("hasLabel", vec!["Person".into()])
            .with_step("has", vec!["age".into(), Value::Int(42)])
            .with_step("limit", vec![Value::Long(10)]),
    )
}

fn sample_result_batch() -> Value {
    Value::List(
        (0..64)
            .map(|i| {
                Value::from(Traverser::new(
                    1,
                    Value::map(vec![
                        (Value::from("id"), Value::Long(i)),
                        (Value::from("name"), Value::from("node")),
                    ]),
                ))
            })
            .collect(),
    )
}

fn bench_roundtrip(c: &mut Criterion) {
    let registry = TypeRegistry::with_defaults();

    let program = sample_program();
    c.bench_function("encode_bytecode", |b| {
        b.iter(|| registry.encode_any(black_box(&program), true).expect("encode"));
    });

    let program_bytes = registry.encode_any(&program, true).expect("encode");
    c.bench_function("decode_bytecode", |b| {
        b.iter(|| registry.decode_any(black_box(&program_bytes)).expect("decode"));
    });

    let batch = sample_result_batch();
    let batch_bytes = registry.encode_any(&batch, true).expect("encode");
    c.bench_function("decode_result_batch", |b| {
        b.iter(|| registry.decode_any(black_box(&batch_bytes)).expect("decode"));
    });
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
