//! Codec benchmarks: single encode/decode/validate and parallel batches.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pluscode_rs::{
    EncodeConfig, MAX_ENCODED_LEN, decode, decode_many, encode, encode_many, is_valid,
};

fn generate_coords(count: usize) -> Vec<(f64, f64)> {
    (0..count)
        .map(|i| {
            let t = i as f64 * 0.618_033_988_75;
            ((t * 360.0) % 360.0 - 180.0, (t * 180.0) % 180.0 - 90.0)
        })
        .collect()
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");
    for code_length in [4u8, 10, 15] {
        group.bench_with_input(
            BenchmarkId::from_parameter(code_length),
            &code_length,
            |b, &code_length| {
                let mut buf = [0u8; MAX_ENCODED_LEN];
                b.iter(|| encode(black_box(37.7749), black_box(-122.4194), code_length, &mut buf))
            },
        );
    }
    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_10", |b| b.iter(|| decode(black_box("849VQHFJ+X6"))));
    c.bench_function("decode_15", |b| {
        b.iter(|| decode(black_box("849VQHFJ+X692525")))
    });
}

fn bench_validate(c: &mut Criterion) {
    c.bench_function("is_valid", |b| b.iter(|| is_valid(black_box("849VQHFJ+X6"))));
}

fn bench_batches(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");
    let config = EncodeConfig::new(11);
    for size in [1_000usize, 100_000] {
        let coords = generate_coords(size);
        let codes = encode_many(&coords, &config).unwrap_or_default();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("encode_many", size), &coords, |b, coords| {
            b.iter(|| encode_many(black_box(coords), &config))
        });
        group.bench_with_input(BenchmarkId::new("decode_many", size), &codes, |b, codes| {
            b.iter(|| decode_many(black_box(codes)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode, bench_validate, bench_batches);
criterion_main!(benches);
