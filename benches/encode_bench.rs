use ascii85;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn create_test_data(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}

fn bench_encode_various_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("encode");

    for size in [1024, 10_240, 102_400, 1_024_000].iter() {
        let data = create_test_data(*size);

        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let mut output = Vec::new();
                ascii85::encode(black_box(&data[..]), &mut output).unwrap();
            });
        });
    }

    group.finish();
}

fn bench_encode_zero_heavy(c: &mut Criterion) {
    // All zero groups collapse to the z shorthand
    let data = vec![0x00u8; 10_240];

    c.bench_function("encode_zero_heavy", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            ascii85::encode(black_box(&data[..]), &mut output).unwrap();
        });
    });
}

fn bench_encode_unwrapped(c: &mut Criterion) {
    let data = create_test_data(102_400);

    c.bench_function("encode_unwrapped", |b| {
        b.iter(|| {
            let mut output = Vec::new();
            ascii85::Encoder::new()
                .no_wrap()
                .encode(black_box(&data[..]), &mut output)
                .unwrap();
        });
    });
}

criterion_group!(
    benches,
    bench_encode_various_sizes,
    bench_encode_zero_heavy,
    bench_encode_unwrapped
);
criterion_main!(benches);
