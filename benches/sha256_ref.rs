use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha2::{Digest, Sha256};
use std::hint::black_box;

pub fn bench_sha2_ref(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2");

    for len in [0usize, 64, 1024, 64 * 1024] {
        let data = vec![0u8; len];

        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &data, |b, data| {
            b.iter(|| {
                let mut hasher = Sha256::new();
                hasher.update(black_box(data));
                let _ = hasher.finalize();
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha2_ref);
criterion_main!(benches);
