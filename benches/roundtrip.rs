// benches/roundtrip.rs
//! Round-trip (encrypt then decrypt) benchmarks across payload sizes

use sealstream::aliases::Passphrase;
use sealstream::{decrypt, encrypt};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use std::io::Cursor;

const KDF_ITERATIONS: u32 = 10_000;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn format_size(bytes: usize) -> String {
    if bytes >= MB {
        format!("{} MiB", bytes / MB)
    } else if bytes >= KB {
        format!("{} KiB", bytes / KB)
    } else {
        format!("{bytes} B")
    }
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    let passphrase = Passphrase::from("benchmark-passphrase".to_string());

    let sizes = [KB, 64 * KB, MB, 10 * MB];

    for &size in &sizes {
        let input = vec![0x41u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("size", format_size(size)), &size, |b, _| {
            b.iter(|| {
                let mut sealed = Vec::with_capacity(size + 128);
                encrypt(
                    Cursor::new(black_box(&input)),
                    &mut sealed,
                    &passphrase,
                    KDF_ITERATIONS,
                )
                .unwrap();

                let mut recovered = Vec::with_capacity(size);
                decrypt(
                    Cursor::new(black_box(&sealed)),
                    &mut recovered,
                    &passphrase,
                    KDF_ITERATIONS,
                )
                .unwrap();

                black_box(recovered);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
