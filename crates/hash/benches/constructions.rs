use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sha3::Digest;

const SIZES: [usize; 4] = [32, 136, 1024, 16 * 1024];

fn input(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i as u8).wrapping_mul(37)).collect()
}

fn bench_sha3(c: &mut Criterion) {
    let mut g = c.benchmark_group("sha3-256");
    for len in SIZES {
        let msg = input(len);
        g.throughput(Throughput::Bytes(len as u64));
        g.bench_with_input(BenchmarkId::new("qsc", len), &msg, |b, msg| {
            b.iter(|| black_box(qsc_hash::sha3_256(black_box(msg))));
        });
        g.bench_with_input(BenchmarkId::new("rustcrypto", len), &msg, |b, msg| {
            b.iter(|| black_box(sha3::Sha3_256::digest(black_box(msg))));
        });
    }
    g.finish();
}

fn bench_shake(c: &mut Criterion) {
    let mut g = c.benchmark_group("shake128-output");
    let mut out = vec![0u8; 4096];
    g.throughput(Throughput::Bytes(out.len() as u64));
    g.bench_function("qsc", |b| {
        b.iter(|| qsc_hash::shake128(black_box(&mut out), black_box(b"seed")));
    });
    g.finish();
}

fn bench_kmac(c: &mut Criterion) {
    let key = [0x40u8; 32];
    let mut g = c.benchmark_group("kmac256");
    for len in SIZES {
        let msg = input(len);
        g.throughput(Throughput::Bytes(len as u64));
        g.bench_with_input(BenchmarkId::new("qsc", len), &msg, |b, msg| {
            let mut tag = [0u8; 64];
            b.iter(|| {
                qsc_hash::kmac256(&mut tag, black_box(msg), &key, b"bench").unwrap();
                black_box(tag)
            });
        });
        g.bench_with_input(BenchmarkId::new("tiny-keccak", len), &msg, |b, msg| {
            use tiny_keccak::Hasher;
            let mut tag = [0u8; 64];
            b.iter(|| {
                let mut mac = tiny_keccak::Kmac::v256(&key, b"bench");
                mac.update(black_box(msg));
                mac.finalize(&mut tag);
                black_box(tag)
            });
        });
    }
    g.finish();
}

criterion_group!(benches, bench_sha3, bench_shake, bench_kmac);
criterion_main!(benches);
