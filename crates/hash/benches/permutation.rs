//! Compare the compact and unrolled Keccak-f[1600] strategies, both as a
//! bare permutation and under SHAKE-256 bulk output.

use core::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use pprof::criterion::{Output, PProfProfiler};
use qsc_hash::{
    PermutationKind, STATE_LANES, Strength, permutation::Permute, set_permutation, shake::Shake,
};

const KINDS: [PermutationKind; 2] = [PermutationKind::Compact, PermutationKind::Unrolled];

fn bench_strategies(c: &mut Criterion) {
    let mut g = c.benchmark_group("keccak-f1600");
    let start: [u64; STATE_LANES] = core::array::from_fn(|i| (i as u64).wrapping_mul(0x9E37));

    g.bench_function("compact", |b| {
        let mut lanes = start;
        b.iter(|| qsc_hash::permutation::Compact::permute(black_box(&mut lanes)));
    });
    g.bench_function("unrolled", |b| {
        let mut lanes = start;
        b.iter(|| qsc_hash::permutation::Unrolled::permute(black_box(&mut lanes)));
    });
    g.bench_function("keccak-crate", |b| {
        let mut lanes = start;
        b.iter(|| keccak::f1600(black_box(&mut lanes)));
    });
    g.finish();
}

fn bench_squeeze(c: &mut Criterion) {
    const BLOCKS: usize = 64;
    let rate = Strength::L256.rate().bytes();
    let mut g = c.benchmark_group("shake256-squeeze");
    g.throughput(Throughput::Bytes((BLOCKS * rate) as u64));

    let mut out = vec![0u8; BLOCKS * rate];
    for kind in KINDS {
        g.bench_function(BenchmarkId::from_parameter(kind), |b| {
            set_permutation(kind);
            b.iter(|| {
                let mut xof = Shake::new(Strength::L256, black_box(b"seed"));
                xof.squeeze_blocks(&mut out, BLOCKS).unwrap();
                black_box(&out);
            });
        });
    }
    g.finish();
    set_permutation(PermutationKind::DEFAULT);
}

fn permutation_benches(c: &mut Criterion) {
    let core_id = core_affinity::get_core_ids()
        .and_then(|ids| ids.first().copied())
        .expect("no core ids found");
    core_affinity::set_for_current(core_id);
    println!("Running permutation benchmarks on core {core_id:?}");

    bench_strategies(c);
    bench_squeeze(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().with_profiler(PProfProfiler::new(1000, Output::Flamegraph(None)));
    targets = permutation_benches
}
criterion_main!(benches);
