//! Benchmark comparison between `Bitset` and bitvec

use bitvec::prelude::*;
use blockset::Bitset64;
use core::hint::black_box;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: &[u32] = &[10, 100, 1000, 10_000, 100_000];

fn bitvec_with(size: u32, step: usize) -> BitVec<u64, Lsb0> {
    let mut bv = BitVec::<u64, Lsb0>::repeat(false, size as usize);
    for i in (0..size as usize).step_by(step) {
        bv.set(i, true);
    }
    bv
}

fn bench_set_bit(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_bit");

    for &size in SIZES {
        group.throughput(Throughput::Elements(100));

        // Sparse pattern spread over the whole range
        let step = (size as usize / 100).max(1);
        let indices: Vec<u32> = (0..size).step_by(step).take(100).collect();

        // Bitset grows on demand; BitVec has to be sized up front
        group.bench_with_input(BenchmarkId::new("Bitset", size), &indices, |b, indices| {
            b.iter(|| {
                let mut bitset = Bitset64::new();
                for &i in indices {
                    bitset.set(i);
                }
                black_box(&bitset);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &indices, |b, indices| {
            b.iter(|| {
                let mut bitvec = BitVec::<u64, Lsb0>::repeat(false, size as usize);
                for &i in indices {
                    bitvec.set(i as usize, true);
                }
                black_box(&bitvec);
            });
        });
    }

    group.finish();
}

fn bench_has(c: &mut Criterion) {
    let mut group = c.benchmark_group("has");

    for &size in &[100u32, 1000, 10_000] {
        group.throughput(Throughput::Elements(1000));

        let bitset: Bitset64 = (0..size).step_by(3).collect();
        let bv = bitvec_with(size, 3);
        let probes: Vec<u32> = (0..1000).map(|i| i % size).collect();

        group.bench_with_input(
            BenchmarkId::new("Bitset", size),
            &(&bitset, &probes),
            |b, (bitset, probes)| {
                b.iter(|| {
                    let hits = probes.iter().filter(|&&i| bitset.has(i)).count();
                    black_box(hits);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BitVec", size),
            &(&bv, &probes),
            |b, (bitvec, probes)| {
                b.iter(|| {
                    let hits = probes.iter().filter(|&&i| bitvec[i as usize]).count();
                    black_box(hits);
                });
            },
        );
    }

    group.finish();
}

fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iteration");

    for &size in &[100u32, 1000, 10_000] {
        let bitset: Bitset64 = (0..size).step_by(10).collect();
        let bv = bitvec_with(size, 10);

        group.throughput(Throughput::Elements(u64::from(size / 10)));

        group.bench_with_input(BenchmarkId::new("Bitset", size), &bitset, |b, bitset| {
            b.iter(|| {
                let sum: u64 = bitset.iter().map(u64::from).sum();
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter(|| {
                let sum: u64 = bitvec.iter_ones().map(|i| i as u64).sum();
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_hamming(c: &mut Criterion) {
    let mut group = c.benchmark_group("hamming");

    for &size in &[100u32, 1000, 10_000] {
        let a: Bitset64 = (0..size).step_by(2).collect();
        let b: Bitset64 = (0..size).step_by(3).collect();
        let av = bitvec_with(size, 2);
        let bv = bitvec_with(size, 3);

        group.bench_with_input(
            BenchmarkId::new("Bitset", size),
            &(&a, &b),
            |bench, (a, b)| {
                bench.iter(|| black_box(a.count_diff(*b)));
            },
        );

        group.bench_with_input(
            BenchmarkId::new("BitVec", size),
            &(&av, &bv),
            |bench, (a, b)| {
                bench.iter(|| {
                    let mut diff = (*a).clone();
                    diff ^= b.as_bitslice();
                    black_box(diff.count_ones())
                });
            },
        );
    }

    group.finish();
}

fn bench_count_ones(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_ones");

    for &size in &[100u32, 1000, 10_000] {
        let bitset: Bitset64 = (0..size).step_by(2).collect();
        let bv = bitvec_with(size, 2);

        group.bench_with_input(BenchmarkId::new("Bitset", size), &bitset, |b, bitset| {
            b.iter(|| black_box(bitset.count_ones()));
        });

        group.bench_with_input(BenchmarkId::new("BitVec", size), &bv, |b, bitvec| {
            b.iter(|| black_box(bitvec.count_ones()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_set_bit,
    bench_has,
    bench_iteration,
    bench_hamming,
    bench_count_ones,
);
criterion_main!(benches);
