// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use seglib_seq::{
    algebra::{intersection, union},
    distribute::{RemainderPolicy, distribute},
    modify::make_unique_in_place,
};
use std::hint::black_box;

const SIZES: [usize; 4] = [64, 256, 1024, 4096];

/// Half of the generated values repeat, so de-duplication has real work to do.
fn with_duplicates(n: usize) -> Vec<u64> {
    (0..n as u64).map(|i| (i * 7_919) % (n as u64 / 2 + 1)).collect()
}

fn bench_make_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("make_unique_in_place");
    for n in SIZES {
        let input = with_duplicates(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, input| {
            b.iter(|| {
                let mut v = input.clone();
                black_box(make_unique_in_place(black_box(&mut v)))
            })
        });
    }
    group.finish();
}

fn bench_set_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("set_operations");
    for n in SIZES {
        let a = with_duplicates(n);
        let b: Vec<u64> = a.iter().map(|v| v + 3).collect();
        group.throughput(Throughput::Elements(2 * n as u64));
        group.bench_with_input(BenchmarkId::new("union", n), &(&a, &b), |bench, &(a, b)| {
            bench.iter(|| union(black_box(a), black_box(b)))
        });
        group.bench_with_input(
            BenchmarkId::new("intersection", n),
            &(&a, &b),
            |bench, &(a, b)| bench.iter(|| intersection(black_box(a), black_box(b))),
        );
    }
    group.finish();
}

fn bench_distribute(c: &mut Criterion) {
    let mut group = c.benchmark_group("distribute");
    let input: Vec<u64> = (0..100_000).collect();
    for parts in [2_usize, 7, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(parts), &parts, |b, &parts| {
            b.iter(|| distribute(black_box(&input), parts, RemainderPolicy::Spread))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_make_unique, bench_set_operations, bench_distribute);
criterion_main!(benches);
