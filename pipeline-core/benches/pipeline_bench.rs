use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use pipeline_core::prelude::*;

fn generate_input(len: usize) -> Vec<u64> {
    (0..len as u64).map(|i| i.wrapping_mul(2654435761)).collect()
}

fn drain<S: Sequence>(mut seq: S) -> usize {
    let mut count = 0;
    while seq.advance().is_some() {
        count += 1;
    }
    count
}

fn bench_memoize_segment(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_memoize");

    let len = 100_000;
    let data = generate_input(len);

    group.throughput(Throughput::Elements(len as u64));
    group.bench_function("memoize_then_windows_of_4_100k", |b| {
        b.iter(|| {
            let source = memoize(from_iterator(data.iter().copied()));
            drain(segment::<4, _>(source))
        })
    });
    group.bench_function("memoize_two_cursors_100k", |b| {
        b.iter(|| {
            let mut lead = memoize(from_iterator(data.iter().copied()));
            let mut lag = lead.save();
            let mut count = 0;
            // The lagging cursor trails by 64, keeping the buffer small
            // but never letting it empty.
            while lead.advance().is_some() {
                count += 1;
                if count > 64 {
                    lag.advance();
                }
            }
            while lag.advance().is_some() {
                count += 1;
            }
            count
        })
    });

    group.finish();
}

fn bench_delay_knit(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_combinators");

    let len = 100_000;
    let data = generate_input(len);

    group.throughput(Throughput::Elements(len as u64));
    group.bench_function("delay_0_7_100k", |b| {
        b.iter(|| drain(delay::<8, 2, _>([0, 7], from_slice(&data))))
    });
    group.bench_function("knit_pair_100k", |b| {
        b.iter(|| drain(knit((from_slice(&data), ascending(0)))))
    });

    group.finish();
}

fn bench_concat(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_concat");

    let rows: Vec<Vec<u64>> = (0..1_000).map(|_| generate_input(100)).collect();
    let total: usize = rows.iter().map(Vec::len).sum();

    group.throughput(Throughput::Elements(total as u64));
    group.bench_function("concat_1k_rows_of_100", |b| {
        b.iter(|| {
            drain(concat(from_iterator(
                rows.iter().map(|row| from_slice(row.as_slice())),
            )))
        })
    });

    group.finish();
}

criterion_group!(benches, bench_memoize_segment, bench_delay_knit, bench_concat);
criterion_main!(benches);
