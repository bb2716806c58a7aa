// Copyright 2025 the Breakpoint Events Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use breakpoint_core::breakpoints::Breakpoints;
use breakpoint_core::classify::classify;
use breakpoint_core::debounce::Debouncer;
use breakpoint_core::state::{ClassifierConfig, ClassifierState};
use breakpoint_core::types::Notification;
use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};

/// `n` breakpoints named `bp0..bpN` at 100 px steps starting from 320 px.
fn gen_table(n: u32) -> Breakpoints {
    Breakpoints::from_pairs((0..n).map(|i| (format!("bp{i}"), 320 + i * 100)))
        .expect("generated widths are positive")
}

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG; the high bits are good enough for widths.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
}

/// Widths that hit a trigger width about half the time.
fn gen_widths(table: &Breakpoints, count: usize, seed: u64) -> Vec<u32> {
    let triggers: Vec<u32> = table.iter().map(|b| b.trigger_width).collect();
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| {
            let r = rng.next_u32();
            if r % 2 == 0 && !triggers.is_empty() {
                triggers[(r as usize / 2) % triggers.len()]
            } else {
                r % 4000
            }
        })
        .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    for n in [3_u32, 32, 256] {
        let table = gen_table(n);
        let widths = gen_widths(&table, 1024, 0x5eed);
        group.throughput(Throughput::Elements(widths.len() as u64));
        group.bench_function(format!("table_{n}"), |b| {
            b.iter(|| {
                for &w in &widths {
                    black_box(classify(w, &table, "base"));
                }
            });
        });
    }
    group.finish();
}

fn bench_evaluate_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");
    let config = ClassifierConfig::default();
    // Drag from 1400 px down to 300 px and back, one pixel at a time.
    let sweep: Vec<u32> = (300..=1400).rev().chain(300..=1400).collect();
    group.throughput(Throughput::Elements(sweep.len() as u64));
    group.bench_function("bootstrap_sweep", |b| {
        b.iter_batched(
            || (ClassifierState::new(&config), Vec::<Notification>::with_capacity(16)),
            |(mut state, mut sink)| {
                // Widths are already in hand, so skip the fallible sampler step.
                for &w in &sweep {
                    black_box(state.observe(w, &config, &mut sink));
                }
                black_box(sink.len());
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_debounce_burst(c: &mut Criterion) {
    let mut group = c.benchmark_group("debounce");
    group.bench_function("burst_1000", |b| {
        b.iter(|| {
            let mut d: Debouncer<Duration> = Debouncer::default();
            let mut fired = 0;
            for i in 0..1000_u64 {
                let now = Duration::from_millis(i * 16);
                d.schedule(now);
                fired += usize::from(d.poll(now));
            }
            fired += usize::from(d.poll(Duration::from_secs(60)));
            black_box(fired);
        });
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_classify,
    bench_evaluate_sweep,
    bench_debounce_burst,
);
criterion_main!(benches);
