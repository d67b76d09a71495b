//! Criterion benchmarks for workout aggregation and CSV import

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use otfstats::services::InStudioWorkouts;
use otfstats::types::JsonObject;
use serde_json::{json, Value};
use std::hint::black_box;

const COACHES: [&str; 6] = ["Bob Lee", "bob smith", "Amy Chu", "Jane Doe", "jane Smith", "Carl Ng"];
const STUDIOS: [&str; 3] = ["Downtown", "Uptown", "Midtown"];
const CLASS_TYPES: [&str; 4] = ["Orange 60", "Tread 50", "Strength 50", "Orange 90"];

/// Synthetic history with `n` classes
fn make_workouts(n: usize) -> InStudioWorkouts {
    let records: Vec<JsonObject> = (0..n)
        .map(|i| {
            let value = json!({
                "classHistoryUuId": format!("h{}", i),
                "classDate": "2024-03-01T06:00:00",
                "classType": CLASS_TYPES[i % CLASS_TYPES.len()],
                "coach": COACHES[i % COACHES.len()],
                "memberUuId": "u1",
                "splatPoints": i % 30,
                "studioName": STUDIOS[i % STUDIOS.len()],
            });
            match value {
                Value::Object(obj) => obj,
                _ => unreachable!(),
            }
        })
        .collect();
    InStudioWorkouts::from_records(records)
}

fn bench_aggregations(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");

    for n in [100usize, 1_000, 10_000] {
        let workouts = make_workouts(n);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("by_coach_first_name", n), &workouts, |b, w| {
            b.iter(|| w.by_coach(black_box(false), black_box(true)));
        });

        group.bench_with_input(BenchmarkId::new("by_studio", n), &workouts, |b, w| {
            b.iter(|| w.by_studio(black_box(false)));
        });
    }

    group.finish();
}

fn bench_csv_import(c: &mut Criterion) {
    let workouts = make_workouts(1_000);
    let mut csv = Vec::new();
    if workouts.write_csv(&mut csv).is_err() {
        eprintln!("Warning: failed to build CSV fixture");
        return;
    }

    let mut group = c.benchmark_group("csv");
    group.throughput(Throughput::Bytes(csv.len() as u64));

    group.bench_function("from_csv_reader", |b| {
        b.iter(|| InStudioWorkouts::from_csv_reader(black_box(csv.as_slice())));
    });

    group.finish();
}

criterion_group!(benches, bench_aggregations, bench_csv_import);
criterion_main!(benches);
