//! Benchmarks for Signup Desk view-model rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use signup_desk::view::{activity_list, activity_options, ActivitySnapshot};
use signup_desk::{Activities, Activity, ActivityDetails, Session};

fn create_test_activities(count: usize, roster: usize) -> Activities {
    (0..count)
        .map(|i| {
            Activity::new(
                format!("Activity {}", i),
                ActivityDetails {
                    description: "Bench activity".to_string(),
                    schedule: "Mondays, 4:00 PM".to_string(),
                    max_participants: roster as u32,
                    participants: (0..roster).map(|p| format!("student{}@example.com", p)).collect(),
                },
            )
        })
        .collect()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let session = Session::new("teacher").unwrap();

    for size in [10, 100, 1000] {
        let snapshot = ActivitySnapshot::Loaded(create_test_activities(size, 20));

        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("anonymous_{}", size), |b| {
            b.iter(|| activity_list(black_box(&snapshot), None))
        });

        group.bench_function(format!("signed_in_{}", size), |b| {
            b.iter(|| activity_list(black_box(&snapshot), Some(&session)))
        });

        group.bench_function(format!("options_{}", size), |b| {
            b.iter(|| activity_options(black_box(&snapshot)))
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for size in [10, 100, 1000] {
        let json = serde_json::to_string(&create_test_activities(size, 20)).unwrap();

        group.throughput(Throughput::Bytes(json.len() as u64));

        group.bench_function(format!("activities_{}", size), |b| {
            b.iter(|| serde_json::from_str::<Activities>(black_box(&json)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_render, bench_decode);
criterion_main!(benches);
