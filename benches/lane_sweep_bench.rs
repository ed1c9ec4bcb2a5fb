use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use lifeline_rs::layout::{LayoutConfig, layout_timeline};
use lifeline_rs::{PersonTimeline, TimelineEvent};

fn dense_timeline(event_count: usize) -> PersonTimeline {
    let base = NaiveDate::from_ymd_opt(2000, 1, 1).expect("base date");
    let events = (0..event_count)
        .map(|i| {
            // Clustered dates force heavy lane stacking.
            let date = base + chrono::Duration::days((i % 90) as i64);
            TimelineEvent::new(format!("evento {i}"), "categoria", date, "Anna")
        })
        .collect();
    let mut timeline = PersonTimeline {
        person_name: "Anna".to_owned(),
        events,
    };
    timeline.events.sort_by(|a, b| a.date.cmp(&b.date));
    timeline
}

fn bench_lane_sweep(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 1, 1).expect("today");

    for size in [50usize, 500, 5000] {
        let timeline = dense_timeline(size);
        c.bench_function(&format!("lane_sweep_{size}"), |b| {
            b.iter(|| {
                layout_timeline(
                    black_box(&timeline),
                    today,
                    1920.0,
                    LayoutConfig::default(),
                )
                .expect("layout")
            })
        });
    }
}

criterion_group!(benches, bench_lane_sweep);
criterion_main!(benches);
