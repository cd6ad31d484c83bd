// Benchmark for the event packer
// Measures layout time for sparse, chained and fully stacked days

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dayview_packer::models::event::Event;
use dayview_packer::services::packer::pack;

#[derive(Debug, Clone, Copy)]
enum DayShape {
    /// Back-to-back meetings, no overlaps
    Sparse,
    /// Each event overlaps the next by half its length
    Chained,
    /// Every event covers the same hour
    Stacked,
}

fn build_day(shape: DayShape, count: usize) -> Vec<Event> {
    let day_start = NaiveDate::from_ymd_opt(2025, 1, 6)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    (0..count as i64)
        .map(|i| {
            let (offset, length) = match shape {
                DayShape::Sparse => (i * 10, 10),
                DayShape::Chained => (i * 5, 10),
                DayShape::Stacked => (540, 60),
            };
            let start = day_start + Duration::minutes(offset % 1440);
            Event::new(start, start + Duration::minutes(length)).unwrap()
        })
        .collect()
}

fn bench_shapes(c: &mut Criterion) {
    for shape in [DayShape::Sparse, DayShape::Chained, DayShape::Stacked] {
        let mut group = c.benchmark_group(format!("pack_{:?}", shape).to_lowercase());

        for count in [10, 50, 200].iter() {
            let events = build_day(shape, *count);
            group.bench_with_input(BenchmarkId::from_parameter(count), &events, |b, events| {
                b.iter(|| pack(black_box(events), black_box(300.0), 0.0, 100.0));
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_shapes);
criterion_main!(benches);
