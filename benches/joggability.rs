use chrono::{Duration, NaiveDate, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use joggability::{DayInput, HourlyObservation, SummaryAggregator};

/// A synthetic year with seasonal temperatures, the odd rainy hour and some gaps.
fn synthetic_year() -> Vec<DayInput> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();
    (0..365)
        .map(|d| {
            let date = start + Duration::days(d);
            let midnight = Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0).unwrap());
            let season = (d as f64 / 365.0 * std::f64::consts::TAU).cos();
            let observations = (0..24)
                .filter(|h| (d + h) % 13 != 0)
                .map(|h| {
                    let diurnal = ((h as f64 - 15.0) / 24.0 * std::f64::consts::TAU).cos();
                    HourlyObservation::new(
                        midnight + Duration::hours(h),
                        15.0 - 10.0 * season + 5.0 * diurnal,
                        if (d * h) % 17 == 0 { 2.0 } else { 0.0 },
                        60.0,
                    )
                })
                .collect();
            DayInput {
                date,
                observations,
                sunrise: midnight + Duration::hours(7),
                sunset: midnight + Duration::hours(19),
            }
        })
        .collect()
}

fn bench_summarize(c: &mut Criterion) {
    let days = synthetic_year();
    let aggregator = SummaryAggregator::default();
    c.bench_function("summarize_days_one_year", |b| {
        b.iter(|| aggregator.summarize_days(black_box(&days)))
    });
}

criterion_group!(benches, bench_summarize);
criterion_main!(benches);
