use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fuelmap::map::{Point, Series, SeriesKind};
use fuelmap::view::{locate, Candidate, ScreenPoint, ViewConfig, Viewport};

fn make_series(count: usize, offset: f64) -> Series {
    (0..count)
        .map(|i| Point::new(offset + i as f64, (i as f64 * 0.1).sin() * 10.0))
        .collect()
}

/// Benchmark viewport computation over a growing number of loaded files
fn bench_compute_viewport(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_viewport");
    let config = ViewConfig::default();

    for files in [1usize, 4, 16] {
        let series: Vec<Series> = (0..files * 2)
            .map(|i| make_series(120, i as f64 * 3.0))
            .collect();
        group.throughput(Throughput::Elements((files * 240) as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}files", files)),
            &series,
            |b, series| {
                b.iter(|| black_box(Viewport::compute(series.iter(), black_box(&config))));
            },
        );
    }

    group.finish();
}

/// Benchmark point lookup when nothing is hit, so every point is visited
fn bench_locate_miss(c: &mut Criterion) {
    let mut group = c.benchmark_group("locate_miss");
    let config = ViewConfig::default();

    for files in [1usize, 4, 16] {
        let series: Vec<Series> = (0..files * 2)
            .map(|i| make_series(120, i as f64 * 3.0))
            .collect();
        let viewport = Viewport::compute(series.iter(), &config);
        let candidates: Vec<Candidate<'_, SeriesKind>> = series
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let kind = if i % 2 == 0 {
                    SeriesKind::Primary
                } else {
                    SeriesKind::Secondary
                };
                Candidate::new(s, kind)
            })
            .collect();
        let corner = ScreenPoint::new(0.0, 0.0);

        group.throughput(Throughput::Elements((files * 240) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}files", files)),
            &candidates,
            |b, candidates| {
                b.iter(|| black_box(locate(black_box(corner), candidates, &viewport)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_compute_viewport, bench_locate_miss);
criterion_main!(benches);
