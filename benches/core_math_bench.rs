use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, criterion_group, criterion_main};
use timeline_rs::core::{
    CoordinateMapper, Submission, TimeDomain, TimelinePoint, ViewTransform, Viewport,
    cluster_points,
};

fn point(id: &str, timestamp_millis: i64) -> TimelinePoint {
    TimelinePoint::new(
        timestamp_millis,
        Arc::new(Submission {
            id: id.to_owned(),
            ..Submission::default()
        }),
    )
}

fn bench_mapper_round_trip(c: &mut Criterion) {
    let points = [point("a", 0), point("b", 10_000_000_000)];
    let domain = TimeDomain::from_points_at(&points, 0);
    let mapper =
        CoordinateMapper::new(domain, Viewport::new(1920, 1080), 1200.0).expect("valid mapper");
    let transform = ViewTransform {
        pan_offset: -250.0,
        scale: 3.5,
    };

    c.bench_function("mapper_round_trip", |b| {
        b.iter(|| {
            let x = mapper.time_to_position(black_box(4_321_000_123.0), transform);
            let _ = mapper.position_to_time(x, transform);
        })
    });
}

fn bench_cluster_10k_points(c: &mut Criterion) {
    let positioned: Vec<(TimelinePoint, f64)> = (0..10_000)
        .map(|i| (point(&format!("p{i}"), i), (i as f64) * 0.37))
        .collect();

    c.bench_function("cluster_10k_points", |b| {
        b.iter(|| {
            let clusters = cluster_points(black_box(&positioned), black_box(12.0));
            black_box(clusters.len())
        })
    });
}

fn bench_full_layout_pass(c: &mut Criterion) {
    use timeline_rs::api::{TimelineEngine, TimelineEngineConfig};
    use timeline_rs::render::NullRenderer;

    let config = TimelineEngineConfig::new(Viewport::new(1920, 1080));
    let mut engine = TimelineEngine::new(NullRenderer::default(), config).expect("engine init");
    let points: Vec<TimelinePoint> = (0..5_000)
        .map(|i| point(&format!("p{i}"), i * 3_600_000))
        .collect();
    engine.set_points(points).expect("set points");

    c.bench_function("full_layout_pass_5k", |b| {
        b.iter(|| {
            let layout = engine.layout();
            black_box(layout.clusters.len())
        })
    });
}

criterion_group!(
    benches,
    bench_mapper_round_trip,
    bench_cluster_10k_points,
    bench_full_layout_pass
);
criterion_main!(benches);
