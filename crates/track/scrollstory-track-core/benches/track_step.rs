use criterion::{criterion_group, criterion_main, Criterion};

use scrollstory_track_core::{Animator, MemoryTrackSource, StartOptions};

/// A single long LineString with `points` evenly spaced coordinates.
fn synthetic_track(points: usize) -> String {
    let coords: Vec<String> = (0..points)
        .map(|i| {
            let t = i as f64 / points as f64;
            format!("[{:.6}, {:.6}]", -180.0 + 360.0 * t, 60.0 * (t - 0.5))
        })
        .collect();
    format!(
        r#"{{"type": "FeatureCollection", "features": [
            {{"type": "Feature", "geometry": {{"type": "LineString", "coordinates": [{}]}}}}
        ]}}"#,
        coords.join(", ")
    )
}

fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("animator_step");
    for points in [1_000usize, 10_000] {
        let mut source = MemoryTrackSource::new();
        source.insert("bench", synthetic_track(points));

        group.bench_function(format!("{points}_points"), |b| {
            let mut animator = Animator::default();
            animator.start(
                &StartOptions {
                    speed: Some(8.0),
                    ..StartOptions::for_source("bench")
                },
                &mut source,
            );
            b.iter(|| {
                let frame = animator.step();
                criterion::black_box(frame.head);
            });
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let doc = synthetic_track(10_000);
    c.bench_function("parse_track_geojson_10k", |b| {
        b.iter(|| scrollstory_track_core::parse_track_geojson(criterion::black_box(&doc)).unwrap());
    });
}

criterion_group!(benches, bench_step, bench_parse);
criterion_main!(benches);
