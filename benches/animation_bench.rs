//! Benchmarks for the per-frame camera and marker paths.
#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use panotour::camera::{CameraAnimation, CameraPose};
use panotour::marker::build_markers;
use panotour::options::MarkerOptions;
use panotour::scene::{Hotspot, HotspotType};
use panotour::util::easing::EasingFunction;
use web_time::{Duration, Instant};

fn easing_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("easing");
    for easing in EasingFunction::ALL {
        group.bench_function(format!("{easing:?}"), |b| {
            b.iter(|| black_box(easing.evaluate(black_box(0.37))));
        });
    }
    group.finish();
}

fn intro_tick_benchmark(c: &mut Criterion) {
    let start = CameraPose::little_planet();
    let end = CameraPose::new(90.0, -10.0, 40.0);
    c.bench_function("intro_tick", |b| {
        let t0 = Instant::now();
        let mut anim = CameraAnimation::new(start, end, Duration::from_secs(3600));
        let mut frame = 0u32;
        b.iter(|| {
            frame = frame.wrapping_add(1);
            black_box(anim.tick(t0 + Duration::from_millis(u64::from(frame % 1000))))
        });
    });
}

fn marker_build_benchmark(c: &mut Criterion) {
    let hotspots: Vec<Hotspot> = (0..64)
        .map(|i| Hotspot {
            id: i,
            from_scene: Some(1),
            to_scene: None,
            hotspot_type: if i % 2 == 0 { HotspotType::Scene } else { HotspotType::Info },
            to_scene_slug: Some(format!("scene-{i}")),
            to_scene_title: None,
            text: format!("Hotspot {i}"),
            info_description: String::new(),
            pitch: (i as f64) - 32.0,
            yaw: (i as f64) * 5.0 - 160.0,
        })
        .collect();
    let options = MarkerOptions::default();
    c.bench_function("build_64_markers", |b| {
        b.iter(|| black_box(build_markers(black_box(&hotspots), &options)));
    });
}

criterion_group!(
    benches,
    easing_benchmark,
    intro_tick_benchmark,
    marker_build_benchmark
);
criterion_main!(benches);
