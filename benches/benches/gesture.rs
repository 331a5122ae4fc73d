// Copyright 2025 the PinchView Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `pinchview_geometry` + `pinchview_gesture`.
//!
//! Pan updates recompute bounds on every event, so both the pure geometry and
//! a full pinch/pan stream are measured.

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Size, Vec2};
use pinchview_geometry::{bounds, fit};
use pinchview_gesture::{GestureEvent, GestureInterpreter, PanEnd};

const VIEWPORT: Size = Size::new(390.0, 844.0);
const PHOTO: Size = Size::new(4032.0, 3024.0);

fn bench_geometry(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry");

    group.bench_function("fit", |b| {
        b.iter(|| black_box(fit(black_box(VIEWPORT), black_box(PHOTO))));
    });

    let fitted = fit(VIEWPORT, PHOTO);
    group.bench_function("bounds", |b| {
        b.iter(|| black_box(bounds(black_box(fitted), black_box(2.4), black_box(VIEWPORT))));
    });

    group.finish();
}

fn bench_interpreter(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpreter");

    for updates in [16_u32, 256] {
        group.bench_function(BenchmarkId::new("pinch_pan", updates), |b| {
            b.iter(|| {
                let mut viewer = GestureInterpreter::new(VIEWPORT, PHOTO);
                viewer.handle(GestureEvent::PinchStart);
                viewer.handle(GestureEvent::PanStart);
                for i in 0..updates {
                    let t = f64::from(i) / f64::from(updates);
                    black_box(viewer.handle(GestureEvent::PinchUpdate { ratio: 1.0 + t * 2.5 }));
                    black_box(viewer.handle(GestureEvent::PanUpdate {
                        translation: Vec2::new(t * 600.0, -t * 300.0),
                    }));
                }
                viewer.handle(GestureEvent::PinchEnd { ratio: 3.5 });
                black_box(viewer.handle(GestureEvent::PanEnd(PanEnd {
                    translation: Vec2::new(600.0, -300.0),
                    velocity: Vec2::new(1200.0, -800.0),
                })))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_geometry, bench_interpreter);
criterion_main!(benches);
