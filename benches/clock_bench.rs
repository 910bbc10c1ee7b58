//! Benchmarks for the tick path
//!
//! Run with: cargo bench

use chrono::{FixedOffset, TimeZone};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use kinetic_clock::render::{json, render_frame};
use kinetic_clock::*;
use std::sync::Arc;

fn mounted_state() -> DisplayState {
    let at = FixedOffset::east_opt(3600)
        .unwrap()
        .with_ymd_and_hms(2024, 3, 7, 6, 5, 9)
        .single()
        .unwrap();
    let mut state = DisplayState::new();
    state.apply(TimeSnapshot::from_instant(&at, Some("Europe/Berlin".to_string())));
    state
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");

    let fixed = SnapshotFormatter::new(
        Arc::new(FixedClock::new(
            FixedOffset::east_opt(0)
                .unwrap()
                .with_ymd_and_hms(2024, 3, 7, 6, 5, 9)
                .single()
                .unwrap(),
        )),
        Arc::new(FixedTimeZone::new("UTC")),
    );
    group.bench_function("fixed_sources", |b| b.iter(|| black_box(fixed.sample())));

    let system = SnapshotFormatter::system();
    group.bench_function("system_sources", |b| b.iter(|| black_box(system.sample())));

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let state = mounted_state();

    for skin in [Skin::Kinetic, Skin::Minimal] {
        let options = RenderOptions {
            skin,
            ..RenderOptions::default()
        };
        group.bench_function(format!("frame_{}", skin), |b| {
            b.iter(|| black_box(render_frame(black_box(&state), &options)))
        });
    }

    group.bench_function("json_line", |b| {
        b.iter(|| json::encode(black_box(&state)).unwrap())
    });

    group.bench_function("kinetic_to_buffer", |b| {
        let options = RenderOptions::default();
        b.iter(|| {
            let mut buf = Vec::with_capacity(8 * 1024);
            {
                let mut surface = TerminalSurface::new(&mut buf, options.clone());
                surface.draw(black_box(&state)).unwrap();
            }
            buf
        })
    });

    group.finish();
}

criterion_group!(benches, bench_snapshot, bench_render);
criterion_main!(benches);
