// Panel benchmarks
// Performance benchmarks for the simulation and composition passes

use criterion::{criterion_group, criterion_main, Criterion};
use lcd_rs::display::{blit_scaled, compute_placement, ColorLut, FrameBuffer, PixelFormat};
use lcd_rs::input::PenInput;
use lcd_rs::panel::{LcdPanel, PANEL_HEIGHT, PANEL_WIDTH};
use std::hint::black_box;

/// Helper to create a panel with a lit diagonal trail
fn create_lit_panel() -> LcdPanel {
    let mut panel = LcdPanel::new();
    panel.set_pen(0, 0);
    let input = PenInput {
        down: true,
        right: true,
        ..PenInput::new()
    };
    for _ in 0..PANEL_HEIGHT {
        panel.advance(0.002, &input);
    }
    panel
}

/// Benchmark the full per-tick advance (decay + move + plot)
/// This is the main per-frame cost of the simulation
fn bench_panel_advance(c: &mut Criterion) {
    let mut group = c.benchmark_group("panel_advance");

    group.bench_function("full_tick", |b| {
        let mut panel = create_lit_panel();
        let input = PenInput {
            right: true,
            ..PenInput::new()
        };

        b.iter(|| {
            panel.advance(black_box(0.016), &input);
            black_box(panel.cells());
        });
    });

    group.finish();
}

/// Benchmark composing the grid through the color table
fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");

    group.bench_function("rgba_frame", |b| {
        let panel = create_lit_panel();
        let lut = ColorLut::new();
        let mut fb = FrameBuffer::new(PixelFormat::Rgba8888);

        b.iter(|| {
            fb.compose(&panel, &lut);
            black_box(fb.as_bytes());
        });
    });

    group.finish();
}

/// Benchmark the scaled blit onto a window-sized surface
fn bench_blit(c: &mut Criterion) {
    let mut group = c.benchmark_group("blit");

    group.bench_function("scale_10", |b| {
        let panel = create_lit_panel();
        let lut = ColorLut::new();
        let mut fb = FrameBuffer::new(PixelFormat::Rgba8888);
        fb.compose(&panel, &lut);

        let (width, height) = (600usize, 400usize);
        let placement = compute_placement(
            width as u32,
            height as u32,
            PANEL_WIDTH as u32,
            PANEL_HEIGHT as u32,
        );
        let mut surface = vec![0u8; width * height * 4];

        b.iter(|| {
            blit_scaled(
                fb.as_bytes(),
                PANEL_WIDTH,
                PANEL_HEIGHT,
                &placement,
                &mut surface,
                width,
                height,
            );
            black_box(&surface);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_panel_advance, bench_compose, bench_blit);
criterion_main!(benches);
