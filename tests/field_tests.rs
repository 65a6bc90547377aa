// Host-side tests for the particle field geometry and per-frame drawing.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod color {
    include!("../src/core/color.rs");
}
mod constants {
    include!("../src/core/constants.rs");
}
mod config {
    include!("../src/core/config.rs");
}
mod surface {
    include!("../src/core/surface.rs");
}
mod field {
    include!("../src/core/field.rs");
}
mod common;

use common::{Op, RecordingSurface};
use config::FieldConfig;
use constants::*;
use field::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;
use surface::Viewport;

fn point_at(x: f32, y: f32) -> Point {
    Point::new(Vec2::new(x, y), 1.0, 0.5, 4.0)
}

/// Three points at pixel x = 0, 100 and 400 on a 400x400 viewport.
fn three_point_field() -> (ParticleField, Viewport) {
    let field = ParticleField::from_points(vec![
        point_at(0.0, 0.0),
        point_at(0.25, 0.0),
        point_at(1.0, 0.0),
    ]);
    (field, Viewport::new(400.0, 400.0))
}

#[test]
fn generated_points_stay_within_configured_ranges() {
    let config = FieldConfig::default();
    let mut rng = StdRng::seed_from_u64(7);
    let field = ParticleField::generate(&config, &mut rng);

    assert_eq!(field.len(), config.point_count);
    for p in field.points() {
        assert!((0.0..=1.0).contains(&p.pos().x), "x out of range: {}", p.pos().x);
        assert!((0.0..=1.0).contains(&p.pos().y), "y out of range: {}", p.pos().y);
        assert!(config.size.contains(p.size()), "size {}", p.size());
        assert!(config.opacity.contains(p.opacity()), "opacity {}", p.opacity());
        assert!(config.duration.contains(p.duration_sec()));
    }
}

#[test]
fn generated_ids_are_ordinal() {
    let mut rng = StdRng::seed_from_u64(1);
    let field = ParticleField::generate(&FieldConfig::default(), &mut rng);
    for (i, p) in field.points().iter().enumerate() {
        assert_eq!(p.id(), i);
    }
}

#[test]
fn same_seed_yields_same_field() {
    let config = FieldConfig::default();
    let a = ParticleField::generate(&config, &mut StdRng::seed_from_u64(99));
    let b = ParticleField::generate(&config, &mut StdRng::seed_from_u64(99));
    let c = ParticleField::generate(&config, &mut StdRng::seed_from_u64(100));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn custom_point_count_is_honoured() {
    let config = FieldConfig {
        point_count: 3,
        ..FieldConfig::default()
    };
    let field = ParticleField::generate(&config, &mut StdRng::seed_from_u64(3));
    assert_eq!(field.len(), 3);

    let empty = FieldConfig {
        point_count: 0,
        ..FieldConfig::default()
    };
    assert!(ParticleField::generate(&empty, &mut StdRng::seed_from_u64(3)).is_empty());
}

#[test]
fn brightness_is_full_at_pointer_and_zero_past_falloff() {
    assert_eq!(brightness(0.0, BRIGHTNESS_FALLOFF_PX), 1.0);
    assert_eq!(brightness(300.0, BRIGHTNESS_FALLOFF_PX), 0.0);
    assert_eq!(brightness(450.0, BRIGHTNESS_FALLOFF_PX), 0.0);
    assert!((brightness(150.0, BRIGHTNESS_FALLOFF_PX) - 0.5).abs() < 1e-6);
}

#[test]
fn brightness_is_monotonically_non_increasing() {
    let mut prev = brightness(0.0, BRIGHTNESS_FALLOFF_PX);
    for step in 1..=100 {
        let b = brightness(step as f32 * 5.0, BRIGHTNESS_FALLOFF_PX);
        assert!(b <= prev, "brightness rose at {} px", step * 5);
        assert!(b >= 0.0);
        prev = b;
    }
}

#[test]
fn connection_alpha_vanishes_at_threshold() {
    assert_eq!(connection_alpha(150.0, 150.0, CONNECTION_ALPHA_MAX), 0.0);
    assert_eq!(connection_alpha(151.0, 150.0, CONNECTION_ALPHA_MAX), 0.0);
    assert_eq!(connection_alpha(1000.0, 150.0, CONNECTION_ALPHA_MAX), 0.0);
    assert!((connection_alpha(0.0, 150.0, CONNECTION_ALPHA_MAX) - 0.2).abs() < 1e-6);
}

#[test]
fn connection_alpha_is_positive_and_decreasing_below_threshold() {
    let mut prev = f32::MAX;
    for d in 0..150 {
        let a = connection_alpha(d as f32, 150.0, CONNECTION_ALPHA_MAX);
        assert!(a > 0.0, "alpha not positive at {d}");
        assert!(a < prev, "alpha not decreasing at {d}");
        prev = a;
    }
}

#[test]
fn pairs_visit_each_unordered_pair_once() {
    let all: Vec<(usize, usize)> = pairs(7).collect();
    assert_eq!(all.len(), 7 * 6 / 2);
    let unique: HashSet<(usize, usize)> = all.iter().copied().collect();
    assert_eq!(unique.len(), all.len());
    assert!(all.iter().all(|&(i, j)| i < j && j < 7));

    assert_eq!(pairs(0).count(), 0);
    assert_eq!(pairs(1).count(), 0);
}

#[test]
fn three_point_scenario_brightness() {
    let (field, viewport) = three_point_field();
    let shaded = field.shade(viewport, Vec2::ZERO, &FieldConfig::default());

    assert_eq!(shaded[0].brightness, 1.0);
    assert!((shaded[1].brightness - 2.0 / 3.0).abs() < 1e-5);
    assert_eq!(shaded[2].brightness, 0.0);

    // size 1.0, opacity 0.5
    assert!((shaded[0].radius - 3.0).abs() < 1e-6);
    assert!((shaded[0].alpha - 1.0).abs() < 1e-6);
    assert!((shaded[2].radius - 1.0).abs() < 1e-6);
    assert!((shaded[2].alpha - 0.5).abs() < 1e-6);
}

#[test]
fn three_point_scenario_connections() {
    let (field, viewport) = three_point_field();
    let conns = field.connections(viewport, &FieldConfig::default());

    assert_eq!(conns.len(), 1);
    let c = conns[0];
    assert_eq!((c.a, c.b), (0, 1));
    assert!((c.distance - 100.0).abs() < 1e-4);
    assert!((c.alpha - 0.2 * (1.0 - 100.0 / 150.0)).abs() < 1e-6);
}

#[test]
fn three_point_scenario_draws_one_connection_line() {
    let (field, viewport) = three_point_field();
    let mut surface = RecordingSurface::new();
    draw_frame(
        &mut surface,
        &field,
        Vec2::ZERO,
        viewport,
        0,
        &FieldConfig::default(),
    );

    let lines = surface.lines_in(POINT_RGB);
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].0, Vec2::ZERO);
    assert_eq!(lines[0].1, Vec2::new(100.0, 0.0));
    assert_eq!(surface.fill_circles().len(), 3);
}

#[test]
fn frame_starts_with_trail_and_ends_with_ring() {
    let (field, viewport) = three_point_field();
    let pointer = Vec2::new(40.0, 60.0);
    let mut surface = RecordingSurface::new();
    draw_frame(
        &mut surface,
        &field,
        pointer,
        viewport,
        1234,
        &FieldConfig::default(),
    );

    match surface.ops.first() {
        Some(Op::FillRect {
            origin,
            size,
            color,
        }) => {
            assert_eq!(*origin, Vec2::ZERO);
            assert_eq!(*size, Vec2::new(400.0, 400.0));
            assert_eq!([color.r, color.g, color.b], TRAIL_RGB);
            assert!((color.a - TRAIL_ALPHA).abs() < 1e-6);
        }
        other => panic!("expected trail fill first, got {other:?}"),
    }
    match surface.ops.last() {
        Some(Op::StrokeCircle {
            center,
            radius,
            color,
            ..
        }) => {
            assert_eq!(*center, pointer);
            assert!((radius - ring_radius(1234)).abs() < 1e-6);
            assert!((color.a - ring_alpha(1234)).abs() < 1e-6);
        }
        other => panic!("expected pointer ring last, got {other:?}"),
    }
    assert!(surface.ops.iter().all(|op| !matches!(op, Op::Clear)));
}

#[test]
fn each_point_circle_precedes_its_connections() {
    let (field, viewport) = three_point_field();
    let mut surface = RecordingSurface::new();
    draw_frame(
        &mut surface,
        &field,
        Vec2::ZERO,
        viewport,
        0,
        &FieldConfig::default(),
    );

    // ops after the grid: circle(0), line(0-1), circle(1), circle(2), ring
    let tail: Vec<&Op> = surface
        .ops
        .iter()
        .filter(|op| match op {
            Op::Line { color, .. } => [color.r, color.g, color.b] == POINT_RGB,
            Op::FillCircle { .. } | Op::StrokeCircle { .. } => true,
            _ => false,
        })
        .collect();
    assert_eq!(tail.len(), 5);
    assert!(matches!(tail[0], Op::FillCircle { center, .. } if *center == Vec2::ZERO));
    assert!(matches!(tail[1], Op::Line { .. }));
    assert!(matches!(tail[2], Op::FillCircle { center, .. } if *center == Vec2::new(100.0, 0.0)));
    assert!(matches!(tail[3], Op::FillCircle { .. }));
    assert!(matches!(tail[4], Op::StrokeCircle { .. }));
}

#[test]
fn grid_lines_follow_pitch() {
    let field = ParticleField::from_points(Vec::new());
    let mut surface = RecordingSurface::new();
    draw_frame(
        &mut surface,
        &field,
        Vec2::ZERO,
        Viewport::new(250.0, 120.0),
        0,
        &FieldConfig::default(),
    );
    // x = 0, 100, 200 and y = 0, 100
    assert_eq!(surface.lines_in(GRID_RGB).len(), 5);
}

#[test]
fn sub_minimum_pitch_skips_the_grid() {
    let field = ParticleField::from_points(Vec::new());
    for pitch in [1e-9, 0.5, f32::NAN, -10.0] {
        let config = FieldConfig {
            grid_pitch_px: pitch,
            ..FieldConfig::default()
        };
        let mut surface = RecordingSurface::new();
        draw_frame(
            &mut surface,
            &field,
            Vec2::ZERO,
            Viewport::new(100.0, 100.0),
            0,
            &config,
        );
        assert!(surface.lines_in(GRID_RGB).is_empty(), "pitch {pitch}");
    }
}

#[test]
fn grid_offset_is_bounded_by_amplitude() {
    for t in [0_u64, 1, 500, 10_000, 1_000_000] {
        for p in [0.0_f32, 100.0, 733.0] {
            assert!(grid_offset(t, p).abs() <= GRID_WAVE_AMPLITUDE_PX + 1e-4);
        }
    }
    assert_eq!(grid_offset(0, 0.0), 0.0);
}

#[test]
fn ring_oscillates_around_base_values() {
    assert!((ring_radius(0) - RING_RADIUS_BASE).abs() < 1e-6);
    assert!((ring_alpha(0) - RING_ALPHA_BASE).abs() < 1e-6);
    for t in (0..5000).step_by(37) {
        let r = ring_radius(t);
        let a = ring_alpha(t);
        assert!(r >= RING_RADIUS_BASE - RING_RADIUS_SWING - 1e-4);
        assert!(r <= RING_RADIUS_BASE + RING_RADIUS_SWING + 1e-4);
        assert!(a >= RING_ALPHA_BASE - RING_ALPHA_SWING - 1e-4);
        assert!(a <= RING_ALPHA_BASE + RING_ALPHA_SWING + 1e-4);
    }
}

#[test]
fn pixel_positions_rescale_with_viewport() {
    let (field, _) = three_point_field();
    let before = field.points().to_vec();

    let small = field.pixel_positions(Viewport::new(400.0, 400.0));
    let large = field.pixel_positions(Viewport::new(800.0, 200.0));
    assert_eq!(small[1], Vec2::new(100.0, 0.0));
    assert_eq!(large[1], Vec2::new(200.0, 0.0));
    assert_eq!(field.points(), before.as_slice());
}
