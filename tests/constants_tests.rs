// Host-side tests for constants and their mathematical relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/core/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn point_ranges_are_ordered_and_positive() {
    assert!(POINT_COUNT > 0);
    assert!(POINT_SIZE_MIN > 0.0 && POINT_SIZE_MIN <= POINT_SIZE_MAX);
    assert!(POINT_OPACITY_MIN >= 0.0 && POINT_OPACITY_MAX <= 1.0);
    assert!(POINT_OPACITY_MIN <= POINT_OPACITY_MAX);
    assert!(POINT_DURATION_MIN_SEC > 0.0 && POINT_DURATION_MIN_SEC <= POINT_DURATION_MAX_SEC);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn divisors_are_nonzero() {
    assert!(BRIGHTNESS_FALLOFF_PX > 0.0);
    assert!(CONNECTION_DISTANCE_PX > 0.0);
    assert!(GRID_PITCH_PX > 0.0);
    assert!(BURST_STEP_SEC > 0.0);
    assert!(BURST_CAPTION_LIFETIME_SEC > 0.0);
    assert!(FOLLOW_MAX_SUBSTEP_SEC > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn ring_never_inverts() {
    // radius and alpha stay positive through the whole oscillation
    assert!(RING_RADIUS_BASE - RING_RADIUS_SWING > 0.0);
    assert!(RING_ALPHA_BASE - RING_ALPHA_SWING > 0.0);
    assert!(RING_ALPHA_BASE + RING_ALPHA_SWING <= 1.0);
    assert!(RING_RADIUS_FREQ != RING_ALPHA_FREQ);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn alphas_are_fractions() {
    for a in [TRAIL_ALPHA, GRID_ALPHA, CONNECTION_ALPHA_MAX, FOLLOW_ALPHA] {
        assert!(a > 0.0 && a <= 1.0);
    }
    assert!(BURST_CAPTION_CHANCE > 0.0 && BURST_CAPTION_CHANCE < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Connections are a tighter radius than pointer brightening
    assert!(CONNECTION_DISTANCE_PX < BRIGHTNESS_FALLOFF_PX);

    // Grid wave never pushes a line past its neighbour
    assert!(GRID_WAVE_AMPLITUDE_PX * 2.0 < GRID_PITCH_PX);

    // Spring substeps are finer than a 60 Hz frame
    assert!(FOLLOW_MAX_SUBSTEP_SEC < 1.0 / 60.0);
    assert!(FOLLOW_MAX_DT_SEC > FOLLOW_MAX_SUBSTEP_SEC);

    // A spark dies within a few hundred steps
    assert!(BURST_LIFE_DECAY > 0.0 && BURST_LIFE_DECAY < 1.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn defaults_sit_inside_config_bounds() {
    assert!(POINT_COUNT <= POINT_COUNT_MAX);
    assert!(GRID_PITCH_MIN_PX >= CONFIG_LENGTH_MIN_PX);
    for v in [GRID_PITCH_PX, BRIGHTNESS_FALLOFF_PX, CONNECTION_DISTANCE_PX] {
        assert!((CONFIG_LENGTH_MIN_PX..=CONFIG_LENGTH_MAX_PX).contains(&v));
    }
    assert!(GRID_PITCH_PX >= GRID_PITCH_MIN_PX);
}
