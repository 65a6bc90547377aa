use super::color::Rgba;
use super::constants::*;
use super::keyframes::sample_looped;
use super::surface::{Surface, Viewport};
use glam::Vec2;

const SWEEP: [f32; 3] = [0.0, 1.0, 0.0];

/// Pan position of the sweep in [0, 1]; 1 is reached half a period in.
pub fn aurora_position(elapsed_sec: f32) -> f32 {
    sample_looped(&SWEEP, AURORA_PERIOD_SEC, 0.0, elapsed_sec)
}

/// Horizontal extent of the double-width gradient. Its peak sits at the right
/// edge at rest and at the left edge mid-sweep.
pub fn aurora_span(viewport: Viewport, elapsed_sec: f32) -> (f32, f32) {
    let from_x = -aurora_position(elapsed_sec) * viewport.width;
    (from_x, from_x + 2.0 * viewport.width)
}

pub fn draw_aurora<S: Surface + ?Sized>(surface: &mut S, viewport: Viewport, elapsed_sec: f32) {
    let (from_x, to_x) = aurora_span(viewport, elapsed_sec);
    let stops = [
        (0.0, Rgba::new(AURORA_EDGE_RGB[0], 0.0)),
        (0.5, Rgba::new(AURORA_PEAK_RGB, AURORA_PEAK_ALPHA)),
        (1.0, Rgba::new(AURORA_EDGE_RGB[1], 0.0)),
    ];
    surface.fill_linear_gradient(
        Vec2::ZERO,
        Vec2::new(viewport.width, viewport.height),
        from_x,
        to_x,
        &stops,
    );
}
