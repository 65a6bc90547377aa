use super::color::Rgba;
use super::constants::*;
use super::keyframes::sample_looped;
use super::surface::{Surface, Viewport};
use glam::Vec2;

/// Momentary look of one pulsing ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PulseRing {
    pub center: Vec2,
    pub radius: f32,
    pub opacity: f32,
    pub glow_px: f32,
    pub glow_alpha: f32,
}

/// Ring `index` at `elapsed_sec`. Rings step diagonally across the viewport
/// and each one starts its loop half a second after the previous.
pub fn pulse_ring(index: usize, viewport: Viewport, elapsed_sec: f32) -> PulseRing {
    let i = index as f32;
    let corner = viewport.at_fraction(0.2 + 0.3 * i, 0.3 + 0.2 * i);
    let half = PULSE_RING_BOX_PX / 2.0;
    let delay = PULSE_RING_STAGGER_SEC * i;
    let scale = sample_looped(&PULSE_RING_SCALE, PULSE_RING_PERIOD_SEC, delay, elapsed_sec);
    PulseRing {
        center: corner + Vec2::splat(half),
        radius: half * scale,
        opacity: sample_looped(&PULSE_RING_OPACITY, PULSE_RING_PERIOD_SEC, delay, elapsed_sec),
        glow_px: 30.0 + 10.0 * i,
        glow_alpha: 0.3 + 0.1 * i,
    }
}

pub fn draw_pulse_rings<S: Surface + ?Sized>(surface: &mut S, viewport: Viewport, elapsed_sec: f32) {
    for index in 0..PULSE_RING_COUNT {
        let ring = pulse_ring(index, viewport, elapsed_sec);
        surface.fill_glow(
            ring.center,
            ring.radius + ring.glow_px,
            Rgba::new(PULSE_RING_GLOW_RGB, ring.glow_alpha * ring.opacity),
            Rgba::new(PULSE_RING_GLOW_RGB, 0.0),
        );
        surface.stroke_circle(
            ring.center,
            ring.radius,
            Rgba::new(PULSE_RING_RGB, PULSE_RING_BORDER_ALPHA * ring.opacity),
            PULSE_RING_LINE_WIDTH,
        );
    }
}
