use super::color::Rgba;
use super::keyframes::sample_looped;
use super::surface::{Surface, Viewport};
use glam::Vec2;

/// A large blurred orb drifting along a keyframed path.
#[derive(Clone, Copy, Debug)]
pub struct OrbSpec {
    /// Viewport fraction the path is anchored to.
    pub anchor: [f32; 2],
    /// Pixel offset from the anchor to the orb centre at rest.
    pub offset_px: [f32; 2],
    pub radius_px: f32,
    pub from_rgb: [u8; 3],
    pub to_rgb: [u8; 3],
    pub opacity: f32,
    pub path_x: &'static [f32],
    pub path_y: &'static [f32],
    pub duration_sec: f32,
    pub delay_sec: f32,
}

const BLUE_600: [u8; 3] = [37, 99, 235];
const PURPLE_600: [u8; 3] = [147, 51, 234];
const CYAN_600: [u8; 3] = [8, 145, 178];
const PINK_600: [u8; 3] = [219, 39, 119];

pub const DEFAULT_ORBS: [OrbSpec; 3] = [
    OrbSpec {
        anchor: [0.25, 0.25],
        offset_px: [160.0, 160.0],
        radius_px: 160.0,
        from_rgb: BLUE_600,
        to_rgb: PURPLE_600,
        opacity: 0.2,
        path_x: &[0.0, 100.0, 0.0, -50.0, 0.0],
        path_y: &[0.0, 50.0, 100.0, 0.0, 0.0],
        duration_sec: 20.0,
        delay_sec: 0.0,
    },
    OrbSpec {
        anchor: [0.75, 0.75],
        offset_px: [-192.0, -192.0],
        radius_px: 192.0,
        from_rgb: CYAN_600,
        to_rgb: BLUE_600,
        opacity: 0.2,
        path_x: &[0.0, -100.0, 0.0, 50.0, 0.0],
        path_y: &[0.0, -50.0, -100.0, 0.0, 0.0],
        duration_sec: 25.0,
        delay_sec: 1.0,
    },
    OrbSpec {
        anchor: [2.0 / 3.0, 0.5],
        offset_px: [-144.0, 144.0],
        radius_px: 144.0,
        from_rgb: PURPLE_600,
        to_rgb: PINK_600,
        opacity: 0.15,
        path_x: &[0.0, 50.0, 100.0, 0.0, 0.0],
        path_y: &[0.0, 100.0, 0.0, -50.0, 0.0],
        duration_sec: 30.0,
        delay_sec: 2.0,
    },
];

pub fn orb_center(spec: &OrbSpec, viewport: Viewport, elapsed_sec: f32) -> Vec2 {
    let rest = viewport.at_fraction(spec.anchor[0], spec.anchor[1])
        + Vec2::new(spec.offset_px[0], spec.offset_px[1]);
    let drift = Vec2::new(
        sample_looped(spec.path_x, spec.duration_sec, spec.delay_sec, elapsed_sec),
        sample_looped(spec.path_y, spec.duration_sec, spec.delay_sec, elapsed_sec),
    );
    rest + drift
}

pub fn draw_orbs<S: Surface + ?Sized>(
    surface: &mut S,
    orbs: &[OrbSpec],
    viewport: Viewport,
    elapsed_sec: f32,
) {
    for orb in orbs {
        surface.fill_glow(
            orb_center(orb, viewport, elapsed_sec),
            orb.radius_px,
            Rgba::new(orb.from_rgb, orb.opacity),
            Rgba::new(orb.to_rgb, 0.0),
        );
    }
}
