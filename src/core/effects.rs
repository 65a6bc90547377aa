use super::aurora::draw_aurora;
use super::burst::BurstSystem;
use super::color::Rgba;
use super::constants::*;
use super::follow::SpringFollower;
use super::orbs::{draw_orbs, OrbSpec, DEFAULT_ORBS};
use super::pulses::draw_pulse_rings;
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::rngs::StdRng;

/// Second, hard-cleared layer above the field: drifting orbs, the aurora
/// sweep, pulsing rings, the spring cursor ring and click bursts.
#[derive(Debug)]
pub struct EffectsLayer {
    orbs: Vec<OrbSpec>,
    follower: SpringFollower,
    bursts: BurstSystem,
    rng: StdRng,
}

impl EffectsLayer {
    pub fn new(rng: StdRng) -> Self {
        Self {
            orbs: DEFAULT_ORBS.to_vec(),
            follower: SpringFollower::new(FOLLOW_STIFFNESS, FOLLOW_DAMPING),
            bursts: BurstSystem::new(),
            rng,
        }
    }

    pub fn step(&mut self, pointer: Vec2, dt_sec: f32) {
        self.follower.step(pointer, dt_sec);
        self.bursts.advance(dt_sec);
    }

    pub fn burst(&mut self, at: Vec2) {
        self.bursts.spawn(at, &mut self.rng);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, viewport: Viewport, elapsed_sec: f32) {
        surface.clear(viewport);
        draw_orbs(surface, &self.orbs, viewport, elapsed_sec);
        draw_aurora(surface, viewport, elapsed_sec);
        draw_pulse_rings(surface, viewport, elapsed_sec);
        if let Some(pos) = self.follower.position() {
            surface.stroke_circle(
                pos,
                FOLLOW_RADIUS_PX,
                Rgba::new(FOLLOW_RGB, FOLLOW_ALPHA),
                FOLLOW_LINE_WIDTH,
            );
        }
        self.bursts.draw(surface);
    }

    pub fn follower(&self) -> &SpringFollower {
        &self.follower
    }

    pub fn bursts(&self) -> &BurstSystem {
        &self.bursts
    }
}
