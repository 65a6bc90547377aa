use super::constants::{FOLLOW_MAX_DT_SEC, FOLLOW_MAX_SUBSTEP_SEC};
use glam::Vec2;

/// Unit-mass damped spring chasing a target point (the cursor ring).
#[derive(Clone, Copy, Debug)]
pub struct SpringFollower {
    pos: Vec2,
    vel: Vec2,
    stiffness: f32,
    damping: f32,
    initialized: bool,
}

impl SpringFollower {
    pub fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            stiffness,
            damping,
            initialized: false,
        }
    }

    /// Advance by `dt_sec` toward `target`. The first call snaps onto the
    /// target so the ring does not fly in from the origin.
    pub fn step(&mut self, target: Vec2, dt_sec: f32) -> Vec2 {
        if !self.initialized {
            self.pos = target;
            self.vel = Vec2::ZERO;
            self.initialized = true;
            return self.pos;
        }
        let dt = dt_sec.clamp(0.0, FOLLOW_MAX_DT_SEC);
        let steps = (dt / FOLLOW_MAX_SUBSTEP_SEC).ceil().max(1.0) as u32;
        let h = dt / steps as f32;
        for _ in 0..steps {
            // semi-implicit Euler
            let accel = (target - self.pos) * self.stiffness - self.vel * self.damping;
            self.vel += accel * h;
            self.pos += self.vel * h;
        }
        self.pos
    }

    /// `None` until the first step.
    pub fn position(&self) -> Option<Vec2> {
        self.initialized.then_some(self.pos)
    }

    pub fn velocity(&self) -> Vec2 {
        self.vel
    }
}
