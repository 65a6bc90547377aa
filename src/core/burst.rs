use super::color::Rgba;
use super::constants::*;
use super::surface::Surface;
use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;
use std::f32::consts::TAU;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spark {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: f32,
    pub rgb: [u8; 3],
}

/// Short word floating up from a click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Caption {
    pub origin: Vec2,
    pub text: &'static str,
    pub age_sec: f32,
}

impl Caption {
    #[inline]
    pub fn progress(&self) -> f32 {
        (self.age_sec / BURST_CAPTION_LIFETIME_SEC).clamp(0.0, 1.0)
    }

    pub fn position(&self) -> Vec2 {
        self.origin - Vec2::new(0.0, BURST_CAPTION_RISE_PX * self.progress())
    }

    pub fn alpha(&self) -> f32 {
        1.0 - self.progress()
    }
}

/// Click bursts advanced on a fixed 16 ms step, independent of frame rate.
#[derive(Debug, Default)]
pub struct BurstSystem {
    sparks: Vec<Spark>,
    captions: Vec<Caption>,
    accum_sec: f32,
}

impl BurstSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a ring of sparks at `at`, sometimes with a caption.
    pub fn spawn<R: Rng + ?Sized>(&mut self, at: Vec2, rng: &mut R) {
        for i in 0..BURST_SPARKS {
            let angle = i as f32 / BURST_SPARKS as f32 * TAU;
            self.sparks.push(Spark {
                pos: at,
                vel: Vec2::new(angle.cos(), angle.sin()) * BURST_SPEED_PX,
                life: 1.0,
                rgb: BURST_PALETTE[rng.gen_range(0..BURST_PALETTE.len())],
            });
        }
        if rng.gen_bool(BURST_CAPTION_CHANCE) {
            if let Some(&text) = BURST_CAPTIONS.choose(rng) {
                self.captions.push(Caption {
                    origin: at,
                    text,
                    age_sec: 0.0,
                });
            }
        }
    }

    /// Run as many fixed steps as `dt_sec` covers. A backlog beyond
    /// `BURST_MAX_STEPS_PER_ADVANCE` is dropped. Returns the steps run.
    pub fn advance(&mut self, dt_sec: f32) -> u32 {
        self.accum_sec += dt_sec.max(0.0);
        let due = (self.accum_sec / BURST_STEP_SEC).floor() as u32;
        let steps = due.min(BURST_MAX_STEPS_PER_ADVANCE);
        if due > steps {
            self.accum_sec = 0.0;
        } else {
            self.accum_sec -= steps as f32 * BURST_STEP_SEC;
        }
        for _ in 0..steps {
            self.step();
        }
        steps
    }

    pub fn step(&mut self) {
        for s in &mut self.sparks {
            s.pos += s.vel;
            s.vel.y += BURST_GRAVITY_PX;
            s.life -= BURST_LIFE_DECAY;
        }
        self.sparks.retain(|s| s.life > 0.0);

        for c in &mut self.captions {
            c.age_sec += BURST_STEP_SEC;
        }
        self.captions.retain(|c| c.age_sec < BURST_CAPTION_LIFETIME_SEC);
    }

    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        for s in &self.sparks {
            surface.fill_circle(s.pos, BURST_SPARK_RADIUS_PX, Rgba::new(s.rgb, s.life));
        }
        for c in &self.captions {
            surface.fill_text(
                c.text,
                c.position(),
                BURST_CAPTION_FONT_PX,
                Rgba::new(POINT_RGB, c.alpha()),
            );
        }
    }

    pub fn sparks(&self) -> &[Spark] {
        &self.sparks
    }

    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn is_idle(&self) -> bool {
        self.sparks.is_empty() && self.captions.is_empty()
    }
}
