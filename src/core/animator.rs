use super::config::FieldConfig;
use super::field::{draw_frame, ParticleField};
use super::surface::{Surface, Viewport};
use glam::Vec2;
use rand::Rng;

/// Lifecycle of one mounted field. `Stopped` is terminal; a remount builds a
/// fresh `Animator`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Uninitialized,
    Running,
    Stopped,
}

/// Owns everything the per-frame update reads: points, pointer, viewport,
/// frame counter and the handle of the pending display-refresh request.
///
/// Host callbacks feed it through `pointer_moved`/`resized`; the frame
/// callback calls `frame_fired` then `tick`, and records the next request with
/// `frame_scheduled`.
#[derive(Debug)]
pub struct Animator {
    config: FieldConfig,
    phase: Phase,
    field: Option<ParticleField>,
    pointer: Vec2,
    viewport: Viewport,
    time: u64,
    pending_frame: Option<i32>,
}

impl Animator {
    pub fn new(config: FieldConfig, viewport: Viewport) -> Self {
        Self {
            config,
            phase: Phase::Uninitialized,
            field: None,
            pointer: Vec2::ZERO,
            viewport,
            time: 0,
            pending_frame: None,
        }
    }

    /// Generate the point set and start running. Returns false unless the
    /// animator was still uninitialized.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.phase != Phase::Uninitialized {
            return false;
        }
        let field = ParticleField::generate(&self.config, rng);
        self.start_with(field)
    }

    pub fn start_with(&mut self, field: ParticleField) -> bool {
        if self.phase != Phase::Uninitialized {
            return false;
        }
        log::info!(
            "[field] running: points={} viewport={}x{}",
            field.len(),
            self.viewport.width,
            self.viewport.height
        );
        self.field = Some(field);
        self.phase = Phase::Running;
        true
    }

    #[inline]
    pub fn pointer_moved(&mut self, pos: Vec2) {
        self.pointer = pos;
    }

    /// Points are fractional, so only the stored dimensions change.
    #[inline]
    pub fn resized(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Draw one frame and advance time. Returns whether another frame should
    /// be scheduled; nothing is drawn unless running.
    pub fn tick<S: Surface + ?Sized>(&mut self, surface: &mut S) -> bool {
        if self.phase != Phase::Running {
            return false;
        }
        let Some(field) = &self.field else {
            return false;
        };
        draw_frame(
            surface,
            field,
            self.pointer,
            self.viewport,
            self.time,
            &self.config,
        );
        self.time += 1;
        true
    }

    pub fn frame_scheduled(&mut self, handle: i32) {
        if self.phase == Phase::Running {
            self.pending_frame = Some(handle);
        }
    }

    /// The pending request has been delivered and can no longer be cancelled.
    #[inline]
    pub fn frame_fired(&mut self) {
        self.pending_frame = None;
    }

    /// Stop for good and discard the points. Returns the handle the host
    /// must cancel, if a frame was pending.
    pub fn teardown(&mut self) -> Option<i32> {
        if self.phase != Phase::Stopped {
            log::info!("[field] teardown after {} frames", self.time);
        }
        self.phase = Phase::Stopped;
        self.field = None;
        self.pending_frame.take()
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }
    #[inline]
    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }
    #[inline]
    pub fn field(&self) -> Option<&ParticleField> {
        self.field.as_ref()
    }
    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
    #[inline]
    pub fn pointer(&self) -> Vec2 {
        self.pointer
    }
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
    #[inline]
    pub fn time(&self) -> u64 {
        self.time
    }
    #[inline]
    pub fn pending_frame(&self) -> Option<i32> {
        self.pending_frame
    }
}
