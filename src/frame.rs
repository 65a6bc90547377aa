use crate::canvas::CanvasSurface;
use crate::constants::MAX_FRAME_DT_SEC;
use crate::core::{Animator, EffectsLayer, Viewport};
use crate::dom;
use glam::Vec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Optional second canvas for orbs, the cursor ring and click bursts.
pub struct EffectsContext {
    pub layer: EffectsLayer,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
}

/// Everything one mounted background touches per frame.
pub struct BackgroundContext {
    pub animator: Animator,
    pub surface: CanvasSurface,
    pub canvas: web::HtmlCanvasElement,
    pub effects: Option<EffectsContext>,
    pub started: Instant,
    pub last_instant: Instant,
}

impl BackgroundContext {
    /// One display refresh. Returns false once the animator has stopped, which
    /// ends the loop.
    pub fn frame(&mut self) -> bool {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;

        self.animator.frame_fired();
        if !self.animator.tick(&mut self.surface) {
            return false;
        }

        if let Some(fx) = &mut self.effects {
            let elapsed_sec = (now - self.started).as_secs_f32();
            fx.layer.step(self.animator.pointer(), dt_sec);
            fx.layer
                .draw(&mut fx.surface, self.animator.viewport(), elapsed_sec);
        }
        true
    }

    pub fn resize(&mut self, viewport: Viewport) {
        dom::sync_canvas_to_viewport(&self.canvas, viewport);
        if let Some(fx) = &self.effects {
            dom::sync_canvas_to_viewport(&fx.canvas, viewport);
        }
        self.animator.resized(viewport);
        log::debug!("[frame] resized to {}x{}", viewport.width, viewport.height);
    }

    pub fn burst(&mut self, at: Vec2) {
        if !self.animator.is_running() {
            return;
        }
        if let Some(fx) = &mut self.effects {
            fx.layer.burst(at);
        }
    }
}

/// Slot holding the self-rescheduling RAF callback. Emptying it breaks the
/// closure's reference cycle.
pub type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

pub fn start_loop(frame_ctx: Rc<RefCell<BackgroundContext>>) -> TickSlot {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let keep_going = frame_ctx_tick.borrow_mut().frame();
        if keep_going {
            if let Some(handle) = request_frame(&tick_clone) {
                frame_ctx_tick.borrow_mut().animator.frame_scheduled(handle);
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(handle) = request_frame(&tick) {
        frame_ctx.borrow_mut().animator.frame_scheduled(handle);
    }
    tick
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let callback = slot.as_ref()?;
    match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            log::error!("[frame] requestAnimationFrame failed: {:?}", e);
            None
        }
    }
}

pub fn cancel_frame(handle: i32) {
    if let Some(w) = web::window() {
        _ = w.cancel_animation_frame(handle);
    }
}
