#![cfg(target_arch = "wasm32")]
use crate::constants::{BACKGROUND_CANVAS_ID, EFFECTS_CANVAS_ID};
use crate::core::{Animator, EffectsLayer, Viewport};
use instant::Instant;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod nav;
mod settings;

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<ParticleBackground>> = const { RefCell::new(None) };
}

/// A mounted particle background. Dropping or unmounting it cancels the
/// pending frame and removes its listeners.
#[wasm_bindgen]
pub struct ParticleBackground {
    ctx: Rc<RefCell<frame::BackgroundContext>>,
    tick: frame::TickSlot,
    listeners: Vec<events::Listener>,
}

#[wasm_bindgen]
impl ParticleBackground {
    pub fn unmount(&mut self) {
        let was_running = self.ctx.borrow().animator.is_running();
        if let Some(handle) = self.ctx.borrow_mut().animator.teardown() {
            frame::cancel_frame(handle);
        }
        self.listeners.clear();
        self.tick.borrow_mut().take();
        if was_running {
            log::info!("[mount] background unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn running(&self) -> bool {
        self.ctx.borrow().animator.is_running()
    }

    #[wasm_bindgen(getter, js_name = pointCount)]
    pub fn point_count(&self) -> usize {
        self.ctx
            .borrow()
            .animator
            .field()
            .map_or(0, |f| f.len())
    }
}

impl Drop for ParticleBackground {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Mount the field onto `canvas_id`, with the effects layer on
/// `effects_canvas_id` when given. Returns nothing (and draws nothing) if the
/// canvas or its 2D context is not available yet.
#[wasm_bindgen]
pub fn mount_background(
    canvas_id: &str,
    effects_canvas_id: Option<String>,
) -> Option<ParticleBackground> {
    match try_mount(canvas_id, effects_canvas_id.as_deref()) {
        Ok(Some(bg)) => Some(bg),
        Ok(None) => {
            log::warn!("[mount] #{} has no 2D surface; background skipped", canvas_id);
            None
        }
        Err(e) => {
            log::error!("[mount] {:?}", e);
            None
        }
    }
}

/// Unmount the instance the start hook mounted, if any.
#[wasm_bindgen]
pub fn unmount_background() {
    AUTO_MOUNTED.with(|slot| {
        if let Some(mut bg) = slot.borrow_mut().take() {
            bg.unmount();
        }
    });
}

fn try_mount(
    canvas_id: &str,
    effects_canvas_id: Option<&str>,
) -> anyhow::Result<Option<ParticleBackground>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Surface first: points are only generated once there is somewhere to draw.
    let Some(canvas) = dom::canvas_by_id(&document, canvas_id) else {
        return Ok(None);
    };
    let Some(ctx2d) = dom::context_2d(&canvas) else {
        return Ok(None);
    };

    let config = settings::read_field_config(&canvas);
    let viewport = dom::viewport(&window);
    dom::sync_canvas_to_viewport(&canvas, viewport);

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let effects = match effects_canvas_id {
        Some(id) if config.effects => build_effects(&document, id, viewport, &mut rng),
        _ => None,
    };
    let with_effects = effects.is_some();

    let mut animator = Animator::new(config, viewport);
    animator.start(&mut rng);

    let now = Instant::now();
    let ctx = Rc::new(RefCell::new(frame::BackgroundContext {
        animator,
        surface: canvas::CanvasSurface::new(ctx2d),
        canvas,
        effects,
        started: now,
        last_instant: now,
    }));

    let mut listeners = vec![events::wire_pointer_move(&ctx)?, events::wire_resize(&ctx)?];
    if with_effects {
        listeners.push(events::wire_click_bursts(&ctx)?);
    }

    let tick = frame::start_loop(ctx.clone());
    log::info!("[mount] #{} mounted (effects={})", canvas_id, with_effects);
    Ok(Some(ParticleBackground {
        ctx,
        tick,
        listeners,
    }))
}

fn build_effects(
    document: &web::Document,
    canvas_id: &str,
    viewport: Viewport,
    rng: &mut StdRng,
) -> Option<frame::EffectsContext> {
    let canvas = dom::canvas_by_id(document, canvas_id)?;
    let Some(ctx2d) = dom::context_2d(&canvas) else {
        log::warn!("[mount] #{} has no 2D surface; effects disabled", canvas_id);
        return None;
    };
    dom::sync_canvas_to_viewport(&canvas, viewport);
    Some(frame::EffectsContext {
        layer: EffectsLayer::new(StdRng::seed_from_u64(rng.gen())),
        surface: canvas::CanvasSurface::new(ctx2d),
        canvas,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("particle-backdrop starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    match nav::wire_section_tracking(&document) {
        Ok(listener) => listener.forget(),
        Err(e) => log::warn!("[nav] section tracking disabled: {:?}", e),
    }

    // Pages that mount explicitly from JS simply omit the default canvas.
    if document.get_element_by_id(BACKGROUND_CANVAS_ID).is_some() {
        if let Some(bg) = mount_background(BACKGROUND_CANVAS_ID, Some(EFFECTS_CANVAS_ID.to_string())) {
            AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(bg));
        }
    }
    Ok(())
}
