use super::Listener;
use crate::constants::NO_BURST_SELECTOR;
use crate::frame::BackgroundContext;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Window-level pointer tracking; the canvas itself is `pointer-events: none`.
pub fn wire_pointer_move(ctx: &Rc<RefCell<BackgroundContext>>) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctx = ctx.clone();
    Listener::new(&window, "pointermove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            ctx.borrow_mut().animator.pointer_moved(client_pos(ev));
        }
    })
}

pub fn wire_click_bursts(ctx: &Rc<RefCell<BackgroundContext>>) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctx = ctx.clone();
    Listener::new(&window, "click", move |ev: web::Event| {
        let opted_out = ev
            .target()
            .and_then(|t| t.dyn_into::<web::Element>().ok())
            .and_then(|el| el.closest(NO_BURST_SELECTOR).ok().flatten())
            .is_some();
        if opted_out {
            return;
        }
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            ctx.borrow_mut().burst(client_pos(ev));
        }
    })
}
