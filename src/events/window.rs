use super::Listener;
use crate::dom;
use crate::frame::BackgroundContext;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub fn wire_resize(ctx: &Rc<RefCell<BackgroundContext>>) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let ctx = ctx.clone();
    let window_for_resize = window.clone();
    Listener::new(&window, "resize", move |_ev: web::Event| {
        let viewport = dom::viewport(&window_for_resize);
        ctx.borrow_mut().resize(viewport);
    })
}
