use crate::core::{SectionBounds, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)?
        .dyn_into::<web::HtmlCanvasElement>()
        .ok()
}

/// `None` while the canvas cannot hand out a 2D context (detached, or
/// already bound to another context type).
pub fn context_2d(canvas: &web::HtmlCanvasElement) -> Option<web::CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(obj)) => obj.dyn_into::<web::CanvasRenderingContext2d>().ok(),
        Ok(None) => None,
        Err(e) => {
            log::debug!("[dom] getContext(2d) failed: {:?}", e);
            None
        }
    }
}

pub fn viewport(window: &web::Window) -> Viewport {
    let read = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Viewport::new(read(window.inner_width()), read(window.inner_height()))
}

/// Canvas backing store follows the CSS viewport 1:1 so pointer client
/// coordinates map straight onto canvas pixels.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    canvas.set_width(viewport.width.max(1.0) as u32);
    canvas.set_height(viewport.height.max(1.0) as u32);
}

pub fn element_bounds(document: &web::Document, id: &str) -> Option<SectionBounds> {
    let rect = document.get_element_by_id(id)?.get_bounding_client_rect();
    Some(SectionBounds {
        top: rect.top() as f32,
        bottom: rect.bottom() as f32,
    })
}
