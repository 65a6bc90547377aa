use crate::core::{NavTracker, SectionBounds, ACTIVE_CLASS, SECTION_IDS};
use crate::dom;
use crate::events::Listener;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Highlight the nav link of the section under the viewport middle as the
/// page scrolls.
pub fn wire_section_tracking(document: &web::Document) -> anyhow::Result<Listener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut tracker = NavTracker::default();
    highlight(document, tracker.active());

    let doc = document.clone();
    let window_for_scroll = window.clone();
    Listener::new(&window, "scroll", move |_ev: web::Event| {
        let height = dom::viewport(&window_for_scroll).height;
        let bounds: Vec<Option<SectionBounds>> = SECTION_IDS
            .iter()
            .map(|id| dom::element_bounds(&doc, id))
            .collect();
        if let Some(i) = tracker.update(&bounds, height) {
            log::debug!("[nav] active section: {}", SECTION_IDS[i]);
            highlight(&doc, i);
        }
    })
}

fn highlight(document: &web::Document, active: usize) {
    for (i, id) in SECTION_IDS.iter().enumerate() {
        let Ok(links) = document.query_selector_all(&format!("a[href=\"#{id}\"]")) else {
            continue;
        };
        for n in 0..links.length() {
            let Some(el) = links.item(n).and_then(|node| node.dyn_into::<web::Element>().ok()) else {
                continue;
            };
            let classes = el.class_list();
            _ = if i == active {
                classes.add_1(ACTIVE_CLASS)
            } else {
                classes.remove_1(ACTIVE_CLASS)
            };
        }
    }
}
