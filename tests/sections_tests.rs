// Host-side tests for nav section highlighting.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod sections {
    include!("../src/core/sections.rs");
}

use sections::*;

fn span(top: f32, bottom: f32) -> Option<SectionBounds> {
    Some(SectionBounds { top, bottom })
}

#[test]
fn picks_section_straddling_viewport_middle() {
    // viewport 800 high: middle at 400
    let bounds = [
        span(-900.0, -100.0),
        span(-100.0, 350.0),
        span(350.0, 1200.0),
        span(1200.0, 2000.0),
        span(2000.0, 2600.0),
    ];
    assert_eq!(active_section(&bounds, 800.0), Some(2));
}

#[test]
fn edges_are_inclusive_and_first_match_wins() {
    let bounds = [span(0.0, 400.0), span(400.0, 900.0)];
    assert_eq!(active_section(&bounds, 800.0), Some(0));
}

#[test]
fn missing_sections_are_skipped() {
    let bounds = [None, None, span(100.0, 700.0)];
    assert_eq!(active_section(&bounds, 800.0), Some(2));
    assert_eq!(active_section(&[None, None], 800.0), None);
    assert_eq!(active_section(&[], 800.0), None);
}

#[test]
fn no_match_when_middle_falls_in_a_gap() {
    let bounds = [span(0.0, 300.0), span(500.0, 900.0)];
    assert_eq!(active_section(&bounds, 800.0), None);
}

#[test]
fn tracker_reports_only_changes() {
    let mut tracker = NavTracker::default();
    assert_eq!(tracker.active(), 0);

    let home = [span(0.0, 800.0), span(800.0, 1600.0)];
    assert_eq!(tracker.update(&home, 800.0), None);

    let about = [span(-800.0, 0.0), span(0.0, 800.0)];
    assert_eq!(tracker.update(&about, 800.0), Some(1));
    assert_eq!(tracker.update(&about, 800.0), None);
    assert_eq!(tracker.active(), 1);
}

#[test]
fn tracker_keeps_highlight_when_nothing_matches() {
    let mut tracker = NavTracker::default();
    tracker.update(&[None, span(0.0, 800.0)], 800.0);
    assert_eq!(tracker.update(&[None, None], 800.0), None);
    assert_eq!(tracker.active(), 1);
}

#[test]
fn section_ids_match_page_order() {
    assert_eq!(SECTION_IDS, ["home", "about", "projects", "skills", "contact"]);
    assert_eq!(ACTIVE_CLASS, "active");
}
