// Navigation highlighting: which page section straddles the viewport middle.

/// Section ids in scan order.
pub const SECTION_IDS: [&str; 5] = ["home", "about", "projects", "skills", "contact"];

pub const ACTIVE_CLASS: &str = "active";

/// Client-space vertical extent of a section element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBounds {
    pub top: f32,
    pub bottom: f32,
}

/// First section whose extent contains the vertical middle of the viewport.
/// `None` entries are sections missing from the page.
pub fn active_section(bounds: &[Option<SectionBounds>], viewport_height: f32) -> Option<usize> {
    let mid = viewport_height / 2.0;
    bounds
        .iter()
        .position(|b| matches!(b, Some(b) if b.top <= mid && b.bottom >= mid))
}

/// Remembers the highlighted section; keeps it when nothing matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavTracker {
    active: usize,
}

impl Default for NavTracker {
    fn default() -> Self {
        // "home" until the first scroll says otherwise
        Self { active: 0 }
    }
}

impl NavTracker {
    /// Returns the new index only when the highlight changes.
    pub fn update(&mut self, bounds: &[Option<SectionBounds>], viewport_height: f32) -> Option<usize> {
        match active_section(bounds, viewport_height) {
            Some(i) if i != self.active => {
                self.active = i;
                Some(i)
            }
            _ => None,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }
}
