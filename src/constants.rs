// DOM wiring and frame-loop limits for the browser glue.
// Numeric tuning of the field itself lives in `core::constants`.

// Default mount points looked up by the start hook
pub const BACKGROUND_CANVAS_ID: &str = "background-canvas";
pub const EFFECTS_CANVAS_ID: &str = "effects-canvas";

// Canvas attributes read as `FieldConfig` overrides, e.g. data-point-count="80"
pub const DATA_ATTR_PREFIX: &str = "data-";

// Clicks inside matching elements do not spawn bursts
pub const NO_BURST_SELECTOR: &str = "[data-no-particles]";

pub const CAPTION_FONT_FAMILY: &str = "system-ui, sans-serif";

// Clamp for wall-clock frame deltas (hidden tabs stop RAF for long stretches)
pub const MAX_FRAME_DT_SEC: f32 = 0.25;
