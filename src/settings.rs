use crate::constants::DATA_ATTR_PREFIX;
use crate::core::FieldConfig;
use web_sys as web;

/// Build the field configuration from `data-*` attributes on the canvas.
///
/// Unparsable attributes are skipped one by one; if the combined result does
/// not validate, the defaults are used (keeping any seed).
pub fn read_field_config(canvas: &web::HtmlCanvasElement) -> FieldConfig {
    let mut config = FieldConfig::default();
    for key in FieldConfig::KEYS {
        let attr = format!("{DATA_ATTR_PREFIX}{key}");
        let Some(value) = canvas.get_attribute(&attr) else {
            continue;
        };
        match config.apply_override(key, &value) {
            Ok(()) => log::info!("[config] {}={}", attr, value),
            Err(e) => log::warn!("[config] ignoring {}: {}", attr, e),
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {}; falling back to defaults", e);
            FieldConfig {
                seed: config.seed,
                ..FieldConfig::default()
            }
        }
    }
}
