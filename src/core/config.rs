use super::constants::*;
use rand::Rng;
use thiserror::Error;

/// Inclusive numeric range used for randomised per-point attributes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }

    /// Uniform sample; a degenerate span always yields `min`.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f32 {
        if self.max <= self.min {
            self.min
        } else {
            rng.gen_range(self.min..=self.max)
        }
    }

    fn is_ordered(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown setting `{0}`")]
    UnknownKey(String),
    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },
    #[error("{name} range [{min}, {max}] is inverted or not finite")]
    InvalidSpan {
        name: &'static str,
        min: f32,
        max: f32,
    },
    #[error("opacity range [{min}, {max}] must lie within [0, 1]")]
    OpacityOutOfRange { min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f32 },
    #[error("{name} {value} is outside [{min}, {max}]")]
    OutOfBounds {
        name: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },
    #[error("point count {count} exceeds the maximum of {max}")]
    TooManyPoints { count: usize, max: usize },
}

/// Runtime parameters of the particle field.
///
/// `Default` mirrors `constants`; the browser glue layers `data-*` overrides
/// from the canvas element on top via [`FieldConfig::apply_override`].
#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub point_count: usize,
    pub size: Span,
    pub opacity: Span,
    pub duration: Span,
    pub grid_pitch_px: f32,
    pub brightness_falloff_px: f32,
    pub connection_distance_px: f32,
    /// Fixed RNG seed; `None` draws from entropy.
    pub seed: Option<u64>,
    /// Enables the orbs / follower / burst layer when a second canvas exists.
    pub effects: bool,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            point_count: POINT_COUNT,
            size: Span::new(POINT_SIZE_MIN, POINT_SIZE_MAX),
            opacity: Span::new(POINT_OPACITY_MIN, POINT_OPACITY_MAX),
            duration: Span::new(POINT_DURATION_MIN_SEC, POINT_DURATION_MAX_SEC),
            grid_pitch_px: GRID_PITCH_PX,
            brightness_falloff_px: BRIGHTNESS_FALLOFF_PX,
            connection_distance_px: CONNECTION_DISTANCE_PX,
            seed: None,
            effects: true,
        }
    }
}

impl FieldConfig {
    /// Keys understood by [`FieldConfig::apply_override`].
    pub const KEYS: [&'static str; 8] = [
        "point-count",
        "size",
        "opacity",
        "seed",
        "grid-pitch",
        "falloff",
        "connect-distance",
        "effects",
    ];

    /// Apply one textual override, e.g. `("point-count", "80")` or `("size", "1,3")`.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let v = value.trim();
        match key {
            "point-count" => self.point_count = v.parse().map_err(|_| invalid())?,
            "size" => self.size = parse_span(v).ok_or_else(invalid)?,
            "opacity" => self.opacity = parse_span(v).ok_or_else(invalid)?,
            "seed" => self.seed = Some(v.parse().map_err(|_| invalid())?),
            "grid-pitch" => self.grid_pitch_px = v.parse().map_err(|_| invalid())?,
            "falloff" => self.brightness_falloff_px = v.parse().map_err(|_| invalid())?,
            "connect-distance" => {
                self.connection_distance_px = v.parse().map_err(|_| invalid())?
            }
            "effects" => self.effects = parse_flag(v).ok_or_else(invalid)?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, span) in [
            ("size", self.size),
            ("opacity", self.opacity),
            ("duration", self.duration),
        ] {
            if !span.is_ordered() {
                return Err(ConfigError::InvalidSpan {
                    name,
                    min: span.min,
                    max: span.max,
                });
            }
        }
        if self.size.min <= 0.0 {
            return Err(ConfigError::NonPositive {
                name: "size.min",
                value: self.size.min,
            });
        }
        if self.opacity.min < 0.0 || self.opacity.max > 1.0 {
            return Err(ConfigError::OpacityOutOfRange {
                min: self.opacity.min,
                max: self.opacity.max,
            });
        }
        if self.point_count > POINT_COUNT_MAX {
            return Err(ConfigError::TooManyPoints {
                count: self.point_count,
                max: POINT_COUNT_MAX,
            });
        }
        for (name, value, min) in [
            ("grid pitch", self.grid_pitch_px, GRID_PITCH_MIN_PX),
            ("brightness falloff", self.brightness_falloff_px, CONFIG_LENGTH_MIN_PX),
            ("connection distance", self.connection_distance_px, CONFIG_LENGTH_MIN_PX),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(ConfigError::NonPositive { name, value });
            }
            if value < min || value > CONFIG_LENGTH_MAX_PX {
                return Err(ConfigError::OutOfBounds {
                    name,
                    value,
                    min,
                    max: CONFIG_LENGTH_MAX_PX,
                });
            }
        }
        Ok(())
    }
}

fn parse_span(s: &str) -> Option<Span> {
    let (lo, hi) = s.split_once(',')?;
    Some(Span::new(lo.trim().parse().ok()?, hi.trim().parse().ok()?))
}

fn parse_flag(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "true" | "on" | "1" | "yes" => Some(true),
        "false" | "off" | "0" | "no" => Some(false),
        _ => None,
    }
}
