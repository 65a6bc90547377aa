pub mod animator;
pub mod aurora;
pub mod burst;
pub mod color;
pub mod config;
pub mod constants;
pub mod effects;
pub mod field;
pub mod follow;
pub mod keyframes;
pub mod orbs;
pub mod pulses;
pub mod sections;
pub mod surface;

pub use animator::{Animator, Phase};
pub use color::Rgba;
pub use config::{ConfigError, FieldConfig, Span};
pub use effects::EffectsLayer;
pub use field::ParticleField;
pub use sections::{NavTracker, SectionBounds, ACTIVE_CLASS, SECTION_IDS};
pub use surface::{Surface, Viewport};
