//! Session board state held in the URL hash.
//!
//! This module provides:
//! - A raw parameter store parsed from and written back to the hash fragment
//! - Typed fields with defaults and codecs
//! - Presets that move the board through a run-of-show

pub mod clock;
pub mod error;
pub mod field;
pub mod fields;
pub mod params;
pub mod presets;
pub mod session;

pub use error::{PresetError, PresetResult};
pub use field::{Field, FieldConfig, RawParam};
pub use fields::{ContentMode, Corner, CountdownTime};
pub use params::{ParamKey, ParamStore};
pub use presets::{Effect, PRESETS, Preset, Stage, apply_stage};
pub use session::{BoardSnapshot, CornerSnapshot, SessionBoard};
