//! Error types for the board module.

use thiserror::Error;

/// Errors raised when looking up presets and stages.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PresetError {
    /// No preset with that name.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
    /// The preset has no stage with that name.
    #[error("preset {preset} has no stage named {stage}")]
    UnknownStage {
        /// Preset searched.
        preset: String,
        /// Stage requested.
        stage: String,
    },
}

/// Convenience result alias for preset operations.
pub type PresetResult<T> = Result<T, PresetError>;
