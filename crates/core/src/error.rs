//! Error types for the wave-engine core.
//!
//! Every validation failure is detected eagerly at construction time; the
//! pure evaluation path (`displacement`, `evaluate`, `run_frame`) never
//! produces an error once an `Animator` exists.

use thiserror::Error;

/// Errors produced by wave, grid, and animator operations.
#[derive(Debug, Error)]
pub enum WaveError {
    /// A wave's wavelength was zero, negative, or non-finite.
    #[error("invalid wavelength {0}: must be strictly positive")]
    InvalidWavelength(f64),

    /// A wave's frequency was zero, negative, or non-finite.
    #[error("invalid frequency {0}: must be strictly positive")]
    InvalidFrequency(f64),

    /// An animator or grid was constructed from an empty wave list.
    #[error("no waves configured: at least one wave is required")]
    NoWaves,

    /// Two traces had different lengths in an element-wise operation.
    #[error("trace length mismatch: {lhs} vs {rhs}")]
    LengthMismatch { lhs: usize, rhs: usize },

    /// A sample grid had a non-positive span or zero sample count.
    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    /// A preset name was not found in the registry.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A scene or wave configuration could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// A frame sink failed to write.
    #[error("i/o error: {0}")]
    Io(String),
}
