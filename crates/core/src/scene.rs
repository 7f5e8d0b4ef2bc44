//! Reproducible configuration for a superposition session.
//!
//! A [`Scene`] captures everything needed to recreate an animation: the wave
//! records, frame count, and nominal clock interval. Two identical `Scene`
//! values produce bit-identical frame sequences.

use crate::animator::{DEFAULT_FRAME_COUNT, DEFAULT_INTERVAL_MS};
use crate::error::WaveError;
use crate::wave::{Direction, Polarity, WaveParameters};
use serde::{Deserialize, Serialize};

fn default_phase_offset() -> f64 {
    0.0
}

fn default_frames() -> usize {
    DEFAULT_FRAME_COUNT
}

fn default_interval_ms() -> u64 {
    DEFAULT_INTERVAL_MS
}

/// External per-wave configuration record.
///
/// `phase_offset` defaults to 0, `propagation` to `right`, `polarity` to
/// `positive`, so a minimal record is `{amplitude, wavelength, frequency}`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveConfig {
    pub amplitude: f64,
    pub wavelength: f64,
    pub frequency: f64,
    #[serde(default = "default_phase_offset")]
    pub phase_offset: f64,
    #[serde(default)]
    pub propagation: Direction,
    #[serde(default)]
    pub polarity: Polarity,
}

impl WaveConfig {
    /// Converts the record into wave parameters (no validation).
    pub fn to_params(&self) -> WaveParameters {
        WaveParameters {
            amplitude: self.amplitude,
            wavelength: self.wavelength,
            frequency: self.frequency,
            phase_offset: self.phase_offset,
            direction: self.propagation,
            polarity: self.polarity,
        }
    }
}

impl From<WaveParameters> for WaveConfig {
    fn from(w: WaveParameters) -> Self {
        Self {
            amplitude: w.amplitude,
            wavelength: w.wavelength,
            frequency: w.frequency,
            phase_offset: w.phase_offset,
            propagation: w.direction,
            polarity: w.polarity,
        }
    }
}

/// Complete animation session configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub waves: Vec<WaveConfig>,
    #[serde(default = "default_frames")]
    pub frames: usize,
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Scene {
    /// Creates a scene with the reference frame count and interval.
    pub fn new(waves: Vec<WaveConfig>) -> Self {
        Self {
            waves,
            frames: DEFAULT_FRAME_COUNT,
            interval_ms: DEFAULT_INTERVAL_MS,
        }
    }

    /// Parses a scene from JSON.
    ///
    /// Returns `WaveError::Config` with the serde message on malformed input.
    /// Parsing does not validate the waves; see [`Scene::validate`].
    pub fn from_json(json: &str) -> Result<Self, WaveError> {
        serde_json::from_str(json).map_err(|e| WaveError::Config(e.to_string()))
    }

    /// Validates that at least one wave is present and every wave is legal.
    pub fn validate(&self) -> Result<(), WaveError> {
        if self.waves.is_empty() {
            return Err(WaveError::NoWaves);
        }
        for wave in &self.waves {
            wave.to_params().validate()?;
        }
        Ok(())
    }
}
