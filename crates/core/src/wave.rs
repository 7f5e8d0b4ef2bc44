//! Traveling sine wave model.
//!
//! A [`WaveParameters`] value describes one 1D traveling sine wave:
//!
//! ```text
//! y(x, t) = polarity * A * sin(k*x + direction * omega * t + phi)
//! k = 2*pi / wavelength, omega = 2*pi * frequency
//! ```
//!
//! Evaluation is a pure closed-form function of position and time; there is
//! no integration and no per-frame state. Propagation direction and polarity
//! are explicit enums, never encoded as the sign of frequency or amplitude.

use crate::error::WaveError;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Propagation direction of a traveling wave.
///
/// Determines the sign of the time term: a `Right`-moving wave subtracts
/// `omega * t` from the spatial phase, a `Left`-moving wave adds it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Right,
    Left,
}

impl Direction {
    /// Sign applied to the `omega * t` term.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Right => -1.0,
            Direction::Left => 1.0,
        }
    }
}

/// Vertical polarity of a waveform: `Negative` flips the whole wave by 180°.
///
/// Independent of the sign of `amplitude`; the two compose multiplicatively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    #[default]
    Positive,
    Negative,
}

impl Polarity {
    /// Sign multiplier applied to the whole waveform.
    pub fn sign(self) -> f64 {
        match self {
            Polarity::Positive => 1.0,
            Polarity::Negative => -1.0,
        }
    }
}

/// Parameters of a single traveling sine wave.
///
/// Immutable once constructed; validated eagerly via [`WaveParameters::validate`]
/// before any animation session starts. `amplitude` may be any finite real —
/// its sign is not conflated with [`Polarity`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WaveParameters {
    /// Peak displacement (m).
    pub amplitude: f64,
    /// Spatial period (m). Strictly positive.
    pub wavelength: f64,
    /// Oscillation rate (Hz). Strictly positive.
    pub frequency: f64,
    /// Phase offset (radians).
    pub phase_offset: f64,
    /// Propagation direction (sign of the time term).
    pub direction: Direction,
    /// Vertical polarity (sign of the whole waveform).
    pub polarity: Polarity,
}

impl WaveParameters {
    /// Creates a wave with zero phase offset, `Right` propagation and
    /// `Positive` polarity. Does not validate; see [`WaveParameters::validate`].
    pub fn new(amplitude: f64, wavelength: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            wavelength,
            frequency,
            phase_offset: 0.0,
            direction: Direction::default(),
            polarity: Polarity::default(),
        }
    }

    /// Validates that wavelength and frequency are finite and strictly positive.
    ///
    /// `amplitude` and `phase_offset` accept any finite real and are not checked.
    pub fn validate(&self) -> Result<(), WaveError> {
        if !(self.wavelength.is_finite() && self.wavelength > 0.0) {
            return Err(WaveError::InvalidWavelength(self.wavelength));
        }
        if !(self.frequency.is_finite() && self.frequency > 0.0) {
            return Err(WaveError::InvalidFrequency(self.frequency));
        }
        Ok(())
    }

    /// Wave number `k = 2*pi / wavelength`.
    pub fn wave_number(&self) -> f64 {
        TAU / self.wavelength
    }

    /// Angular frequency `omega = 2*pi * frequency`.
    pub fn angular_frequency(&self) -> f64 {
        TAU * self.frequency
    }

    /// Displacement at position `x` and time `t`.
    pub fn displacement(&self, x: f64, t: f64) -> f64 {
        let phase = self.wave_number() * x
            + self.direction.sign() * self.angular_frequency() * t
            + self.phase_offset;
        self.polarity.sign() * self.amplitude * phase.sin()
    }

    /// Evaluates the wave at every position for one scalar time.
    ///
    /// The returned trace has the same length as `positions`. Pure: identical
    /// inputs yield bit-identical output.
    pub fn evaluate(&self, positions: &[f64], t: f64) -> Trace {
        Trace::from_data(positions.iter().map(|&x| self.displacement(x, t)).collect())
    }
}
