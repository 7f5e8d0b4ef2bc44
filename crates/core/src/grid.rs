//! Shared position axis for one animation session.
//!
//! The grid is derived once from the configured waves (span = 8 times the
//! maximum wavelength, fixed sample count) and never changes afterwards.
//! Sampling is uniform and half-open: `x_i = i * span / samples`, so the
//! positions cover `[0, span)`.

use crate::error::WaveError;
use crate::wave::WaveParameters;

/// Number of position samples per grid.
pub const GRID_SAMPLES: usize = 500;

/// Grid span as a multiple of the largest configured wavelength.
pub const SPAN_WAVELENGTHS: f64 = 8.0;

/// A fixed, uniformly spaced sequence of positions.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    positions: Vec<f64>,
    span: f64,
}

impl SampleGrid {
    /// Creates a uniform half-open grid over `[0, span)` with `samples` points.
    ///
    /// Returns `WaveError::InvalidGrid` for a non-positive or non-finite span,
    /// or a zero sample count.
    pub fn new(span: f64, samples: usize) -> Result<Self, WaveError> {
        if !(span.is_finite() && span > 0.0) {
            return Err(WaveError::InvalidGrid(format!(
                "span {span} must be finite and strictly positive"
            )));
        }
        if samples == 0 {
            return Err(WaveError::InvalidGrid(
                "sample count must be non-zero".into(),
            ));
        }
        let step = span / samples as f64;
        Ok(Self {
            positions: (0..samples).map(|i| i as f64 * step).collect(),
            span,
        })
    }

    /// Derives the session grid from the configured waves.
    ///
    /// Span is [`SPAN_WAVELENGTHS`] times the maximum wavelength; sample count
    /// is [`GRID_SAMPLES`]. Returns `WaveError::NoWaves` for an empty slice.
    /// Waves are assumed validated; see [`WaveParameters::validate`].
    pub fn from_waves(waves: &[WaveParameters]) -> Result<Self, WaveError> {
        if waves.is_empty() {
            return Err(WaveError::NoWaves);
        }
        let max_wavelength = waves
            .iter()
            .map(|w| w.wavelength)
            .fold(f64::NEG_INFINITY, f64::max);
        Self::new(SPAN_WAVELENGTHS * max_wavelength, GRID_SAMPLES)
    }

    /// The position values, in increasing order.
    pub fn positions(&self) -> &[f64] {
        &self.positions
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Whether the grid holds no positions (never true for a constructed grid).
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Total half-open span covered by the grid.
    pub fn span(&self) -> f64 {
        self.span
    }

    /// Distance between adjacent positions.
    pub fn spacing(&self) -> f64 {
        self.span / self.positions.len() as f64
    }
}
