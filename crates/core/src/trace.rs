//! One-dimensional displacement sequence produced by evaluating a wave.
//!
//! A `Trace` holds one f64 value per grid position. Unlike a bounded pixel
//! field, displacements are physical quantities and are not clamped; the sum
//! of two traces is their exact element-wise sum.

use crate::error::WaveError;
use serde::Serialize;

/// An evaluated wave field: one displacement value per grid position.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    data: Vec<f64>,
}

impl Trace {
    /// Creates a zero-filled trace of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            data: vec![0.0; len],
        }
    }

    /// Wraps a pre-built value vector.
    pub fn from_data(data: Vec<f64>) -> Self {
        Self { data }
    }

    /// Read-only access to the underlying values.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the trace holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element-wise sum of two traces.
    ///
    /// Returns `WaveError::LengthMismatch` if the traces differ in length.
    pub fn add(&self, other: &Trace) -> Result<Trace, WaveError> {
        if self.len() != other.len() {
            return Err(WaveError::LengthMismatch {
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        Ok(Trace {
            data: self
                .data
                .iter()
                .zip(other.data.iter())
                .map(|(a, b)| a + b)
                .collect(),
        })
    }

    /// In-place element-wise sum.
    ///
    /// Returns `WaveError::LengthMismatch` if the traces differ in length.
    pub fn add_assign(&mut self, other: &Trace) -> Result<(), WaveError> {
        if self.len() != other.len() {
            return Err(WaveError::LengthMismatch {
                lhs: self.len(),
                rhs: other.len(),
            });
        }
        self.data
            .iter_mut()
            .zip(other.data.iter())
            .for_each(|(a, b)| *a += b);
        Ok(())
    }

    /// Superposes one or more traces into their element-wise sum.
    ///
    /// Returns `WaveError::NoWaves` for an empty slice and
    /// `WaveError::LengthMismatch` if any trace differs in length from the
    /// first. No normalization is applied.
    pub fn superpose(traces: &[Trace]) -> Result<Trace, WaveError> {
        let (first, rest) = traces.split_first().ok_or(WaveError::NoWaves)?;
        let mut sum = first.clone();
        for trace in rest {
            sum.add_assign(trace)?;
        }
        Ok(sum)
    }
}
