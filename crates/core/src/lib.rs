#![deny(unsafe_code)]
//! Core types for the wave-engine 1D superposition system.
//!
//! Provides `WaveParameters` (a single traveling sine wave), `Trace` (one
//! evaluated displacement sequence), `SampleGrid` (the shared position axis),
//! the `Animator` frame driver with its `FrameSink` seam, `Scene`/`WaveConfig`
//! configuration records, and the preset scene registry.

pub mod animator;
pub mod error;
pub mod grid;
pub mod presets;
pub mod scene;
pub mod trace;
pub mod wave;

pub use animator::{Animator, FrameOutput, FrameSink};
pub use error::WaveError;
pub use grid::SampleGrid;
pub use scene::{Scene, WaveConfig};
pub use trace::Trace;
pub use wave::{Direction, Polarity, WaveParameters};
