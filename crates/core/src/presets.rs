//! Named example scenes demonstrating classic interference patterns.
//!
//! Each preset is a ready-to-run [`Scene`] with the reference frame count and
//! interval. Use [`from_name`] for string-based lookup (CLI) and
//! [`list_names`] for discovery.

use crate::error::WaveError;
use crate::scene::{Scene, WaveConfig};
use crate::wave::{Direction, Polarity};
use std::f64::consts::PI;

/// All recognized preset names.
const PRESET_NAMES: &[&str] = &[
    "standing-waves",
    "beats",
    "constructive",
    "destructive",
    "cancellation",
    "harmonics",
    "general",
];

fn wave(amplitude: f64, wavelength: f64, frequency: f64) -> WaveConfig {
    WaveConfig {
        amplitude,
        wavelength,
        frequency,
        phase_offset: 0.0,
        propagation: Direction::Right,
        polarity: Polarity::Positive,
    }
}

/// Looks up a preset scene by name.
///
/// Returns `WaveError::UnknownPreset` if the name is not recognized.
pub fn from_name(name: &str) -> Result<Scene, WaveError> {
    let waves = match name {
        // Equal waves traveling in opposite directions.
        "standing-waves" => vec![wave(5.0, 10.0, 90.0), {
            let mut w = wave(5.0, 10.0, 90.0);
            w.propagation = Direction::Left;
            w
        }],
        // Nearby wavelengths and frequencies produce slow amplitude beats.
        "beats" => vec![wave(5.0, 4.0, 10.0), wave(5.0, 5.0, 20.0)],
        // In-phase waves reinforce each other.
        "constructive" => vec![wave(10.0, 10.0, 90.0), wave(5.0, 10.0, 90.0)],
        // A pi phase shift puts the smaller wave in opposition.
        "destructive" => vec![wave(10.0, 10.0, 90.0), {
            let mut w = wave(5.0, 10.0, 90.0);
            w.phase_offset = PI;
            w
        }],
        // Equal amplitudes in opposition: the resultant is zero everywhere.
        "cancellation" => vec![wave(10.0, 10.0, 90.0), {
            let mut w = wave(10.0, 10.0, 90.0);
            w.phase_offset = PI;
            w
        }],
        // Fundamental plus second harmonic.
        "harmonics" => vec![wave(5.0, 4.0, 90.0), wave(2.5, 2.0, 180.0)],
        // Unrelated waves, opposite directions, flipped polarity.
        "general" => vec![wave(10.0, 6.0, 90.0), {
            let mut w = wave(5.0, 10.0, 110.0);
            w.propagation = Direction::Left;
            w.polarity = Polarity::Negative;
            w
        }],
        _ => return Err(WaveError::UnknownPreset(name.to_string())),
    };
    Ok(Scene::new(waves))
}

/// Returns a slice of all recognized preset names.
pub fn list_names() -> &'static [&'static str] {
    PRESET_NAMES
}
