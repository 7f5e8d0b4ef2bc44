//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: wave error (invalid parameters, empty wave list, unknown preset)
//! - 11: I/O error (scene file read, sink write)
//! - 12: input error (conflicting sources, bad scene JSON)
//! - 13: serialization error

use std::fmt;
use wave_engine_core::WaveError;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A domain-level error (invalid wave, empty list, unknown preset).
    Wave(WaveError),
    /// An I/O error (scene file read, frame sink write).
    Io(String),
    /// A user input error (conflicting wave sources, malformed JSON).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Wave(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Wave(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
        }
    }
}

impl From<WaveError> for CliError {
    fn from(e: WaveError) -> Self {
        match e {
            WaveError::Io(msg) => CliError::Io(msg),
            WaveError::Config(msg) => CliError::Input(msg),
            other => CliError::Wave(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
