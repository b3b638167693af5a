//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
///
/// Nothing here is fatal to a running rig: the rig itself recovers from bad
/// tracks and picks locally. These surface from loading and construction.
#[derive(Debug)]
pub enum VantageError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// JSON scene settings parsing failure.
    SettingsParse(String),
    /// Animation track that cannot be turned into a spline.
    InvalidTrack(String),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::SettingsParse(msg) => {
                write!(f, "settings parse error: {msg}")
            }
            Self::InvalidTrack(msg) => write!(f, "invalid track: {msg}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
