//! Startup configuration errors.
//!
//! The simulation itself has no recoverable failures; everything that can go
//! wrong is caught once, before the first tick.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// An entity or screen dimension is zero or negative.
    NonPositiveSize { what: &'static str, value: i32 },
    /// A speed, scale or limit that must be strictly positive.
    NonPositiveValue { what: &'static str, value: f64 },
    /// The config file could not be read or parsed as INI.
    Load { path: String, reason: String },
    /// A key was present but its value could not be used.
    InvalidValue {
        section: String,
        key: String,
        reason: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { what, value } => {
                write!(f, "{what} must be positive, got {value}")
            }
            Self::NonPositiveValue { what, value } => {
                write!(f, "{what} must be positive, got {value}")
            }
            Self::Load { path, reason } => {
                write!(f, "failed to load config file {path}: {reason}")
            }
            Self::InvalidValue {
                section,
                key,
                reason,
            } => write!(f, "invalid value for [{section}] {key}: {reason}"),
        }
    }
}

impl std::error::Error for ConfigError {}
