//! Error types shared across the engine.
//!
//! Only the measurement boundary and the input loaders can fail. Classification,
//! recommendation, curve lookup and scheduling are total over finite input.

use std::io;
use std::path::PathBuf;

/// Raw geometry that cannot produce meaningful indices.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidMeasurement {
    #[error("invalid measurement: {field} must be a positive number of millimetres, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("invalid measurement: both diagonals are non-positive (D = {diag_d}, E = {diag_e})")]
    Diagonals { diag_d: f64, diag_e: f64 },

    #[error("invalid measurement: age must be a non-negative number of months, got {0}")]
    NegativeAge(f64),
}

/// Failure to read or parse a `cranio.toml` configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Failure to load a JSON patient registry.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("cannot read registry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid registry {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("measurement references unknown patient `{0}`")]
    UnknownPatient(String),
}
