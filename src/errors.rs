// src/errors.rs

//! Crate-wide error type for configuration resolution.

use std::path::PathBuf;

use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("error read config {path:?}")]
    Read {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("error parse config {path:?}")]
    Parse {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("unsupported config format {path:?} (expected .yaml, .yml, .toml or .conf)")]
    Unsupported { path: PathBuf },

    #[error("invalid value for environment override {var}: {message}")]
    EnvOverride { var: String, message: String },

    #[error("error merge config with defaults")]
    Merge(#[source] serde_json::Error),

    #[error("cannot change working directory to {path:?}")]
    WorkingDir {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("cannot resolve path {path:?}: {message}")]
    Path { path: PathBuf, message: String },
}

impl ConfigError {
    /// True for failures that come from reading or decoding a config source.
    ///
    /// Implicit discovery treats these as a miss; an explicit path surfaces them.
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            ConfigError::Read { .. }
                | ConfigError::Parse { .. }
                | ConfigError::Unsupported { .. }
                | ConfigError::EnvOverride { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
