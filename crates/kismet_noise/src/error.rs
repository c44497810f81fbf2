//! # Noise Error Types
//!
//! Only profile loading can fail; every sampling function is total.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a noise profile.
#[derive(Error, Debug)]
pub enum NoiseError {
    /// The profile file could not be read.
    #[error("failed to read profile {}: {source}", path.display())]
    Io {
        /// File that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The profile is not valid TOML for a [`crate::NoiseProfile`].
    #[error("failed to parse profile: {0}")]
    Parse(#[from] toml::de::Error),

    /// The profile parsed but holds unusable values.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for profile operations.
pub type NoiseResult<T> = Result<T, NoiseError>;
