use crate::PasswordFlags;
use std::path::PathBuf;
use thiserror::Error;

/// Errors generated by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Error generated when a password length is zero or too
    /// short for any fragment to be placed.
    #[error("password length {0} is too short to place a fragment")]
    InvalidLength(usize),

    /// Error generated when the requested features could not be
    /// realized in a password of the given length.
    #[error("unable to satisfy features {features:?} in a password of length {length} after {attempts} attempt(s)")]
    UnsatisfiableRequest {
        /// Requested password length.
        length: usize,
        /// Requested features.
        features: PasswordFlags,
        /// Number of attempts made.
        attempts: usize,
    },

    /// Error generated when a configuration path is not a file.
    #[error(r#"path "{0}" is not a file"#)]
    NotFile(PathBuf),

    /// Error generated when configuration values are out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error generated by the io module.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Error generated parsing TOML.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
}
