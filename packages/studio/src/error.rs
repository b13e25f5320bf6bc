//! Error types for the fallible edges of the studio: reading imported files
//! and (de)serialising `studio.toml`. Composition and serialisation never fail.

use thiserror::Error;

/// Failure while importing a local file into a buffer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("failed to read file: {0}")]
    Read(String),
    #[error("expected a .{expected} file, got {found:?}")]
    WrongExtension {
        expected: &'static str,
        found: String,
    },
}

/// Failure while reading or writing [`crate::StudioConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid studio.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize studio.toml: {0}")]
    Serialize(#[from] toml::ser::Error),
}
