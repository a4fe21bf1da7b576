//! Error types for axe-crawler options resolution.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced while resolving crawler options.
///
/// A missing or malformed config file is not an error: the resolver logs it and
/// carries on with defaults. Only bad explicit input and unexpected I/O stop it.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid viewports: {input}")]
    ViewportParse { input: String },

    #[error("Failed to read config file {}: {source}", path.display())]
    ConfigFileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[from] clap::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}

impl ConfigError {
    pub(crate) fn viewport(input: impl Into<String>) -> Self {
        ConfigError::ViewportParse {
            input: input.into(),
        }
    }
}
