//! Configuration System
//!
//! Crawler options resolved from three layers: built-in defaults, an optional
//! JSON config file, and command-line arguments. Later layers replace whole
//! top-level values of earlier ones. The resolved [`CrawlerConfig`] also
//! carries the [`Logger`] the crawler should use.

use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;
use thiserror::Error;

mod facade;
mod merge;
mod sources;
pub mod viewport;

pub use crate::logging::{Logger, Verbosity};
pub use facade::{resolve_options, OptionsResolver, DEFAULT_CONFIG_FILE};
pub use merge::PartialOptions;
pub use sources::config_file::{parse_config_file, read_config_file, ConfigFileOutcome};
pub use viewport::{default_viewports, parse_viewports, Viewport};

/// Fully resolved crawler options.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlerConfig {
    /// Crawl depth limit
    pub depth: u32,

    /// Number of pages to check; `None` checks every page
    pub check: Option<u32>,

    /// Report output directory
    pub output: String,

    /// URL ignore pattern (regex)
    pub ignore: String,

    /// URL whitelist pattern (regex)
    pub whitelist: String,

    /// Randomize crawl order
    pub random: bool,

    /// Screen sizes each page is tested under
    pub view_ports: Vec<Viewport>,

    pub verbose: Verbosity,

    /// Target domain, from the last positional argument
    pub domain: Option<String>,

    #[serde(skip)]
    pub logger: Logger,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            depth: 5,
            check: None,
            output: "reports".to_string(),
            ignore: ".*".to_string(),
            whitelist: ".*".to_string(),
            random: false,
            view_ports: default_viewports(),
            verbose: Verbosity::default(),
            domain: None,
            logger: Logger::new(Verbosity::default()),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Pattern '{key}' is not a valid regular expression: {message}")]
    Pattern { key: &'static str, message: String },

    #[error("Output directory cannot be empty")]
    EmptyOutput,

    #[error("Viewport '{name}': {message}")]
    Viewport { name: String, message: String },
}

impl CrawlerConfig {
    /// Validate the entire configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        for (key, pattern) in [("ignore", &self.ignore), ("whitelist", &self.whitelist)] {
            if let Err(e) = Regex::new(pattern) {
                errors.push(ValidationError::Pattern {
                    key,
                    message: e.to_string(),
                });
            }
        }

        if self.output.trim().is_empty() {
            errors.push(ValidationError::EmptyOutput);
        }

        let mut seen = HashSet::new();
        for view in &self.view_ports {
            if view.name.is_empty() {
                errors.push(ValidationError::Viewport {
                    name: view.name.clone(),
                    message: "name cannot be empty".to_string(),
                });
            }
            if view.width == 0 || view.height == 0 {
                errors.push(ValidationError::Viewport {
                    name: view.name.clone(),
                    message: format!("dimensions must be non-zero, got {}x{}", view.width, view.height),
                });
            }
            if !seen.insert(view.name.as_str()) {
                errors.push(ValidationError::Viewport {
                    name: view.name.clone(),
                    message: "duplicate viewport name".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
