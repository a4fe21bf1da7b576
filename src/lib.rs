//! axe-crawler: options resolution
//!
//! Merges built-in defaults, an optional JSON config file and command-line
//! arguments into the single [`config::CrawlerConfig`] consumed by the crawler,
//! and builds the verbosity-bound logger that travels with it.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

pub use config::{resolve_options, CrawlerConfig, OptionsResolver};
pub use error::ConfigError;
