//! Options resolution facade: turns raw arguments into a [`CrawlerConfig`].

use super::merge::{merge_layers, PartialOptions};
use super::sources::config_file::{read_config_file, ConfigFileOutcome};
use super::CrawlerConfig;
use crate::cli::CliArgs;
use crate::error::ConfigError;
use crate::logging::{LogSink, Logger, TracingSink};
use clap::Parser;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Config file read when `--configFile` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "./.axe-crawler.json";

/// Resolves crawler options from arguments, the config file and defaults.
pub struct OptionsResolver {
    default_config_path: PathBuf,
    sink: Arc<dyn LogSink>,
}

impl Default for OptionsResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl OptionsResolver {
    /// Resolver using [`DEFAULT_CONFIG_FILE`] and logging through `tracing`.
    pub fn new() -> Self {
        Self {
            default_config_path: PathBuf::from(DEFAULT_CONFIG_FILE),
            sink: Arc::new(TracingSink),
        }
    }

    /// Route the resolved logger (and resolution messages) to `sink`.
    pub fn with_sink(mut self, sink: Arc<dyn LogSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_default_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.default_config_path = path.into();
        self
    }

    /// Resolve from a raw argument list whose first element is the program name.
    pub fn resolve<I, T>(&self, args: I) -> Result<CrawlerConfig, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = CliArgs::try_parse_from(args)?;
        self.resolve_cli(&cli)
    }

    /// Resolve from already parsed arguments.
    pub fn resolve_cli(&self, cli: &CliArgs) -> Result<CrawlerConfig, ConfigError> {
        let cli_options = cli.to_options()?;

        let verbosity = cli_options.verbose.unwrap_or_default();
        let logger = Logger::with_sink(verbosity, Arc::clone(&self.sink));
        if cli.dry_run {
            logger.force(format!(
                "Performing dry run with {} level logging",
                verbosity
            ));
        }

        let config_path = cli
            .config_file
            .clone()
            .unwrap_or_else(|| self.default_config_path.clone());
        let file_options = load_file_options(&config_path, &logger)?;

        let config = merge_layers(file_options, cli_options, &logger);
        config.logger.debug(format!(
            "Resolved options: depth={} check={:?} output={} viewports={}",
            config.depth,
            config.check,
            config.output,
            config.view_ports.len()
        ));
        Ok(config)
    }
}

/// Read the file layer, reporting recoverable problems through `logger`.
fn load_file_options(path: &Path, logger: &Logger) -> Result<PartialOptions, ConfigError> {
    match read_config_file(path)? {
        ConfigFileOutcome::Loaded {
            options,
            unknown_keys,
        } => {
            for key in unknown_keys {
                logger.warn(format!("Ignoring unknown config file key '{}'", key));
            }
            logger.debug(format!("Loaded config file {}", path.display()));
            Ok(options)
        }
        ConfigFileOutcome::Missing => {
            logger.error("No config file found");
            Ok(PartialOptions::default())
        }
        ConfigFileOutcome::Invalid { reason } => {
            logger.error(format!(
                "Invalid JSON config file {}: {}",
                path.display(),
                reason
            ));
            logger.error("Ignoring JSON config file...");
            Ok(PartialOptions::default())
        }
    }
}

/// Resolve with the default config path, logging through `tracing`.
pub fn resolve_options<I, T>(args: I) -> Result<CrawlerConfig, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    OptionsResolver::new().resolve(args)
}
