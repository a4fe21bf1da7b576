//! axe-crawler CLI Binary
//!
//! Resolves crawler options and prints them as JSON on stdout for the crawler
//! to consume. Logs go to stderr.

use anyhow::{bail, Context};
use axe_crawler::cli::CliArgs;
use axe_crawler::logging::{init_logging, LoggingConfig};
use axe_crawler::OptionsResolver;
use clap::Parser;
use std::io::IsTerminal;
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = CliArgs::parse();

    let logging_config = build_logging_config(&cli);
    init_logging(&logging_config).context("Failed to initialize logging")?;

    let config = OptionsResolver::new().resolve_cli(&cli)?;

    if let Err(errors) = config.validate() {
        let error_msgs: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Configuration validation failed:\n{}", error_msgs.join("\n"));
    }

    if config.domain.is_none() {
        config.logger.warn("No domain given; pass it as the last argument");
    }

    let json = serde_json::to_string_pretty(&config).context("Failed to serialize options")?;
    println!("{}", json);
    Ok(())
}

/// CLI flags override defaults; AXE_CRAWLER_LOG_FORMAT still wins in init_logging.
fn build_logging_config(cli: &CliArgs) -> LoggingConfig {
    let mut config = LoggingConfig::default();
    config.color = std::io::stderr().is_terminal();
    if let Some(format) = cli.log_format {
        config.format = format;
    }
    config
}
