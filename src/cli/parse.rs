//! CLI parse: clap types for axe-crawler. No behavior; definitions only.

use crate::logging::{LogFormat, Verbosity};
use clap::Parser;
use std::path::PathBuf;

/// axe-crawler - crawl a site and check its pages for accessibility issues
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "axe-crawler")]
#[command(about = "Crawl a site and check its pages for accessibility issues")]
#[command(version)]
pub struct CliArgs {
    /// Configuration file path (default: ./.axe-crawler.json)
    #[arg(long = "configFile", value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Viewports to test, e.g. mobile:360x640,tablet:768x1024
    #[arg(
        long = "viewPorts",
        value_name = "SPEC",
        num_args = 0..=1,
        default_missing_value = ""
    )]
    pub view_ports: Option<String>,

    /// Log level (quiet, error, warn, info, debug)
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub verbose: Option<Verbosity>,

    /// Resolve options and log intent without checking any page
    #[arg(long = "dryRun")]
    pub dry_run: bool,

    /// Suppress all logging except forced messages
    #[arg(long)]
    pub quiet: bool,

    /// Crawl depth limit
    #[arg(long, value_name = "N")]
    pub depth: Option<u32>,

    /// Number of pages to check (default: all)
    #[arg(long, value_name = "N")]
    pub check: Option<u32>,

    /// Report output directory
    #[arg(long, value_name = "DIR")]
    pub output: Option<String>,

    /// Regex of URLs to ignore
    #[arg(long, value_name = "REGEX")]
    pub ignore: Option<String>,

    /// Regex of URLs to include
    #[arg(long, value_name = "REGEX")]
    pub whitelist: Option<String>,

    /// Randomize crawl order (--random, --random=false)
    #[arg(
        long,
        value_name = "BOOL",
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    pub random: Option<bool>,

    /// Keep the crawl order deterministic
    #[arg(long = "no-random", conflicts_with = "random")]
    pub no_random: bool,

    /// Log format (text, json)
    #[arg(long = "logFormat", value_enum, value_name = "FORMAT")]
    pub log_format: Option<LogFormat>,

    /// Positional arguments; the last one is the domain to crawl
    #[arg(value_name = "DOMAIN")]
    pub positionals: Vec<String>,
}
