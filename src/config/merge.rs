//! Merge rules: defaults, override order, conflict handling.
//!
//! Precedence, lowest first: built-in defaults, config file, command line,
//! computed fields (logger). Each set field of a higher layer replaces the
//! whole value below it; lists are never concatenated.

use super::{CrawlerConfig, Viewport};
use crate::logging::{Logger, Verbosity};
use serde::{Deserialize, Serialize};

/// One layer of options where every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialOptions {
    pub depth: Option<u32>,
    pub check: Option<u32>,
    pub output: Option<String>,
    pub ignore: Option<String>,
    pub whitelist: Option<String>,
    pub random: Option<bool>,
    pub view_ports: Option<Vec<Viewport>>,
    pub verbose: Option<Verbosity>,
    pub domain: Option<String>,
}

impl PartialOptions {
    /// Keys accepted in a config file.
    pub const FIELDS: &'static [&'static str] = &[
        "depth",
        "check",
        "output",
        "ignore",
        "whitelist",
        "random",
        "viewPorts",
        "verbose",
        "domain",
    ];

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl CrawlerConfig {
    /// Overwrite every field `layer` sets.
    pub fn apply(&mut self, layer: PartialOptions) {
        let PartialOptions {
            depth,
            check,
            output,
            ignore,
            whitelist,
            random,
            view_ports,
            verbose,
            domain,
        } = layer;

        if let Some(depth) = depth {
            self.depth = depth;
        }
        if check.is_some() {
            self.check = check;
        }
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(ignore) = ignore {
            self.ignore = ignore;
        }
        if let Some(whitelist) = whitelist {
            self.whitelist = whitelist;
        }
        if let Some(random) = random {
            self.random = random;
        }
        if let Some(view_ports) = view_ports {
            self.view_ports = view_ports;
        }
        if let Some(verbose) = verbose {
            self.verbose = verbose;
        }
        if domain.is_some() {
            self.domain = domain;
        }
    }
}

/// Build the final configuration from the file and command-line layers.
///
/// The logger is rebound to the merged verbosity so `config.verbose` and
/// `config.logger` always agree.
pub(crate) fn merge_layers(
    file: PartialOptions,
    cli: PartialOptions,
    logger: &Logger,
) -> CrawlerConfig {
    let mut config = CrawlerConfig::default();
    config.apply(file);
    config.apply(cli);
    config.logger = logger.rebind(config.verbose);
    config
}
