//! CLI domain: argument definitions and the command-line option layer.

mod parse;

pub use parse::CliArgs;

use crate::config::{parse_viewports, PartialOptions};
use crate::error::ConfigError;
use crate::logging::Verbosity;

impl CliArgs {
    /// Trailing positional argument; the others are discarded.
    pub fn domain(&self) -> Option<&str> {
        self.positionals.last().map(String::as_str)
    }

    /// Verbosity implied by the flags alone, if any.
    ///
    /// `--dryRun` defaults to debug unless `--verbose` is explicit; `--quiet`
    /// overrides everything.
    pub fn verbosity(&self) -> Option<Verbosity> {
        let mut verbosity = self.verbose;
        if self.dry_run {
            verbosity = Some(self.verbose.unwrap_or(Verbosity::Debug));
        }
        if self.quiet {
            verbosity = Some(Verbosity::Quiet);
        }
        verbosity
    }

    /// Convert to an option layer. Fails only on a malformed `--viewPorts`.
    pub fn to_options(&self) -> Result<PartialOptions, ConfigError> {
        let view_ports = match self.view_ports.as_deref() {
            Some(raw) => Some(parse_viewports(raw)?).filter(|views| !views.is_empty()),
            None => None,
        };

        // A dry run never checks pages.
        let check = if self.dry_run { Some(0) } else { self.check };

        Ok(PartialOptions {
            depth: self.depth,
            check,
            output: self.output.clone(),
            ignore: self.ignore.clone(),
            whitelist: self.whitelist.clone(),
            random: if self.no_random {
                Some(false)
            } else {
                self.random
            },
            view_ports,
            verbose: self.verbosity(),
            domain: self.domain().map(str::to_string),
        })
    }
}
