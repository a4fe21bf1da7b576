//! Config file source: a JSON object whose keys match the crawler options.

use crate::config::PartialOptions;
use crate::error::ConfigError;
use serde_json::Value;
use std::io::ErrorKind;
use std::path::Path;

/// What reading the config file produced.
///
/// Only unexpected I/O failures are errors; the resolver decides how to report
/// the other cases.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigFileOutcome {
    Loaded {
        options: PartialOptions,
        /// Top-level keys that are not crawler options, sorted
        unknown_keys: Vec<String>,
    },
    Missing,
    Invalid {
        reason: String,
    },
}

/// Read and decode the config file at `path`.
pub fn read_config_file(path: &Path) -> Result<ConfigFileOutcome, ConfigError> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(parse_config_file(&bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigFileOutcome::Missing),
        Err(e) => Err(ConfigError::ConfigFileRead {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

/// Decode config file contents. Unknown keys are split off rather than rejected.
pub fn parse_config_file(bytes: &[u8]) -> ConfigFileOutcome {
    let value: Value = match serde_json::from_slice(bytes) {
        Ok(value) => value,
        Err(e) => {
            return ConfigFileOutcome::Invalid {
                reason: e.to_string(),
            }
        }
    };

    let Value::Object(mut map) = value else {
        return ConfigFileOutcome::Invalid {
            reason: "expected a JSON object at the top level".to_string(),
        };
    };

    let mut unknown_keys: Vec<String> = map
        .keys()
        .filter(|key| !PartialOptions::FIELDS.contains(&key.as_str()))
        .cloned()
        .collect();
    unknown_keys.sort();
    for key in &unknown_keys {
        map.remove(key);
    }

    match serde_json::from_value::<PartialOptions>(Value::Object(map)) {
        Ok(options) => ConfigFileOutcome::Loaded {
            options,
            unknown_keys,
        },
        Err(e) => ConfigFileOutcome::Invalid {
            reason: e.to_string(),
        },
    }
}
