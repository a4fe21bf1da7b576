//! Viewport spec grammar: comma-separated `name:WIDTHxHEIGHT` tokens.

use crate::error::ConfigError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VIEWPORT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\w+):(\d+)x(\d+)").expect("Invalid viewport regex"));

/// Named screen size a page is tested under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Viewport {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
        }
    }
}

impl fmt::Display for Viewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}x{}", self.name, self.width, self.height)
    }
}

impl FromStr for Viewport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_token(s).ok_or_else(|| ConfigError::viewport(s))
    }
}

/// mobile, tablet_vertical, tablet_horizontal, desktop
pub fn default_viewports() -> Vec<Viewport> {
    vec![
        Viewport::new("mobile", 360, 640),
        Viewport::new("tablet_vertical", 768, 1024),
        Viewport::new("tablet_horizontal", 1024, 768),
        Viewport::new("desktop", 1440, 900),
    ]
}

/// Parse a `--viewPorts` value such as `mobile:360x640,tablet:768x1024`.
///
/// Blank tokens are skipped, so an empty value yields an empty list. Any other
/// token that does not contain `name:WIDTHxHEIGHT` fails the whole value.
pub fn parse_viewports(raw: &str) -> Result<Vec<Viewport>, ConfigError> {
    raw.split(',')
        .filter(|token| !token.trim().is_empty())
        .map(|token| match_token(token).ok_or_else(|| ConfigError::viewport(raw)))
        .collect()
}

fn match_token(token: &str) -> Option<Viewport> {
    let caps = VIEWPORT_PATTERN.captures(token)?;
    let width = caps[2].parse().ok()?;
    let height = caps[3].parse().ok()?;
    Some(Viewport::new(&caps[1], width, height))
}
