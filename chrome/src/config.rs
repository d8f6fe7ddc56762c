//! Page-supplied configuration.
//!
//! The page may put a JSON object in `<body data-chrome='…'>`. Every field is
//! optional; an absent attribute means defaults.
//!
//! ```html
//! <body data-chrome='{"seed": 7, "parallax": true, "log_level": "debug"}'>
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;

use serde::Deserialize;

use crate::error::ChromeError;

pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ChromeConfig {
    /// Fixed seed for the decorative background; random per load when absent.
    pub seed: Option<u64>,
    /// Nudge every third floating shape toward the pointer.
    pub parallax: bool,
    /// Console log level: `error`, `warn`, `info`, `debug`, or `trace`.
    pub log_level: String,
    /// Print the banner to the developer console at load.
    pub banner: bool,
}

impl Default for ChromeConfig {
    fn default() -> Self {
        Self { seed: None, parallax: false, log_level: DEFAULT_LOG_LEVEL.to_owned(), banner: true }
    }
}

impl ChromeConfig {
    /// Parse the raw attribute value. `None` or blank yields defaults.
    pub fn from_attribute(raw: Option<&str>) -> Result<Self, ChromeError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(json) => Ok(serde_json::from_str(json)?),
        }
    }

    /// Log level, falling back to `Info` for unrecognized names.
    #[must_use]
    pub fn level(&self) -> log::Level {
        log::Level::from_str(self.log_level.trim()).unwrap_or(log::Level::Info)
    }
}
