// Copyright (C) 2026 Michael Wilson <mike@mdwn.dev>
//
// This program is free software: you can redistribute it and/or modify it under
// the terms of the GNU General Public License as published by the Free Software
// Foundation, version 3.
//
// This program is distributed in the hope that it will be useful, but WITHOUT
// ANY WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS
// FOR A PARTICULAR PURPOSE. See the GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along with
// this program. If not, see <https://www.gnu.org/licenses/>.
//
use std::fs;
use std::path::Path;
use std::time::Duration;

use duration_string::DurationString;
use serde::Deserialize;

/// The default number of pixels on the strip.
pub const DEFAULT_PIXELS: usize = 90;
/// The default pattern to play.
pub const DEFAULT_PATTERN: &str = "normal";

/// Typed error for config load/parse failures so callers can distinguish
/// an unreadable file from invalid contents without string matching.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse config file: {0}")]
    Parse(#[from] serde_yml::Error),
    #[error("invalid startup delay: {0}")]
    StartupDelay(String),
}

/// A YAML representation of the player configuration.
#[derive(Deserialize, Clone, Default)]
pub struct Config {
    /// The number of pixels on the strip.
    pixels: Option<usize>,

    /// The name of the pattern to play.
    pattern: Option<String>,

    /// How long to wait before the show starts, as a human readable duration
    /// (for example "500ms" or "2s").
    startup_delay: Option<String>,
}

impl Config {
    /// Loads the configuration from a YAML file.
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        Ok(serde_yml::from_str(&fs::read_to_string(path)?)?)
    }

    /// The number of pixels on the strip.
    pub fn pixels(&self) -> usize {
        self.pixels.unwrap_or(DEFAULT_PIXELS)
    }

    /// The name of the pattern to play.
    pub fn pattern(&self) -> &str {
        self.pattern.as_deref().unwrap_or(DEFAULT_PATTERN)
    }

    /// How long to wait before the show starts.
    pub fn startup_delay(&self) -> Result<Duration, ConfigError> {
        self.startup_delay
            .as_ref()
            .map_or(Ok(Duration::ZERO), |delay| {
                DurationString::from_string(delay.clone())
                    .map(Into::into)
                    .map_err(|e| ConfigError::StartupDelay(e.to_string()))
            })
    }
}
