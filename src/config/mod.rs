// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Application configuration.
//!
//! This module manages the application configuration file. The television
//! bounds and the channel selection policy are chosen here, once, before the
//! television is built.

use std::path::PathBuf;

use confy::ConfyError;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::{device::DeviceBounds, remote::ChannelPolicy};

const CONFIG_NAME: &str = "tvremote";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub(crate) version: u32,
    pub(crate) bounds: DeviceBounds,
    pub(crate) channel_policy: ChannelPolicy,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) log_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: 1,
            bounds: DeviceBounds::FULL_RANGE,
            channel_policy: ChannelPolicy::Permissive,
            log_dir: None,
        }
    }
}

impl AppConfig {
    /// Directory the log file is written to, the system temporary directory
    /// unless configured otherwise.
    pub(crate) fn log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(std::env::temp_dir)
    }

    /// The configured bounds, or the defaults if the configured ones are
    /// unusable.
    pub(crate) fn device_bounds(&self) -> DeviceBounds {
        let b = self.bounds;
        DeviceBounds::new(b.min_volume, b.max_volume, b.min_channel, b.max_channel)
            .unwrap_or_else(|e| {
                warn!("Ignoring configured bounds: {}", e);
                DeviceBounds::default()
            })
    }
}

/// Loads the configuration file, writing out the defaults on first run.
///
/// An unreadable file falls back to the defaults. The error is handed back
/// so it can be logged once logging, itself configured here, is running.
pub(crate) fn load_config() -> (AppConfig, Option<ConfyError>) {
    settle(confy::load(CONFIG_NAME, None))
}

/// Stores the configuration file.
pub(crate) fn save_config(cfg: &AppConfig) -> Result<(), ConfyError> {
    confy::store(CONFIG_NAME, None, cfg)
}

fn settle(loaded: Result<AppConfig, ConfyError>) -> (AppConfig, Option<ConfyError>) {
    match loaded {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn scratch_file(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tvremote-{}-{}.toml", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.version, 1);
        assert_eq!(config.bounds, DeviceBounds::FULL_RANGE);
        assert_eq!(config.channel_policy, ChannelPolicy::Permissive);
        assert_eq!(config.log_dir(), std::env::temp_dir());
    }

    #[test]
    fn test_invalid_bounds_fall_back_to_defaults() {
        let config = AppConfig {
            bounds: DeviceBounds {
                min_volume: 5,
                max_volume: 1,
                min_channel: 0,
                max_channel: 3,
            },
            ..AppConfig::default()
        };
        assert_eq!(config.device_bounds(), DeviceBounds::FULL_RANGE);
    }

    #[test]
    fn test_valid_bounds_are_kept() {
        let config = AppConfig {
            bounds: DeviceBounds::COMPACT,
            channel_policy: ChannelPolicy::Strict,
            ..AppConfig::default()
        };
        assert_eq!(config.device_bounds(), DeviceBounds::COMPACT);
    }

    #[test]
    fn test_unparseable_file_falls_back_with_error() {
        let path = scratch_file("bad-policy");
        fs::write(&path, "channel_policy = \"strikt\"\n").unwrap();

        let (config, error) = settle(confy::load_path(&path));
        fs::remove_file(&path).ok();

        assert_eq!(config, AppConfig::default());
        assert!(error.is_some());
    }

    #[test]
    fn test_stored_file_loads_back() {
        let path = scratch_file("round-trip");
        let stored = AppConfig {
            bounds: DeviceBounds::COMPACT,
            channel_policy: ChannelPolicy::Strict,
            ..AppConfig::default()
        };
        confy::store_path(&path, &stored).unwrap();

        let (config, error) = settle(confy::load_path(&path));
        fs::remove_file(&path).ok();

        assert!(error.is_none());
        assert_eq!(config, stored);
    }
}
