// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration for eeatbot
//!
//! Only the I/O surface is configurable. Scoring weights and thresholds are
//! fixed so that scores stay comparable between runs and installations.

use crate::error::{EeatError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// User agent sent with every page fetch
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; EEATAnalyzer/1.0)";

/// Fetch timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub fetch: FetchConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Colorize the text report
    pub color: bool,
    /// Print the banner before text reports
    pub banner: bool,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            banner: true,
        }
    }
}

pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eeatbot")
        .join("config.yml")
}

fn is_toml(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some("toml")
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(path)?;

    if is_toml(path) {
        toml::from_str(&content)
            .map_err(|e| EeatError::Config(format!("TOML parse error: {}", e)))
    } else {
        serde_yaml::from_str(&content)
            .map_err(|e| EeatError::Config(format!("YAML parse error: {}", e)))
    }
}

pub fn write_default_config(path: &Path) -> Result<()> {
    let config = Config::default();

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let content = if is_toml(path) {
        toml::to_string_pretty(&config)
            .map_err(|e| EeatError::Config(format!("TOML serialize error: {}", e)))?
    } else {
        serde_yaml::to_string(&config)?
    };

    std::fs::write(path, content)?;
    Ok(())
}
