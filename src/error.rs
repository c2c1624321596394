// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Error types for eeatbot
//!
//! Only the I/O edges (fetching, reading files, loading configuration) can
//! fail. Page analysis itself is total.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, EeatError>;

#[derive(Error, Debug)]
pub enum EeatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unsupported URL scheme: {0} (expected http or https)")]
    UnsupportedScheme(String),

    #[error("Error fetching URL: {url} returned status {status}")]
    Fetch { url: String, status: u16 },
}
