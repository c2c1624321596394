// SPDX-License-Identifier: PMPL-1.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Remote page fetching
//!
//! A single blocking GET with a fixed user agent and timeout. Failures are
//! terminal for the invocation; nothing is retried.

use crate::config::FetchConfig;
use crate::error::{EeatError, Result};
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Validate that `url` is an absolute http(s) URL
pub fn parse_page_url(url: &str) -> Result<Url> {
    let parsed = Url::parse(url)?;
    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        other => Err(EeatError::UnsupportedScheme(other.to_string())),
    }
}

/// Fetch the HTML body of a page
pub fn fetch_html(url: &str, config: &FetchConfig) -> Result<String> {
    let url = parse_page_url(url)?;
    info!("Fetching {}", url);

    let client = reqwest::blocking::Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;

    let response = client.get(url.clone()).send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(EeatError::Fetch {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    let body = response.text()?;
    debug!("Fetched {} bytes from {}", body.len(), url);
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_url_is_rejected() {
        assert!(matches!(parse_page_url("/about"), Err(EeatError::Url(_))));
    }

    #[test]
    fn test_non_http_scheme_is_rejected() {
        match parse_page_url("ftp://example.com/page.html") {
            Err(EeatError::UnsupportedScheme(s)) => assert_eq!(s, "ftp"),
            other => panic!("expected unsupported scheme, got {:?}", other),
        }
    }

    #[test]
    fn test_https_url_is_accepted() {
        let url = parse_page_url("https://example.com/post?id=1").unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_invalid_url_fails_before_network() {
        let err = fetch_html("not a url", &FetchConfig::default()).unwrap_err();
        assert!(err.to_string().starts_with("URL error"));
    }
}
