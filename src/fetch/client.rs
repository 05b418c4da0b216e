//! HTTP transport for list downloads.

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::StatusCode;

use super::lines::parse_list_lines;
use super::FetchLines;
use crate::config::Config;
use crate::error_handling::FetchError;

/// Downloads lists with one GET per call.
///
/// No retries: any transport error, any status other than 200 and any body
/// read failure is terminal for that URL.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Arc<reqwest::Client>,
    timeout: Duration,
}

impl HttpFetcher {
    /// Creates a fetcher over a shared client, using the configured timeout.
    pub fn new(client: Arc<reqwest::Client>, config: &Config) -> Self {
        Self {
            client,
            timeout: config.fetch_timeout(),
        }
    }

    /// Replaces the per-request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Per-request timeout currently applied.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    async fn fetch_body(&self, url: &str) -> Result<String, FetchError> {
        let parsed = url::Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|source| FetchError::Body {
            url: url.to_string(),
            source,
        })
    }
}

impl FetchLines for HttpFetcher {
    async fn fetch_lines(&self, url: &str) -> Result<Vec<String>, FetchError> {
        debug!("Fetching list {url}");
        let body = self.fetch_body(url).await?;
        let lines = parse_list_lines(&body);
        debug!("Fetched {url} - {} entries", lines.len());
        Ok(lines)
    }
}
