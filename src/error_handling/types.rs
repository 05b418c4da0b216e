//! Error type definitions.
//!
//! Every error raised while downloading or expanding a list carries the URL it
//! happened on so a failed profile can be traced back to its source.

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use reqwest::StatusCode;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),
}

/// Transport failure while downloading a single list.
#[derive(Error, Debug)]
pub enum FetchError {
    /// The URL could not be parsed.
    #[error("Invalid list URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Connection, TLS or timeout failure before a response arrived.
    #[error("Failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: ReqwestError,
    },

    /// The server answered with something other than 200 OK.
    #[error("Unexpected HTTP status for {url}: {status}")]
    Status { url: String, status: StatusCode },

    /// The response body could not be read to the end.
    #[error("Failed to read response body for {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: ReqwestError,
    },
}

impl FetchError {
    /// URL the failure happened on.
    pub fn url(&self) -> &str {
        match self {
            FetchError::InvalidUrl { url, .. }
            | FetchError::Request { url, .. }
            | FetchError::Status { url, .. }
            | FetchError::Body { url, .. } => url,
        }
    }

    /// True when the request ran into the configured timeout.
    pub fn is_timeout(&self) -> bool {
        match self {
            FetchError::Request { source, .. } | FetchError::Body { source, .. } => {
                source.is_timeout()
            }
            FetchError::InvalidUrl { .. } | FetchError::Status { .. } => false,
        }
    }
}

/// Failure of a concurrent batch download.
///
/// A batch is all-or-nothing: no lines from the successful URLs survive.
#[derive(Error, Debug)]
pub enum CollectError {
    /// At least one list failed to download; `source` is the first failure in input order.
    #[error("{failed} of {total} source lists failed: {source}")]
    Fetch {
        failed: usize,
        total: usize,
        #[source]
        source: FetchError,
    },

    /// A fetch worker panicked or was cancelled before reporting a result.
    #[error("Fetch worker for {url} did not complete: {source}")]
    Worker {
        url: String,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Failure while expanding a list and its includes.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// A list in the include graph could not be fetched.
    #[error("Failed to resolve {url}{}", describe_chain(.include_chain))]
    Fetch {
        url: String,
        /// Lists that led to `url`, root first. Empty when `url` is the root.
        include_chain: Vec<String>,
        #[source]
        source: FetchError,
    },
}

impl ResolveError {
    /// The underlying transport failure.
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            ResolveError::Fetch { source, .. } => source,
        }
    }
}

fn describe_chain(chain: &[String]) -> String {
    if chain.is_empty() {
        String::new()
    } else {
        format!(" (included via {})", chain.join(" -> "))
    }
}
