//! Downloading source lists.
//!
//! - [`parse_list_lines`] turns a list body into comment-free entry lines
//! - [`FetchLines`] is the seam between list consumers and the transport
//! - [`HttpFetcher`] implements it over a shared `reqwest::Client`
//! - [`collect_all`] downloads several independent lists concurrently, all or nothing
//!
//! Interpreting a line (domain or `include:` directive) is left to the caller.

mod client;
mod collect;
mod lines;

#[cfg(test)]
pub(crate) mod testing;

use std::future::Future;

use crate::error_handling::FetchError;

// Re-export public API
pub use client::HttpFetcher;
pub use collect::collect_all;
pub use lines::{parse_list_line, parse_list_lines};

/// Source of list lines, addressed by URL.
///
/// Implementations return the already-parsed lines of [`parse_list_lines`].
pub trait FetchLines: Send + Sync {
    /// Downloads `url` and returns its non-empty, comment-stripped lines.
    fn fetch_lines(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<Vec<String>, FetchError>> + Send;
}
