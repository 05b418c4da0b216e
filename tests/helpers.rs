// Shared test helpers for mock list servers and fetchers.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::sync::Arc;
use std::time::Duration;

use profilegen::fetch::HttpFetcher;
use profilegen::Config;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Serves `body` as a plain-text list at `list_path` and expects exactly `hits` requests.
#[allow(dead_code)] // Used by other test files
pub async fn mount_list(server: &MockServer, list_path: &str, body: &str, hits: u64) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .expect(hits)
        .mount(server)
        .await;
}

/// Answers `list_path` with `status` and an empty body.
#[allow(dead_code)] // Used by other test files
pub async fn mount_status(server: &MockServer, list_path: &str, status: u16) {
    Mock::given(method("GET"))
        .and(path(list_path))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Creates an HTTP fetcher with a short timeout suitable for tests.
#[allow(dead_code)] // Used by other test files
pub fn test_fetcher(timeout: Duration) -> Arc<HttpFetcher> {
    let client = reqwest::Client::builder()
        .user_agent("profilegen_test/1.0")
        .build()
        .expect("Failed to build test HTTP client");
    Arc::new(HttpFetcher::new(Arc::new(client), &Config::default()).with_timeout(timeout))
}
