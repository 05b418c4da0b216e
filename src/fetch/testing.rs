//! In-memory list source for unit tests.

use std::collections::HashMap;
use std::sync::Mutex;

use reqwest::StatusCode;

use super::lines::parse_list_lines;
use super::FetchLines;
use crate::error_handling::FetchError;

/// Serves list bodies from a map; unknown URLs answer 404.
#[derive(Debug, Default)]
pub(crate) struct StaticLists {
    bodies: HashMap<String, String>,
    hits: Mutex<HashMap<String, usize>>,
}

impl StaticLists {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, url: &str, body: &str) -> Self {
        self.bodies.insert(url.to_string(), body.to_string());
        self
    }

    /// How many times `url` was requested.
    pub(crate) fn hits(&self, url: &str) -> usize {
        self.hits
            .lock()
            .expect("hits lock poisoned")
            .get(url)
            .copied()
            .unwrap_or(0)
    }

    pub(crate) fn total_hits(&self) -> usize {
        self.hits.lock().expect("hits lock poisoned").values().sum()
    }
}

impl FetchLines for StaticLists {
    async fn fetch_lines(&self, url: &str) -> Result<Vec<String>, FetchError> {
        *self
            .hits
            .lock()
            .expect("hits lock poisoned")
            .entry(url.to_string())
            .or_default() += 1;

        match self.bodies.get(url) {
            Some(body) => Ok(parse_list_lines(body)),
            None => Err(FetchError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND,
            }),
        }
    }
}
