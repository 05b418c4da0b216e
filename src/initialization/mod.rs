//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a run:
//! - HTTP client (with timeout and User-Agent from the configuration)
//! - Logger (plain or JSON output)
//! - Public Suffix List extractor
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes the Public Suffix List extractor.
///
/// The list is compiled into the binary, so this never fails and never
/// touches the network.
pub fn init_extractor() -> psl::List {
    psl::List
}
