//! Error handling.
//!
//! This module provides the typed errors of each pipeline stage:
//! - **Initialization**: logger and HTTP client setup
//! - **Fetch**: transport failures for a single list (always carry the URL)
//! - **Collect**: a concurrent batch in which one or more lists failed
//! - **Resolve**: a transport failure somewhere in an include graph
//!
//! Orchestration code (profile generation, the run driver) wraps these with
//! `anyhow` context instead of defining further types.

mod types;

// Re-export public API
pub use types::{CollectError, FetchError, InitializationError, ResolveError};
