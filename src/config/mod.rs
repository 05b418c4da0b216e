//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, source URLs, output layout)
//! - CLI option types and parsing
//! - The optimization policy selector shared by profiles and the CLI

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, OptimizationPolicy, Opt};
