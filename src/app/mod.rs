//! Main application modules.
//!
//! This module provides the output-file handling and the end-of-run summary
//! used by the run driver.

pub mod output;
pub mod statistics;

// Re-export public API
pub use output::{ensure_output_dir, profile_path, write_profile};
pub use statistics::log_run_summary;
