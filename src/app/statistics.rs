//! End-of-run summary.

use log::{info, warn};

use crate::RunReport;

/// Logs how many profiles were written and which ones failed.
pub fn log_run_summary(report: &RunReport, elapsed_seconds: f64) {
    info!(
        "Profile generation finished in {:.1}s: {} written, {} failed",
        elapsed_seconds,
        report.written.len(),
        report.failed.len()
    );
    for path in &report.written {
        info!("  wrote {}", path.display());
    }
    if !report.failed.is_empty() {
        warn!("Failed profiles: {}", report.failed.join(", "));
    }
}
