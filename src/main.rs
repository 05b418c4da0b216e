//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `profilegen` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use profilegen::config::Opt;
use profilegen::initialization::init_logger_with;
use profilegen::profile::{builtin_profiles, Sources};
use profilegen::{run_profiles, Config};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::parse();

    if opt.list_profiles {
        for profile in builtin_profiles() {
            let sources = match &profile.sources {
                Sources::Includes { root, .. } => format!("includes from {root}"),
                Sources::Lists(urls) => format!("{} lists", urls.len()),
            };
            println!("{}\t{}\t{}", profile.name, profile.policy, sources);
        }
        return Ok(());
    }

    let config = Config::from(opt);

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    match run_profiles(config).await {
        Ok(report) => {
            println!(
                "Generated {} profile{} ({} failed)",
                report.written.len(),
                if report.written.len() == 1 { "" } else { "s" },
                report.failed.len()
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("profilegen error: {:#}", e);
            process::exit(1);
        }
    }
}
