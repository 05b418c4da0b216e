//! profilegen library: SwitchyOmega profile generation
//!
//! This library downloads plaintext domain lists, follows the `include:`
//! directives that chain lists together, minimizes the resulting domain set
//! and renders it as a SwitchyOmega wildcard rule list.
//!
//! # Example
//!
//! ```no_run
//! use profilegen::{run_profiles, Config};
//! use std::path::PathBuf;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     output_dir: PathBuf::from("results"),
//!     ..Default::default()
//! };
//!
//! let report = run_profiles(config).await?;
//! println!("{} profiles written, {} failed", report.written.len(), report.failed.len());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

mod app;
pub mod config;
pub mod domain;
mod error_handling;
pub mod fetch;
pub mod format;
pub mod initialization;
pub mod profile;
pub mod resolve;

// Re-export public API
pub use app::{ensure_output_dir, profile_path, write_profile};
pub use config::{Config, LogFormat, LogLevel, OptimizationPolicy};
pub use error_handling::{CollectError, FetchError, InitializationError, ResolveError};
pub use run::{run_profiles, run_profiles_with, RunReport};

// Internal run module (drives generation of every selected profile)
mod run {
    use std::path::PathBuf;
    use std::sync::Arc;
    use std::time::Instant;

    use anyhow::{Context, Result};
    use log::{error, info};

    use crate::app::{ensure_output_dir, log_run_summary, write_profile};
    use crate::config::Config;
    use crate::fetch::{FetchLines, HttpFetcher};
    use crate::initialization::init_client;
    use crate::profile::{builtin_profiles, find_profile, Profile, ProfileGenerator};

    /// Outcome of a generation run.
    #[derive(Debug, Clone, Default)]
    pub struct RunReport {
        /// Files written, in generation order
        pub written: Vec<PathBuf>,
        /// Names of the profiles that could not be generated or written
        pub failed: Vec<String>,
    }

    /// Generates the configured built-in profiles over HTTP.
    ///
    /// This is the main entry point for the library.
    ///
    /// # Errors
    ///
    /// Returns an error only for run-wide problems: an unknown profile name,
    /// HTTP client setup, or an output directory that cannot be created. A
    /// profile whose sources fail is logged, listed in [`RunReport::failed`]
    /// and skipped.
    pub async fn run_profiles(config: Config) -> Result<RunReport> {
        let client = init_client(&config)
            .await
            .context("Failed to initialize HTTP client")?;
        let fetcher = Arc::new(HttpFetcher::new(client, &config));
        run_profiles_with(&config, &builtin_profiles(), fetcher).await
    }

    /// Generates profiles from `registry` using `fetcher` as the list source.
    ///
    /// Profiles run one after another; one profile's failure never stops
    /// the others.
    pub async fn run_profiles_with<F>(
        config: &Config,
        registry: &[Profile],
        fetcher: Arc<F>,
    ) -> Result<RunReport>
    where
        F: FetchLines + 'static,
    {
        let selected = select_profiles(registry, &config.profiles)?;
        ensure_output_dir(&config.output_dir).await?;

        let start_time = Instant::now();
        let generator = ProfileGenerator::new(fetcher, config.policy);
        let mut report = RunReport::default();

        for profile in selected {
            info!("Generating profile {}", profile.name);
            let generated = match generator.generate(profile).await {
                Ok(generated) => generated,
                Err(e) => {
                    error!("Failed to generate profile {}: {e:#}", profile.name);
                    report.failed.push(profile.name.clone());
                    continue;
                }
            };

            match write_profile(&config.output_dir, &generated.name, &generated.content).await {
                Ok(path) => {
                    info!(
                        "Profile {} saved to {} ({} rules)",
                        generated.name,
                        path.display(),
                        generated.rules
                    );
                    report.written.push(path);
                }
                Err(e) => {
                    error!("{e:#}");
                    report.failed.push(generated.name);
                }
            }
        }

        log_run_summary(&report, start_time.elapsed().as_secs_f64());
        Ok(report)
    }

    /// Resolves requested names against the registry; empty selects all.
    fn select_profiles<'a>(registry: &'a [Profile], names: &[String]) -> Result<Vec<&'a Profile>> {
        if names.is_empty() {
            return Ok(registry.iter().collect());
        }
        names
            .iter()
            .map(|name| {
                find_profile(registry, name).ok_or_else(|| {
                    let available: Vec<&str> = registry.iter().map(|p| p.name.as_str()).collect();
                    anyhow::anyhow!(
                        "Unknown profile {name} (available: {})",
                        available.join(", ")
                    )
                })
            })
            .collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_select_profiles_defaults_to_all() {
            let registry = builtin_profiles();
            let selected = select_profiles(&registry, &[]).unwrap();
            assert_eq!(selected.len(), registry.len());
        }

        #[test]
        fn test_select_profiles_keeps_requested_order() {
            let registry = builtin_profiles();
            let names = vec!["except-ru".to_string(), "ru-blocked".to_string()];
            let selected = select_profiles(&registry, &names).unwrap();
            let selected: Vec<&str> = selected.iter().map(|p| p.name.as_str()).collect();
            assert_eq!(selected, vec!["except-ru", "ru-blocked"]);
        }

        #[test]
        fn test_select_profiles_rejects_unknown_name() {
            let registry = builtin_profiles();
            let err = select_profiles(&registry, &["nope".to_string()]).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Unknown profile nope (available: ru-blocked, except-ru)"
            );
        }
    }
}
