//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use strum_macros::{Display, EnumIter};

use crate::config::constants::{DEFAULT_OUTPUT_DIR, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How a collected domain set is reduced to wildcard rules.
///
/// Both policies lower-case, trim and deduplicate first and emit a
/// lexicographically sorted result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Display, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum OptimizationPolicy {
    /// Replace every domain by its registrable domain (eTLD+1).
    Registrable,
    /// Keep a domain only if no shorter kept domain already covers it.
    SuffixCover,
}

/// Library configuration (no CLI dependencies).
///
/// # Examples
///
/// ```no_run
/// use profilegen::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     output_dir: PathBuf::from("out"),
///     profiles: vec!["except-ru".to_string()],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory profile files are written to
    pub output_dir: PathBuf,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Profiles to generate, by registry name (empty means all)
    pub profiles: Vec<String>,

    /// Policy applied to every profile instead of its own
    pub policy: Option<OptimizationPolicy>,
}

impl Config {
    /// Timeout applied to every list download.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            timeout_seconds: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            profiles: Vec::new(),
            policy: None,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Generate every built-in profile into ./results
/// profilegen
///
/// # Only one profile, collapsed by suffix instead of registrable domain
/// profilegen --profile except-ru --policy suffix-cover --output-dir /tmp/profiles
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "profilegen",
    about = "Generates SwitchyOmega wildcard profiles from remote domain lists."
)]
pub struct Opt {
    /// Directory the generated <profile>.txt files are written to
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Generate only this profile (repeatable; default: all)
    #[arg(long = "profile", value_name = "NAME")]
    pub profiles: Vec<String>,

    /// Override the optimization policy of every profile
    #[arg(long, value_enum)]
    pub policy: Option<OptimizationPolicy>,

    /// Print the built-in profiles and exit
    #[arg(long)]
    pub list_profiles: bool,
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            output_dir: opt.output_dir,
            log_level: opt.log_level,
            log_format: opt.log_format,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            profiles: opt.profiles,
            policy: opt.policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_policy_display_matches_cli_names() {
        assert_eq!(OptimizationPolicy::Registrable.to_string(), "registrable");
        assert_eq!(OptimizationPolicy::SuffixCover.to_string(), "suffix-cover");

        let parsed = OptimizationPolicy::from_str("suffix-cover", false).unwrap();
        assert_eq!(parsed, OptimizationPolicy::SuffixCover);
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.output_dir, PathBuf::from("results"));
        assert_eq!(config.timeout_seconds, 10);
        assert_eq!(config.fetch_timeout(), Duration::from_secs(10));
        assert!(config.profiles.is_empty());
        assert!(config.policy.is_none());
        assert!(config.user_agent.starts_with("profilegen/"));
    }

    #[test]
    fn test_opt_defaults_match_config_default() {
        let opt = Opt::parse_from(["profilegen"]);
        assert!(!opt.list_profiles);
        let config = Config::from(opt);
        let default = Config::default();
        assert_eq!(config.output_dir, default.output_dir);
        assert_eq!(config.timeout_seconds, default.timeout_seconds);
        assert_eq!(config.user_agent, default.user_agent);
        assert_eq!(config.profiles, default.profiles);
        assert_eq!(config.policy, default.policy);
    }

    #[test]
    fn test_opt_repeated_profiles_and_policy() {
        let opt = Opt::parse_from([
            "profilegen",
            "--profile",
            "ru-blocked",
            "--profile",
            "except-ru",
            "--policy",
            "registrable",
            "--timeout-seconds",
            "3",
        ]);
        let config = Config::from(opt);
        assert_eq!(config.profiles, vec!["ru-blocked", "except-ru"]);
        assert_eq!(config.policy, Some(OptimizationPolicy::Registrable));
        assert_eq!(config.fetch_timeout(), Duration::from_secs(3));
    }
}
