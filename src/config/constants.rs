//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the fetch timeout, output layout and the well-known list sources.

/// Per-request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Directory profiles are written to, relative to the working directory
pub const DEFAULT_OUTPUT_DIR: &str = "results";

/// Extension appended to the profile name to build the output file name
pub const PROFILE_FILE_EXTENSION: &str = "txt";

/// Default User-Agent string for HTTP requests.
pub const DEFAULT_USER_AGENT: &str = concat!("profilegen/", env!("CARGO_PKG_VERSION"));

/// Prefix of a list line that pulls another list into the current one.
pub const INCLUDE_DIRECTIVE: &str = "include:";

/// Placeholder substituted with the include name in an include template.
pub const INCLUDE_NAME_PLACEHOLDER: &str = "{name}";

// v2fly domain-list-community
/// Template that `include:<name>` directives of the v2fly data files resolve against.
pub const V2FLY_INCLUDE_TEMPLATE: &str =
    "https://raw.githubusercontent.com/v2fly/domain-list-community/refs/heads/master/data/{name}";
/// Root list of the `except-ru` profile.
pub const V2FLY_CATEGORY_RU_URL: &str =
    "https://raw.githubusercontent.com/v2fly/domain-list-community/refs/heads/master/data/category-ru";

// Blocked-in-Russia lists
pub const ANTIFILTER_COMMUNITY_URL: &str = "https://community.antifilter.download/list/domains.lst";
pub const REFILTER_DOMAINS_URL: &str =
    "https://raw.githubusercontent.com/1andrevich/Re-filter-lists/refs/heads/main/domains_all.lst";
