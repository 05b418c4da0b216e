//! Domain normalization and rule-set minimization.
//!
//! This module reduces an arbitrary collection of domain strings to the
//! smallest set of wildcard rules that still covers it, using one of the two
//! [`OptimizationPolicy`] strategies:
//!
//! - `Registrable` - every domain is replaced by its registrable domain as
//!   given by the Public Suffix List (`a.b.example.co.uk` -> `example.co.uk`)
//! - `SuffixCover` - a domain is dropped when a kept domain with fewer labels
//!   already covers it (`a.b.example.com` is covered by `b.example.com`)
//!
//! Key functions:
//! - `optimize()` - normalizes, deduplicates and reduces, sorted output
//! - `registrable_domain()` - eTLD+1 of a host name

mod optimize;
mod registrable;

pub use optimize::{cover_by_suffix, group_by_registrable, normalize_domain, optimize};
pub use registrable::registrable_domain;

use crate::config::OptimizationPolicy;

impl OptimizationPolicy {
    /// Reduces `domains` with this policy. See [`optimize`].
    pub fn optimize<I, S>(self, domains: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        optimize(domains, self)
    }
}
