//! Rule-set minimization policies.

use std::collections::{BTreeSet, HashSet};

use log::debug;

use super::registrable::registrable_domain;
use crate::config::OptimizationPolicy;
use crate::initialization::init_extractor;

/// Normalizes one domain entry: trimmed and lower-cased, `None` if empty.
pub fn normalize_domain(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// Normalizes, deduplicates and reduces `domains` with `policy`.
///
/// The result is sorted lexicographically and contains no duplicates. Empty
/// input yields an empty result.
pub fn optimize<I, S>(domains: I, policy: OptimizationPolicy) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let unique: BTreeSet<String> = domains
        .into_iter()
        .filter_map(|d| normalize_domain(d.as_ref()))
        .collect();

    let optimized = match policy {
        OptimizationPolicy::Registrable => group_by_registrable(&unique),
        OptimizationPolicy::SuffixCover => cover_by_suffix(&unique),
    };
    debug!(
        "Optimized {} unique domains to {} rules ({policy})",
        unique.len(),
        optimized.len()
    );
    optimized
}

/// Replaces every domain by its registrable domain and deduplicates.
///
/// Domains without a registrable domain are kept as they are. Expects
/// normalized input.
pub fn group_by_registrable(domains: &BTreeSet<String>) -> Vec<String> {
    let extractor = init_extractor();
    let registrable: BTreeSet<String> = domains
        .iter()
        .map(|domain| {
            registrable_domain(&extractor, domain).unwrap_or_else(|| domain.clone())
        })
        .collect();
    registrable.into_iter().collect()
}

/// Keeps only the domains not covered by another kept domain.
///
/// Candidates are visited by ascending label count (ties in lexicographic
/// order). A candidate is dropped if it equals a kept domain or ends with
/// `.` followed by one; kept domains are never removed again. Expects
/// normalized input.
pub fn cover_by_suffix(domains: &BTreeSet<String>) -> Vec<String> {
    let mut candidates: Vec<&str> = domains.iter().map(String::as_str).collect();
    // Stable sort keeps the BTreeSet order among equal label counts
    candidates.sort_by_key(|d| label_count(d));

    let mut kept: HashSet<&str> = HashSet::with_capacity(candidates.len());
    for candidate in candidates {
        if !is_covered(candidate, &kept) {
            kept.insert(candidate);
        }
    }

    let mut result: Vec<String> = kept.into_iter().map(str::to_string).collect();
    result.sort_unstable();
    result
}

fn label_count(domain: &str) -> usize {
    domain.split('.').count()
}

/// True if `domain` or one of its dot-delimited suffixes is in `kept`.
fn is_covered(domain: &str, kept: &HashSet<&str>) -> bool {
    if kept.contains(domain) {
        return true;
    }
    domain
        .match_indices('.')
        .any(|(idx, _)| kept.contains(&domain[idx + 1..]))
}
