//! Named profile generators.
//!
//! A profile names its sources and the policy used to reduce them. Generating
//! it runs the full pipeline: fetch (recursively or in parallel), optimize,
//! render. Errors are returned to the caller untouched apart from context.

mod registry;

use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::config::OptimizationPolicy;
use crate::domain::optimize;
use crate::fetch::{collect_all, FetchLines};
use crate::format::render_wildcard;
use crate::resolve::{IncludeTemplate, Resolver};

pub use registry::{builtin_profiles, find_profile};

/// Where a profile's domains come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sources {
    /// One root list, expanded through its `include:` directives.
    Includes {
        root: String,
        template: IncludeTemplate,
    },
    /// Independent lists downloaded concurrently.
    Lists(Vec<String>),
}

/// A named output artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Registry name, also the output file stem
    pub name: String,
    pub sources: Sources,
    pub policy: OptimizationPolicy,
}

/// Result of generating one profile.
#[derive(Debug, Clone)]
pub struct GeneratedProfile {
    pub name: String,
    /// Entries obtained from the sources before optimization
    pub source_entries: usize,
    /// Wildcard rules in `content`
    pub rules: usize,
    /// Rendered profile text
    pub content: String,
}

/// Runs profiles against a list source.
#[derive(Debug)]
pub struct ProfileGenerator<F> {
    fetcher: Arc<F>,
    policy_override: Option<OptimizationPolicy>,
}

impl<F: FetchLines + 'static> ProfileGenerator<F> {
    /// `policy_override`, when set, replaces the policy of every profile.
    pub fn new(fetcher: Arc<F>, policy_override: Option<OptimizationPolicy>) -> Self {
        Self {
            fetcher,
            policy_override,
        }
    }

    /// Generates `profile`.
    ///
    /// # Errors
    ///
    /// Returns an error if any of the profile's sources fails to download.
    /// No partial profile is ever produced.
    pub async fn generate(&self, profile: &Profile) -> Result<GeneratedProfile> {
        let domains = self
            .collect_domains(&profile.sources)
            .await
            .with_context(|| format!("Failed to collect domains for profile {}", profile.name))?;

        let policy = self.policy_override.unwrap_or(profile.policy);
        let optimized = optimize(&domains, policy);
        info!(
            "Profile {}: {} source entries reduced to {} rules ({policy})",
            profile.name,
            domains.len(),
            optimized.len()
        );

        Ok(GeneratedProfile {
            name: profile.name.clone(),
            source_entries: domains.len(),
            rules: optimized.len(),
            content: render_wildcard(&optimized),
        })
    }

    async fn collect_domains(&self, sources: &Sources) -> Result<Vec<String>> {
        match sources {
            Sources::Includes { root, template } => {
                let resolver = Resolver::new(Arc::clone(&self.fetcher), template.clone());
                let entries = resolver.resolve(root).await?;
                Ok(entries.into_iter().collect())
            }
            Sources::Lists(urls) => Ok(collect_all(&self.fetcher, urls).await?),
        }
    }
}
