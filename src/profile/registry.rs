//! Built-in profiles.

use super::{Profile, Sources};
use crate::config::{
    OptimizationPolicy, ANTIFILTER_COMMUNITY_URL, REFILTER_DOMAINS_URL, V2FLY_CATEGORY_RU_URL,
    V2FLY_INCLUDE_TEMPLATE,
};
use crate::resolve::IncludeTemplate;

/// The profiles generated by default, in generation order.
///
/// - `ru-blocked`: domains blocked in Russia, from two community lists
/// - `except-ru`: Russian services from v2fly `category-ru` and its includes
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        Profile {
            name: "ru-blocked".to_string(),
            sources: Sources::Lists(vec![
                ANTIFILTER_COMMUNITY_URL.to_string(),
                REFILTER_DOMAINS_URL.to_string(),
            ]),
            policy: OptimizationPolicy::Registrable,
        },
        Profile {
            name: "except-ru".to_string(),
            sources: Sources::Includes {
                root: V2FLY_CATEGORY_RU_URL.to_string(),
                template: IncludeTemplate::new(V2FLY_INCLUDE_TEMPLATE),
            },
            policy: OptimizationPolicy::Registrable,
        },
    ]
}

/// Looks a profile up by registry name.
pub fn find_profile<'a>(profiles: &'a [Profile], name: &str) -> Option<&'a Profile> {
    profiles.iter().find(|p| p.name == name)
}
