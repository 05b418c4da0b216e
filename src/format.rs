//! SwitchyOmega wildcard profile rendering.

/// First lines of every profile, up to and including the section header.
const PROFILE_HEADER: &str = "#BEGIN\n\n[Wildcard]\n";
/// Last line of every profile. No newline follows it.
const PROFILE_TRAILER: &str = "#END";

/// Renders `domains` as a wildcard rule list, one `*://*.<domain>/*` line each.
///
/// Rules appear in the given order; sort first for reproducible output.
pub fn render_wildcard<S: AsRef<str>>(domains: &[S]) -> String {
    let rules_len: usize = domains.iter().map(|d| d.as_ref().len() + 9).sum();
    let mut out = String::with_capacity(PROFILE_HEADER.len() + rules_len + PROFILE_TRAILER.len());

    out.push_str(PROFILE_HEADER);
    for domain in domains {
        out.push_str("*://*.");
        out.push_str(domain.as_ref());
        out.push_str("/*\n");
    }
    out.push_str(PROFILE_TRAILER);
    out
}
