use psl::Psl;

/// Returns the registrable domain (eTLD+1) of `domain`.
///
/// # Arguments
///
/// * `extractor` - The Public Suffix List instance
/// * `domain` - A lower-cased host name without scheme or path
///
/// # Returns
///
/// `None` when no registrable domain exists: single-label names, names that
/// are themselves a public suffix (`co.uk`), names with an empty label
/// (`a..b`, `.com`, `com.`), or input the list cannot match.
///
/// Uses the Public Suffix List so that both simple TLDs (`example.com`)
/// and multi-part TLDs (`example.co.uk`) are handled.
pub fn registrable_domain(extractor: &psl::List, domain: &str) -> Option<String> {
    if !domain.contains('.') || domain.split('.').any(str::is_empty) {
        return None;
    }
    let d = extractor.domain(domain.as_bytes())?;
    std::str::from_utf8(d.as_bytes()).ok().map(str::to_string)
}
