//! Include target URLs.

use crate::config::INCLUDE_NAME_PLACEHOLDER;

/// Base location that `include:<name>` directives resolve against.
///
/// The name is substituted verbatim: no escaping and no path validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeTemplate {
    template: String,
}

impl IncludeTemplate {
    /// Creates a template. If it has no `{name}` placeholder, names are appended.
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// URL of the list called `name`.
    pub fn url_for(&self, name: &str) -> String {
        if self.template.contains(INCLUDE_NAME_PLACEHOLDER) {
            self.template.replace(INCLUDE_NAME_PLACEHOLDER, name)
        } else {
            format!("{}{}", self.template, name)
        }
    }
}

/// Key under which a URL is recorded as visited.
///
/// Parseable URLs are re-serialized (lower-cased scheme and host, default port
/// dropped), so spellings of the same location share one key.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    match url::Url::parse(trimmed) {
        Ok(parsed) => parsed.to_string(),
        Err(_) => trimmed.to_string(),
    }
}
