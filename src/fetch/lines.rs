//! List body parsing.

/// Parses one raw list line.
///
/// Returns `None` for blank lines and full-line comments. Otherwise the line is
/// cut at the first `#` (there is no escape syntax) and trimmed; a line that is
/// empty after that is dropped as well.
pub fn parse_list_line(raw: &str) -> Option<&str> {
    let line = raw.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }

    let entry = match line.find('#') {
        Some(idx) => line[..idx].trim(),
        None => line,
    };
    if entry.is_empty() {
        None
    } else {
        Some(entry)
    }
}

/// Parses a whole list body into its entry lines, in file order.
pub fn parse_list_lines(body: &str) -> Vec<String> {
    body.lines()
        .filter_map(parse_list_line)
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_inline_comment_is_stripped() {
        assert_eq!(
            parse_list_line("example.com   # primary site"),
            Some("example.com")
        );
    }

    #[test]
    fn test_indented_comment_is_skipped() {
        assert_eq!(parse_list_line("   # just a comment"), None);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        assert_eq!(parse_list_line(""), None);
        assert_eq!(parse_list_line(" \t "), None);
    }

    #[test]
    fn test_include_directive_passes_through() {
        assert_eq!(
            parse_list_line("include:category-gov-ru # government"),
            Some("include:category-gov-ru")
        );
    }

    #[test]
    fn test_hash_inside_token_truncates() {
        // No escaping: everything from the first '#' on is a comment
        assert_eq!(parse_list_line("exa#mple.com"), Some("exa"));
    }

    #[test]
    fn test_parse_body_keeps_order_and_duplicates() {
        let body = "# header\n\nb.com\na.com # note\r\n  b.com  \n#a.com\n";
        assert_eq!(parse_list_lines(body), vec!["b.com", "a.com", "b.com"]);
    }

    #[test]
    fn test_parse_body_only_comments() {
        assert!(parse_list_lines("# one\n   # two\n\n").is_empty());
    }

    proptest! {
        #[test]
        fn test_parsed_lines_are_clean(body in "([a-z.#: \\t]{0,20}\\n){0,20}") {
            for line in parse_list_lines(&body) {
                prop_assert!(!line.is_empty());
                prop_assert!(!line.contains('#'));
                prop_assert_eq!(line.trim(), line.as_str());
            }
        }
    }
}
