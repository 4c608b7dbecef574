//! Template variable utilities for transport URLs.
//!
//! Package transport URLs may embed `{name}` placeholders that clients resolve
//! at launch time from environment variables or arguments, e.g.
//! `http://localhost:{port}/mcp`.

use regex::Regex;
use std::sync::LazyLock;

//--------------------------------------------------------------------------------------------------
// Constants
//--------------------------------------------------------------------------------------------------

/// Regex pattern for `{name}` template placeholders.
pub const TEMPLATE_VAR_PATTERN: &str = r"\{([^{}]+)\}";

/// Stand-in used for placeholders in host or path position when parsing.
const HOST_STAND_IN: &str = "placeholder";

/// Stand-in used for placeholders in port position when parsing.
const PORT_STAND_IN: &str = "1";

/// Compiled regex for template placeholder extraction.
static TEMPLATE_VAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(TEMPLATE_VAR_PATTERN).expect("Invalid regex pattern"));

//--------------------------------------------------------------------------------------------------
// Functions
//--------------------------------------------------------------------------------------------------

/// Extract all template variable names from a string, in order of appearance.
pub fn extract_template_vars(s: &str) -> Vec<String> {
    TEMPLATE_VAR_REGEX
        .captures_iter(s)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Returns true if the string contains at least one `{name}` placeholder.
pub fn has_template_vars(s: &str) -> bool {
    TEMPLATE_VAR_REGEX.is_match(s)
}

/// Replace every placeholder with a syntactically neutral stand-in.
///
/// A placeholder directly after `:` in the authority is a port and gets a
/// numeric stand-in; everything else becomes a hostname-safe label. The result
/// is only meant for URL parsing, never for display.
pub fn substitute_stand_ins(url: &str) -> String {
    let authority_end = authority_end(url);

    let mut out = String::with_capacity(url.len());
    let mut last = 0;
    for m in TEMPLATE_VAR_REGEX.find_iter(url) {
        out.push_str(&url[last..m.start()]);
        let in_port = m.start() < authority_end && url[..m.start()].ends_with(':');
        out.push_str(if in_port { PORT_STAND_IN } else { HOST_STAND_IN });
        last = m.end();
    }
    out.push_str(&url[last..]);
    out
}

/// Byte offset where the authority section of a URL ends.
fn authority_end(url: &str) -> usize {
    let start = url.find("://").map(|i| i + 3).unwrap_or(0);
    url[start..]
        .find(['/', '?', '#'])
        .map(|i| start + i)
        .unwrap_or(url.len())
}

//--------------------------------------------------------------------------------------------------
// Tests
//--------------------------------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_in_order() {
        let vars = extract_template_vars("https://{host}:{port}/mcp/{tenant}");
        assert_eq!(vars, vec!["host", "port", "tenant"]);
    }

    #[test]
    fn extracts_nothing_from_plain_url() {
        assert!(extract_template_vars("https://example.com/mcp").is_empty());
        assert!(!has_template_vars("https://example.com/mcp"));
    }

    #[test]
    fn ignores_empty_braces() {
        assert!(extract_template_vars("https://example.com/{}").is_empty());
    }

    #[test]
    fn port_placeholder_becomes_numeric() {
        assert_eq!(
            substitute_stand_ins("http://localhost:{port}/mcp"),
            "http://localhost:1/mcp"
        );
    }

    #[test]
    fn path_placeholder_after_colon_is_not_a_port() {
        assert_eq!(
            substitute_stand_ins("https://example.com/a:{id}"),
            "https://example.com/a:placeholder"
        );
    }

    #[test]
    fn host_and_path_placeholders() {
        assert_eq!(
            substitute_stand_ins("https://{host}/{path}"),
            "https://placeholder/placeholder"
        );
    }
}
