//! Input sanitization applied before any validation.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Result<Regex, regex::Error>> = Lazy::new(|| Regex::new(r"<[^>]+>"));

/// Anything that is not a word character, whitespace or `- . , ! ? ; : ( ) { } [ ]`.
static DISALLOWED_PATTERN: Lazy<Result<Regex, regex::Error>> =
    Lazy::new(|| Regex::new(r"[^\w\s\-.,!?;:(){}\[\]]"));

/// Strip markup tags and disallowed characters, then trim.
///
/// Never fails: if the patterns are unusable the error is logged and an empty
/// string is returned, which downstream validation rejects as empty input.
pub fn sanitize(text: &str) -> String {
    match (TAG_PATTERN.as_ref(), DISALLOWED_PATTERN.as_ref()) {
        (Ok(tags), Ok(disallowed)) => {
            let without_tags = tags.replace_all(text, "");
            disallowed
                .replace_all(&without_tags, "")
                .trim()
                .to_string()
        }
        (Err(e), _) | (_, Err(e)) => {
            tracing::error!(error = %e, "Error sanitizing input");
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_tags() {
        assert_eq!(
            sanitize("<b>How</b> do I fix <i>DNS</i>?"),
            "How do I fix DNS?"
        );
        assert_eq!(sanitize("<script>alert(1)</script>"), "alert(1)");
    }

    #[test]
    fn test_removes_disallowed_characters() {
        assert_eq!(sanitize("price: $100 @ store #5"), "price: 100  store 5");
        assert_eq!(sanitize("a/b\\c|d"), "abcd");
    }

    #[test]
    fn test_keeps_whitelisted_punctuation() {
        let text = "steps - a, b. c! d? e; f: (g) {h} [i]";
        assert_eq!(sanitize(text), text);
    }

    #[test]
    fn test_keeps_unicode_word_characters() {
        assert_eq!(sanitize("¿Qué pasa con el disco?"), "Qué pasa con el disco?");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize("  \n why?\t "), "why?");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_markup_only_becomes_empty() {
        assert_eq!(sanitize("<br/><hr>"), "");
    }
}
