//! Tag token extraction from entry content.
//!
//! # Responsibility
//! - Derive the distinct `#word` tags embedded in entry text for display.
//!
//! # Invariants
//! - Tags are normalized to lowercase.
//! - First-appearance order is preserved; duplicates are dropped.
//! - Extraction never influences scoring or applicability.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#([A-Za-z0-9_]+)").expect("valid tag token regex"));

/// Extracts distinct lowercase tag names from entry content.
///
/// A tag token is a `#` immediately followed by one or more word
/// characters. The leading `#` is stripped from the returned names.
pub fn extract_tags(content: &str) -> Vec<String> {
    let mut tags = Vec::new();
    for capture in TAG_TOKEN_RE.captures_iter(content) {
        let name = capture[1].to_ascii_lowercase();
        if !tags.contains(&name) {
            tags.push(name);
        }
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::extract_tags;

    #[test]
    fn extracts_tags_in_first_appearance_order() {
        let tags = extract_tags("Call #work about #Budget, then log #work notes");
        assert_eq!(tags, vec!["work".to_string(), "budget".to_string()]);
    }

    #[test]
    fn ignores_bare_hash_and_empty_content() {
        assert!(extract_tags("").is_empty());
        assert!(extract_tags("# not a tag, nor #").is_empty());
    }

    #[test]
    fn accepts_digits_and_underscores() {
        let tags = extract_tags("see #q3_review and #2024");
        assert_eq!(tags, vec!["q3_review".to_string(), "2024".to_string()]);
    }
}
