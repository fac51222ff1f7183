//! Tag Input Codec
//!
//! Bidirectional mapping between the comma-joined display string edited in a
//! text input and the tag sequence stored in a row. Order is preserved as
//! typed; duplicates are kept; empty segments are dropped.

/// Split a comma-separated input into trimmed, non-empty tags.
pub fn parse_tag_input(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Join a tag sequence back into the display string shown while editing.
pub fn join_tags(tags: &[String]) -> String {
    tags.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_drops_empty_segments_and_trims() {
        assert_eq!(parse_tag_input("AI, ML ,  ,Python"), vec!["AI", "ML", "Python"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(parse_tag_input("").is_empty());
        assert!(parse_tag_input(" , ,, ").is_empty());
    }

    #[test]
    fn test_parse_preserves_order_and_duplicates() {
        assert_eq!(parse_tag_input("Rust, AI, Rust"), vec!["Rust", "AI", "Rust"]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let inputs = ["AI, ML ,  ,Python", "", "a,b,c", "  x  ", "one, one , one"];
        for input in inputs {
            let once = parse_tag_input(input);
            let twice = parse_tag_input(&join_tags(&once));
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_round_trip_display_string() {
        let tags: Vec<String> = vec!["AI".into(), "Machine Learning".into()];
        assert_eq!(join_tags(&tags), "AI, Machine Learning");
        assert_eq!(parse_tag_input(&join_tags(&tags)), tags);
    }
}
