use crate::taxonomy::SUGGESTIONS;

pub const MAX_SUGGESTIONS: usize = 4;

/// Example queries containing `prefix` (case-insensitive), at most four.
/// An empty prefix returns the first four candidates.
pub fn suggest(prefix: &str) -> Vec<&'static str> {
    if prefix.is_empty() {
        return SUGGESTIONS.iter().take(MAX_SUGGESTIONS).copied().collect();
    }

    let needle = prefix.to_lowercase();
    SUGGESTIONS
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_SUGGESTIONS)
        .copied()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prefix_returns_first_four() {
        assert_eq!(suggest(""), SUGGESTIONS[..4].to_vec());
    }

    #[test]
    fn test_prefix_filters_case_insensitively() {
        assert_eq!(
            suggest("SHORTS"),
            vec!["summer shorts in khaki", "cargo shorts olive color"]
        );
        assert_eq!(suggest("shirt"), vec!["casual shirts under $50", "formal white shirt"]);
    }

    #[test]
    fn test_results_are_capped() {
        // "e" occurs in every candidate
        assert_eq!(suggest("e").len(), MAX_SUGGESTIONS);
    }

    #[test]
    fn test_no_match_is_empty() {
        assert!(suggest("xyz-no-match").is_empty());
    }
}
