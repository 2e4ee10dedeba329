use std::collections::BTreeSet;

use crate::types::KeywordCoverage;

/// Partition the configured keywords into found/missing by case-insensitive
/// substring containment in the full transcript. An empty configured set is
/// a valid empty partition, not an error.
pub fn keyword_coverage(keywords: &BTreeSet<String>, transcript_text: &str) -> KeywordCoverage {
    let haystack = transcript_text.to_lowercase();
    let mut found = BTreeSet::new();
    let mut missing = BTreeSet::new();

    for keyword in keywords {
        if haystack.contains(&keyword.trim().to_lowercase()) {
            found.insert(keyword.clone());
        } else {
            missing.insert(keyword.clone());
        }
    }

    KeywordCoverage { found, missing }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_partition_covers_configured_set() {
        let configured = keywords(&["algorithm", "design", "kubernetes"]);
        let coverage = keyword_coverage(&configured, "I chose this algorithm for its design");

        let union: BTreeSet<_> = coverage.found.union(&coverage.missing).cloned().collect();
        assert_eq!(union, configured);
        assert!(coverage.found.is_disjoint(&coverage.missing));
        assert!(coverage.found.contains("algorithm"));
        assert!(coverage.found.contains("design"));
        assert!(coverage.missing.contains("kubernetes"));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let coverage = keyword_coverage(&keywords(&["Algorithm"]), "the ALGORITHM worked");
        assert!(coverage.found.contains("Algorithm"));
        assert!(coverage.missing.is_empty());
    }

    #[test]
    fn test_empty_configured_set_yields_empty_partition() {
        let coverage = keyword_coverage(&BTreeSet::new(), "any transcript at all");
        assert!(coverage.found.is_empty());
        assert!(coverage.missing.is_empty());
    }

    #[test]
    fn test_everything_missing_on_empty_transcript() {
        let configured = keywords(&["team", "conflict"]);
        let coverage = keyword_coverage(&configured, "");
        assert!(coverage.found.is_empty());
        assert_eq!(coverage.missing, configured);
    }
}
