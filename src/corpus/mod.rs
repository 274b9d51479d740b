//! Equation corpus generation
//!
//! Exhaustive, deterministic enumeration of every syntactically and
//! arithmetically valid 8-character equation. Built programmatically at
//! startup; nothing is persisted or embedded.

mod builder;

pub use builder::{OperatorCounts, build_corpus, build_corpus_with_counts};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Equation;

    #[test]
    fn corpus_entries_are_valid_equations() {
        // Re-validating through Equation::new checks length, alphabet,
        // structure, leading zeros, and the arithmetic identity at once.
        for eq in build_corpus() {
            assert!(
                Equation::new(eq.as_str()).is_ok(),
                "corpus entry '{eq}' failed validation"
            );
        }
    }

    #[test]
    fn scoring_is_reflexive_for_every_corpus_entry() {
        use crate::core::Feedback;

        for eq in build_corpus() {
            assert!(
                Feedback::score(eq.as_str(), eq.as_str()).is_solved(),
                "'{eq}' does not score all hits against itself"
            );
        }
    }

    #[test]
    fn corpus_generation_is_deterministic() {
        let first = build_corpus();
        let second = build_corpus();
        assert_eq!(first, second);
    }

    #[test]
    fn corpus_has_no_duplicates() {
        use std::collections::HashSet;

        let corpus = build_corpus();
        let unique: HashSet<&str> = corpus.iter().map(Equation::as_str).collect();
        assert_eq!(unique.len(), corpus.len());
    }
}
