//! Character-frequency ranking
//!
//! Ranks candidate equations by an information-maximizing heuristic: prefer
//! equations with many distinct characters, then equations whose characters
//! are common across the remaining candidate set.

use crate::core::Equation;
use rustc_hash::FxHashMap;

/// Occurrence count per character across a candidate set
pub type CharFrequency = FxHashMap<u8, u32>;

/// Count character occurrences across every candidate in the set
///
/// Each character token is counted, not deduplicated per candidate. The first
/// sighting of a character seeds its count at 1 and is then incremented, so
/// first sightings contribute 2 while every later sighting contributes 1.
/// This off-by-one is intentional: it reproduces the counting rule the
/// ranking heuristic was tuned against.
///
/// Rebuilt from scratch on every query; corpora are a few thousand entries,
/// so recomputation is cheaper than cache invalidation.
#[must_use]
pub fn char_frequency(corpus: &[Equation]) -> CharFrequency {
    let mut freq = CharFrequency::default();
    for eq in corpus {
        for &b in eq.as_bytes() {
            let count = freq.entry(b).or_insert(1);
            *count += 1;
        }
    }
    freq
}

/// Sum of per-character frequencies for one equation
///
/// Characters absent from the table contribute 0.
#[must_use]
pub fn frequency_score(eq: &Equation, freq: &CharFrequency) -> u32 {
    eq.as_bytes()
        .iter()
        .map(|b| freq.get(b).copied().unwrap_or(0))
        .sum()
}

/// Sort candidates descending by the commonness heuristic
///
/// Two keys, in order:
/// 1. Distinct-character count (more distinct characters reveal more per
///    guess).
/// 2. Aggregate frequency score against the current set (prefer guesses built
///    from currently-likely characters).
///
/// The sort is stable, so ranking is deterministic for a given corpus.
pub fn rank(corpus: &mut [Equation]) {
    let freq = char_frequency(corpus);
    corpus.sort_by_cached_key(|eq| {
        std::cmp::Reverse((eq.distinct_chars(), frequency_score(eq, &freq)))
    });
}
