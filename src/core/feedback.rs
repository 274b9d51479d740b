//! Per-character guess feedback
//!
//! Feedback is an 8-symbol string over the alphabet `{x, i, e}`:
//! - `x` = hit (correct character, correct position)
//! - `i` = misplaced (character present elsewhere in the target)
//! - `e` = miss (character absent from the target)
//!
//! Internally feedback is a tagged value per position; the character alphabet
//! only appears at the interface boundary.

use super::equation::EQUATION_LEN;
use std::fmt;

/// Feedback for a single position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct character in the correct position (`x`)
    Hit,
    /// Character present in the target but not at this position (`i`)
    Misplaced,
    /// Character absent from the target (`e`)
    Miss,
}

impl Mark {
    /// Parse a feedback character, case-insensitively
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'x' | 'X' => Some(Self::Hit),
            'i' | 'I' => Some(Self::Misplaced),
            'e' | 'E' => Some(Self::Miss),
            _ => None,
        }
    }

    /// Lowercase serialized form
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Hit => 'x',
            Self::Misplaced => 'i',
            Self::Miss => 'e',
        }
    }
}

/// Feedback for a full 8-character guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; EQUATION_LEN]);

impl Feedback {
    /// All hits (the guess is the target)
    pub const ALL_HITS: Self = Self([Mark::Hit; EQUATION_LEN]);

    /// Create feedback from raw marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; EQUATION_LEN]) -> Self {
        Self(marks)
    }

    /// Get the per-position marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; EQUATION_LEN] {
        &self.0
    }

    /// Check whether every position is a hit
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::ALL_HITS
    }

    /// Parse feedback from a string like "xxieexxx", case-insensitively
    ///
    /// Returns `None` if the string is not exactly 8 characters or contains a
    /// character outside `{x, i, e}`.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::Feedback;
    ///
    /// let fb = Feedback::from_str("xxxxxxxx").unwrap();
    /// assert!(fb.is_solved());
    /// assert_eq!(Feedback::from_str("XiExIeXx"), Feedback::from_str("xiexiexx"));
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Ergonomic Option API; FromStr also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != EQUATION_LEN {
            return None;
        }

        let mut marks = [Mark::Miss; EQUATION_LEN];
        for (slot, ch) in marks.iter_mut().zip(chars) {
            *slot = Mark::from_char(ch)?;
        }

        Some(Self(marks))
    }

    /// Score a guess against a known target
    ///
    /// For each position: equal characters score a hit; otherwise a character
    /// found anywhere in the target scores misplaced; otherwise a miss.
    ///
    /// Membership is plain substring containment, not multiplicity-aware: a
    /// repeated guess character can collect more `i` marks than the target has
    /// occurrences. This matches the simplified rule the solver's
    /// duplicate-character handling is built around.
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::{Equation, Feedback};
    ///
    /// let guess = Equation::new("15+23=38").unwrap();
    /// let target = Equation::new("12+26=38").unwrap();
    /// let fb = Feedback::score(guess.as_str(), target.as_str());
    /// assert_eq!(fb.to_string(), "xexxixxx");
    /// ```
    ///
    /// # Panics
    /// Panics in debug mode if either string is not exactly 8 bytes.
    #[must_use]
    pub fn score(guess: &str, target: &str) -> Self {
        debug_assert_eq!(guess.len(), EQUATION_LEN);
        debug_assert_eq!(target.len(), EQUATION_LEN);

        let mut marks = [Mark::Miss; EQUATION_LEN];
        for (i, (g, t)) in guess.chars().zip(target.chars()).enumerate() {
            marks[i] = if g == t {
                Mark::Hit
            } else if target.contains(g) {
                Mark::Misplaced
            } else {
                Mark::Miss
            };
        }

        Self(marks)
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mark in &self.0 {
            write!(f, "{}", mark.as_char())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_round_trip() {
        for mark in [Mark::Hit, Mark::Misplaced, Mark::Miss] {
            assert_eq!(Mark::from_char(mark.as_char()), Some(mark));
        }
        assert_eq!(Mark::from_char('g'), None);
    }

    #[test]
    fn feedback_from_str_valid() {
        let fb = Feedback::from_str("xxiieexx").unwrap();
        assert_eq!(fb.to_string(), "xxiieexx");
    }

    #[test]
    fn feedback_from_str_case_insensitive() {
        assert_eq!(
            Feedback::from_str("XIEXIEXX"),
            Feedback::from_str("xiexiexx")
        );
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!(Feedback::from_str("xxiieex").is_none()); // Too short
        assert!(Feedback::from_str("xxiieexxx").is_none()); // Too long
        assert!(Feedback::from_str("xxiieexg").is_none()); // Invalid char
        assert!(Feedback::from_str("").is_none());
    }

    #[test]
    fn feedback_all_hits() {
        assert!(Feedback::ALL_HITS.is_solved());
        assert_eq!(Feedback::ALL_HITS.to_string(), "xxxxxxxx");
        assert!(!Feedback::from_str("xxxxxxxi").unwrap().is_solved());
    }

    #[test]
    fn score_reflexive() {
        for text in ["15+23=38", "117/9=13", "48-32=16", "2*50=100"] {
            assert!(Feedback::score(text, text).is_solved());
        }
    }

    #[test]
    fn score_disjoint_digits() {
        // No digit shared; the aligned '+' and '=' are the only non-misses.
        let fb = Feedback::score("22+22=44", "67+31=98");
        assert_eq!(fb.to_string(), "eexeexee");
    }

    #[test]
    fn score_pinned_regression() {
        // Fixed scenario pinned once: mixed hits, misplacements, and misses.
        let fb = Feedback::score("12+35=47", "45+16=61");
        assert_eq!(fb.to_string(), "iexeixie");
    }

    #[test]
    fn score_repeated_guess_chars_not_multiplicity_aware() {
        // Target has a single '1'; both misplaced '1's in the guess still
        // score 'i' because membership is substring-based.
        let guess = "11+66=77";
        let target = "25+16=41";
        let fb = Feedback::score(guess, target);
        assert_eq!(fb.marks()[0], Mark::Misplaced);
        assert_eq!(fb.marks()[1], Mark::Misplaced);
    }

    #[test]
    fn score_operator_positions() {
        let fb = Feedback::score("15+23=38", "48-32=16");
        // 1 vs 4: '1' in target -> i; 5 vs 8: no '5' -> e; '+' vs '-': no '+' -> e
        assert_eq!(fb.marks()[0], Mark::Misplaced);
        assert_eq!(fb.marks()[1], Mark::Miss);
        assert_eq!(fb.marks()[2], Mark::Miss);
        // '=' aligned at position 5 in both -> hit
        assert_eq!(fb.marks()[5], Mark::Hit);
    }
}
