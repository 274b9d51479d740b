//! Main Nerdle solver interface
//!
//! The solver owns a mutable candidate set and an append-only guess/feedback
//! history. Feedback application shrinks the candidate set in place; the
//! frequency heuristic re-ranks it after every mutation.

use super::frequency;
use crate::core::{EQUATION_LEN, Equation, Feedback, Mark};
use crate::corpus::build_corpus;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for invalid `score` input
///
/// All validation happens at this boundary; the internal filtering passes
/// operate on an already-validated guess/feedback pair and never fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    GuessLength(usize),
    FeedbackLength(usize),
    FeedbackChar(char),
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GuessLength(len) => {
                write!(f, "Guess must be exactly {EQUATION_LEN} characters, got {len}")
            }
            Self::FeedbackLength(len) => {
                write!(f, "Feedback must be exactly {EQUATION_LEN} characters, got {len}")
            }
            Self::FeedbackChar(ch) => {
                write!(f, "Invalid feedback character '{ch}' (expected x, i, or e)")
            }
        }
    }
}

impl std::error::Error for InputError {}

/// Constraint-based Nerdle solver
///
/// Narrows a candidate set under positional feedback and suggests the next
/// guess via the commonness heuristic. Each instance owns its candidate set
/// exclusively; all operations mutate in place and chain.
#[derive(Debug)]
pub struct Solver {
    corpus: Vec<Equation>,
    history: Vec<(String, Feedback)>,
    starting_equation: Option<Equation>,
    logging: bool,
}

impl Solver {
    /// Create a solver with a freshly generated corpus
    ///
    /// The starting equation defaults to the top-ranked candidate when none
    /// is supplied. With `logging` enabled, candidate-drop counts are written
    /// to stderr during feedback application.
    #[must_use]
    pub fn new(starting_equation: Option<Equation>, logging: bool) -> Self {
        Self::with_corpus(build_corpus(), starting_equation, logging)
    }

    /// Create a solver from an already-built corpus
    ///
    /// The explicit cache path: batch callers build the corpus once and hand
    /// copies to each solver instead of re-enumerating per round.
    #[must_use]
    pub fn with_corpus(
        corpus: Vec<Equation>,
        starting_equation: Option<Equation>,
        logging: bool,
    ) -> Self {
        let mut solver = Self {
            corpus,
            history: Vec::new(),
            starting_equation: None,
            logging,
        };
        frequency::rank(&mut solver.corpus);
        solver.starting_equation = starting_equation.or_else(|| solver.corpus.first().cloned());
        solver
    }

    /// Get the best next guess
    ///
    /// Before any feedback has been recorded this is the starting equation;
    /// afterwards it is the head of the freshly re-ranked candidate set.
    /// Returns `None` once the candidate set has been narrowed to nothing
    /// (contradictory feedback) - callers must check rather than assume a
    /// guess always exists.
    pub fn best_guess(&mut self) -> Option<&Equation> {
        if self.history.is_empty() {
            return self.starting_equation.as_ref();
        }
        frequency::rank(&mut self.corpus);
        self.corpus.first()
    }

    /// Apply a guess and its feedback string to shrink the candidate set
    ///
    /// The feedback alphabet is `{x, i, e}`, case-insensitive. Both strings
    /// must be exactly 8 characters; anything else fails with [`InputError`]
    /// before any state changes.
    ///
    /// An empty resulting candidate set is not an error - it is a valid
    /// terminal state observed through [`Self::best_guess`].
    ///
    /// # Errors
    /// Returns `InputError` if the guess or feedback length is not 8, or the
    /// feedback contains a character outside `{x, i, e}`.
    pub fn score(&mut self, guess: &str, feedback: &str) -> Result<&mut Self, InputError> {
        let guess_len = guess.chars().count();
        if guess_len != EQUATION_LEN {
            return Err(InputError::GuessLength(guess_len));
        }

        let feedback_chars: Vec<char> = feedback.chars().collect();
        if feedback_chars.len() != EQUATION_LEN {
            return Err(InputError::FeedbackLength(feedback_chars.len()));
        }

        let mut marks = [Mark::Miss; EQUATION_LEN];
        for (slot, ch) in marks.iter_mut().zip(feedback_chars) {
            *slot = Mark::from_char(ch).ok_or(InputError::FeedbackChar(ch))?;
        }

        Ok(self.apply(guess, Feedback::new(marks)))
    }

    /// Apply already-parsed feedback for a guess
    ///
    /// The typed counterpart of [`Self::score`], used where the feedback was
    /// produced in-process. The guess must be 8 characters.
    pub fn apply(&mut self, guess: &str, feedback: Feedback) -> &mut Self {
        debug_assert_eq!(guess.chars().count(), EQUATION_LEN);

        self.history.push((guess.to_string(), feedback));

        let guess_chars: Vec<char> = guess.chars().collect();

        // Characters occurring more than once within the guess itself. A
        // repeated character may be correct at one position and wrong at
        // another, so global exclusion is unsafe for it.
        let duplicates: FxHashSet<char> = guess_chars
            .iter()
            .copied()
            .filter(|&c| guess_chars.iter().filter(|&&g| g == c).count() > 1)
            .collect();

        // Blanket pass: a miss on a non-repeated character rules that
        // character out of every position.
        let misses: Vec<char> = guess_chars
            .iter()
            .zip(feedback.marks())
            .filter(|&(c, &mark)| mark == Mark::Miss && !duplicates.contains(c))
            .map(|(&c, _)| c)
            .collect();
        self.exclude_chars(&misses);

        // Positional passes, in left-to-right order.
        for (index, (&ch, &mark)) in guess_chars.iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Hit => self.keep_with_hit(ch, index),
                Mark::Misplaced => self.keep_with_misplaced(ch, index),
                Mark::Miss => self.exclude_at(ch, index),
            }
        }

        frequency::rank(&mut self.corpus);
        self
    }

    /// Replace the candidate set and clear the history
    ///
    /// With a supplied corpus the slice is copied; otherwise a fresh corpus
    /// is generated. The starting equation is unchanged.
    pub fn reset(&mut self, corpus: Option<&[Equation]>) -> &mut Self {
        self.corpus = match corpus {
            Some(cached) => cached.to_vec(),
            None => build_corpus(),
        };
        self.history.clear();
        self
    }

    /// Current candidate set, freshly re-ranked
    ///
    /// Returned as an immutable view; callers cannot mutate the solver's
    /// internal set through it.
    pub fn solutions(&mut self) -> &[Equation] {
        frequency::rank(&mut self.corpus);
        &self.corpus
    }

    /// Guess/feedback pairs recorded so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(String, Feedback)] {
        &self.history
    }

    /// Number of candidates still consistent with all feedback
    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.corpus.len()
    }

    /// The fixed first guess chosen at construction
    #[must_use]
    pub fn starting_equation(&self) -> Option<&Equation> {
        self.starting_equation.as_ref()
    }

    /// Remove candidates containing any of the given characters anywhere
    fn exclude_chars(&mut self, chars: &[char]) {
        let before = self.corpus.len();
        self.corpus
            .retain(|eq| !chars.iter().any(|&c| eq.contains(c)));
        self.log_drop(before, "with excluded characters");
    }

    /// Keep only candidates with the character at the given position
    fn keep_with_hit(&mut self, ch: char, index: usize) {
        let before = self.corpus.len();
        self.corpus.retain(|eq| eq.char_at(index) == ch);
        self.log_drop(before, "without the correct character");
    }

    /// Keep only candidates containing the character, but not at this position
    fn keep_with_misplaced(&mut self, ch: char, index: usize) {
        let before = self.corpus.len();
        self.corpus
            .retain(|eq| eq.char_at(index) != ch && eq.contains(ch));
        self.log_drop(before, "without the misplaced character");
    }

    /// Keep only candidates without the character at this position
    ///
    /// Catches misses on repeated characters that the blanket pass skipped.
    fn exclude_at(&mut self, ch: char, index: usize) {
        let before = self.corpus.len();
        self.corpus.retain(|eq| eq.char_at(index) != ch);
        self.log_drop(before, "with the wrong character");
    }

    fn log_drop(&self, before: usize, what: &str) {
        if self.logging {
            eprintln!("Dropped {} equations {what}.", before - self.corpus.len());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eq(text: &str) -> Equation {
        Equation::new(text).unwrap()
    }

    fn small_corpus() -> Vec<Equation> {
        vec![
            eq("15+23=38"),
            eq("23+15=38"),
            eq("12+26=38"),
            eq("48-32=16"),
            eq("2*50=100"),
            eq("117/9=13"),
        ]
    }

    fn solver() -> Solver {
        Solver::with_corpus(small_corpus(), None, false)
    }

    #[test]
    fn first_guess_is_starting_equation() {
        let starting = eq("48-32=16");
        let mut solver = Solver::with_corpus(small_corpus(), Some(starting.clone()), false);
        assert_eq!(solver.best_guess(), Some(&starting));
    }

    #[test]
    fn default_starting_equation_is_top_ranked() {
        let mut solver = solver();
        let top = solver.solutions()[0].clone();
        assert_eq!(solver.starting_equation(), Some(&top));
        assert_eq!(solver.best_guess(), Some(&top));
    }

    #[test]
    fn score_rejects_bad_guess_length() {
        let mut solver = solver();
        assert_eq!(
            solver.score("15+23=3", "xxxxxxxx").unwrap_err(),
            InputError::GuessLength(7)
        );
    }

    #[test]
    fn score_rejects_bad_feedback_length() {
        let mut solver = solver();
        assert_eq!(
            solver.score("15+23=38", "xxxxxxx").unwrap_err(),
            InputError::FeedbackLength(7)
        );
    }

    #[test]
    fn score_rejects_bad_feedback_char() {
        let mut solver = solver();
        assert_eq!(
            solver.score("15+23=38", "xxxgxxxx").unwrap_err(),
            InputError::FeedbackChar('g')
        );
    }

    #[test]
    fn score_accepts_uppercase_feedback() {
        let mut solver = solver();
        assert!(solver.score("15+23=38", "XXXXXXXX").is_ok());
        assert_eq!(solver.history().len(), 1);
    }

    #[test]
    fn invalid_input_leaves_state_untouched() {
        let mut solver = solver();
        let before = solver.candidate_count();
        assert!(solver.score("15+23=38", "xxx?xxxx").is_err());
        assert_eq!(solver.candidate_count(), before);
        assert!(solver.history().is_empty());
    }

    #[test]
    fn all_hits_narrows_to_exactly_the_guess() {
        let mut solver = solver();
        solver.score("15+23=38", "xxxxxxxx").unwrap();
        assert_eq!(solver.solutions(), &[eq("15+23=38")]);
    }

    #[test]
    fn candidate_set_shrinks_monotonically() {
        let mut solver = solver();
        let mut previous = solver.candidate_count();

        for feedback in ["iixiexxx", "eexeexxe"] {
            solver.score("15+23=38", feedback).unwrap();
            let current = solver.candidate_count();
            assert!(current <= previous);
            previous = current;
        }
    }

    #[test]
    fn target_survives_its_own_feedback() {
        let corpus = small_corpus();
        for target in &corpus {
            for guess in &corpus {
                let mut solver = Solver::with_corpus(corpus.clone(), None, false);
                let feedback = Feedback::score(guess.as_str(), target.as_str());
                solver.apply(guess.as_str(), feedback);
                assert!(
                    solver.solutions().contains(target),
                    "target {target} eliminated by guess {guess}"
                );
            }
        }
    }

    #[test]
    fn blanket_exclusion_skips_repeated_characters() {
        // '1' appears twice in the guess; the miss at position 0 must not
        // remove candidates merely containing '1' (the target has one '1',
        // correctly placed at position 6).
        let corpus = vec![eq("48-32=16"), eq("12+26=38")];
        let mut solver = Solver::with_corpus(corpus, None, false);

        solver.score("11-32=16", "eixxxxxx").unwrap();
        assert_eq!(solver.solutions(), &[eq("48-32=16")]);
    }

    #[test]
    fn consistency_preserved_under_repeated_guess_chars() {
        // Guess and target both repeat characters; the target must survive
        // feedback computed against itself.
        let target = eq("11+11=22");
        let guess = eq("12+11=23");
        let corpus = vec![target.clone(), guess.clone(), eq("15+23=38")];
        let mut solver = Solver::with_corpus(corpus, None, false);

        let feedback = Feedback::score(guess.as_str(), target.as_str());
        assert_eq!(feedback.to_string(), "xixxxxxe");

        solver.apply(guess.as_str(), feedback);
        assert!(solver.solutions().contains(&target));
    }

    #[test]
    fn contradictory_feedback_empties_candidates() {
        let mut solver = solver();
        // Excluding '=' everywhere cannot be satisfied.
        solver.score("12+35=47", "eeeeeeee").unwrap();
        assert_eq!(solver.candidate_count(), 0);
        assert_eq!(solver.best_guess(), None);
    }

    #[test]
    fn reset_restores_supplied_corpus() {
        let corpus = small_corpus();
        let mut solver = Solver::with_corpus(corpus.clone(), None, false);
        solver.score("15+23=38", "xxxxxxxx").unwrap();
        assert_eq!(solver.candidate_count(), 1);

        solver.reset(Some(&corpus));
        assert_eq!(solver.candidate_count(), corpus.len());
        assert!(solver.history().is_empty());
    }

    #[test]
    fn score_chains() {
        let mut solver = solver();
        let feedback_a = Feedback::score("15+23=38", "12+26=38").to_string();
        let feedback_b = Feedback::score("48-32=16", "12+26=38").to_string();
        solver
            .score("15+23=38", &feedback_a)
            .unwrap()
            .score("48-32=16", &feedback_b)
            .unwrap();
        assert_eq!(solver.history().len(), 2);
        assert!(solver.solutions().contains(&eq("12+26=38")));
    }

    #[test]
    fn history_records_in_order() {
        let mut solver = solver();
        solver.score("15+23=38", "eeeeeeee").unwrap();
        solver.score("48-32=16", "XXXXXXXX").unwrap();

        let history = solver.history();
        assert_eq!(history[0].0, "15+23=38");
        assert_eq!(history[0].1.to_string(), "eeeeeeee");
        assert_eq!(history[1].0, "48-32=16");
        assert_eq!(history[1].1.to_string(), "xxxxxxxx");
    }
}
