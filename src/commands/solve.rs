//! Round solving command
//!
//! Plays a full round against a known target equation and returns the
//! solution path.

use crate::core::{Equation, Feedback};
use crate::corpus::build_corpus;
use crate::solver::Solver;
use std::fmt;

/// Safety cap on guesses per round; normal rounds finish in a handful.
pub const ATTEMPT_CAP: usize = 100;

/// Result of playing a round to completion
#[derive(Debug)]
pub struct RoundResult {
    pub target: String,
    pub attempts: usize,
    pub first_guess: String,
    /// Every guess made, in order; the last one equals the target.
    pub guesses: Vec<String>,
    /// Feedback for each guess, parallel to `guesses`.
    pub scores: Vec<Feedback>,
    /// Candidate count after each guess was applied, parallel to `guesses`.
    pub remaining: Vec<usize>,
}

/// Failure modes of a round
#[derive(Debug)]
pub enum RoundError {
    /// The candidate set emptied before reaching the target.
    Exhausted {
        target: String,
        attempts: usize,
        prior_guess: Option<String>,
    },
    /// The attempt cap was hit without solving.
    AttemptCap { target: String, cap: usize },
}

impl fmt::Display for RoundError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted {
                target,
                attempts,
                prior_guess,
            } => {
                write!(
                    f,
                    "No candidates remain for target {target} after {attempts} guesses"
                )?;
                if let Some(guess) = prior_guess {
                    write!(f, " (last guess: {guess})")?;
                }
                Ok(())
            }
            Self::AttemptCap { target, cap } => {
                write!(f, "Failed to solve {target} within {cap} guesses")
            }
        }
    }
}

impl std::error::Error for RoundError {}

/// Play a round against a target with a freshly generated corpus
///
/// # Errors
///
/// Returns [`RoundError`] if the candidate set empties before the target is
/// found, or the attempt cap is reached.
pub fn play_round(
    target: &Equation,
    starting_equation: Option<Equation>,
    logging: bool,
) -> Result<RoundResult, RoundError> {
    let mut solver = Solver::with_corpus(build_corpus(), starting_equation, logging);
    play_round_with(&mut solver, target)
}

/// Play a round against a target using an existing solver
///
/// The solver is consumed as-is (no reset), so batch callers reset between
/// rounds. Feedback for the winning guess is still applied, keeping the
/// `remaining` record aligned with `guesses`.
///
/// # Errors
///
/// Returns [`RoundError`] if the candidate set empties before the target is
/// found, or the attempt cap is reached.
pub fn play_round_with(
    solver: &mut Solver,
    target: &Equation,
) -> Result<RoundResult, RoundError> {
    let mut guesses: Vec<String> = Vec::new();
    let mut scores: Vec<Feedback> = Vec::new();
    let mut remaining: Vec<usize> = Vec::new();

    for attempt in 1..=ATTEMPT_CAP {
        let Some(guess) = solver.best_guess().map(|eq| eq.as_str().to_string()) else {
            return Err(RoundError::Exhausted {
                target: target.as_str().to_string(),
                attempts: attempt - 1,
                prior_guess: guesses.last().cloned(),
            });
        };

        let feedback = Feedback::score(&guess, target.as_str());
        solver.apply(&guess, feedback);

        guesses.push(guess);
        scores.push(feedback);
        remaining.push(solver.candidate_count());

        if feedback.is_solved() {
            let first_guess = guesses[0].clone();
            return Ok(RoundResult {
                target: target.as_str().to_string(),
                attempts: attempt,
                first_guess,
                guesses,
                scores,
                remaining,
            });
        }
    }

    Err(RoundError::AttemptCap {
        target: target.as_str().to_string(),
        cap: ATTEMPT_CAP,
    })
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

    #[test]
    fn round_solves_target_in_small_corpus() {
        let target = eq("12+26=38");
        let mut solver = Solver::with_corpus(small_corpus(), None, false);

        let result = play_round_with(&mut solver, &target).unwrap();

        assert_eq!(result.target, "12+26=38");
        assert_eq!(result.guesses.last().unwrap(), "12+26=38");
        assert!(result.scores.last().unwrap().is_solved());
        assert_eq!(result.guesses.len(), result.attempts);
        assert_eq!(result.scores.len(), result.attempts);
        assert_eq!(result.remaining.len(), result.attempts);
        assert!(result.attempts <= small_corpus().len());
    }

    #[test]
    fn round_records_first_guess() {
        let target = eq("48-32=16");
        let starting = eq("15+23=38");
        let mut solver = Solver::with_corpus(small_corpus(), Some(starting), false);

        let result = play_round_with(&mut solver, &target).unwrap();
        assert_eq!(result.first_guess, "15+23=38");
        assert_eq!(result.guesses[0], "15+23=38");
    }

    #[test]
    fn remaining_counts_never_increase() {
        let target = eq("2*50=100");
        let mut solver = Solver::with_corpus(small_corpus(), None, false);

        let result = play_round_with(&mut solver, &target).unwrap();
        for pair in result.remaining.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }

    #[test]
    fn round_fails_when_target_outside_corpus() {
        // The target shares no characters with some candidates but is never
        // in the set, so the solver must run out of candidates.
        let corpus = vec![eq("15+23=38"), eq("23+15=38")];
        let target = eq("48-32=16");
        let mut solver = Solver::with_corpus(corpus, None, false);

        let err = play_round_with(&mut solver, &target).unwrap_err();
        assert!(matches!(err, RoundError::Exhausted { .. }));
    }

    #[test]
    fn full_corpus_round_solves_known_target() {
        let target = eq("15+23=38");
        let result = play_round(&target, None, false).unwrap();

        assert_eq!(result.guesses.last().unwrap(), "15+23=38");
        assert!(result.scores.last().unwrap().is_solved());
        assert!(result.attempts < ATTEMPT_CAP);
    }

    #[test]
    fn full_corpus_round_solves_duplicate_heavy_target() {
        // Repeated characters exercise the duplicate-aware miss handling
        // end to end.
        let target = eq("11+11=22");
        let result = play_round(&target, None, false).unwrap();

        assert_eq!(result.guesses.last().unwrap(), "11+11=22");
        assert!(result.scores.last().unwrap().is_solved());
    }

    #[test]
    fn every_small_corpus_target_is_solvable() {
        let corpus = small_corpus();
        for target in &corpus {
            let mut solver = Solver::with_corpus(corpus.clone(), None, false);
            let result = play_round_with(&mut solver, target).unwrap();
            assert_eq!(&result.guesses.last().unwrap()[..], target.as_str());
        }
    }
}
