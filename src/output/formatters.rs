//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark};

/// Format feedback as an emoji string
#[must_use]
pub fn feedback_to_emoji(feedback: Feedback) -> String {
    feedback
        .marks()
        .iter()
        .map(|mark| match mark {
            Mark::Hit => '🟩',
            Mark::Misplaced => '🟨',
            Mark::Miss => '⬛',
        })
        .collect()
}

/// Format a guess alongside its emoji feedback, one line per turn
#[must_use]
pub fn score_board(guesses: &[String], scores: &[Feedback]) -> String {
    guesses
        .iter()
        .zip(scores)
        .enumerate()
        .map(|(i, (guess, &score))| {
            format!("Turn {}: {} {}", i + 1, guess, feedback_to_emoji(score))
        })
        .collect::<Vec<_>>()
        .join("\n")
}
