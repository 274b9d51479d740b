//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_benchmark_result, print_corpus_stats, print_round_result};
pub use formatters::{feedback_to_emoji, score_board};
