//! Display functions for command results

use super::formatters::{feedback_to_emoji, score_board};
use crate::commands::{BenchmarkResult, RoundResult};
use crate::corpus::OperatorCounts;
use colored::Colorize;

/// Print the solution path for a round
pub fn print_round_result(result: &RoundResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!("Solving: {}", result.target.bright_yellow().bold());
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        for (i, (guess, score)) in result.guesses.iter().zip(&result.scores).enumerate() {
            println!("\nTurn {}: {} {}", i + 1, guess, feedback_to_emoji(*score));
            if i == 0 {
                println!("  Candidates: {}", result.remaining[i]);
            } else {
                println!(
                    "  Candidates: {} → {}",
                    result.remaining[i - 1],
                    result.remaining[i]
                );
            }
        }
    } else {
        println!("\n{}", score_board(&result.guesses, &result.scores));
    }

    println!(
        "\n{}",
        format!("✅ Solved in {} guesses!", result.attempts)
            .green()
            .bold()
    );
}

/// Print benchmark statistics
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Benchmark Results".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Targets tested:    {}", result.total_targets);
    println!("  Solved:            {}", result.solved);
    if result.failed > 0 {
        println!("  Failed:            {}", result.failed.to_string().red());
    }
    println!(
        "  Average guesses:   {}",
        format!("{:.3}", result.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!("  Min / Max:         {} / {}", result.min_guesses, result.max_guesses);
    println!("  Total time:        {:.2}s", result.duration.as_secs_f64());
    println!("  Targets/second:    {:.1}", result.targets_per_second);

    let mut attempt_counts: Vec<usize> = result.distribution.keys().copied().collect();
    attempt_counts.sort_unstable();
    if !attempt_counts.is_empty() {
        println!("\n  Distribution:");
        for attempts in attempt_counts {
            println!("    {} guesses: {}", attempts, result.distribution[&attempts]);
        }
    }
}

/// Print per-operator corpus statistics
pub fn print_corpus_stats(counts: &OperatorCounts, total: usize) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "Corpus Statistics".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n  Addition:        {:6}", counts.addition);
    println!("  Subtraction:     {:6}", counts.subtraction);
    println!("  Multiplication:  {:6}", counts.multiplication);
    println!("  Division:        {:6}", counts.division);
    println!("  {}", "─".repeat(24));
    println!(
        "  Total:           {}",
        format!("{total:6}").bright_yellow().bold()
    );
}
