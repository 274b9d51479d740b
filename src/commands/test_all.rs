//! Test all targets - comprehensive solver evaluation
//!
//! Runs the solver against every equation in the corpus and generates
//! statistics. Rounds are independent, so they run in parallel with one
//! solver per worker thread.

use crate::commands::solve::play_round_with;
use crate::core::Equation;
use crate::solver::Solver;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result from testing a single target
#[derive(Debug, Clone)]
pub struct TargetTestResult {
    pub target: String,
    pub attempts: usize,
    pub success: bool,
}

/// Statistics from testing all targets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_targets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: HashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub worst_targets: Vec<(String, usize)>,
    pub failed_targets: Vec<String>,
}

/// Run the solver on every corpus equation (or a limited subset)
///
/// If `starting_equation` is provided it is used as the first guess for
/// every round instead of the top-ranked candidate.
pub fn run_test_all(
    corpus: &[Equation],
    limit: Option<usize>,
    starting_equation: Option<&Equation>,
) -> TestAllStatistics {
    let targets: Vec<&Equation> = corpus
        .iter()
        .take(limit.unwrap_or(corpus.len()))
        .collect();

    println!("🎯 Testing {} equations...", targets.len());

    let pb = ProgressBar::new(targets.len() as u64);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    let total_start = Instant::now();

    let results: Vec<TargetTestResult> = targets
        .par_iter()
        .map_init(
            || Solver::with_corpus(corpus.to_vec(), starting_equation.cloned(), false),
            |solver, target| {
                solver.reset(Some(corpus));
                let result = match play_round_with(solver, target) {
                    Ok(round) => TargetTestResult {
                        target: round.target,
                        attempts: round.attempts,
                        success: true,
                    },
                    Err(_) => TargetTestResult {
                        target: target.as_str().to_string(),
                        attempts: 0,
                        success: false,
                    },
                };
                pb.inc(1);
                result
            },
        )
        .collect();

    pb.finish_with_message("Complete!");

    let total_time = total_start.elapsed();

    let solved = results.iter().filter(|r| r.success).count();
    let failed = results.len() - solved;

    let mut guess_distribution: HashMap<usize, usize> = HashMap::new();
    for result in results.iter().filter(|r| r.success) {
        *guess_distribution.entry(result.attempts).or_insert(0) += 1;
    }

    let total_guesses: usize = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.attempts)
        .sum();
    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };

    let max_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.attempts)
        .max()
        .unwrap_or(0);
    let min_guesses = results
        .iter()
        .filter(|r| r.success)
        .map(|r| r.attempts)
        .min()
        .unwrap_or(0);

    let mut worst_targets: Vec<(String, usize)> = results
        .iter()
        .filter(|r| r.success)
        .map(|r| (r.target.clone(), r.attempts))
        .collect();
    worst_targets.sort_by_key(|(_, n)| std::cmp::Reverse(*n));
    worst_targets.truncate(10);

    let failed_targets: Vec<String> = results
        .iter()
        .filter(|r| !r.success)
        .map(|r| r.target.clone())
        .collect();

    TestAllStatistics {
        total_targets: results.len(),
        solved,
        failed,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        worst_targets,
        failed_targets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(70));
    println!(" Test Results ");
    println!("{}", "═".repeat(70));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total equations tested: {}", stats.total_targets);
    println!(
        "  Successfully solved:    {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_targets as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:        {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_targets as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:        {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Total time:             {:.2}s",
        stats.total_time.as_secs_f64()
    );
    println!(
        "  Time per equation:      {:.1}ms",
        stats.total_time.as_millis() as f64 / stats.total_targets as f64
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = *stats.guess_distribution.values().max().unwrap_or(&1);
    let mut attempt_counts: Vec<usize> = stats.guess_distribution.keys().copied().collect();
    attempt_counts.sort_unstable();
    for attempts in attempt_counts {
        let count = stats.guess_distribution[&attempts];
        let percentage = count as f64 / stats.solved as f64 * 100.0;
        let bar_len = if max_count > 0 {
            (count * 40 / max_count).max(usize::from(count > 0))
        } else {
            0
        };
        let bar = format!(
            "{}{}",
            "█".repeat(bar_len).green(),
            "░".repeat(40_usize.saturating_sub(bar_len)).bright_black()
        );
        println!("  {attempts} guesses: {bar} {count:5} ({percentage:5.1}%)");
    }

    if !stats.worst_targets.is_empty() {
        println!("\n😰 {}", "Hardest Equations".yellow().bold());
        for (target, attempts) in stats.worst_targets.iter().take(5) {
            println!("  {} ({} guesses)", target.yellow(), attempts);
        }
    }

    if !stats.failed_targets.is_empty() {
        println!("\n❌ {}", "Unsolved Equations".red().bold());
        for target in stats.failed_targets.iter().take(10) {
            println!("  {}", target.red());
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

    #[test]
    fn test_all_solves_small_corpus() {
        let corpus = small_corpus();
        let stats = run_test_all(&corpus, None, None);

        assert_eq!(stats.total_targets, corpus.len());
        assert_eq!(stats.solved, corpus.len());
        assert_eq!(stats.failed, 0);
        assert!(stats.failed_targets.is_empty());
        assert!(stats.average_guesses >= 1.0);
        assert_eq!(
            stats.guess_distribution.values().sum::<usize>(),
            corpus.len()
        );
    }

    #[test]
    fn test_all_respects_limit() {
        let corpus = small_corpus();
        let stats = run_test_all(&corpus, Some(2), None);
        assert_eq!(stats.total_targets, 2);
    }

    #[test]
    fn test_all_uses_forced_starting_equation() {
        let corpus = small_corpus();
        let starting = eq("117/9=13");
        let stats = run_test_all(&corpus, Some(1), Some(&starting));
        // The round against the forced start's own target solves in one.
        assert!(stats.min_guesses >= 1);
        assert_eq!(stats.solved, 1);
    }
}
