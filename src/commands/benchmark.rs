//! Benchmark command
//!
//! Tests solver performance across a random sample of target equations.

use crate::commands::solve::play_round_with;
use crate::core::Equation;
use crate::solver::Solver;
use rand::seq::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_targets: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: HashMap<usize, usize>,
    pub duration: Duration,
    pub targets_per_second: f64,
}

/// Run a benchmark over `count` targets sampled from the corpus
///
/// The corpus is built once; each round reuses a single solver reset from
/// the cached copy rather than re-enumerating equations.
pub fn run_benchmark(
    corpus: &[Equation],
    count: usize,
    starting_equation: Option<Equation>,
) -> BenchmarkResult {
    let mut rng = rand::rng();
    let targets: Vec<&Equation> = corpus.choose_multiple(&mut rng, count).collect();

    let start = Instant::now();
    let mut total_guesses = 0;
    let mut solved = 0;
    let mut min_guesses = usize::MAX;
    let mut max_guesses = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    let mut solver = Solver::with_corpus(corpus.to_vec(), starting_equation, false);

    for target in &targets {
        solver.reset(Some(corpus));

        if let Ok(result) = play_round_with(&mut solver, target) {
            solved += 1;
            total_guesses += result.attempts;
            min_guesses = min_guesses.min(result.attempts);
            max_guesses = max_guesses.max(result.attempts);
            *distribution.entry(result.attempts).or_insert(0) += 1;
        }
    }

    let duration = start.elapsed();
    let total_targets = targets.len();
    let failed = total_targets - solved;

    BenchmarkResult {
        total_targets,
        solved,
        failed,
        total_guesses,
        average_guesses: if solved > 0 {
            total_guesses as f64 / solved as f64
        } else {
            0.0
        },
        min_guesses: if solved > 0 { min_guesses } else { 0 },
        max_guesses,
        distribution,
        duration,
        targets_per_second: total_targets as f64 / duration.as_secs_f64(),
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
    fn benchmark_runs_on_small_corpus() {
        let corpus = small_corpus();
        let result = run_benchmark(&corpus, 4, None);

        assert_eq!(result.total_targets, 4);
        assert_eq!(result.solved, 4);
        assert_eq!(result.failed, 0);
        assert!(result.total_guesses >= 4);
        assert!(result.average_guesses >= 1.0);
        assert!(result.min_guesses <= result.max_guesses);
        assert_eq!(result.distribution.values().sum::<usize>(), 4);
    }

    #[test]
    fn benchmark_caps_sample_at_corpus_size() {
        let corpus = small_corpus();
        let result = run_benchmark(&corpus, 100, None);
        assert_eq!(result.total_targets, corpus.len());
    }
}
