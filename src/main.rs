//! Nerdle Solver - CLI
//!
//! Solves 8-character arithmetic equations from positional feedback, using a
//! character-commonness ranking heuristic over an enumerated corpus.

use anyhow::Result;
use clap::{Parser, Subcommand};
use nerdle_solver::{
    commands::{
        play_round, print_test_all_statistics, run_benchmark, run_simple, run_test_all,
    },
    core::Equation,
    corpus::{build_corpus, build_corpus_with_counts},
    output::{print_benchmark_result, print_corpus_stats, print_round_result},
};

#[derive(Parser)]
#[command(
    name = "nerdle_solver",
    about = "Nerdle solver using constraint filtering and character-frequency ranking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the first guess (default: top-ranked corpus equation)
    #[arg(short = 'f', long, global = true)]
    first: Option<String>,

    /// Log candidate-drop counts to stderr while filtering
    #[arg(short, long, global = true)]
    logging: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive assistant mode (default)
    Simple,

    /// Solve a specific target equation
    Solve {
        /// The target equation, e.g. "15+23=38"
        target: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Benchmark solver performance on random targets
    Benchmark {
        /// Number of random targets to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test the solver on ALL corpus equations
    TestAll {
        /// Limit number of equations to test
        #[arg(short = 't', long)]
        limit: Option<usize>,
    },

    /// Print per-operator corpus statistics
    Corpus,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let first = cli
        .first
        .as_deref()
        .map(Equation::new)
        .transpose()
        .map_err(|e| anyhow::anyhow!("Invalid first guess: {e}"))?;

    // Default to the interactive assistant if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            run_simple(first, cli.logging).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { target, verbose } => run_solve_command(&target, first, cli.logging, verbose),
        Commands::Benchmark { count } => {
            run_benchmark_command(count, first);
            Ok(())
        }
        Commands::TestAll { limit } => {
            run_test_all_command(limit, first.as_ref());
            Ok(())
        }
        Commands::Corpus => {
            run_corpus_command();
            Ok(())
        }
    }
}

fn run_solve_command(
    target: &str,
    first: Option<Equation>,
    logging: bool,
    verbose: bool,
) -> Result<()> {
    let target = Equation::new(target).map_err(|e| anyhow::anyhow!("Invalid target: {e}"))?;

    let result = play_round(&target, first, logging)?;
    print_round_result(&result, verbose);
    Ok(())
}

fn run_benchmark_command(count: usize, first: Option<Equation>) {
    if let Some(first) = &first {
        println!("Running benchmark on {count} random equations with forced first guess: {first}...");
    } else {
        println!("Running benchmark on {count} random equations...");
    }

    let corpus = build_corpus();
    let result = run_benchmark(&corpus, count, first);
    print_benchmark_result(&result);
}

fn run_test_all_command(limit: Option<usize>, first: Option<&Equation>) {
    println!("\n{}", "═".repeat(70));
    println!(" Comprehensive Nerdle Solver Test ");
    println!("{}", "═".repeat(70));

    let corpus = build_corpus();
    println!("\nTesting against {} possible equations", corpus.len());
    if let Some(first) = first {
        println!("Forced first guess: {first}");
    }
    println!();

    let stats = run_test_all(&corpus, limit, first);
    print_test_all_statistics(&stats);
}

fn run_corpus_command() {
    let (corpus, counts) = build_corpus_with_counts();
    print_corpus_stats(&counts, corpus.len());
}
