//! Simple interactive CLI mode
//!
//! Text-based assistant for playing Nerdle: suggests guesses, reads the
//! feedback the player received, and narrows candidates between turns.

use crate::core::{Equation, Feedback};
use crate::corpus::build_corpus;
use crate::output::formatters::feedback_to_emoji;
use crate::solver::Solver;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure reading user input.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_simple(starting_equation: Option<Equation>, logging: bool) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Nerdle Solver - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest equations ranked by character commonness.");
    println!("After each guess, enter the feedback you received:\n");
    println!("  - x = 🟩 green (correct position)");
    println!("  - i = 🟨 misplaced (wrong position)");
    println!("  - e = ⬛ black (not in equation)");
    println!("  - Or type 'win' if you got it right!\n");
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");

    // Built once; 'new' and 'undo' replay from this copy instead of
    // re-enumerating.
    let corpus = build_corpus();
    let mut solver = Solver::with_corpus(corpus.clone(), starting_equation, logging);
    let mut turn = 1;

    loop {
        let candidates_count = solver.candidate_count();

        if candidates_count == 0 {
            println!("\n❌ No candidates remain! Your feedback may be incorrect.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match get_user_input("Command")?.as_str() {
                "undo" | "u" => {
                    if undo_last(&mut solver, &corpus) {
                        turn -= 1;
                        println!("✓ Undone! Back to turn {turn}\n");
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" | "n" => {
                    solver.reset(Some(&corpus));
                    turn = 1;
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        let Some(guess) = solver.best_guess().map(|eq| eq.as_str().to_string()) else {
            continue;
        };

        println!("────────────────────────────────────────────────────────────");
        println!("Turn {turn}: {candidates_count} candidates remaining");
        println!("────────────────────────────────────────────────────────────");
        println!("\n📊 Suggested guess: {}", guess.bright_yellow().bold());

        if candidates_count <= 10 {
            println!("\nRemaining candidates:");
            for candidate in solver.solutions().iter().take(10) {
                println!("  • {candidate}");
            }
        }
        println!();

        let feedback = loop {
            let input =
                get_user_input("Enter feedback (x/i/e, 'win', or command)")?.to_lowercase();

            match input.as_str() {
                "quit" | "q" | "exit" => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
                "new" | "n" => {
                    solver.reset(Some(&corpus));
                    turn = 0; // Will be incremented to 1
                    println!("\n🔄 New game started!\n");
                    break None;
                }
                "undo" | "u" => {
                    if undo_last(&mut solver, &corpus) {
                        turn -= 2; // Net -1 after the increment below
                        println!("✓ Undone!\n");
                        break None;
                    }
                    println!("Nothing to undo!\n");
                }
                "win" | "correct" | "yes" | "solved" => {
                    break Some(Feedback::ALL_HITS);
                }
                _ => {
                    if let Some(feedback) = Feedback::from_str(&input) {
                        break Some(feedback);
                    }
                    println!("❌ Invalid feedback! Use exactly 8 of x/i/e, or 'win'\n");
                }
            }
        };

        if let Some(feedback) = feedback {
            solver.apply(&guess, feedback);
            println!("  {}", feedback_to_emoji(feedback));

            if feedback.is_solved() {
                println!("\n{}", "═".repeat(70).bright_cyan());
                println!(
                    "{}",
                    "    🎉 🎊 ✨  N E R D L E   S O L V E D !  ✨ 🎊 🎉    "
                        .bright_green()
                        .bold()
                );
                println!("{}", "═".repeat(70).bright_cyan());
                println!(
                    "\nSolved in {} guess{}: {}",
                    turn,
                    if turn == 1 { "" } else { "es" },
                    guess.bright_green().bold()
                );

                println!("\nType 'new' for another game, or 'quit' to exit.\n");
                match get_user_input("Command")?.as_str() {
                    "new" | "n" => {
                        solver.reset(Some(&corpus));
                        turn = 0;
                        println!("\n🔄 New game started!\n");
                    }
                    _ => {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                }
            }
        }

        turn += 1;
    }
}

/// Undo the last guess by replaying history against the cached corpus
///
/// The filtering passes are destructive, so undo rebuilds from the full set.
fn undo_last(solver: &mut Solver, corpus: &[Equation]) -> bool {
    let mut history: Vec<(String, Feedback)> = solver.history().to_vec();
    if history.pop().is_none() {
        return false;
    }

    solver.reset(Some(corpus));
    for (guess, feedback) in &history {
        solver.apply(guess, *feedback);
    }
    true
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    Ok(input.trim().to_string())
}
