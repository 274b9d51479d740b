//! Nerdle Solver
//!
//! A solver for Nerdle, the arithmetic-equation guessing game: 8-character
//! equations over digits and `+ - * / =`, narrowed by positional feedback
//! and ranked by character commonness.
//!
//! # Quick Start
//!
//! ```rust
//! use nerdle_solver::core::{Equation, Feedback};
//!
//! let guess = Equation::new("15+23=38").unwrap();
//! let target = Equation::new("12+26=38").unwrap();
//!
//! let feedback = Feedback::score(guess.as_str(), target.as_str());
//! assert_eq!(feedback.to_string(), "xexxixxx");
//! ```

// Core domain types
pub mod core;

// Equation enumeration
pub mod corpus;

// Solving algorithms
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
