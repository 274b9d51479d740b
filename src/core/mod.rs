//! Core domain types for Nerdle
//!
//! This module contains the fundamental domain types with zero external dependencies.
//! All types here are pure, testable, and have clear mathematical properties.

mod equation;
mod feedback;

pub use equation::{EQUATION_LEN, Equation, EquationError};
pub use feedback::{Feedback, Mark};
