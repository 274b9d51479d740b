//! Constraint-based solving
//!
//! The [`Solver`] narrows the equation corpus under positional feedback;
//! [`frequency`] supplies the commonness heuristic used to rank candidates.

mod engine;
pub mod frequency;

pub use engine::{InputError, Solver};
