//! Exhaustive equation enumeration
//!
//! Four independent enumerators, one per operator, each producing the
//! `(left, right, result)` triples whose rendered equation is exactly 8
//! characters. The length filter is the sole mechanism enforcing the
//! 1-to-3-digit operand bounds; the ranges only bound the search.

use crate::core::{EQUATION_LEN, Equation};

/// Number of equations generated per operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorCounts {
    pub addition: usize,
    pub subtraction: usize,
    pub multiplication: usize,
    pub division: usize,
}

impl OperatorCounts {
    /// Total corpus size
    #[must_use]
    pub const fn total(&self) -> usize {
        self.addition + self.subtraction + self.multiplication + self.division
    }
}

/// Build the full corpus: all valid 8-character equations for all four operators
///
/// The four enumerations are concatenated (division, multiplication,
/// subtraction, addition) and pre-sorted descending by distinct-character
/// count. The solver re-sorts with the finer frequency heuristic.
///
/// Generation is deterministic: two runs produce identical sequences.
#[must_use]
pub fn build_corpus() -> Vec<Equation> {
    build_corpus_with_counts().0
}

/// Build the full corpus along with per-operator counts
///
/// The counts are informational only (surfaced by the `corpus` CLI
/// subcommand); they are not part of the solving contract.
#[must_use]
pub fn build_corpus_with_counts() -> (Vec<Equation>, OperatorCounts) {
    let divisions = build_division_corpus();
    let multiplications = build_multiplication_corpus();
    let subtractions = build_subtraction_corpus();
    let additions = build_addition_corpus();

    let counts = OperatorCounts {
        addition: additions.len(),
        subtraction: subtractions.len(),
        multiplication: multiplications.len(),
        division: divisions.len(),
    };

    let mut corpus: Vec<Equation> = [divisions, multiplications, subtractions, additions]
        .into_iter()
        .flatten()
        .collect();

    // Coarse pre-sort; stable, so ordering stays deterministic.
    corpus.sort_by_cached_key(|eq| std::cmp::Reverse(eq.distinct_chars()));

    (corpus, counts)
}

/// All valid addition equations `A+B=C`
///
/// For every sum in [0, 999], every split into two non-negative operands.
fn build_addition_corpus() -> Vec<Equation> {
    let mut out = Vec::new();
    for result in 0..=999u32 {
        for left in 0..=result {
            let right = result - left;
            push_if_eight(&mut out, format!("{left}+{right}={result}"));
        }
    }
    out
}

/// All valid subtraction equations `A-B=C` with a non-negative difference
fn build_subtraction_corpus() -> Vec<Equation> {
    let mut out = Vec::new();
    for left in 0..=999u32 {
        for result in 0..=left {
            let right = left - result;
            push_if_eight(&mut out, format!("{left}-{right}={result}"));
        }
    }
    out
}

/// All valid multiplication equations `A*B=C`
///
/// Products start at 1 to avoid the degenerate `0*0=0` family; operands are
/// the divisor pairs of each product.
fn build_multiplication_corpus() -> Vec<Equation> {
    let mut out = Vec::new();
    for result in 1..=999u32 {
        for left in divisors(result) {
            let right = result / left;
            push_if_eight(&mut out, format!("{left}*{right}={result}"));
        }
    }
    out
}

/// All valid division equations `A/B=C` with exact integer quotients
fn build_division_corpus() -> Vec<Equation> {
    let mut out = Vec::new();
    for left in 1..=999u32 {
        for result in divisors(left) {
            let right = left / result;
            if right == 0 {
                continue;
            }
            push_if_eight(&mut out, format!("{left}/{right}={result}"));
        }
    }
    out
}

/// All positive integers d in [1, n] with n mod d == 0
///
/// Zero is never a divisor under this definition.
fn divisors(n: u32) -> Vec<u32> {
    (1..=n).filter(|d| n % d == 0).collect()
}

/// Keep only 8-character renderings; this is the operand-width filter
fn push_if_eight(out: &mut Vec<Equation>, text: String) {
    if text.len() == EQUATION_LEN {
        if let Ok(eq) = Equation::new(text) {
            out.push(eq);
        }
    }
}
