//! Nerdle equation representation
//!
//! An Equation is an 8-character string of the form `A<op>B=C` whose arithmetic
//! identity holds exactly. Operand widths vary, so the operator and `=` are
//! located by scanning rather than by fixed position.

use std::fmt;

/// Number of characters in every equation, guess, and feedback string
pub const EQUATION_LEN: usize = 8;

/// A validated 8-character arithmetic equation
///
/// Stores the text plus its byte view for position-indexed access during
/// candidate filtering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Equation {
    text: String,
    bytes: [u8; EQUATION_LEN],
}

/// Error type for invalid equations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EquationError {
    InvalidLength(usize),
    InvalidCharacter(char),
    /// Missing or misplaced operator / equals sign
    Malformed,
    /// An operand or result is rendered with a leading zero
    LeadingZero,
    /// The arithmetic identity does not hold for the operator
    IdentityMismatch,
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Equation must be exactly {EQUATION_LEN} characters, got {len}")
            }
            Self::InvalidCharacter(ch) => {
                write!(f, "Equation contains invalid character '{ch}'")
            }
            Self::Malformed => write!(f, "Equation must have the form A<op>B=C"),
            Self::LeadingZero => write!(f, "Operands and result must not have leading zeros"),
            Self::IdentityMismatch => write!(f, "Equation arithmetic does not hold"),
        }
    }
}

impl std::error::Error for EquationError {}

impl Equation {
    /// Create a new Equation from a string
    ///
    /// # Errors
    /// Returns `EquationError` if:
    /// - Length is not exactly 8
    /// - Any character is outside digits, `+-*/`, and `=`
    /// - The `A<op>B=C` structure is missing or out of order
    /// - An operand or the result has a leading zero
    /// - The operator's arithmetic identity does not hold (division must be
    ///   integer-exact, subtraction must not go negative)
    ///
    /// # Examples
    /// ```
    /// use nerdle_solver::core::Equation;
    ///
    /// let eq = Equation::new("15+23=38").unwrap();
    /// assert_eq!(eq.as_str(), "15+23=38");
    ///
    /// assert!(Equation::new("15+23=39").is_err());
    /// assert!(Equation::new("81/9=9").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, EquationError> {
        let text: String = text.into();

        if text.len() != EQUATION_LEN || !text.is_ascii() {
            return Err(EquationError::InvalidLength(text.chars().count()));
        }

        if let Some(bad) = text
            .chars()
            .find(|c| !c.is_ascii_digit() && !matches!(c, '+' | '-' | '*' | '/' | '='))
        {
            return Err(EquationError::InvalidCharacter(bad));
        }

        // Locate the operator and the equals sign by scanning; operand widths
        // vary so neither position is fixed.
        let op_index = text
            .find(['+', '-', '*', '/'])
            .ok_or(EquationError::Malformed)?;
        let eq_index = text.find('=').ok_or(EquationError::Malformed)?;

        if op_index == 0 || eq_index < op_index + 2 || eq_index == EQUATION_LEN - 1 {
            return Err(EquationError::Malformed);
        }

        let left = parse_operand(&text[..op_index])?;
        let right = parse_operand(&text[op_index + 1..eq_index])?;
        let result = parse_operand(&text[eq_index + 1..])?;

        let holds = match text.as_bytes()[op_index] {
            b'+' => left.checked_add(right) == Some(result),
            b'-' => left.checked_sub(right) == Some(result),
            b'*' => left.checked_mul(right) == Some(result),
            b'/' => right > 0 && left % right == 0 && left / right == result,
            _ => unreachable!("operator located above"),
        };

        if !holds {
            return Err(EquationError::IdentityMismatch);
        }

        // Safe to unwrap as we validated length == 8
        let bytes: [u8; EQUATION_LEN] = text
            .as_bytes()
            .try_into()
            .expect("length already validated");

        Ok(Self { text, bytes })
    }

    /// Get the equation as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Get the equation as a byte array
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; EQUATION_LEN] {
        &self.bytes
    }

    /// Get the character at a specific position (0-7)
    ///
    /// # Panics
    /// Panics if position >= 8
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.bytes[position] as char
    }

    /// Check if the equation contains a character at any position
    #[inline]
    #[must_use]
    pub fn contains(&self, ch: char) -> bool {
        self.text.contains(ch)
    }

    /// Count the distinct characters in the equation
    ///
    /// The ranking heuristic prefers equations with many distinct characters.
    #[must_use]
    pub fn distinct_chars(&self) -> u32 {
        // The alphabet is ASCII, so a bitmask over byte values suffices.
        let mut seen = 0u128;
        for &b in &self.bytes {
            seen |= 1 << b;
        }
        seen.count_ones()
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// Parse a 1-to-3 digit operand with no sign and no leading zero
fn parse_operand(field: &str) -> Result<u32, EquationError> {
    if field.is_empty() || field.len() > 3 {
        return Err(EquationError::Malformed);
    }
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EquationError::Malformed);
    }
    if field.len() > 1 && field.starts_with('0') {
        return Err(EquationError::LeadingZero);
    }
    field.parse().map_err(|_| EquationError::Malformed)
}
