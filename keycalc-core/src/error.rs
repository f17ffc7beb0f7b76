//! Evaluation errors
//!
//! Every failure aborts the current pass immediately. The caller gets the
//! error kind, its numeric code and a fixed message for the display.

use core::fmt;

/// Numeric code reported for a successful evaluation
pub const CODE_OK: u8 = 0;

/// Errors raised by the evaluation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalcError {
    /// Unrecognized character, malformed numeral, unmatched parenthesis,
    /// or too few / too many operands
    Syntax,
    /// Right-hand operand of `/` is zero (either sign)
    DivisionByZero,
    /// A bounded container ran out of room, or the result is not finite
    Overflow,
}

impl CalcError {
    /// Numeric error code
    pub const fn code(self) -> u8 {
        match self {
            CalcError::Syntax => 1,
            CalcError::DivisionByZero => 2,
            CalcError::Overflow => 3,
        }
    }

    /// Look up an error from its numeric code
    ///
    /// Returns `None` for [`CODE_OK`] and unknown codes.
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(CalcError::Syntax),
            2 => Some(CalcError::DivisionByZero),
            3 => Some(CalcError::Overflow),
            _ => None,
        }
    }

    /// Fixed diagnostic shown on the result line
    ///
    /// Overflow has no message of its own; it is told apart from a syntax
    /// error by its code only.
    pub const fn message(self) -> &'static str {
        match self {
            CalcError::Syntax | CalcError::Overflow => "Syntax error",
            CalcError::DivisionByZero => "Div by zero",
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(CalcError::Syntax.code(), 1);
        assert_eq!(CalcError::DivisionByZero.code(), 2);
        assert_eq!(CalcError::Overflow.code(), 3);
    }

    #[test]
    fn test_from_code() {
        for err in [CalcError::Syntax, CalcError::DivisionByZero, CalcError::Overflow] {
            assert_eq!(CalcError::from_code(err.code()), Some(err));
        }
        assert_eq!(CalcError::from_code(CODE_OK), None);
        assert_eq!(CalcError::from_code(42), None);
    }

    #[test]
    fn test_messages() {
        assert_eq!(CalcError::Syntax.message(), "Syntax error");
        assert_eq!(CalcError::DivisionByZero.message(), "Div by zero");
        assert_eq!(CalcError::Overflow.message(), "Syntax error");
    }
}
