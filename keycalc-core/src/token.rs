//! Lexical tokens and the four arithmetic operators

use crate::error::CalcError;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Parse an operator character
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    /// Character used for this operator on the keypad
    pub const fn as_char(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength: `+ -` bind weaker than `* /`
    pub const fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Compute `lhs op rhs`
    ///
    /// Division by zero (either sign) is an error, never an infinity.
    pub fn apply(self, lhs: f32, rhs: f32) -> Result<f32, CalcError> {
        match self {
            Operator::Add => Ok(lhs + rhs),
            Operator::Sub => Ok(lhs - rhs),
            Operator::Mul => Ok(lhs * rhs),
            Operator::Div => {
                // -0.0 == 0.0 holds, so this covers both signed zeros
                if rhs == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                Ok(lhs / rhs)
            }
        }
    }
}

/// A classified lexical unit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Token {
    /// Numeric literal, sign included
    Number(f32),
    /// Binary operator
    Operator(Operator),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Whether a following `-` would start a signed literal
    ///
    /// True after an operator or an opening parenthesis.
    pub fn expects_operand(&self) -> bool {
        matches!(self, Token::Operator(_) | Token::LeftParen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_char_roundtrip() {
        for op in [Operator::Add, Operator::Sub, Operator::Mul, Operator::Div] {
            assert_eq!(Operator::from_char(op.as_char()), Some(op));
        }
        assert_eq!(Operator::from_char('^'), None);
        assert_eq!(Operator::from_char('('), None);
    }

    #[test]
    fn test_precedence() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
    }

    #[test]
    fn test_apply() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Sub.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Mul.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Div.apply(3.0, 2.0), Ok(1.5));
    }

    #[test]
    fn test_divide_by_signed_zero() {
        assert_eq!(Operator::Div.apply(1.0, 0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Div.apply(1.0, -0.0), Err(CalcError::DivisionByZero));
        assert_eq!(Operator::Div.apply(0.0, 0.0), Err(CalcError::DivisionByZero));
    }

    #[test]
    fn test_expects_operand() {
        assert!(Token::Operator(Operator::Mul).expects_operand());
        assert!(Token::LeftParen.expects_operand());
        assert!(!Token::RightParen.expects_operand());
        assert!(!Token::Number(1.0).expects_operand());
    }
}
