//! Lexer: raw expression text to infix tokens
//!
//! Scans left to right. A `-` starts a signed literal when it opens the
//! expression or follows an operator or `(`; anywhere else it is the binary
//! minus. Lexing stops at the first unrecognized character.

use crate::config::CapacityPolicy;
use crate::containers::TokenQueue;
use crate::error::CalcError;
use crate::numeric::parse_number;
use crate::token::{Operator, Token};

/// Streaming tokenizer over an expression
///
/// Yields `Err(CalcError::Syntax)` once on a malformed construct and then
/// stops.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    last: Option<Token>,
    failed: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `input`
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            last: None,
            failed: false,
        }
    }

    /// Whether a `-` at the current position starts a literal
    fn minus_is_sign(&self) -> bool {
        self.last.map_or(true, |token| token.expects_operand())
    }

    /// Consume a literal starting at the current position
    fn number(&mut self) -> Result<Token, CalcError> {
        let input = self.input;
        let bytes = input.as_bytes();
        let start = self.pos;

        if bytes[self.pos] == b'-' {
            self.pos += 1;
        }

        let mut seen_dot = false;
        while let Some(&byte) = bytes.get(self.pos) {
            match byte {
                b'0'..=b'9' => {}
                b'.' if seen_dot => {
                    debug!("second decimal point at {}", self.pos);
                    return Err(CalcError::Syntax);
                }
                b'.' => seen_dot = true,
                _ => break,
            }
            self.pos += 1;
        }

        Ok(Token::Number(parse_number(&input[start..self.pos])))
    }

    fn scan(&mut self) -> Option<Result<Token, CalcError>> {
        let input = self.input;
        let bytes = input.as_bytes();

        while bytes.get(self.pos) == Some(&b' ') {
            self.pos += 1;
        }
        let byte = *bytes.get(self.pos)?;

        let token = match byte {
            b'0'..=b'9' | b'.' => self.number(),
            b'-' if self.minus_is_sign() => self.number(),
            b'(' => {
                self.pos += 1;
                Ok(Token::LeftParen)
            }
            b')' => {
                self.pos += 1;
                Ok(Token::RightParen)
            }
            _ => match Operator::from_char(char::from(byte)) {
                Some(op) => {
                    self.pos += 1;
                    Ok(Token::Operator(op))
                }
                None => {
                    debug!("unexpected byte {=u8:#x} at {}", byte, self.pos);
                    Err(CalcError::Syntax)
                }
            },
        };

        Some(token)
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, CalcError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let item = self.scan()?;
        match item {
            Ok(token) => self.last = Some(token),
            Err(_) => self.failed = true,
        }
        Some(item)
    }
}

/// Tokenize `input` into `queue`, replacing its content
///
/// `policy` decides what happens when the queue fills up.
pub fn tokenize(
    input: &str,
    queue: &mut TokenQueue,
    policy: CapacityPolicy,
) -> Result<(), CalcError> {
    queue.clear();
    for token in Lexer::new(input) {
        policy.absorb(queue.push(token?))?;
    }
    trace!("lexed {} tokens", queue.len());
    Ok(())
}
