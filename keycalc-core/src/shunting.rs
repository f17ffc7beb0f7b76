//! Shunting-yard conversion from infix to postfix order
//!
//! Works on the token queue in place: the postfix sequence is built in a
//! local buffer of the same capacity and copied back on success. It never
//! holds more tokens than the input because parentheses are dropped.

use heapless::Vec;

use crate::config::CapacityPolicy;
use crate::containers::{OperatorStack, StackEntry, TokenQueue};
use crate::error::CalcError;
use crate::token::{Operator, Token};
use crate::MAX_TOKENS;

type Output = Vec<Token, MAX_TOKENS>;

/// Conversion pass state
struct Converter<'s> {
    operators: &'s mut OperatorStack,
    policy: CapacityPolicy,
    output: Output,
    /// Currently open `(` count
    open_parens: usize,
}

impl<'s> Converter<'s> {
    fn emit(&mut self, token: Token) -> Result<(), CalcError> {
        let pushed = self.output.push(token).map_err(|_| CalcError::Overflow);
        self.policy.absorb(pushed)
    }

    fn stack(&mut self, entry: StackEntry) -> Result<(), CalcError> {
        let pushed = self.operators.push(entry);
        self.policy.absorb(pushed)
    }

    fn operator(&mut self, op: Operator) -> Result<(), CalcError> {
        while let Some(&StackEntry::Operator(top)) = self.operators.peek() {
            if top.precedence() < op.precedence() {
                break;
            }
            self.operators.pop();
            self.emit(Token::Operator(top))?;
        }
        self.stack(StackEntry::Operator(op))
    }

    fn left_paren(&mut self) -> Result<(), CalcError> {
        self.stack(StackEntry::LeftParen)?;
        self.open_parens += 1;
        Ok(())
    }

    fn right_paren(&mut self) -> Result<(), CalcError> {
        if self.open_parens == 0 {
            debug!("unmatched ')'");
            return Err(CalcError::Syntax);
        }

        // A dropped `(` marker (truncating policy) leaves the counter up,
        // which the final balance check reports.
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::LeftParen => {
                    self.open_parens -= 1;
                    break;
                }
                StackEntry::Operator(op) => self.emit(Token::Operator(op))?,
            }
        }
        Ok(())
    }

    fn finish(mut self) -> Result<Output, CalcError> {
        while let Some(entry) = self.operators.pop() {
            match entry {
                StackEntry::LeftParen => {
                    debug!("unmatched '('");
                    return Err(CalcError::Syntax);
                }
                StackEntry::Operator(op) => self.emit(Token::Operator(op))?,
            }
        }

        if self.open_parens != 0 {
            debug!("{} parentheses left open", self.open_parens);
            return Err(CalcError::Syntax);
        }
        Ok(self.output)
    }
}

/// Rewrite `queue` from infix to postfix order
///
/// `operators` is cleared and used as scratch space. On error the queue
/// keeps its infix content.
pub fn to_postfix(
    queue: &mut TokenQueue,
    operators: &mut OperatorStack,
    policy: CapacityPolicy,
) -> Result<(), CalcError> {
    operators.clear();

    let mut converter = Converter {
        operators,
        policy,
        output: Output::new(),
        open_parens: 0,
    };

    for &token in queue.iter() {
        match token {
            Token::Number(_) => converter.emit(token)?,
            Token::Operator(op) => converter.operator(op)?,
            Token::LeftParen => converter.left_paren()?,
            Token::RightParen => converter.right_paren()?,
        }
    }

    let output = converter.finish()?;
    queue.replace(&output)
}
