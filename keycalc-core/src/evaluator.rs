//! Postfix evaluation
//!
//! Scans the postfix queue left to right on the operand stack. Operators pop
//! the right-hand operand first, then the left-hand one.

use crate::containers::{OperandStack, TokenQueue};
use crate::error::CalcError;
use crate::token::Token;

/// Evaluate a postfix token queue to a single value
///
/// `operands` is cleared and used as scratch space. The operand stack is
/// always strict: a ninth pending value fails with [`CalcError::Overflow`].
pub fn evaluate_postfix(queue: &TokenQueue, operands: &mut OperandStack) -> Result<f32, CalcError> {
    operands.clear();

    for token in queue {
        match *token {
            Token::Number(value) => {
                if operands.is_full() {
                    warn!("operand stack full");
                    return Err(CalcError::Overflow);
                }
                operands.push(value)?;
            }
            Token::Operator(op) => {
                if operands.len() < 2 {
                    debug!("'{}' is missing an operand", op.as_char());
                    return Err(CalcError::Syntax);
                }
                let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                    return Err(CalcError::Syntax);
                };
                let result = op.apply(lhs, rhs)?;
                operands.push(result)?;
            }
            // The converter never emits parentheses
            Token::LeftParen | Token::RightParen => return Err(CalcError::Syntax),
        }
    }

    if operands.len() != 1 {
        debug!("{} values left after evaluation", operands.len());
        return Err(CalcError::Syntax);
    }
    operands.pop().ok_or(CalcError::Syntax)
}
