//! Bounded LIFO stacks

use heapless::Vec;

use crate::error::CalcError;
use crate::token::Operator;
use crate::{MAX_OPERANDS, MAX_OPERATORS};

/// Entry on the operator stack during conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StackEntry {
    /// Pending binary operator
    Operator(Operator),
    /// `(` marker; never emitted to the output
    LeftParen,
}

/// Fixed-capacity stack
#[derive(Debug, Clone)]
pub struct BoundedStack<T, const N: usize> {
    items: Vec<T, N>,
}

/// Operators and `(` markers, scratch state of one conversion pass
pub type OperatorStack = BoundedStack<StackEntry, MAX_OPERATORS>;

/// Intermediate values, scratch state of one evaluation pass
pub type OperandStack = BoundedStack<f32, MAX_OPERANDS>;

impl<T, const N: usize> Default for BoundedStack<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> BoundedStack<T, N> {
    /// Create an empty stack
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push a value
    ///
    /// Fails with [`CalcError::Overflow`] when the stack is full.
    pub fn push(&mut self, item: T) -> Result<(), CalcError> {
        self.items.push(item).map_err(|_| CalcError::Overflow)
    }

    /// Pop the top value
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top value
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of values on the stack
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the stack is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if another push would overflow
    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Fixed capacity
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Drop all values
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
