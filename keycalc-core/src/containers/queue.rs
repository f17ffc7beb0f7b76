//! Bounded token queue
//!
//! Filled by the lexer in infix order, then overwritten in place by the
//! shunting-yard converter with the postfix form.

use heapless::Vec;

use crate::error::CalcError;
use crate::token::Token;
use crate::MAX_TOKENS;

/// Fixed-capacity ordered sequence of tokens
#[derive(Debug, Clone, Default)]
pub struct TokenQueue {
    tokens: Vec<Token, MAX_TOKENS>,
}

impl TokenQueue {
    /// Create an empty queue
    pub const fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Append a token
    ///
    /// Fails with [`CalcError::Overflow`] when the queue is full.
    pub fn push(&mut self, token: Token) -> Result<(), CalcError> {
        self.tokens.push(token).map_err(|_| CalcError::Overflow)
    }

    /// Token at `index`
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Number of tokens
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check if another push would overflow
    pub fn is_full(&self) -> bool {
        self.tokens.is_full()
    }

    /// Drop all tokens
    pub fn clear(&mut self) {
        self.tokens.clear();
    }

    /// Tokens in queue order
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    /// Iterate in queue order
    pub fn iter(&self) -> core::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Replace the whole content
    ///
    /// On overflow the queue keeps its previous content.
    pub fn replace(&mut self, tokens: &[Token]) -> Result<(), CalcError> {
        let replacement = Vec::from_slice(tokens).map_err(|_| CalcError::Overflow)?;
        self.tokens = replacement;
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TokenQueue {
    type Item = &'a Token;
    type IntoIter = core::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
