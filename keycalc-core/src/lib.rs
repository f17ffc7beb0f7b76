//! Board-agnostic expression evaluator for the keypad calculator
//!
//! This crate contains everything between the keypad and the display that
//! does not depend on hardware:
//!
//! - Bounded containers (operator stack, operand stack, token queue)
//! - Numeric text conversion (literal parsing, 5-decimal result formatting)
//! - Lexer, shunting-yard converter and postfix evaluator
//! - Expression editor with a scrollable 16-column window
//! - The [`Calculator`] context tying the pipeline together
//!
//! Nothing here allocates. Every container has a fixed capacity and running
//! out of room is reported as [`CalcError::Overflow`].

#![no_std]
#![deny(unsafe_code)]

#[macro_use]
mod fmt;

pub mod calculator;
pub mod config;
pub mod containers;
pub mod editor;
pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod numeric;
pub mod shunting;
pub mod token;

pub use calculator::{Calculator, Evaluation};
pub use config::{CalcConfig, CapacityPolicy};
pub use containers::{BoundedStack, OperandStack, OperatorStack, StackEntry, TokenQueue};
pub use editor::{DisplayWindow, ExpressionEditor};
pub use error::{CalcError, CODE_OK};
pub use numeric::{format_number, parse_number, ResultText};
pub use token::{Operator, Token};

/// Maximum expression length in characters
pub const MAX_EXPR_LEN: usize = 32;

/// Token queue capacity
pub const MAX_TOKENS: usize = 32;

/// Operator stack capacity (operators plus `(` markers)
pub const MAX_OPERATORS: usize = 16;

/// Operand stack capacity
pub const MAX_OPERANDS: usize = 8;

/// Width of the expression window on the character display
pub const DISPLAY_WIDTH: usize = 16;

/// Fractional digits kept when formatting a result
pub const RESULT_DECIMALS: usize = 5;

/// Capacity of the formatted result text
///
/// Sign, the 39 integer digits of the largest `f32`, the point and five
/// decimals.
pub const MAX_RESULT_LEN: usize = 1 + 39 + 1 + RESULT_DECIMALS;
