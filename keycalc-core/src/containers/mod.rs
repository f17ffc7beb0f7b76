//! Fixed-capacity containers used as scratch space by the pipeline
//!
//! All operations are O(1). A push beyond capacity never grows the storage;
//! it returns [`CalcError::Overflow`](crate::CalcError::Overflow) and leaves
//! the container untouched.

pub mod queue;
pub mod stack;

pub use queue::TokenQueue;
pub use stack::{BoundedStack, OperandStack, OperatorStack, StackEntry};
