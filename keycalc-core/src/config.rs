//! Calculator configuration
//!
//! Small, `Copy` settings that the front end may persist alongside its own
//! configuration. Expressions themselves are never stored.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::CalcError;

/// What a bounded container does when a push would exceed its capacity
///
/// The operand stack ignores this and always reports overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CapacityPolicy {
    /// Reject the push with [`CalcError::Overflow`]
    #[default]
    Strict,
    /// Drop the pushed item and carry on
    Truncate,
}

impl CapacityPolicy {
    /// Apply the policy to the outcome of a push
    pub fn absorb(self, pushed: Result<(), CalcError>) -> Result<(), CalcError> {
        match (self, pushed) {
            (CapacityPolicy::Truncate, Err(CalcError::Overflow)) => {
                trace!("capacity reached, item dropped");
                Ok(())
            }
            (_, result) => result,
        }
    }
}

/// Calculator settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalcConfig {
    /// Overflow handling for the operator stack and token queue
    pub capacity_policy: CapacityPolicy,
}

impl CalcConfig {
    /// Legacy behavior: full containers silently drop pushes
    pub const fn permissive() -> Self {
        Self {
            capacity_policy: CapacityPolicy::Truncate,
        }
    }
}
