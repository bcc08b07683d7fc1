//! Advisory errors produced by engine transitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Outcome of a rejected transition.
///
/// Errors never escape the engine as `Err` values or panics. A transition
/// stores them in the returned state, and the next transition replaces or
/// clears them.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineError {
    /// The input buffer did not parse as a finite number.
    #[error("Invalid number")]
    InvalidNumber,

    /// `divide` was applied with a zero divisor on top of the stack.
    #[error("Division by zero")]
    DivisionByZero,

    /// An operator needs two stack values but fewer were present.
    #[error("Need at least two values")]
    InsufficientOperands,
}
