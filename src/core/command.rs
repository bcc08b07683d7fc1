//! Commands accepted by the engine.

use super::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Binary arithmetic operator.
///
/// Operands follow RPN order: `a` is the earlier-pushed value (second from
/// the top), `b` is the top of the stack.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::Operator;
///
/// assert_eq!(Operator::Subtract.evaluate(10.0, 4.0), Ok(6.0));
/// assert!(Operator::Divide.evaluate(1.0, 0.0).is_err());
/// assert_eq!("÷".parse::<Operator>(), Ok(Operator::Divide));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// All operators, in keypad order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// ASCII symbol for the operator.
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Compute `a OP b` with IEEE-754 double semantics.
    ///
    /// Only a zero divisor is rejected; overflow to infinity is not.
    pub fn evaluate(&self, a: f64, b: f64) -> Result<f64, EngineError> {
        match self {
            Self::Add => Ok(a + b),
            Self::Subtract => Ok(a - b),
            Self::Multiply => Ok(a * b),
            Self::Divide if b == 0.0 => Err(EngineError::DivisionByZero),
            Self::Divide => Ok(a / b),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned when a string names no operator.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "+" => Ok(Self::Add),
            "-" | "−" => Ok(Self::Subtract),
            "*" | "×" => Ok(Self::Multiply),
            "/" | "÷" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// A single user command, consumed by [`EngineState::apply`].
///
/// [`EngineState::apply`]: super::EngineState::apply
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Append a token to the input buffer.
    Append(String),
    /// Parse the input buffer and push it.
    Commit,
    /// Apply a binary operator to the top two values.
    Apply(Operator),
    /// Reset to the initial state.
    Clear,
    /// Remove the top value.
    Drop,
    /// Push a copy of the top value.
    Duplicate,
    /// Exchange the top two values.
    Swap,
    /// Remove the last input character.
    Backspace,
}

impl Command {
    /// Name of the command for display/logging.
    pub fn name(&self) -> &str {
        match self {
            Self::Append(_) => "Append",
            Self::Commit => "Commit",
            Self::Apply(_) => "Apply",
            Self::Clear => "Clear",
            Self::Drop => "Drop",
            Self::Duplicate => "Duplicate",
            Self::Swap => "Swap",
            Self::Backspace => "Backspace",
        }
    }

    /// Shorthand for `Command::Append(token.into())`.
    pub fn append(token: impl Into<String>) -> Self {
        Self::Append(token.into())
    }
}

impl From<Operator> for Command {
    fn from(op: Operator) -> Self {
        Self::Apply(op)
    }
}
