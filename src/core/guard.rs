//! Availability predicates for commands.
//!
//! Transitions are total, so the engine never needs a guard to stay
//! consistent. Guards answer a different question for a front end: would
//! this command do anything useful right now? Keypads use them to disable
//! buttons.

use super::command::Command;
use super::state::EngineState;

/// Pure predicate over an engine state.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::{Command, EngineState, Guard, Operator};
///
/// let guard = Guard::for_command(&Command::Apply(Operator::Add));
///
/// assert!(!guard.check(&EngineState::new()));
/// assert!(guard.check(&EngineState::from_stack(vec![1.0, 2.0])));
///
/// let custom = Guard::new(|s: &EngineState| s.depth() > 3);
/// assert!(!custom.check(&EngineState::new()));
/// ```
pub struct Guard {
    predicate: Box<dyn Fn(&EngineState) -> bool + Send + Sync>,
}

impl Guard {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&EngineState) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that passes for every state.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Guard requiring at least `depth` values on the stack.
    pub fn min_depth(depth: usize) -> Self {
        Self::new(move |s| s.depth() >= depth)
    }

    /// The availability rule for a command.
    ///
    /// - operators and swap need two values
    /// - drop and duplicate need one value
    /// - commit needs non-blank input
    /// - backspace needs non-empty input
    /// - append and clear are always available
    pub fn for_command(command: &Command) -> Self {
        match command {
            Command::Apply(_) | Command::Swap => Self::min_depth(2),
            Command::Drop | Command::Duplicate => Self::min_depth(1),
            Command::Commit => Self::new(|s| !s.input().trim().is_empty()),
            Command::Backspace => Self::new(|s| !s.input().is_empty()),
            Command::Append(_) | Command::Clear => Self::always(),
        }
    }

    /// Check whether the guard passes for this state.
    pub fn check(&self, state: &EngineState) -> bool {
        (self.predicate)(state)
    }
}
