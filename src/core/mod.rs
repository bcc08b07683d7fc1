//! The pure calculator engine.
//!
//! This module contains the functional core:
//! - `EngineState`, the immutable value describing a session
//! - `Command` and `Operator`, the inputs the engine accepts
//! - transition methods that map a state and a command to a new state
//! - `Guard` predicates describing when a command is worth offering
//!
//! Nothing here performs I/O, reads clocks or logs.

mod command;
mod error;
mod guard;
mod state;
mod transition;

pub use command::{Command, Operator, UnknownOperator};
pub use error::EngineError;
pub use guard::Guard;
pub use state::EngineState;
