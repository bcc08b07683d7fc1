//! RPN Engine: a pure functional Reverse Polish Notation calculator core
//!
//! The engine follows a "pure core, imperative shell" layout. The core is a
//! single immutable [`EngineState`] value and a fixed set of total
//! transitions; a [`Session`] wraps it for callers that want a mutable
//! handle and logging.
//!
//! # Core Concepts
//!
//! - **State**: stack (top first), input buffer and advisory error
//! - **Commands**: digit entry, commit, operators and stack manipulation
//! - **Errors**: reported in the returned state, never thrown
//! - **Guards**: predicates telling a front end which commands apply
//!
//! # Example
//!
//! ```rust
//! use rpn_engine::core::{EngineError, EngineState, Operator};
//!
//! let state = EngineState::new()
//!     .append("3")
//!     .commit()
//!     .append("4")
//!     .commit()
//!     .apply_operator(Operator::Add);
//! assert_eq!(state.stack(), &[7.0]);
//!
//! let state = state.append("0").commit().apply_operator(Operator::Divide);
//! assert_eq!(state.error(), Some(EngineError::DivisionByZero));
//! assert_eq!(state.stack(), &[0.0, 7.0]);
//! ```

pub mod core;
pub mod display;
pub mod session;

// Re-export commonly used types
pub use crate::core::{Command, EngineError, EngineState, Guard, Operator};
pub use session::Session;
