//! Imperative shell around the engine.
//!
//! A `Session` owns the single current state of a calculator session and
//! swaps it for the next one on every command. It is the only place that
//! logs; the engine itself stays pure.

use crate::core::{Command, EngineState, Guard};

/// A calculator session holding the current engine state.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::{Command, Operator};
/// use rpn_engine::session::Session;
///
/// let mut session = Session::new();
/// session.run([
///     Command::append("6"),
///     Command::Commit,
///     Command::append("7"),
///     Command::Commit,
///     Command::Apply(Operator::Multiply),
/// ]);
///
/// assert_eq!(session.state().stack(), &[42.0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Session {
    current: EngineState,
}

impl Session {
    /// Start a session at the initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a session from an existing state.
    pub fn from_state(state: EngineState) -> Self {
        Self { current: state }
    }

    /// Get the current state.
    pub fn state(&self) -> &EngineState {
        &self.current
    }

    /// Consume the session, returning its final state.
    pub fn into_state(self) -> EngineState {
        self.current
    }

    /// Whether `command` would change anything from the current state.
    pub fn is_available(&self, command: &Command) -> bool {
        Guard::for_command(command).check(&self.current)
    }

    /// Apply one command and replace the current state with the result.
    pub fn dispatch(&mut self, command: &Command) -> &EngineState {
        let next = self.current.apply(command);

        // Stack manipulation carries the previous error forward; only
        // commit and operators produce new ones.
        if let (Command::Commit | Command::Apply(_), Some(error)) = (command, next.error()) {
            log::warn!("{} rejected: {}", describe(command), error);
        }
        log::debug!(
            "{} -> depth {}, input {:?}",
            describe(command),
            next.depth(),
            next.input()
        );

        self.current = next;
        &self.current
    }

    /// Dispatch every command in order.
    pub fn run<I>(&mut self, commands: I) -> &EngineState
    where
        I: IntoIterator<Item = Command>,
    {
        for command in commands {
            self.dispatch(&command);
        }
        &self.current
    }
}

fn describe(command: &Command) -> String {
    match command {
        Command::Append(token) => format!("Append({token:?})"),
        Command::Apply(op) => format!("Apply({op})"),
        other => other.name().to_string(),
    }
}
