//! Pure state transitions.
//!
//! Every method borrows the current state and returns the next one. None of
//! them fail: a rejected command is reported through the `error` field of
//! the returned state, or is a silent no-op, depending on the command.

use super::command::{Command, Operator};
use super::error::EngineError;
use super::state::EngineState;

impl EngineState {
    /// Dispatch a command to its transition.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rpn_engine::core::{Command, EngineState, Operator};
    ///
    /// let state = [
    ///     Command::append("3"),
    ///     Command::Commit,
    ///     Command::append("4"),
    ///     Command::Commit,
    ///     Command::Apply(Operator::Add),
    /// ]
    /// .iter()
    /// .fold(EngineState::new(), |state, command| state.apply(command));
    ///
    /// assert_eq!(state.stack(), &[7.0]);
    /// ```
    pub fn apply(&self, command: &Command) -> Self {
        match command {
            Command::Append(token) => self.append(token),
            Command::Commit => self.commit(),
            Command::Apply(op) => self.apply_operator(*op),
            Command::Clear => self.clear(),
            Command::Drop => self.drop(),
            Command::Duplicate => self.duplicate(),
            Command::Swap => self.swap(),
            Command::Backspace => self.backspace(),
        }
    }

    /// Append `token` to the input buffer and clear the error.
    ///
    /// The token is not validated here; parsing happens at commit.
    pub fn append(&self, token: &str) -> Self {
        let mut input = String::with_capacity(self.input.len() + token.len());
        input.push_str(&self.input);
        input.push_str(token);
        Self {
            stack: self.stack.clone(),
            input,
            error: None,
        }
    }

    /// Parse the input buffer and push the value.
    ///
    /// Blank input leaves the state untouched. Input that is not a finite
    /// decimal number is discarded and sets [`EngineError::InvalidNumber`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use rpn_engine::core::{EngineError, EngineState};
    ///
    /// let state = EngineState::new().append("12.5").commit();
    /// assert_eq!(state.stack(), &[12.5]);
    ///
    /// let state = state.append("abc").commit();
    /// assert_eq!(state.error(), Some(EngineError::InvalidNumber));
    /// assert_eq!(state.input(), "");
    /// assert_eq!(state.stack(), &[12.5]);
    /// ```
    pub fn commit(&self) -> Self {
        let text = self.input.trim();
        if text.is_empty() {
            return self.clone();
        }

        match parse_number(text) {
            Some(value) => {
                let mut stack = Vec::with_capacity(self.stack.len() + 1);
                stack.push(value);
                stack.extend_from_slice(&self.stack);
                Self {
                    stack,
                    input: String::new(),
                    error: None,
                }
            }
            None => Self {
                stack: self.stack.clone(),
                input: String::new(),
                error: Some(EngineError::InvalidNumber),
            },
        }
    }

    /// Replace the top two values `b` (top) and `a` with `a OP b`.
    ///
    /// With fewer than two values, or a zero divisor, the stack and input
    /// are kept and only the error is set.
    pub fn apply_operator(&self, op: Operator) -> Self {
        let Some((a, b)) = self.operands() else {
            return self.with_error(EngineError::InsufficientOperands);
        };

        match op.evaluate(a, b) {
            Ok(result) => {
                let mut stack = Vec::with_capacity(self.stack.len() - 1);
                stack.push(result);
                stack.extend_from_slice(&self.stack[2..]);
                Self {
                    stack,
                    input: String::new(),
                    error: None,
                }
            }
            Err(error) => self.with_error(error),
        }
    }

    /// Discard everything and return the initial state.
    pub fn clear(&self) -> Self {
        Self::new()
    }

    /// Remove the top value. No-op on an empty stack.
    pub fn drop(&self) -> Self {
        Self {
            stack: self.stack.iter().skip(1).copied().collect(),
            ..self.clone()
        }
    }

    /// Push a copy of the top value. No-op on an empty stack.
    pub fn duplicate(&self) -> Self {
        let Some(top) = self.top() else {
            return self.clone();
        };
        let mut stack = Vec::with_capacity(self.stack.len() + 1);
        stack.push(top);
        stack.extend_from_slice(&self.stack);
        Self {
            stack,
            ..self.clone()
        }
    }

    /// Exchange the top two values. No-op with fewer than two.
    pub fn swap(&self) -> Self {
        let mut next = self.clone();
        if next.stack.len() >= 2 {
            next.stack.swap(0, 1);
        }
        next
    }

    /// Remove the last character of the input buffer. No-op on empty input.
    pub fn backspace(&self) -> Self {
        let mut next = self.clone();
        next.input.pop();
        next
    }

    fn with_error(&self, error: EngineError) -> Self {
        Self {
            error: Some(error),
            ..self.clone()
        }
    }
}

/// Parse a decimal literal, accepting only finite results.
///
/// `f64::from_str` also accepts `inf` and `NaN` spellings and saturates
/// overflowing literals to infinity, so the finiteness check covers those.
fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stack(values: &[f64]) -> EngineState {
        EngineState::from_stack(values.to_vec())
    }

    #[test]
    fn append_concatenates_and_clears_error() {
        let state = stack(&[1.0]).apply_operator(Operator::Add);
        assert!(state.has_error());

        let state = state.append("1").append(".").append("5");
        assert_eq!(state.input(), "1.5");
        assert!(!state.has_error());
        assert_eq!(state.stack(), &[1.0]);
    }

    #[test]
    fn append_does_not_validate_tokens() {
        let state = EngineState::new().append("x!");
        assert_eq!(state.input(), "x!");
    }

    #[test]
    fn commit_pushes_parsed_value_on_top() {
        let state = stack(&[1.0]).append("42").commit();
        assert_eq!(state.stack(), &[42.0, 1.0]);
        assert_eq!(state.input(), "");
        assert_eq!(state.error(), None);
    }

    #[test]
    fn commit_accepts_decimal_forms() {
        for (text, expected) in [
            (".5", 0.5),
            ("5.", 5.0),
            ("-3", -3.0),
            ("+2", 2.0),
            ("1e3", 1000.0),
            (" 7 ", 7.0),
        ] {
            let state = EngineState::new().append(text).commit();
            assert_eq!(state.stack(), &[expected], "parsing {text:?}");
        }
    }

    #[test]
    fn commit_on_blank_input_is_noop() {
        let errored = stack(&[1.0]).apply_operator(Operator::Add);
        assert_eq!(errored.commit(), errored);

        let blank = errored.append("   ");
        assert_eq!(blank.commit(), blank);
    }

    #[test]
    fn commit_rejects_invalid_and_non_finite_input() {
        for text in ["abc", "1.2.3", "inf", "NaN", "infinity", "1e999", "."] {
            let state = stack(&[2.0]).append(text).commit();
            assert_eq!(state.error(), Some(EngineError::InvalidNumber), "{text:?}");
            assert_eq!(state.input(), "");
            assert_eq!(state.stack(), &[2.0]);
        }
    }

    #[test]
    fn operator_combines_top_two_values() {
        let state = stack(&[4.0, 10.0, 99.0]).append("5");
        let next = state.apply_operator(Operator::Subtract);
        assert_eq!(next.stack(), &[6.0, 99.0]);
        assert_eq!(next.input(), "");
        assert_eq!(next.error(), None);

        let next = stack(&[4.0, 10.0]).apply_operator(Operator::Divide);
        assert_eq!(next.stack(), &[2.5]);
    }

    #[test]
    fn operator_needs_two_values() {
        for state in [EngineState::new(), stack(&[3.0]).append("9")] {
            let next = state.apply_operator(Operator::Multiply);
            assert_eq!(next.stack(), state.stack());
            assert_eq!(next.input(), state.input());
            assert_eq!(next.error(), Some(EngineError::InsufficientOperands));
        }
    }

    #[test]
    fn divide_by_zero_is_rejected() {
        let state = stack(&[0.0, 7.0]).append("3");
        let next = state.apply_operator(Operator::Divide);
        assert_eq!(next.stack(), &[0.0, 7.0]);
        assert_eq!(next.input(), "3");
        assert_eq!(next.error(), Some(EngineError::DivisionByZero));
    }

    #[test]
    fn operator_overflow_follows_ieee() {
        let next = stack(&[f64::MAX, f64::MAX]).apply_operator(Operator::Add);
        assert_eq!(next.stack(), &[f64::INFINITY]);
        assert_eq!(next.error(), None);
    }

    #[test]
    fn clear_returns_initial_state() {
        let state = stack(&[1.0, 2.0]).append("3").apply_operator(Operator::Divide);
        assert_eq!(state.clear(), EngineState::new());
        assert_eq!(state.clear().clear(), state.clear());
    }

    #[test]
    fn drop_removes_top_value() {
        assert_eq!(stack(&[1.0, 2.0]).drop().stack(), &[2.0]);
        assert_eq!(EngineState::new().drop(), EngineState::new());
    }

    #[test]
    fn duplicate_copies_top_value() {
        assert_eq!(stack(&[1.0, 2.0]).duplicate().stack(), &[1.0, 1.0, 2.0]);
        assert_eq!(EngineState::new().duplicate(), EngineState::new());
    }

    #[test]
    fn swap_exchanges_top_two_values() {
        assert_eq!(stack(&[1.0, 2.0, 3.0]).swap().stack(), &[2.0, 1.0, 3.0]);
        let single = stack(&[1.0]);
        assert_eq!(single.swap(), single);
    }

    #[test]
    fn stack_manipulation_keeps_error_and_input() {
        let state = EngineState {
            stack: vec![0.0, 5.0],
            input: "3".to_string(),
            error: Some(EngineError::DivisionByZero),
        };
        for next in [state.drop(), state.duplicate(), state.swap()] {
            assert_eq!(next.error(), Some(EngineError::DivisionByZero));
            assert_eq!(next.input(), state.input());
        }
    }

    #[test]
    fn backspace_removes_last_character() {
        let state = EngineState::new().append("12");
        assert_eq!(state.backspace().input(), "1");
        assert_eq!(state.backspace().backspace().backspace().input(), "");
        assert_eq!(EngineState::new().backspace(), EngineState::new());
    }

    #[test]
    fn backspace_removes_whole_multibyte_character() {
        let state = EngineState::new().append("1÷");
        assert_eq!(state.backspace().input(), "1");
    }

    #[test]
    fn apply_dispatches_each_command() {
        let state = stack(&[2.0, 8.0]);
        assert_eq!(state.apply(&Command::append("1")), state.append("1"));
        assert_eq!(state.apply(&Command::Commit), state.commit());
        assert_eq!(
            state.apply(&Command::Apply(Operator::Divide)),
            state.apply_operator(Operator::Divide)
        );
        assert_eq!(state.apply(&Command::Clear), EngineState::new());
        assert_eq!(state.apply(&Command::Drop), state.drop());
        assert_eq!(state.apply(&Command::Duplicate), state.duplicate());
        assert_eq!(state.apply(&Command::Swap), state.swap());
        assert_eq!(state.apply(&Command::Backspace), state.backspace());
    }

    #[test]
    fn transitions_do_not_modify_the_original() {
        let state = stack(&[1.0, 2.0]);
        let _ = state.apply_operator(Operator::Add);
        let _ = state.drop();
        let _ = state.append("3");
        assert_eq!(state.stack(), &[1.0, 2.0]);
        assert_eq!(state.input(), "");
    }
}
