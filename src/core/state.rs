//! The engine state value.
//!
//! An `EngineState` is never mutated in place. Every transition borrows the
//! current value and returns a new one.

use super::error::EngineError;
use serde::{Deserialize, Serialize};

/// Complete state of one calculator session.
///
/// - `stack`: values, index 0 is the top. Committed input is always
///   finite, but arithmetic follows IEEE-754, so an overflowing operator
///   can leave an infinity (and infinities can combine into NaN).
/// - `input`: text typed but not yet committed.
/// - `error`: advisory outcome of the last transition.
///
/// Equality treats two NaN stack entries as equal, so a state always
/// equals its own clone.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::EngineState;
///
/// let state = EngineState::new();
/// assert!(state.stack().is_empty());
/// assert_eq!(state.input(), "");
/// assert!(state.error().is_none());
/// assert_eq!(state, EngineState::default());
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineState {
    #[serde(with = "stack_values")]
    pub(crate) stack: Vec<f64>,
    pub(crate) input: String,
    pub(crate) error: Option<EngineError>,
}

impl PartialEq for EngineState {
    fn eq(&self, other: &Self) -> bool {
        self.stack.len() == other.stack.len()
            && self
                .stack
                .iter()
                .zip(&other.stack)
                .all(|(a, b)| a == b || (a.is_nan() && b.is_nan()))
            && self.input == other.input
            && self.error == other.error
    }
}

impl EngineState {
    /// The canonical initial state: empty stack, empty input, no error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a state from stack values listed top first.
    ///
    /// Input is empty and no error is set. Any value is accepted, including
    /// the infinities an overflowing operator leaves behind, so a stack read
    /// from one state always restores.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rpn_engine::core::{EngineState, Operator};
    ///
    /// let state = EngineState::from_stack(vec![4.0, 3.0]);
    /// assert_eq!(state.top(), Some(4.0));
    /// assert_eq!(state.depth(), 2);
    ///
    /// let overflowed = EngineState::from_stack(vec![f64::MAX, f64::MAX])
    ///     .apply_operator(Operator::Add);
    /// let restored = EngineState::from_stack(overflowed.stack().to_vec());
    /// assert_eq!(restored.top(), Some(f64::INFINITY));
    /// ```
    pub fn from_stack(values: Vec<f64>) -> Self {
        Self {
            stack: values,
            ..Self::default()
        }
    }

    /// Committed values, top first.
    pub fn stack(&self) -> &[f64] {
        &self.stack
    }

    /// Text typed but not yet committed.
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Error left by the last transition, if any.
    pub fn error(&self) -> Option<EngineError> {
        self.error
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// The top value (most recently pushed).
    pub fn top(&self) -> Option<f64> {
        self.stack.first().copied()
    }

    /// Number of values on the stack.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// The two operands of a binary operator as `(a, b)`, where `b` is the
    /// top and `a` the value beneath it.
    pub fn operands(&self) -> Option<(f64, f64)> {
        match self.stack.as_slice() {
            [b, a, ..] => Some((*a, *b)),
            _ => None,
        }
    }
}

/// Serde adapter for stack values.
///
/// Finite values are plain numbers. JSON has no spelling for infinity or
/// NaN, so those are written as the strings `"inf"`, `"-inf"` and `"NaN"`.
mod stack_values {
    use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum StackValue {
        Number(f64),
        Text(String),
    }

    impl From<f64> for StackValue {
        fn from(value: f64) -> Self {
            if value.is_finite() {
                StackValue::Number(value)
            } else {
                StackValue::Text(value.to_string())
            }
        }
    }

    pub fn serialize<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(values.iter().copied().map(StackValue::from))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Vec::<StackValue>::deserialize(deserializer)?
            .into_iter()
            .map(|value| match value {
                StackValue::Number(n) => Ok(n),
                StackValue::Text(text) => match text.as_str() {
                    "inf" => Ok(f64::INFINITY),
                    "-inf" => Ok(f64::NEG_INFINITY),
                    "NaN" => Ok(f64::NAN),
                    other => Err(de::Error::invalid_value(
                        de::Unexpected::Str(other),
                        &"a number, \"inf\", \"-inf\" or \"NaN\"",
                    )),
                },
            })
            .collect()
    }
}
