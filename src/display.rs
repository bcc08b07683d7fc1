//! Presentation helpers.
//!
//! Functions here read values from an [`EngineState`] and produce text or
//! previews for a front end. They never change stored values and hold no
//! pending state: a front end that animates an operator calls [`preview`]
//! right away, shows the result, and dispatches the real command later.

use crate::core::{EngineError, EngineState, Operator};

/// Formatting options for rendered values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Maximum number of fractional digits shown for non-integers.
    pub max_decimals: u32,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self { max_decimals: 4 }
    }
}

/// Render a value for display.
///
/// Integers print without a fractional part. Other finite values are
/// rounded to `max_decimals` places, with halfway values going toward
/// +∞; a value that rounds to an integer prints as that integer.
///
/// # Example
///
/// ```rust
/// use rpn_engine::display::{format_value, DisplayOptions};
///
/// let options = DisplayOptions::default();
/// assert_eq!(format_value(7.0, &options), "7");
/// assert_eq!(format_value(1.0 / 3.0, &options), "0.3333");
/// assert_eq!(format_value(2.99999, &options), "3");
/// ```
pub fn format_value(value: f64, options: &DisplayOptions) -> String {
    if !value.is_finite() || value.fract() == 0.0 {
        return value.to_string();
    }

    let scale = 10f64.powi(options.max_decimals.min(15) as i32);
    let rounded = round_half_up(value * scale) / scale;
    if !rounded.is_finite() {
        return value.to_string();
    }
    if rounded.fract() == 0.0 {
        // Avoid "-0" for tiny negatives.
        return (rounded + 0.0).to_string();
    }
    rounded.to_string()
}

/// Round to the nearest integer, sending halfway values toward +∞
/// (`-2.5` becomes `-2`), unlike `f64::round`.
fn round_half_up(x: f64) -> f64 {
    let floor = x.floor();
    if x - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Render the stack top first, one formatted value per entry.
pub fn format_stack(state: &EngineState, options: &DisplayOptions) -> Vec<String> {
    state
        .stack()
        .iter()
        .map(|value| format_value(*value, options))
        .collect()
}

/// The prospective outcome of applying an operator.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationPreview {
    /// Left operand (second from the top).
    pub a: f64,
    /// Right operand (the top).
    pub b: f64,
    pub operator: Operator,
    pub result: Result<f64, EngineError>,
}

impl OperationPreview {
    /// Render as `"a op b = result"`, or `"a op b: error"` when rejected.
    pub fn render(&self, options: &DisplayOptions) -> String {
        let lhs = format!(
            "{} {} {}",
            format_value(self.a, options),
            self.operator,
            format_value(self.b, options)
        );
        match &self.result {
            Ok(value) => format!("{lhs} = {}", format_value(*value, options)),
            Err(error) => format!("{lhs}: {error}"),
        }
    }
}

/// Compute what `op` would produce from `state` without applying it.
///
/// Returns `None` when fewer than two values are on the stack.
///
/// # Example
///
/// ```rust
/// use rpn_engine::core::{EngineState, Operator};
/// use rpn_engine::display::{preview, DisplayOptions};
///
/// let state = EngineState::from_stack(vec![3.0, 1.0]);
/// let pending = preview(&state, Operator::Divide).unwrap();
///
/// assert_eq!(pending.render(&DisplayOptions::default()), "1 / 3 = 0.3333");
/// assert_eq!(state.apply_operator(Operator::Divide).top(), pending.result.ok());
/// ```
pub fn preview(state: &EngineState, op: Operator) -> Option<OperationPreview> {
    let (a, b) = state.operands()?;
    Some(OperationPreview {
        a,
        b,
        operator: op,
        result: op.evaluate(a, b),
    })
}
