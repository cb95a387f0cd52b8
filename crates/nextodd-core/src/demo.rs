//! Illustrative invocations printed by `nextodd demo`.

use crate::coerce::Input;
use crate::error::Result;
use crate::policy::Policy;

/// The fixed example inputs: integers of both parities, zero, a negative,
/// a float that truncates, and a numeric string.
pub fn demo_inputs() -> Vec<Input> {
    vec![
        Input::Integer(3),
        Input::Integer(4),
        Input::Integer(0),
        Input::Integer(-1),
        Input::Float(2.9),
        Input::from("5"),
    ]
}

/// Format a successful evaluation as `"{input} -> {result}"`.
pub fn render_line(input: &Input, result: i64) -> String {
    format!("{} -> {}", input, result)
}

pub fn render_outcome(input: &Input, outcome: &Result<i64>) -> String {
    match outcome {
        Ok(result) => render_line(input, *result),
        Err(e) => format!("{} -> error: {}", input, e),
    }
}

/// Evaluate every demo input under `policy`, one rendered line each.
pub fn demo_lines(policy: Policy) -> Vec<String> {
    demo_inputs()
        .iter()
        .map(|input| render_outcome(input, &policy.evaluate(input)))
        .collect()
}
