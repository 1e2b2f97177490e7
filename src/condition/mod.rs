mod operator;
mod runtime;
mod value;

pub use operator::Operator;
pub use runtime::*;
pub use value::Value;

/// Evaluates `actual <operator> expected` for an operator stored as text.
///
/// An operator that is not one of `<`, `<=`, `=`, `>=`, `>` or `!=` makes the
/// condition unmet instead of failing, so a corrupted record only disables
/// its own automation step.
pub fn evaluate(operator: &str, actual: &Value, expected: &Value) -> bool {
    Operator::parse(operator).is_some_and(|op| op.apply(actual, expected))
}
