use super::ConditionTrace;
use crate::condition::Value;

/// Formats condition traces into human-readable reasons for the run log.
pub struct TraceFormatter;

impl TraceFormatter {
    /// e.g. `temperature (was 30) > 25`
    pub fn format_trace(trace: &ConditionTrace) -> String {
        match trace {
            ConditionTrace::Compared {
                field,
                actual,
                operator,
                expected,
                outcome,
            } => {
                let comparison = format!(
                    "{} (was {}) {} {}",
                    field,
                    Self::format_value(actual),
                    operator,
                    Self::format_value(expected)
                );
                if *outcome {
                    comparison
                } else {
                    format!("NOT {}", comparison)
                }
            }
            ConditionTrace::Unavailable { field } => format!("{} unavailable", field),
            ConditionTrace::UnknownOperator { field, operator } => {
                format!("{}: unknown operator '{}'", field, operator)
            }
        }
    }

    fn format_value(value: &Value) -> String {
        match value {
            Value::Text(s) => format!("\"{}\"", s),
            other => other.to_string(),
        }
    }
}
