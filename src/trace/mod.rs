mod formatter;

pub use formatter::TraceFormatter;

use crate::condition::{Operator, Value};

/// A record of how a single condition was checked.
#[derive(Debug, Clone, PartialEq)]
pub enum ConditionTrace {
    Compared {
        field: String,
        actual: Value,
        operator: Operator,
        expected: Value,
        outcome: bool,
    },
    /// The state source had no reading for the field.
    Unavailable { field: String },
    /// The stored operator is not one the evaluator knows.
    UnknownOperator { field: String, operator: String },
}

impl ConditionTrace {
    pub fn outcome(&self) -> bool {
        match self {
            ConditionTrace::Compared { outcome, .. } => *outcome,
            ConditionTrace::Unavailable { .. } | ConditionTrace::UnknownOperator { .. } => false,
        }
    }
}
