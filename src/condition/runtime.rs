use super::{Operator, Value};
use crate::entity::{Condition, EntityId};
use crate::trace::{ConditionTrace, TraceFormatter};
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fs;
use tracing::debug;

/// Supplies live readings for condition checks.
///
/// `device_id` is `None` for conditions that are not bound to a device.
pub trait StateSource {
    fn current_value(&self, device_id: Option<EntityId>, field: &str) -> Option<Value>;
}

impl<F> StateSource for F
where
    F: Fn(Option<EntityId>, &str) -> Option<Value>,
{
    fn current_value(&self, device_id: Option<EntityId>, field: &str) -> Option<Value> {
        self(device_id, field)
    }
}

/// A snapshot of device readings, matching the expected JSON format.
///
/// ```json
/// { "devices": { "7": { "temperature": 30 } }, "globals": { "mode": "away" } }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeviceState {
    #[serde(default)]
    pub devices: AHashMap<EntityId, AHashMap<String, Value>>,
    #[serde(default)]
    pub globals: AHashMap<String, Value>,
}

impl DeviceState {
    /// Load a state snapshot from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let state = serde_json::from_str(&content)?;
        Ok(state)
    }

    pub fn set(&mut self, device_id: EntityId, field: &str, value: impl Into<Value>) {
        self.devices
            .entry(device_id)
            .or_default()
            .insert(field.to_string(), value.into());
    }
}

impl StateSource for DeviceState {
    fn current_value(&self, device_id: Option<EntityId>, field: &str) -> Option<Value> {
        match device_id {
            Some(id) => self.devices.get(&id)?.get(field).cloned(),
            None => self.globals.get(field).cloned(),
        }
    }
}

/// The result of checking one condition against live state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionOutcome {
    pub condition_id: EntityId,
    pub met: bool,
    pub reason: String,
}

pub fn trace_condition(condition: &Condition, source: &dyn StateSource) -> ConditionTrace {
    let field = condition.field.clone();
    let Some(operator) = Operator::parse(&condition.operator) else {
        return ConditionTrace::UnknownOperator {
            field,
            operator: condition.operator.clone(),
        };
    };
    let Some(actual) = source.current_value(condition.device_id, &condition.field) else {
        return ConditionTrace::Unavailable { field };
    };

    let outcome = operator.apply(&actual, &condition.value);
    ConditionTrace::Compared {
        field,
        actual,
        operator,
        expected: condition.value.clone(),
        outcome,
    }
}

pub fn check_condition(condition: &Condition, source: &dyn StateSource) -> ConditionOutcome {
    let trace = trace_condition(condition, source);
    let outcome = ConditionOutcome {
        condition_id: condition.id,
        met: trace.outcome(),
        reason: TraceFormatter::format_trace(&trace),
    };
    debug!(
        condition_id = condition.id,
        met = outcome.met,
        reason = %outcome.reason,
        "Checked condition"
    );
    outcome
}

/// Checks every condition, in order. Callers decide how to combine them.
pub fn check_conditions<'a, I>(conditions: I, source: &dyn StateSource) -> Vec<ConditionOutcome>
where
    I: IntoIterator<Item = &'a Condition>,
{
    conditions
        .into_iter()
        .map(|c| check_condition(c, source))
        .collect()
}
