use crate::condition::{self, Value};
use serde::{Deserialize, Serialize};
use std::fs;

pub type EntityId = i64;

/// A persisted trigger: what starts an automation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trigger {
    pub id: EntityId,
    #[serde(flatten)]
    pub kind: TriggerKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TriggerKind {
    /// Fires when a device reports a new value for a field.
    StateChange { device_id: EntityId, field: String },
    /// Fires on a cron schedule owned by the host's scheduler.
    Schedule { cron: String },
    /// Fires every `seconds`.
    Interval { seconds: u64 },
    /// Fired by a user from the dashboard.
    Manual,
}

/// A persisted condition gating the rest of a path.
///
/// `operator` is kept as the stored text so that a corrupted value still
/// loads; it evaluates to "not met".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    pub id: EntityId,
    #[serde(default)]
    pub device_id: Option<EntityId>,
    pub field: String,
    pub operator: String,
    pub value: Value,
}

impl Condition {
    /// Checks a live reading against this condition's stored threshold.
    pub fn evaluate(&self, actual: &Value) -> bool {
        condition::evaluate(&self.operator, actual, &self.value)
    }
}

/// A persisted action: the effect performed by the host's dispatcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub id: EntityId,
    #[serde(flatten)]
    pub kind: ActionKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ActionKind {
    DeviceCommand {
        device_id: EntityId,
        command: String,
        #[serde(default)]
        payload: serde_json::Value,
    },
    Notification {
        message: String,
        #[serde(default)]
        recipients: Vec<String>,
    },
    Log {
        message: String,
    },
}

/// The child records of one automation, as loaded by the host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecordSet {
    #[serde(default)]
    pub triggers: Vec<Trigger>,
    #[serde(default)]
    pub conditions: Vec<Condition>,
    #[serde(default)]
    pub actions: Vec<Action>,
}

impl RecordSet {
    /// Load a record set from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }
}
