use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The part a node plays in an automation flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeRole {
    Trigger,
    Condition,
    Action,
    Start,
    End,
}

impl NodeRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeRole::Trigger => "trigger",
            NodeRole::Condition => "condition",
            NodeRole::Action => "action",
            NodeRole::Start => "start",
            NodeRole::End => "end",
        }
    }

    /// Start/end markers carry no behaviour and are skipped by ordering checks.
    pub fn is_sentinel(&self) -> bool {
        matches!(self, NodeRole::Start | NodeRole::End)
    }

    /// The legacy `data` field older editors used to point at the backing record.
    pub fn legacy_reference_field(&self) -> Option<&'static str> {
        match self {
            NodeRole::Trigger => Some("triggerId"),
            NodeRole::Condition => Some("conditionId"),
            NodeRole::Action => Some("actionId"),
            NodeRole::Start | NodeRole::End => None,
        }
    }
}

impl fmt::Display for NodeRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps editor node type names (e.g. `"stateChangeTrigger"`) to roles.
///
/// Explicit mappings are matched first, case-insensitively and on the whole
/// name. Anything unmapped falls back to keyword classification: a name
/// containing `trigger`, `condition` or `action` takes that role, and the
/// exact names `start` / `end` are sentinels. Names matching none of these
/// have no role.
#[derive(Debug, Clone, Default)]
pub struct RoleClassifier {
    mappings: AHashMap<String, NodeRole>,
}

impl RoleClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(mut self, type_name: &str, role: NodeRole) -> Self {
        self.insert(type_name, role);
        self
    }

    pub fn insert(&mut self, type_name: &str, role: NodeRole) {
        self.mappings.insert(type_name.trim().to_ascii_lowercase(), role);
    }

    pub fn classify(&self, type_name: &str) -> Option<NodeRole> {
        let lowered = type_name.trim().to_ascii_lowercase();
        if let Some(role) = self.mappings.get(&lowered) {
            return Some(*role);
        }

        if lowered.contains("trigger") {
            Some(NodeRole::Trigger)
        } else if lowered.contains("condition") {
            Some(NodeRole::Condition)
        } else if lowered.contains("action") {
            Some(NodeRole::Action)
        } else {
            match lowered.as_str() {
                "start" => Some(NodeRole::Start),
                "end" => Some(NodeRole::End),
                _ => None,
            }
        }
    }
}
