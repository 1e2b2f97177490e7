use crate::error::FlowError;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The persisted description of one automation's flow graph.
///
/// This mirrors what the visual editor stores alongside an automation. Both
/// lists are optional because a half-authored automation may have neither;
/// decoding such a definition yields "no graph" rather than an error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowDefinition {
    #[serde(default)]
    pub nodes: Option<Vec<FlowNodeDefinition>>,
    #[serde(default)]
    pub edges: Option<Vec<FlowEdgeDefinition>>,
}

/// A single node as authored in the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowNodeDefinition {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub data: Map<String, Value>,
}

/// A directed connection between two nodes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdgeDefinition {
    pub source: String,
    pub target: String,
}

impl FlowDefinition {
    pub fn new(nodes: Vec<FlowNodeDefinition>, edges: Vec<FlowEdgeDefinition>) -> Self {
        Self {
            nodes: Some(nodes),
            edges: Some(edges),
        }
    }

    /// Parses a flow description from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, FlowError> {
        serde_json::from_str(json).map_err(|e| FlowError::Parse(e.to_string()))
    }

    /// Converts an already-parsed JSON document (e.g. a JSON column) into a flow description.
    ///
    /// A JSON `null` is treated as an absent description.
    pub fn from_value(value: Value) -> Result<Self, FlowError> {
        if value.is_null() {
            return Ok(Self::default());
        }
        serde_json::from_value(value).map_err(|e| FlowError::Parse(e.to_string()))
    }
}

impl FlowNodeDefinition {
    pub fn new(id: impl Into<String>, node_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            data: Map::new(),
        }
    }

    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }
}

impl FlowEdgeDefinition {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}
