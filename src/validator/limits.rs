use serde::{Deserialize, Serialize};

/// Size limits a flow must stay within before any graph algorithm runs on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationLimits {
    /// Maximum number of nodes in a flow (default: 1000).
    pub max_node_count: usize,
    /// Maximum number of edges in a flow (default: 5000).
    pub max_edge_count: usize,
    /// Maximum number of trigger nodes in a flow (default: 100).
    pub max_trigger_count: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            max_node_count: 1000,
            max_edge_count: 5000,
            max_trigger_count: 100,
        }
    }
}

impl ValidationLimits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_node_count(mut self, count: usize) -> Self {
        self.max_node_count = count;
        self
    }

    pub fn with_max_edge_count(mut self, count: usize) -> Self {
        self.max_edge_count = count;
        self
    }

    pub fn with_max_trigger_count(mut self, count: usize) -> Self {
        self.max_trigger_count = count;
        self
    }
}
