use crate::error::PlanError;
use crate::graph::NodeId;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{Read, Write};

/// The execution path of one trigger node.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TriggerPath {
    pub trigger_node_id: NodeId,
    pub execution_path: Vec<NodeId>,
}

/// A validated flow reduced to what execution needs: the global order and
/// every trigger's path.
///
/// Hosts may persist a plan next to the automation instead of re-resolving
/// paths on every event. The engine itself never keeps one around.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct FlowPlan {
    pub order: Vec<NodeId>,
    pub paths: Vec<TriggerPath>,
}

impl FlowPlan {
    pub fn path_for(&self, trigger_node_id: &str) -> Option<&TriggerPath> {
        self.paths
            .iter()
            .find(|p| p.trigger_node_id == trigger_node_id)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, PlanError> {
        encode_to_vec(self, standard()).map_err(|e| PlanError::Encode(e.to_string()))
    }

    /// Deserializes a plan from a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, PlanError> {
        decode_from_slice(bytes, standard())
            .map(|(plan, _)| plan) // bincode 2 returns a tuple (data, bytes_read)
            .map_err(|e| PlanError::Decode(e.to_string()))
    }

    /// Saves the plan to a file using the bincode format.
    pub fn save(&self, path: &str) -> Result<(), PlanError> {
        let bytes = self.to_bytes()?;
        let io_err = |source| PlanError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::create(path).map_err(io_err)?;
        file.write_all(&bytes).map_err(io_err)?;
        Ok(())
    }

    /// Loads a plan from a file.
    pub fn from_file(path: &str) -> Result<Self, PlanError> {
        let io_err = |source| PlanError::Io {
            path: path.to_string(),
            source,
        };
        let mut file = fs::File::open(path).map_err(io_err)?;
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).map_err(io_err)?;
        Self::from_bytes(&bytes)
    }
}
