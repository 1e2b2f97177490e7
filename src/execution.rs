use serde::{Deserialize, Serialize};
use std::fmt;

/// How a host should record one run of an automation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Success,
    Failed,
    Skipped,
    Partial,
    Warning,
}

impl ExecutionStatus {
    /// Classifies a run from what the bundle and the dispatcher reported.
    ///
    /// * the trigger did not resolve: `Failed`
    /// * a condition was not met: `Skipped`
    /// * the path has no actions: `Warning`
    /// * every action succeeded: `Success`, none did: `Failed`, some did: `Partial`
    pub fn classify(
        bundle_valid: bool,
        conditions_met: bool,
        actions_attempted: usize,
        actions_succeeded: usize,
    ) -> ExecutionStatus {
        if !bundle_valid {
            ExecutionStatus::Failed
        } else if !conditions_met {
            ExecutionStatus::Skipped
        } else if actions_attempted == 0 {
            ExecutionStatus::Warning
        } else if actions_succeeded >= actions_attempted {
            ExecutionStatus::Success
        } else if actions_succeeded == 0 {
            ExecutionStatus::Failed
        } else {
            ExecutionStatus::Partial
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Success => "success",
            ExecutionStatus::Failed => "failed",
            ExecutionStatus::Skipped => "skipped",
            ExecutionStatus::Partial => "partial",
            ExecutionStatus::Warning => "warning",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
