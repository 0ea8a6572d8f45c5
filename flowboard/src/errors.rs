//! Error types for the flowboard editor core.
//!
//! Lookups never fail silently: every fallible operation signals
//! explicitly which id failed to resolve.

use crate::model::{StageId, SubstageId, WorkflowId};
use thiserror::Error;

/// The main error type for flowboard operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowboardError {
    /// No stage with the given id exists in either collection.
    #[error("Stage not found: {id}")]
    StageNotFound {
        /// The unresolved stage id.
        id: StageId,
    },

    /// The stage exists but is a final stage, and the operation only
    /// applies to process stages.
    #[error("Stage {id} is a final stage and cannot hold substages")]
    NotAProcessStage {
        /// The offending stage id.
        id: StageId,
    },

    /// No substage with the given id exists under the given parent.
    #[error("Substage not found: {substage_id} under stage {stage_id}")]
    SubstageNotFound {
        /// The parent stage id that was searched.
        stage_id: StageId,
        /// The unresolved substage id.
        substage_id: SubstageId,
    },

    /// The workflow id does not resolve against the catalog.
    #[error("Workflow not found in catalog: {id}")]
    WorkflowNotFound {
        /// The unresolved workflow id.
        id: WorkflowId,
    },
}

impl FlowboardError {
    /// Creates a stage-not-found error.
    #[must_use]
    pub fn stage_not_found(id: StageId) -> Self {
        Self::StageNotFound { id }
    }

    /// Creates a substage-not-found error.
    #[must_use]
    pub fn substage_not_found(stage_id: StageId, substage_id: SubstageId) -> Self {
        Self::SubstageNotFound {
            stage_id,
            substage_id,
        }
    }

    /// Creates a workflow-not-found error.
    #[must_use]
    pub fn workflow_not_found(id: WorkflowId) -> Self {
        Self::WorkflowNotFound { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StageId, SubstageId};

    #[test]
    fn test_stage_not_found_display() {
        let id = StageId::new();
        let err = FlowboardError::stage_not_found(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_substage_not_found_display() {
        let stage_id = StageId::new();
        let substage_id = SubstageId::new();
        let err = FlowboardError::substage_not_found(stage_id, substage_id);

        let msg = err.to_string();
        assert!(msg.contains(&stage_id.to_string()));
        assert!(msg.contains(&substage_id.to_string()));
    }

    #[test]
    fn test_workflow_not_found_display() {
        let err = FlowboardError::workflow_not_found(WorkflowId::new("hr"));
        assert!(err.to_string().contains("hr"));
    }
}
