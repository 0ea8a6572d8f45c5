//! The workflow catalog: the fixed set of workflows a substage can be
//! associated with.

use crate::errors::FlowboardError;
use crate::model::{WorkflowId, WorkflowRef};
use serde::{Deserialize, Serialize};

/// A selectable workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowOption {
    /// Catalog id.
    pub id: WorkflowId,
    /// Display name.
    pub name: String,
}

impl WorkflowOption {
    /// Creates a workflow option.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: WorkflowId::new(id),
            name: name.into(),
        }
    }

    /// Converts the option into a reference suitable for storing on a
    /// substage.
    #[must_use]
    pub fn to_ref(&self) -> WorkflowRef {
        WorkflowRef {
            id: self.id.clone(),
            name: self.name.clone(),
        }
    }
}

/// An ordered, id-addressable set of workflow options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowCatalog {
    options: Vec<WorkflowOption>,
}

impl WorkflowCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            options: Vec::new(),
        }
    }

    /// The built-in catalog shipped with the editor.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            options: vec![
                WorkflowOption::new("interview", "Interview workflow"),
                WorkflowOption::new("hr", "HR Approval Flow"),
                WorkflowOption::new("test", "Skill Assessment"),
            ],
        }
    }

    /// Appends a workflow option.
    #[must_use]
    pub fn with_workflow(mut self, id: impl Into<String>, name: impl Into<String>) -> Self {
        self.options.push(WorkflowOption::new(id, name));
        self
    }

    /// Returns the options in catalog order.
    #[must_use]
    pub fn options(&self) -> &[WorkflowOption] {
        &self.options
    }

    /// Resolves a workflow id against the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::WorkflowNotFound`] for ids not in the
    /// catalog.
    pub fn resolve(&self, id: &WorkflowId) -> Result<&WorkflowOption, FlowboardError> {
        self.options
            .iter()
            .find(|o| &o.id == id)
            .ok_or_else(|| FlowboardError::WorkflowNotFound { id: id.clone() })
    }
}

impl Default for WorkflowCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
