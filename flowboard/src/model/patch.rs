//! Partial-update patch types for merge-style edits.
//!
//! A patch carries only the fields being changed; unset fields leave the
//! target untouched. Clearing an optional field is an explicit request
//! (`clear_description`, `clear_workflow`) rather than an absent value.
//! `is_final` is deliberately not patchable: moving a stage between
//! collections is unsupported.

use super::stage::{Stage, StatusColor, Substage, TrendIndicator, WorkflowRef};
use serde::{Deserialize, Serialize};

/// A partial update to a [`Stage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagePatch {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// New display counter.
    #[serde(default)]
    pub count: Option<u32>,
    /// Replacement trend badges.
    #[serde(default)]
    pub indicators: Option<Vec<TrendIndicator>>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// Clears the description.
    #[serde(default)]
    pub clear_description: bool,
    /// New incoming-transitions flag.
    #[serde(default)]
    pub allow_incoming_transitions: Option<bool>,
    /// New authoring flag.
    #[serde(default)]
    pub is_editing: Option<bool>,
    /// New status color; only meaningful for final stages.
    #[serde(default)]
    pub status_color: Option<StatusColor>,
}

impl StagePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the display counter.
    #[must_use]
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Replaces the trend badges.
    #[must_use]
    pub fn indicators(mut self, indicators: Vec<TrendIndicator>) -> Self {
        self.indicators = Some(indicators);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.clear_description = true;
        self
    }

    /// Sets the incoming-transitions flag.
    #[must_use]
    pub fn allow_incoming_transitions(mut self, allow: bool) -> Self {
        self.allow_incoming_transitions = Some(allow);
        self
    }

    /// Sets the authoring flag.
    #[must_use]
    pub fn editing(mut self, editing: bool) -> Self {
        self.is_editing = Some(editing);
        self
    }

    /// Sets the status color.
    #[must_use]
    pub fn status_color(mut self, color: StatusColor) -> Self {
        self.status_color = Some(color);
        self
    }

    /// Merges this patch into a stage.
    pub(crate) fn apply(&self, stage: &mut Stage) {
        if let Some(ref name) = self.name {
            stage.name = name.clone();
        }
        if let Some(count) = self.count {
            stage.count = count;
        }
        if let Some(ref indicators) = self.indicators {
            stage.indicators = indicators.clone();
        }
        if self.clear_description {
            stage.description = None;
        } else if let Some(ref description) = self.description {
            stage.description = Some(description.clone());
        }
        if let Some(allow) = self.allow_incoming_transitions {
            stage.allow_incoming_transitions = allow;
        }
        if let Some(editing) = self.is_editing {
            stage.is_editing = editing;
        }
        if let Some(color) = self.status_color {
            stage.status_color = Some(color);
        }
    }
}

/// A partial update to a [`Substage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstagePatch {
    /// New display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Replacement trend badges.
    #[serde(default)]
    pub indicators: Option<Vec<TrendIndicator>>,
    /// New description.
    #[serde(default)]
    pub description: Option<String>,
    /// Clears the description.
    #[serde(default)]
    pub clear_description: bool,
    /// New associated workflow.
    #[serde(default)]
    pub workflow: Option<WorkflowRef>,
    /// Clears the associated workflow.
    #[serde(default)]
    pub clear_workflow: bool,
}

impl SubstagePatch {
    /// Creates an empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replaces the trend badges.
    #[must_use]
    pub fn indicators(mut self, indicators: Vec<TrendIndicator>) -> Self {
        self.indicators = Some(indicators);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Clears the description.
    #[must_use]
    pub fn clear_description(mut self) -> Self {
        self.clear_description = true;
        self
    }

    /// Sets the associated workflow.
    #[must_use]
    pub fn workflow(mut self, workflow: WorkflowRef) -> Self {
        self.workflow = Some(workflow);
        self
    }

    /// Clears the associated workflow.
    #[must_use]
    pub fn clear_workflow(mut self) -> Self {
        self.clear_workflow = true;
        self
    }

    /// Merges this patch into a substage.
    pub(crate) fn apply(&self, substage: &mut Substage) {
        if let Some(ref name) = self.name {
            substage.name = name.clone();
        }
        if let Some(ref indicators) = self.indicators {
            substage.indicators = indicators.clone();
        }
        if self.clear_description {
            substage.description = None;
        } else if let Some(ref description) = self.description {
            substage.description = Some(description.clone());
        }
        if self.clear_workflow {
            substage.workflow = None;
        } else if let Some(ref workflow) = self.workflow {
            substage.workflow = Some(workflow.clone());
        }
    }
}
