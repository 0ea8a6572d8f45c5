//! The inspector: the side panel bound to the current selection.
//!
//! The inspector is a view model only; edits write back through the
//! session's update operations (`update_stage`, `update_substage`,
//! `assign_workflow`) and apply immediately; there is no staged or
//! transactional state. Closing the panel clears the selection without
//! discarding applied edits.

use crate::editor::EditorSession;
use crate::model::{StageId, SubstageId, WorkflowId};
use serde::{Deserialize, Serialize};

/// A workflow choice in the substage panel's single-choice dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowChoice {
    /// Catalog id.
    pub id: WorkflowId,
    /// Display name.
    pub name: String,
    /// Whether this is the substage's current association.
    pub selected: bool,
}

/// The stage panel: name, description and the incoming-transitions
/// toggle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageInspector {
    /// The inspected stage.
    pub stage_id: StageId,
    /// Editable name.
    pub name: String,
    /// Editable description; empty string when unset.
    pub description: String,
    /// Editable incoming-transitions toggle.
    pub allow_incoming_transitions: bool,
    /// Whether this is a final stage (the toggle is hidden for those).
    pub is_final: bool,
}

/// The substage panel: name plus the workflow association.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstageInspector {
    /// Parent stage.
    pub stage_id: StageId,
    /// The inspected substage.
    pub substage_id: SubstageId,
    /// Editable name.
    pub name: String,
    /// The catalog choices, flagged with the current association.
    pub workflow_choices: Vec<WorkflowChoice>,
    /// The current association, if any.
    pub selected_workflow: Option<WorkflowId>,
}

/// What the side panel shows for the current selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InspectorModel {
    /// A stage is selected.
    Stage(StageInspector),
    /// A substage is selected.
    Substage(SubstageInspector),
}

impl InspectorModel {
    /// Builds the panel for the session's current selection.
    ///
    /// Returns `None` when nothing is selected: panel visibility is
    /// exactly "a stage is part of the selection path".
    #[must_use]
    pub fn build(session: &EditorSession) -> Option<Self> {
        let selection = session.selection();
        let stage_id = selection.stage()?;
        let stage = session.collection().stage(stage_id)?;

        if let Some(substage_id) = selection.substage() {
            let substage = stage.substage(substage_id)?;
            let selected_workflow = substage.workflow.as_ref().map(|w| w.id.clone());

            let workflow_choices = session
                .catalog()
                .options()
                .iter()
                .map(|option| WorkflowChoice {
                    id: option.id.clone(),
                    name: option.name.clone(),
                    selected: selected_workflow.as_ref() == Some(&option.id),
                })
                .collect();

            return Some(Self::Substage(SubstageInspector {
                stage_id,
                substage_id,
                name: substage.name.clone(),
                workflow_choices,
                selected_workflow,
            }));
        }

        Some(Self::Stage(StageInspector {
            stage_id,
            name: stage.name.clone(),
            description: stage.description.clone().unwrap_or_default(),
            allow_incoming_transitions: stage.allow_incoming_transitions,
            is_final: stage.is_final,
        }))
    }
}
