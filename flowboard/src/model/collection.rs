//! The stage collection: single source of truth for structural mutation.

use super::patch::{StagePatch, SubstagePatch};
use super::stage::{Stage, StageId, Substage, SubstageId, NEW_SUBSTAGE_NAME};
use crate::errors::FlowboardError;
use serde::{Deserialize, Serialize};

/// Two ordered collections of stages, process stages and final stages,
/// and all structural mutation over them.
///
/// The collections are physically separate because the editor always
/// renders them as two distinct sections and never needs cross-collection
/// ordering. Ids are unique across both collections combined.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCollection {
    process_stages: Vec<Stage>,
    final_stages: Vec<Stage>,
}

impl StageCollection {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a collection from pre-built stages.
    ///
    /// Stages are routed to the collection matching their `is_final`
    /// flag, preserving relative order.
    #[must_use]
    pub fn from_stages(stages: impl IntoIterator<Item = Stage>) -> Self {
        let mut collection = Self::new();
        for stage in stages {
            if stage.is_final {
                collection.final_stages.push(stage);
            } else {
                collection.process_stages.push(stage);
            }
        }
        collection
    }

    /// Returns the process stages in order.
    #[must_use]
    pub fn process_stages(&self) -> &[Stage] {
        &self.process_stages
    }

    /// Returns the final stages in order.
    #[must_use]
    pub fn final_stages(&self) -> &[Stage] {
        &self.final_stages
    }

    /// Iterates over all stages in render order: process stages first,
    /// then final stages.
    pub fn iter_all(&self) -> impl Iterator<Item = &Stage> {
        self.process_stages.iter().chain(self.final_stages.iter())
    }

    /// Total number of stages across both collections.
    #[must_use]
    pub fn total_len(&self) -> usize {
        self.process_stages.len() + self.final_stages.len()
    }

    /// Render-order position of a stage, if present.
    #[must_use]
    pub fn position_of(&self, id: StageId) -> Option<usize> {
        self.iter_all().position(|s| s.id == id)
    }

    /// Appends a freshly authored process stage and returns its id.
    ///
    /// The new stage has an empty name and `is_editing` set; it stays in
    /// authoring mode until the name is committed. Always succeeds.
    pub fn add_process_stage(&mut self) -> StageId {
        let stage = Stage::draft_process();
        let id = stage.id;
        self.process_stages.push(stage);
        id
    }

    /// Appends a freshly authored final stage and returns its id.
    ///
    /// Same authoring lifecycle as [`add_process_stage`], with the
    /// default status color applied.
    ///
    /// [`add_process_stage`]: Self::add_process_stage
    pub fn add_final_stage(&mut self) -> StageId {
        let stage = Stage::draft_final();
        let id = stage.id;
        self.final_stages.push(stage);
        id
    }

    /// Appends a new substage to the matching process stage.
    ///
    /// # Errors
    ///
    /// Returns [`FlowboardError::StageNotFound`] when the id resolves to
    /// nothing, and [`FlowboardError::NotAProcessStage`] when it resolves
    /// to a final stage. The collections are structurally unchanged on
    /// error.
    pub fn add_substage(&mut self, stage_id: StageId) -> Result<SubstageId, FlowboardError> {
        if self.final_stages.iter().any(|s| s.id == stage_id) {
            return Err(FlowboardError::NotAProcessStage { id: stage_id });
        }

        let stage = self
            .process_stages
            .iter_mut()
            .find(|s| s.id == stage_id)
            .ok_or(FlowboardError::StageNotFound { id: stage_id })?;

        let substage = Substage::new(NEW_SUBSTAGE_NAME);
        let id = substage.id;
        stage.substages.push(substage);
        Ok(id)
    }

    /// Merges a patch into the matching stage, searched across both
    /// collections.
    ///
    /// `is_final` membership cannot change via this path.
    pub fn update_stage(&mut self, id: StageId, patch: &StagePatch) -> Result<(), FlowboardError> {
        let stage = self
            .stage_mut(id)
            .ok_or(FlowboardError::StageNotFound { id })?;
        patch.apply(stage);
        Ok(())
    }

    /// Merges a patch into the matching substage under the given parent
    /// only.
    pub fn update_substage(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
        patch: &SubstagePatch,
    ) -> Result<(), FlowboardError> {
        let stage = self
            .stage_mut(stage_id)
            .ok_or(FlowboardError::StageNotFound { id: stage_id })?;
        let substage = stage
            .substage_mut(substage_id)
            .ok_or(FlowboardError::SubstageNotFound {
                stage_id,
                substage_id,
            })?;
        patch.apply(substage);
        Ok(())
    }

    /// Removes a stage from whichever collection holds it, cascading
    /// over its substages. Returns the removed stage.
    pub fn delete_stage(&mut self, id: StageId) -> Result<Stage, FlowboardError> {
        if let Some(pos) = self.process_stages.iter().position(|s| s.id == id) {
            return Ok(self.process_stages.remove(pos));
        }
        if let Some(pos) = self.final_stages.iter().position(|s| s.id == id) {
            return Ok(self.final_stages.remove(pos));
        }
        Err(FlowboardError::StageNotFound { id })
    }

    /// Removes a substage from its parent stage. Returns the removed
    /// substage.
    pub fn delete_substage(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
    ) -> Result<Substage, FlowboardError> {
        let stage = self
            .stage_mut(stage_id)
            .ok_or(FlowboardError::StageNotFound { id: stage_id })?;
        let pos = stage
            .substages
            .iter()
            .position(|s| s.id == substage_id)
            .ok_or(FlowboardError::SubstageNotFound {
                stage_id,
                substage_id,
            })?;
        Ok(stage.substages.remove(pos))
    }

    /// Looks up a stage by id across both collections.
    #[must_use]
    pub fn stage(&self, id: StageId) -> Option<&Stage> {
        self.iter_all().find(|s| s.id == id)
    }

    /// Looks up a substage under a specific parent.
    #[must_use]
    pub fn substage(&self, stage_id: StageId, substage_id: SubstageId) -> Option<&Substage> {
        self.stage(stage_id).and_then(|s| s.substage(substage_id))
    }

    /// Returns true if a stage with the given id exists.
    #[must_use]
    pub fn contains_stage(&self, id: StageId) -> bool {
        self.stage(id).is_some()
    }

    fn stage_mut(&mut self, id: StageId) -> Option<&mut Stage> {
        self.process_stages
            .iter_mut()
            .chain(self.final_stages.iter_mut())
            .find(|s| s.id == id)
    }
}
