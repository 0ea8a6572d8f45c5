//! The editor session: single mutation entry point for the process
//! editor screen.
//!
//! The session ties together the stage collection, the selection path,
//! the reveal sequencer and the peripheral toggles (view mode, rules
//! modal). All mutations are synchronous; every operation emits a
//! structured [`EditorEvent`] through the configured sink.

#[cfg(test)]
mod session_tests;

use crate::catalog::WorkflowCatalog;
use crate::errors::FlowboardError;
use crate::events::{EditorEvent, EventSink, NoOpEventSink};
use crate::model::{
    StageCollection, StageId, StagePatch, SubstageId, SubstagePatch, WorkflowId,
};
use crate::reveal::{RevealSequencer, RevealStep};
use crate::selection::Selection;
use crate::upload::SourceFile;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Which of the two synchronized views is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Stacked, collapsible rows.
    List,
    /// Connected node diagram.
    Map,
}

impl Default for ViewMode {
    fn default() -> Self {
        Self::List
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List => write!(f, "list"),
            Self::Map => write!(f, "map"),
        }
    }
}

/// A session shared with a timer driver.
pub type SharedSession = Arc<Mutex<EditorSession>>;

/// Editing state for one process editor screen.
pub struct EditorSession {
    collection: StageCollection,
    selection: Selection,
    reveal: RevealSequencer,
    catalog: WorkflowCatalog,
    view_mode: ViewMode,
    rules_modal_open: bool,
    source_files: Vec<SourceFile>,
    sink: Arc<dyn EventSink>,
}

impl EditorSession {
    /// Creates an empty session with the built-in workflow catalog and a
    /// no-op event sink.
    #[must_use]
    pub fn new() -> Self {
        Self::with_collection(StageCollection::new())
    }

    /// Creates a session over an existing collection.
    #[must_use]
    pub fn with_collection(collection: StageCollection) -> Self {
        let reveal = RevealSequencer::new(collection.total_len());
        Self {
            collection,
            selection: Selection::new(),
            reveal,
            catalog: WorkflowCatalog::builtin(),
            view_mode: ViewMode::default(),
            rules_modal_open: false,
            source_files: Vec::new(),
            sink: Arc::new(NoOpEventSink),
        }
    }

    /// Sets the event sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Replaces the workflow catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: WorkflowCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Wraps the session for sharing with a timer driver.
    #[must_use]
    pub fn into_shared(self) -> SharedSession {
        Arc::new(Mutex::new(self))
    }

    /// The stage collection.
    #[must_use]
    pub fn collection(&self) -> &StageCollection {
        &self.collection
    }

    /// The current selection path.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The reveal sequencer.
    #[must_use]
    pub fn reveal(&self) -> &RevealSequencer {
        &self.reveal
    }

    /// The workflow catalog.
    #[must_use]
    pub fn catalog(&self) -> &WorkflowCatalog {
        &self.catalog
    }

    /// The active view.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Whether the rules modal is open.
    #[must_use]
    pub fn rules_modal_open(&self) -> bool {
        self.rules_modal_open
    }

    /// The file records that triggered generation, if any.
    #[must_use]
    pub fn source_files(&self) -> &[SourceFile] {
        &self.source_files
    }

    /// Appends a freshly authored process stage and returns its id.
    pub fn add_process_stage(&mut self) -> StageId {
        let id = self.collection.add_process_stage();
        self.reveal.stage_appended();
        info!(stage_id = %id, "added process stage");
        self.sink.try_emit(EditorEvent::stage_added(id, false));
        id
    }

    /// Appends a freshly authored final stage and returns its id.
    pub fn add_final_stage(&mut self) -> StageId {
        let id = self.collection.add_final_stage();
        self.reveal.stage_appended();
        info!(stage_id = %id, "added final stage");
        self.sink.try_emit(EditorEvent::stage_added(id, true));
        id
    }

    /// Appends a new substage to a process stage and selects it.
    pub fn add_substage(&mut self, stage_id: StageId) -> Result<SubstageId, FlowboardError> {
        let substage_id = self.collection.add_substage(stage_id)?;
        self.selection.select_substage(stage_id, substage_id);
        info!(stage_id = %stage_id, substage_id = %substage_id, "added substage");
        self.sink
            .try_emit(EditorEvent::substage_added(stage_id, substage_id));
        self.sink
            .try_emit(EditorEvent::selection_changed(&self.selection));
        Ok(substage_id)
    }

    /// Merges a patch into a stage.
    pub fn update_stage(&mut self, id: StageId, patch: &StagePatch) -> Result<(), FlowboardError> {
        self.collection.update_stage(id, patch)?;
        debug!(stage_id = %id, "updated stage");
        self.sink.try_emit(EditorEvent::stage_updated(id));
        Ok(())
    }

    /// Merges a patch into a substage.
    pub fn update_substage(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
        patch: &SubstagePatch,
    ) -> Result<(), FlowboardError> {
        self.collection.update_substage(stage_id, substage_id, patch)?;
        debug!(stage_id = %stage_id, substage_id = %substage_id, "updated substage");
        self.sink
            .try_emit(EditorEvent::substage_updated(stage_id, substage_id));
        Ok(())
    }

    /// Commits an authored stage name (blur or Enter), leaving authoring
    /// mode. Empty names are accepted.
    pub fn commit_stage_name(
        &mut self,
        id: StageId,
        name: impl Into<String>,
    ) -> Result<(), FlowboardError> {
        self.update_stage(id, &StagePatch::new().name(name).editing(false))
    }

    /// Deletes a stage, cascading over its substages.
    ///
    /// Clears the selection if it pointed into the deleted stage and
    /// shrinks the reveal total.
    pub fn delete_stage(&mut self, id: StageId) -> Result<(), FlowboardError> {
        let removed = self.collection.delete_stage(id)?;
        if self.selection.targets_stage(id) {
            self.selection.clear();
            self.sink
                .try_emit(EditorEvent::selection_changed(&self.selection));
        }
        self.reveal.stage_removed();
        info!(stage_id = %id, cascaded = removed.substages.len(), "deleted stage");
        self.sink
            .try_emit(EditorEvent::stage_deleted(id, removed.substages.len()));
        Ok(())
    }

    /// Deletes a substage.
    ///
    /// A selection pointing at the deleted substage falls back to its
    /// parent stage.
    pub fn delete_substage(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
    ) -> Result<(), FlowboardError> {
        self.collection.delete_substage(stage_id, substage_id)?;
        if self.selection.substage() == Some(substage_id) {
            self.selection.clear_substage();
            self.sink
                .try_emit(EditorEvent::selection_changed(&self.selection));
        }
        info!(stage_id = %stage_id, substage_id = %substage_id, "deleted substage");
        self.sink
            .try_emit(EditorEvent::substage_deleted(stage_id, substage_id));
        Ok(())
    }

    /// Selects a stage with no substage.
    pub fn select_stage(&mut self, id: StageId) -> Result<(), FlowboardError> {
        if !self.collection.contains_stage(id) {
            return Err(FlowboardError::StageNotFound { id });
        }
        self.selection.select_stage(id);
        self.sink
            .try_emit(EditorEvent::selection_changed(&self.selection));
        Ok(())
    }

    /// Selects a substage (and, implicitly, its parent stage).
    ///
    /// The full path is verified against the collection rather than
    /// trusted from the caller.
    pub fn select_substage(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
    ) -> Result<(), FlowboardError> {
        if self.collection.substage(stage_id, substage_id).is_none() {
            if !self.collection.contains_stage(stage_id) {
                return Err(FlowboardError::StageNotFound { id: stage_id });
            }
            return Err(FlowboardError::SubstageNotFound {
                stage_id,
                substage_id,
            });
        }
        self.selection.select_substage(stage_id, substage_id);
        self.sink
            .try_emit(EditorEvent::selection_changed(&self.selection));
        Ok(())
    }

    /// Clears the whole selection path, closing the inspector. Applied
    /// edits are kept.
    pub fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.sink
                .try_emit(EditorEvent::selection_changed(&self.selection));
        }
    }

    /// Closes the inspector panel.
    pub fn close_inspector(&mut self) {
        self.clear_selection();
    }

    /// Collapses a substage selection back to its parent stage.
    pub fn close_substage_panel(&mut self) {
        if self.selection.substage().is_some() {
            self.selection.clear_substage();
            self.sink
                .try_emit(EditorEvent::selection_changed(&self.selection));
        }
    }

    /// Switches the active view. Switching to the list view clears the
    /// selection.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        if self.view_mode == mode {
            return;
        }
        self.view_mode = mode;
        if mode == ViewMode::List {
            self.clear_selection();
        }
        self.sink.try_emit(EditorEvent::view_switched(mode));
    }

    /// Opens the rules modal. No data crosses this boundary.
    pub fn open_rules_modal(&mut self) {
        if !self.rules_modal_open {
            self.rules_modal_open = true;
            self.sink.try_emit(EditorEvent::rules_opened());
        }
    }

    /// Closes the rules modal.
    pub fn close_rules_modal(&mut self) {
        if self.rules_modal_open {
            self.rules_modal_open = false;
            self.sink.try_emit(EditorEvent::rules_closed());
        }
    }

    /// Records the upload hand-off and arms the reveal sequence over the
    /// current stage count.
    ///
    /// No-op while a run is already in progress; the sequence never
    /// re-enters once armed.
    pub fn begin_generation(&mut self, files: Vec<SourceFile>) {
        if self.reveal.is_generating() {
            return;
        }
        self.source_files = files;
        self.reveal = RevealSequencer::new(self.collection.total_len());
        self.reveal.start();
        info!(total = self.reveal.total(), "generation started");
        self.sink
            .try_emit(EditorEvent::reveal_started(self.reveal.total()));
    }

    /// Advances the reveal sequence by one tick, emitting progress
    /// events. Called by the reveal driver.
    pub fn advance_reveal(&mut self) -> RevealStep {
        let step = self.reveal.tick();
        match step {
            RevealStep::Revealed { .. } => {
                self.sink.try_emit(EditorEvent::reveal_tick(
                    self.reveal.counter(),
                    self.reveal.total(),
                ));
            }
            RevealStep::Completed => {
                info!(total = self.reveal.total(), "generation complete");
                self.sink
                    .try_emit(EditorEvent::reveal_completed(self.reveal.total()));
            }
            RevealStep::Noop => {}
        }
        step
    }

    /// Associates a catalog workflow with a substage.
    ///
    /// Resolves the id against the catalog before touching the model, so
    /// an unknown workflow mutates nothing.
    pub fn assign_workflow(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
        workflow_id: &WorkflowId,
    ) -> Result<(), FlowboardError> {
        let workflow = self.catalog.resolve(workflow_id)?.to_ref();
        self.update_substage(
            stage_id,
            substage_id,
            &SubstagePatch::new().workflow(workflow),
        )
    }

    /// Removes a substage's workflow association.
    pub fn clear_workflow(
        &mut self,
        stage_id: StageId,
        substage_id: SubstageId,
    ) -> Result<(), FlowboardError> {
        self.update_substage(stage_id, substage_id, &SubstagePatch::new().clear_workflow())
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for EditorSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EditorSession")
            .field("stages", &self.collection.total_len())
            .field("selection", &self.selection)
            .field("reveal", &self.reveal)
            .field("view_mode", &self.view_mode)
            .finish()
    }
}
