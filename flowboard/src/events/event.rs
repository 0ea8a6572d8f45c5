//! Editor event type for emitting lifecycle and mutation events.

use crate::editor::ViewMode;
use crate::model::{StageId, SubstageId};
use crate::selection::Selection;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An event emitted by the editor session.
///
/// Events are consumed by event sinks for logging, monitoring, or test
/// assertions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditorEvent {
    /// The event type (e.g. "stage.added", "reveal.tick").
    #[serde(rename = "type")]
    pub event_type: String,

    /// When the event occurred (ISO 8601).
    pub timestamp: String,

    /// The event payload data.
    #[serde(default)]
    pub data: HashMap<String, serde_json::Value>,
}

impl EditorEvent {
    /// Creates a new editor event.
    #[must_use]
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            timestamp: crate::utils::iso_timestamp(),
            data: HashMap::new(),
        }
    }

    /// Adds a data field to the event.
    #[must_use]
    pub fn add_data(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }

    /// Creates a "stage.added" event.
    #[must_use]
    pub fn stage_added(id: StageId, is_final: bool) -> Self {
        Self::new("stage.added")
            .add_data("stage_id", serde_json::json!(id))
            .add_data("is_final", serde_json::json!(is_final))
    }

    /// Creates a "stage.updated" event.
    #[must_use]
    pub fn stage_updated(id: StageId) -> Self {
        Self::new("stage.updated").add_data("stage_id", serde_json::json!(id))
    }

    /// Creates a "stage.deleted" event.
    #[must_use]
    pub fn stage_deleted(id: StageId, cascaded_substages: usize) -> Self {
        Self::new("stage.deleted")
            .add_data("stage_id", serde_json::json!(id))
            .add_data("cascaded_substages", serde_json::json!(cascaded_substages))
    }

    /// Creates a "substage.added" event.
    #[must_use]
    pub fn substage_added(stage_id: StageId, substage_id: SubstageId) -> Self {
        Self::new("substage.added")
            .add_data("stage_id", serde_json::json!(stage_id))
            .add_data("substage_id", serde_json::json!(substage_id))
    }

    /// Creates a "substage.updated" event.
    #[must_use]
    pub fn substage_updated(stage_id: StageId, substage_id: SubstageId) -> Self {
        Self::new("substage.updated")
            .add_data("stage_id", serde_json::json!(stage_id))
            .add_data("substage_id", serde_json::json!(substage_id))
    }

    /// Creates a "substage.deleted" event.
    #[must_use]
    pub fn substage_deleted(stage_id: StageId, substage_id: SubstageId) -> Self {
        Self::new("substage.deleted")
            .add_data("stage_id", serde_json::json!(stage_id))
            .add_data("substage_id", serde_json::json!(substage_id))
    }

    /// Creates a "selection.changed" event.
    #[must_use]
    pub fn selection_changed(selection: &Selection) -> Self {
        Self::new("selection.changed").add_data("selection", serde_json::json!(selection))
    }

    /// Creates a "view.switched" event.
    #[must_use]
    pub fn view_switched(mode: ViewMode) -> Self {
        Self::new("view.switched").add_data("mode", serde_json::json!(mode))
    }

    /// Creates a "rules.opened" event.
    #[must_use]
    pub fn rules_opened() -> Self {
        Self::new("rules.opened")
    }

    /// Creates a "rules.closed" event.
    #[must_use]
    pub fn rules_closed() -> Self {
        Self::new("rules.closed")
    }

    /// Creates a "reveal.started" event.
    #[must_use]
    pub fn reveal_started(total: usize) -> Self {
        Self::new("reveal.started").add_data("total", serde_json::json!(total))
    }

    /// Creates a "reveal.tick" event.
    #[must_use]
    pub fn reveal_tick(counter: usize, total: usize) -> Self {
        Self::new("reveal.tick")
            .add_data("counter", serde_json::json!(counter))
            .add_data("total", serde_json::json!(total))
    }

    /// Creates a "reveal.completed" event.
    #[must_use]
    pub fn reveal_completed(total: usize) -> Self {
        Self::new("reveal.completed").add_data("total", serde_json::json!(total))
    }

    /// Creates an "upload.progress" event.
    #[must_use]
    pub fn upload_progress(file_name: &str, percent: u8) -> Self {
        Self::new("upload.progress")
            .add_data("file", serde_json::json!(file_name))
            .add_data("percent", serde_json::json!(percent))
    }

    /// Creates an "upload.ready" event.
    #[must_use]
    pub fn upload_ready(file_name: &str) -> Self {
        Self::new("upload.ready").add_data("file", serde_json::json!(file_name))
    }
}
