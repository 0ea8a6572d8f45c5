//! The editor's selection path.
//!
//! Selection is a single value (nothing, a stage, or a stage/substage
//! pair), so a substage selection can never drift apart from its parent
//! stage. The inspector panel is visible exactly when a stage is part of
//! the path.

use crate::model::{StageId, SubstageId};
use serde::{Deserialize, Serialize};

/// What the editor currently has focused for side-panel editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Selection {
    /// Nothing selected; the inspector is closed.
    None,
    /// A stage is selected with no substage.
    Stage {
        /// The selected stage.
        stage: StageId,
    },
    /// A substage is selected; its parent stage is part of the path.
    Substage {
        /// Parent of the selected substage.
        stage: StageId,
        /// The selected substage.
        substage: SubstageId,
    },
}

impl Default for Selection {
    fn default() -> Self {
        Self::None
    }
}

impl Selection {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::None
    }

    /// The effective selected stage: the stage of the path, whichever
    /// variant holds.
    #[must_use]
    pub fn stage(&self) -> Option<StageId> {
        match self {
            Self::None => None,
            Self::Stage { stage } | Self::Substage { stage, .. } => Some(*stage),
        }
    }

    /// The selected substage, if the path reaches one.
    #[must_use]
    pub fn substage(&self) -> Option<SubstageId> {
        match self {
            Self::Substage { substage, .. } => Some(*substage),
            _ => None,
        }
    }

    /// Returns true if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Whether the inspector panel should be open.
    #[must_use]
    pub fn is_inspector_open(&self) -> bool {
        !self.is_empty()
    }

    /// Whether the path includes the given stage.
    #[must_use]
    pub fn targets_stage(&self, id: StageId) -> bool {
        self.stage() == Some(id)
    }

    /// Selects a stage, clearing any substage selection.
    pub fn select_stage(&mut self, stage: StageId) {
        *self = Self::Stage { stage };
    }

    /// Selects a substage along with its parent stage.
    pub fn select_substage(&mut self, stage: StageId, substage: SubstageId) {
        *self = Self::Substage { stage, substage };
    }

    /// Clears the whole path. A substage selection cannot outlive its
    /// parent's, so this clears both.
    pub fn clear(&mut self) {
        *self = Self::None;
    }

    /// Collapses a substage selection back to its parent stage; no-op
    /// otherwise.
    pub fn clear_substage(&mut self) {
        if let Self::Substage { stage, .. } = self {
            *self = Self::Stage { stage: *stage };
        }
    }
}
