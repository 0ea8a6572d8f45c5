//! The list view: stages as stacked, collapsible rows.

use super::expansion::ViewExpansion;
use crate::editor::EditorSession;
use crate::model::{Stage, StageId, StatusColor, SubstageId, TrendIndicator};
use serde::{Deserialize, Serialize};

/// A substage row inside an expanded stage row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstageRowModel {
    /// Substage id.
    pub id: SubstageId,
    /// Display name.
    pub name: String,
    /// Trend badges.
    pub indicators: Vec<TrendIndicator>,
}

/// A fully revealed stage row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageRowModel {
    /// Stage id.
    pub id: StageId,
    /// Display name.
    pub name: String,
    /// Display counter.
    pub count: u32,
    /// Trend badges.
    pub indicators: Vec<TrendIndicator>,
    /// Whether this is a final stage.
    pub is_final: bool,
    /// Status color, for final stages.
    pub status_color: Option<StatusColor>,
    /// When true the front end renders a pre-focused name input; commit
    /// goes through `EditorSession::commit_stage_name`.
    pub editing: bool,
    /// Whether the row is expanded to show its substages.
    pub expanded: bool,
    /// Substage rows; populated only when expanded.
    pub substages: Vec<SubstageRowModel>,
}

/// One row of a list section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ListRow {
    /// Placeholder of fixed shape, holding the layout position of a
    /// not-yet-revealed stage.
    Skeleton {
        /// Render-order position of the hidden stage.
        position: usize,
    },
    /// A revealed stage row.
    Stage(StageRowModel),
}

impl ListRow {
    /// Returns the stage row, if revealed.
    #[must_use]
    pub fn as_stage(&self) -> Option<&StageRowModel> {
        match self {
            Self::Stage(row) => Some(row),
            Self::Skeleton { .. } => None,
        }
    }

    /// Returns true for skeleton rows.
    #[must_use]
    pub fn is_skeleton(&self) -> bool {
        matches!(self, Self::Skeleton { .. })
    }
}

/// A titled group of rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSection {
    /// Section heading.
    pub title: String,
    /// Rows in render order.
    pub rows: Vec<ListRow>,
}

/// The list view: process stages then final stages, with reveal gating.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewModel {
    /// "Process stages" then "Final stages".
    pub sections: Vec<ListSection>,
    /// Whether a generation run is in progress.
    pub generating: bool,
    /// Render position of the next unrevealed row, for the progress
    /// banner overlay.
    pub banner_position: Option<usize>,
}

impl ListViewModel {
    /// Builds the list view from the session.
    #[must_use]
    pub fn build(session: &EditorSession, expansion: &ViewExpansion) -> Self {
        let reveal = session.reveal();
        let collection = session.collection();

        let process_rows = collection
            .process_stages()
            .iter()
            .enumerate()
            .map(|(position, stage)| Self::row(stage, position, session, expansion))
            .collect();

        let offset = collection.process_stages().len();
        let final_rows = collection
            .final_stages()
            .iter()
            .enumerate()
            .map(|(idx, stage)| Self::row(stage, offset + idx, session, expansion))
            .collect();

        Self {
            sections: vec![
                ListSection {
                    title: "Process stages".to_string(),
                    rows: process_rows,
                },
                ListSection {
                    title: "Final stages".to_string(),
                    rows: final_rows,
                },
            ],
            generating: reveal.is_generating(),
            banner_position: reveal.next_position(),
        }
    }

    fn row(
        stage: &Stage,
        position: usize,
        session: &EditorSession,
        expansion: &ViewExpansion,
    ) -> ListRow {
        if !session.reveal().is_revealed(position) {
            return ListRow::Skeleton { position };
        }

        // Expansion only applies to rows that have something to reveal.
        let expanded = expansion.is_expanded(stage.id) && !stage.substages.is_empty();
        let substages = if expanded {
            stage
                .substages
                .iter()
                .map(|sub| SubstageRowModel {
                    id: sub.id,
                    name: sub.name.clone(),
                    indicators: sub.indicators.clone(),
                })
                .collect()
        } else {
            Vec::new()
        };

        ListRow::Stage(StageRowModel {
            id: stage.id,
            name: stage.name.clone(),
            count: stage.count,
            indicators: stage.indicators.clone(),
            is_final: stage.is_final,
            status_color: stage.status_color,
            editing: stage.is_editing,
            expanded,
            substages,
        })
    }

    /// All rows across both sections, in render order.
    pub fn rows(&self) -> impl Iterator<Item = &ListRow> {
        self.sections.iter().flat_map(|s| s.rows.iter())
    }

    /// Number of skeleton rows currently shown.
    #[must_use]
    pub fn skeleton_count(&self) -> usize {
        self.rows().filter(|r| r.is_skeleton()).count()
    }
}
