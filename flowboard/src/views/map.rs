//! The map view: stages as a vertically chained diagram of cards and
//! connectors.

use super::expansion::ViewExpansion;
use crate::editor::EditorSession;
use crate::model::{Stage, StageId, StatusColor, Substage, SubstageId};
use serde::{Deserialize, Serialize};

/// Label shown on a substage card with no workflow association.
const NO_WORKFLOW_LABEL: &str = "No associated workflows";

/// A substage card inside a stage's horizontal lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstageCardModel {
    /// Substage id.
    pub id: SubstageId,
    /// Display name.
    pub name: String,
    /// Workflow association label ("No associated workflows" when none).
    pub workflow_label: String,
    /// Selection highlight.
    pub selected: bool,
}

/// The expanded substage lane of a stage card.
///
/// Cards are joined by connectors; add-substage affordances sit at both
/// horizontal extremes. Both affordances invoke the same
/// `EditorSession::add_substage`; position is cosmetic, new substages
/// always append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstageLaneModel {
    /// Substage cards in order.
    pub cards: Vec<SubstageCardModel>,
}

impl SubstageLaneModel {
    /// True when the lane renders the empty-state add affordance only.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Connectors between adjacent substage cards.
    #[must_use]
    pub fn connector_count(&self) -> usize {
        self.cards.len().saturating_sub(1)
    }
}

/// A process stage card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageCardModel {
    /// Stage id.
    pub id: StageId,
    /// Display name.
    pub name: String,
    /// Display counter.
    pub count: u32,
    /// True for cards outside the main chain, reachable from any stage.
    pub freestanding: bool,
    /// Selection highlight; a stage card is highlighted only when no
    /// substage of it is selected.
    pub selected: bool,
    /// The substage lane; present when the card is expanded.
    pub lane: Option<SubstageLaneModel>,
}

/// A terminal-row card for a final stage. Inert in this scope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalCardModel {
    /// Stage id.
    pub id: StageId,
    /// Display name.
    pub name: String,
    /// Status color.
    pub status_color: Option<StatusColor>,
}

/// The map view.
///
/// Process stages partition into the main chain (cards joined by
/// connectors, headed by the entry marker) and freestanding cards below
/// it; final stages render as a fixed unconnected row beneath a labeled
/// divider. A click on any connector opens the rules modal via
/// `EditorSession::open_rules_modal`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapViewModel {
    /// The main chain, in collection order.
    pub chain: Vec<StageCardModel>,
    /// Freestanding cards, in collection order.
    pub freestanding: Vec<StageCardModel>,
    /// The terminal row.
    pub final_row: Vec<FinalCardModel>,
}

impl MapViewModel {
    /// Builds the map view from the session.
    #[must_use]
    pub fn build(session: &EditorSession, expansion: &ViewExpansion) -> Self {
        let collection = session.collection();

        let (chain, freestanding): (Vec<_>, Vec<_>) = collection
            .process_stages()
            .iter()
            .partition(|stage| !stage.allow_incoming_transitions);

        let chain = chain
            .into_iter()
            .map(|stage| Self::card(stage, session, expansion))
            .collect();
        let freestanding = freestanding
            .into_iter()
            .map(|stage| Self::card(stage, session, expansion))
            .collect();

        let final_row = collection
            .final_stages()
            .iter()
            .map(|stage| FinalCardModel {
                id: stage.id,
                name: stage.name.clone(),
                status_color: stage.status_color,
            })
            .collect();

        Self {
            chain,
            freestanding,
            final_row,
        }
    }

    fn card(stage: &Stage, session: &EditorSession, expansion: &ViewExpansion) -> StageCardModel {
        let selection = session.selection();
        let selected =
            selection.stage() == Some(stage.id) && selection.substage().is_none();

        let lane = expansion.is_expanded(stage.id).then(|| SubstageLaneModel {
            cards: stage
                .substages
                .iter()
                .map(|sub| Self::substage_card(sub, selection.substage()))
                .collect(),
        });

        StageCardModel {
            id: stage.id,
            name: stage.name.clone(),
            count: stage.count,
            freestanding: stage.allow_incoming_transitions,
            selected,
            lane,
        }
    }

    fn substage_card(substage: &Substage, selected: Option<SubstageId>) -> SubstageCardModel {
        let workflow_label = substage
            .workflow
            .as_ref()
            .map_or_else(|| NO_WORKFLOW_LABEL.to_string(), |w| w.name.clone());

        SubstageCardModel {
            id: substage.id,
            name: substage.name.clone(),
            workflow_label,
            selected: selected == Some(substage.id),
        }
    }

    /// Vertical connectors in the main chain: entry marker to the first
    /// card, then one between each adjacent pair.
    #[must_use]
    pub fn connector_count(&self) -> usize {
        self.chain.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StageCollection, StagePatch};
    use std::collections::HashSet;

    fn session() -> EditorSession {
        let mut collection = StageCollection::new();
        for (name, freestanding) in [
            ("New Applicant", false),
            ("Screening", false),
            ("Waitlist", true),
            ("Offer", false),
        ] {
            let id = collection.add_process_stage();
            collection
                .update_stage(
                    id,
                    &StagePatch::new()
                        .name(name)
                        .editing(false)
                        .allow_incoming_transitions(freestanding),
                )
                .unwrap();
        }
        let hired = collection.add_final_stage();
        collection
            .update_stage(
                hired,
                &StagePatch::new()
                    .name("Hired")
                    .editing(false)
                    .status_color(StatusColor::Emerald),
            )
            .unwrap();
        EditorSession::with_collection(collection)
    }

    #[test]
    fn test_partition_exhaustive_and_disjoint() {
        let session = session();
        let view = MapViewModel::build(&session, &ViewExpansion::new());

        assert_eq!(view.chain.len(), 3);
        assert_eq!(view.freestanding.len(), 1);
        assert!(view.chain.iter().all(|c| !c.freestanding));
        assert!(view.freestanding.iter().all(|c| c.freestanding));

        let chain_ids: HashSet<_> = view.chain.iter().map(|c| c.id).collect();
        let free_ids: HashSet<_> = view.freestanding.iter().map(|c| c.id).collect();
        assert!(chain_ids.is_disjoint(&free_ids));
        assert_eq!(
            chain_ids.len() + free_ids.len(),
            session.collection().process_stages().len()
        );
    }

    #[test]
    fn test_chain_preserves_collection_order() {
        let session = session();
        let view = MapViewModel::build(&session, &ViewExpansion::new());

        let names: Vec<_> = view.chain.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["New Applicant", "Screening", "Offer"]);
        assert_eq!(view.connector_count(), 3);
    }

    #[test]
    fn test_final_row_separate() {
        let session = session();
        let view = MapViewModel::build(&session, &ViewExpansion::new());

        assert_eq!(view.final_row.len(), 1);
        assert_eq!(view.final_row[0].name, "Hired");
        assert_eq!(view.final_row[0].status_color, Some(StatusColor::Emerald));
    }

    #[test]
    fn test_selection_highlight_rules() {
        let mut session = session();
        let stage_id = session.collection().process_stages()[0].id;
        let sub_id = session.add_substage(stage_id).unwrap();

        let mut expansion = ViewExpansion::new();
        expansion.expand(stage_id);

        // Substage selected: the substage card highlights, not the stage.
        let view = MapViewModel::build(&session, &expansion);
        let card = view.chain.iter().find(|c| c.id == stage_id).unwrap();
        assert!(!card.selected);
        let lane = card.lane.as_ref().unwrap();
        assert!(lane.cards.iter().find(|c| c.id == sub_id).unwrap().selected);

        // Stage selected with no substage: the stage card highlights.
        session.select_stage(stage_id).unwrap();
        let view = MapViewModel::build(&session, &expansion);
        let card = view.chain.iter().find(|c| c.id == stage_id).unwrap();
        assert!(card.selected);
    }

    #[test]
    fn test_lane_only_when_expanded() {
        let mut session = session();
        let stage_id = session.collection().process_stages()[0].id;
        session.add_substage(stage_id).unwrap();

        let collapsed = MapViewModel::build(&session, &ViewExpansion::new());
        assert!(collapsed.chain[0].lane.is_none());

        let mut expansion = ViewExpansion::new();
        expansion.expand(stage_id);
        let expanded = MapViewModel::build(&session, &expansion);
        let lane = expanded.chain[0].lane.as_ref().unwrap();
        assert_eq!(lane.cards.len(), 1);
        assert_eq!(lane.connector_count(), 0);
    }

    #[test]
    fn test_empty_lane_renders_add_affordance_state() {
        let session = session();
        let stage_id = session.collection().process_stages()[1].id;

        let mut expansion = ViewExpansion::new();
        expansion.expand(stage_id);

        let view = MapViewModel::build(&session, &expansion);
        let card = view.chain.iter().find(|c| c.id == stage_id).unwrap();
        assert!(card.lane.as_ref().unwrap().is_empty());
    }

    #[test]
    fn test_workflow_label_fallback() {
        let mut session = session();
        let stage_id = session.collection().process_stages()[0].id;
        let sub_id = session.add_substage(stage_id).unwrap();

        let mut expansion = ViewExpansion::new();
        expansion.expand(stage_id);

        let view = MapViewModel::build(&session, &expansion);
        let lane = view.chain[0].lane.as_ref().unwrap();
        assert_eq!(lane.cards[0].workflow_label, "No associated workflows");

        session
            .assign_workflow(stage_id, sub_id, &crate::model::WorkflowId::new("hr"))
            .unwrap();
        let view = MapViewModel::build(&session, &expansion);
        let lane = view.chain[0].lane.as_ref().unwrap();
        assert_eq!(lane.cards[0].workflow_label, "HR Approval Flow");
    }
}
