//! Scenario tests for the editor session.

use super::*;
use crate::events::CollectingEventSink;
use crate::model::WorkflowRef;
use crate::reveal::{RevealConfig, RevealDriver, RevealPhase};
use crate::testing::{hiring_flow, stage_named, substage_named};
use pretty_assertions::assert_eq;
use std::time::Duration;

fn sample_session() -> EditorSession {
    EditorSession::with_collection(hiring_flow())
}

#[test]
fn test_add_substage_selects_it() {
    let mut session = sample_session();
    let screening = stage_named(session.collection(), "Screening").id;

    let sub_id = session.add_substage(screening).unwrap();

    assert_eq!(session.selection().stage(), Some(screening));
    assert_eq!(session.selection().substage(), Some(sub_id));
    assert_eq!(
        session
            .collection()
            .stage(screening)
            .unwrap()
            .substages
            .len(),
        3
    );
}

#[test]
fn test_add_substage_unknown_stage_no_partial_mutation() {
    let mut session = sample_session();
    let before = session.collection().clone();

    let err = session.add_substage(StageId::new()).unwrap_err();

    assert!(matches!(err, FlowboardError::StageNotFound { .. }));
    assert_eq!(session.collection(), &before);
    assert!(session.selection().is_empty());
}

#[test]
fn test_substage_selection_cannot_outlive_parent() {
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let primary = substage_named(interview, "Primary Interview");
    let interview_id = interview.id;

    session.select_substage(interview_id, primary).unwrap();
    session.clear_selection();

    assert_eq!(session.selection().stage(), None);
    assert_eq!(session.selection().substage(), None);
}

#[test]
fn test_select_substage_verifies_path() {
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let offer = stage_named(session.collection(), "Offer");
    let primary = substage_named(interview, "Primary Interview");

    // Right substage, wrong parent.
    let err = session.select_substage(offer.id, primary).unwrap_err();
    assert!(matches!(err, FlowboardError::SubstageNotFound { .. }));
    assert!(session.selection().is_empty());
}

#[test]
fn test_workflow_edit_scenario() {
    // Select the Interview stage's "Primary Interview" substage and move
    // its workflow association to the HR flow; nothing else changes.
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let primary = substage_named(interview, "Primary Interview");
    let secondary = substage_named(interview, "Secondary Interview");
    let interview_id = interview.id;

    session.select_substage(interview_id, primary).unwrap();
    session
        .assign_workflow(interview_id, primary, &WorkflowId::new("hr"))
        .unwrap();

    let interview = session.collection().stage(interview_id).unwrap();
    assert_eq!(
        interview.substage(primary).unwrap().workflow,
        Some(WorkflowRef::new("hr", "HR Approval Flow"))
    );
    assert_eq!(
        interview.substage(secondary).unwrap().workflow,
        Some(WorkflowRef::new("interview", "Interview workflow"))
    );
}

#[test]
fn test_assign_unknown_workflow_mutates_nothing() {
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let primary = substage_named(interview, "Primary Interview");
    let interview_id = interview.id;
    let before = session.collection().clone();

    let err = session
        .assign_workflow(interview_id, primary, &WorkflowId::new("nope"))
        .unwrap_err();

    assert!(matches!(err, FlowboardError::WorkflowNotFound { .. }));
    assert_eq!(session.collection(), &before);
}

#[test]
fn test_clear_workflow() {
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let primary = substage_named(interview, "Primary Interview");
    let interview_id = interview.id;

    session.clear_workflow(interview_id, primary).unwrap();
    assert!(session
        .collection()
        .substage(interview_id, primary)
        .unwrap()
        .workflow
        .is_none());
}

#[test]
fn test_commit_stage_name_ends_authoring() {
    let mut session = sample_session();
    let id = session.add_process_stage();
    assert!(session.collection().stage(id).unwrap().is_editing);

    session.commit_stage_name(id, "Background Check").unwrap();

    let stage = session.collection().stage(id).unwrap();
    assert_eq!(stage.name, "Background Check");
    assert!(!stage.is_editing);
}

#[test]
fn test_commit_empty_name_accepted() {
    let mut session = sample_session();
    let id = session.add_process_stage();

    session.commit_stage_name(id, "").unwrap();

    let stage = session.collection().stage(id).unwrap();
    assert_eq!(stage.name, "");
    assert!(!stage.is_editing);
}

#[test]
fn test_delete_stage_cascades_and_clears_selection() {
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let primary = substage_named(interview, "Primary Interview");
    let interview_id = interview.id;

    session.select_substage(interview_id, primary).unwrap();
    session.delete_stage(interview_id).unwrap();

    assert!(!session.collection().contains_stage(interview_id));
    assert!(session.selection().is_empty());
    assert_eq!(session.collection().total_len(), 7);
}

#[test]
fn test_delete_substage_falls_back_to_stage_selection() {
    let mut session = sample_session();
    let interview = stage_named(session.collection(), "Interview");
    let primary = substage_named(interview, "Primary Interview");
    let interview_id = interview.id;

    session.select_substage(interview_id, primary).unwrap();
    session.delete_substage(interview_id, primary).unwrap();

    assert_eq!(session.selection().stage(), Some(interview_id));
    assert_eq!(session.selection().substage(), None);
}

#[test]
fn test_switch_to_list_clears_selection() {
    let mut session = sample_session();
    let screening = stage_named(session.collection(), "Screening").id;

    session.set_view_mode(ViewMode::Map);
    session.select_stage(screening).unwrap();
    session.set_view_mode(ViewMode::List);

    assert!(session.selection().is_empty());
    assert_eq!(session.view_mode(), ViewMode::List);
}

#[test]
fn test_switch_to_map_keeps_selection() {
    let mut session = sample_session();
    let screening = stage_named(session.collection(), "Screening").id;

    session.select_stage(screening).unwrap();
    session.set_view_mode(ViewMode::Map);

    assert_eq!(session.selection().stage(), Some(screening));
}

#[test]
fn test_rules_modal_toggle() {
    let mut session = sample_session();
    assert!(!session.rules_modal_open());

    session.open_rules_modal();
    assert!(session.rules_modal_open());
    session.open_rules_modal();
    assert!(session.rules_modal_open());

    session.close_rules_modal();
    assert!(!session.rules_modal_open());
}

#[test]
fn test_generation_scenario_eight_rows() {
    // 5 process + 3 final stages: after 8 ticks every row is revealed,
    // and the settling tick completes the run exactly once.
    let mut session = sample_session();
    session.begin_generation(Vec::new());

    assert_eq!(session.reveal().total(), 8);
    assert!(session.reveal().is_generating());

    let mut completions = 0;
    for _ in 0..8 {
        assert!(matches!(session.advance_reveal(), RevealStep::Revealed { .. }));
    }
    assert_eq!(session.reveal().phase(), RevealPhase::Settling);
    assert!((0..8).all(|i| session.reveal().is_revealed(i)));

    for _ in 0..4 {
        if session.advance_reveal() == RevealStep::Completed {
            completions += 1;
        }
    }
    assert_eq!(completions, 1);
    assert!(session.reveal().is_complete());
    assert!(!session.reveal().is_generating());
}

#[test]
fn test_begin_generation_noop_while_running() {
    let mut session = sample_session();
    session.begin_generation(Vec::new());
    session.advance_reveal();
    let counter = session.reveal().counter();

    session.begin_generation(Vec::new());
    assert_eq!(session.reveal().counter(), counter);
}

#[test]
fn test_stage_added_after_completion_is_visible() {
    let mut session = sample_session();
    session.begin_generation(Vec::new());
    while !session.reveal().is_complete() {
        session.advance_reveal();
    }

    let id = session.add_process_stage();
    let position = session.collection().position_of(id).unwrap();
    assert!(session.reveal().is_revealed(position));
    assert!(session.reveal().is_complete());
}

#[test]
fn test_events_emitted_through_sink() {
    let sink = std::sync::Arc::new(CollectingEventSink::new());
    let mut session =
        EditorSession::with_collection(hiring_flow()).with_sink(sink.clone());

    let screening = stage_named(session.collection(), "Screening").id;
    session.add_substage(screening).unwrap();
    session.clear_selection();
    session.set_view_mode(ViewMode::Map);
    session.open_rules_modal();

    assert_eq!(sink.events_of_type("substage.added").len(), 1);
    assert_eq!(sink.events_of_type("selection.changed").len(), 2);
    assert_eq!(sink.events_of_type("view.switched").len(), 1);
    assert_eq!(sink.events_of_type("rules.opened").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reveal_driver_end_to_end() {
    let sink = std::sync::Arc::new(CollectingEventSink::new());
    let session = EditorSession::with_collection(hiring_flow())
        .with_sink(sink.clone())
        .into_shared();
    session.lock().begin_generation(Vec::new());

    let driver = RevealDriver::spawn(session.clone(), RevealConfig::default());

    // 8 reveal ticks at 900ms plus the 1200ms settling delay.
    tokio::time::sleep(Duration::from_millis(8 * 900 + 1200 + 100)).await;

    assert!(session.lock().reveal().is_complete());
    assert!(driver.is_finished());
    assert_eq!(sink.events_of_type("reveal.tick").len(), 8);
    assert_eq!(sink.events_of_type("reveal.completed").len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_reveal_driver_cancelled_mid_sequence() {
    let session = EditorSession::with_collection(hiring_flow()).into_shared();
    session.lock().begin_generation(Vec::new());

    let driver = RevealDriver::spawn(session.clone(), RevealConfig::default());

    tokio::time::sleep(Duration::from_millis(2 * 900 + 100)).await;
    driver.cancel("screen closed");
    let frozen = session.lock().reveal().counter();
    assert!(frozen < 8);

    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert_eq!(session.lock().reveal().counter(), frozen);
    assert!(!session.lock().reveal().is_complete());
}

#[tokio::test(start_paused = true)]
async fn test_reveal_driver_drop_clears_pending_timer() {
    let session = EditorSession::with_collection(hiring_flow()).into_shared();
    session.lock().begin_generation(Vec::new());

    let driver = RevealDriver::spawn(session.clone(), RevealConfig::default());
    drop(driver);

    tokio::time::sleep(Duration::from_millis(20_000)).await;
    assert_eq!(session.lock().reveal().counter(), 0);
}
