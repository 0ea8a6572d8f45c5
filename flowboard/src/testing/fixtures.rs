//! Sample data fixtures.

use crate::model::{
    Stage, StageCollection, StatusColor, Substage, SubstageId, TrendIndicator, WorkflowRef,
};

/// Builds the canonical sample flow: five process stages and three final
/// stages of a frontline hiring process.
#[must_use]
pub fn hiring_flow() -> StageCollection {
    let interview_workflow = WorkflowRef::new("interview", "Interview workflow");

    StageCollection::from_stages([
        Stage::process("New Applicant")
            .with_count(1)
            .with_indicator(TrendIndicator::up(3))
            .with_substage(
                Substage::new("Initial Application").with_indicator(TrendIndicator::up(3)),
            ),
        Stage::process("Screening")
            .with_count(2)
            .with_indicator(TrendIndicator::down(1))
            .with_indicator(TrendIndicator::up(3))
            .with_substage(Substage::new("Assessment").with_indicator(TrendIndicator::down(1)))
            .with_substage(
                Substage::new("Recruiter Review").with_indicator(TrendIndicator::up(3)),
            ),
        Stage::process("Interview")
            .with_count(2)
            .with_indicator(TrendIndicator::down(1))
            .with_indicator(TrendIndicator::up(3))
            .with_substage(
                Substage::new("Primary Interview")
                    .with_indicator(TrendIndicator::down(1))
                    .with_indicator(TrendIndicator::up(3))
                    .with_workflow(interview_workflow.clone()),
            )
            .with_substage(
                Substage::new("Secondary Interview")
                    .with_indicator(TrendIndicator::down(1))
                    .with_indicator(TrendIndicator::up(3))
                    .with_workflow(interview_workflow),
            ),
        Stage::process("Offer")
            .with_count(1)
            .with_indicator(TrendIndicator::down(1))
            .with_indicator(TrendIndicator::up(3))
            .with_substage(
                Substage::new("Offer")
                    .with_indicator(TrendIndicator::down(1))
                    .with_indicator(TrendIndicator::up(3)),
            ),
        Stage::process("Waitlist")
            .with_description("Stage description"),
        Stage::final_stage("Hired", StatusColor::Emerald)
            .with_indicator(TrendIndicator::down(1))
            .with_substage(Substage::new("highly qualified"))
            .with_substage(Substage::new("qualified")),
        Stage::final_stage("Rejected", StatusColor::Rose)
            .with_indicator(TrendIndicator::down(4))
            .with_substage(Substage::new("low fit score"))
            .with_substage(Substage::new("assessment not passed")),
        Stage::final_stage("Withdrawn", StatusColor::Rose)
            .with_indicator(TrendIndicator::down(4))
            .with_substage(Substage::new("Response timeout"))
            .with_substage(Substage::new("Offer declined")),
    ])
}

/// Looks up a sample stage by display name.
///
/// # Panics
///
/// Panics when no stage carries the name; fixtures address stages that
/// exist by construction.
#[must_use]
pub fn stage_named<'a>(collection: &'a StageCollection, name: &str) -> &'a Stage {
    collection
        .iter_all()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no sample stage named '{name}'"))
}

/// Looks up a substage of a sample stage by display name.
///
/// # Panics
///
/// Panics when the stage has no substage with the name.
#[must_use]
pub fn substage_named(stage: &Stage, name: &str) -> SubstageId {
    stage
        .substages
        .iter()
        .find(|s| s.name == name)
        .map(|s| s.id)
        .unwrap_or_else(|| panic!("no substage named '{name}' under '{}'", stage.name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_shape() {
        let flow = hiring_flow();
        assert_eq!(flow.process_stages().len(), 5);
        assert_eq!(flow.final_stages().len(), 3);
        assert_eq!(flow.total_len(), 8);
    }

    #[test]
    fn test_sample_ids_unique() {
        let flow = hiring_flow();
        let mut seen = HashSet::new();
        for stage in flow.iter_all() {
            assert!(seen.insert(stage.id.to_string()));
            for sub in &stage.substages {
                assert!(seen.insert(sub.id.to_string()));
            }
        }
    }

    #[test]
    fn test_sample_final_flags_agree_with_collections() {
        let flow = hiring_flow();
        assert!(flow.process_stages().iter().all(|s| !s.is_final));
        assert!(flow.final_stages().iter().all(|s| s.is_final));
    }

    #[test]
    fn test_stage_lookup_helpers() {
        let flow = hiring_flow();
        let interview = stage_named(&flow, "Interview");
        assert_eq!(interview.substages.len(), 2);

        let primary = substage_named(interview, "Primary Interview");
        let substage = interview.substage(primary).unwrap();
        assert_eq!(
            substage.workflow.as_ref().map(|w| w.name.as_str()),
            Some("Interview workflow")
        );
    }

    #[test]
    fn test_waitlist_has_no_substages() {
        let flow = hiring_flow();
        let waitlist = stage_named(&flow, "Waitlist");
        assert!(waitlist.substages.is_empty());
        assert_eq!(waitlist.description.as_deref(), Some("Stage description"));
    }
}
