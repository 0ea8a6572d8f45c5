//! Stage and substage node types.

use crate::utils::generate_uuid;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier of a stage, stable for the stage's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StageId(Uuid);

impl StageId {
    /// Generates a fresh stage id.
    #[must_use]
    pub fn new() -> Self {
        Self(generate_uuid())
    }
}

impl Default for StageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier of a substage, stable within its parent stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubstageId(Uuid);

impl SubstageId {
    /// Generates a fresh substage id.
    #[must_use]
    pub fn new() -> Self {
        Self(generate_uuid())
    }
}

impl Default for SubstageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubstageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Direction of a trend badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Trending upward.
    Up,
    /// Trending downward.
    Down,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
        }
    }
}

/// A decorative trend badge rendered next to a stage or substage name.
///
/// Badges are order-preserving and unbounded in number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendIndicator {
    /// Badge direction.
    pub direction: TrendDirection,
    /// Badge value.
    pub value: u32,
}

impl TrendIndicator {
    /// Creates an upward trend badge.
    #[must_use]
    pub fn up(value: u32) -> Self {
        Self {
            direction: TrendDirection::Up,
            value,
        }
    }

    /// Creates a downward trend badge.
    #[must_use]
    pub fn down(value: u32) -> Self {
        Self {
            direction: TrendDirection::Down,
            value,
        }
    }
}

/// Presentational color tag for a final stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusColor {
    /// Positive outcome (e.g. hired).
    Emerald,
    /// Negative outcome (e.g. rejected, withdrawn).
    Rose,
    /// Neutral; the default for newly created final stages.
    Slate,
}

impl Default for StatusColor {
    fn default() -> Self {
        Self::Slate
    }
}

impl fmt::Display for StatusColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Emerald => write!(f, "emerald"),
            Self::Rose => write!(f, "rose"),
            Self::Slate => write!(f, "slate"),
        }
    }
}

/// Identifier of a workflow in the workflow catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkflowId(String);

impl WorkflowId {
    /// Creates a workflow id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkflowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A structured reference to an associated workflow.
///
/// Kept separate from the free-text description so a human note and a
/// catalog binding never share one attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowRef {
    /// Catalog id of the workflow.
    pub id: WorkflowId,
    /// Display name of the workflow.
    pub name: String,
}

impl WorkflowRef {
    /// Creates a workflow reference.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: WorkflowId::new(id),
            name: name.into(),
        }
    }
}

/// Default display name for newly added substages.
pub(crate) const NEW_SUBSTAGE_NAME: &str = "New Substage";

/// A named sub-step nested under exactly one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Substage {
    /// Unique identifier.
    pub id: SubstageId,
    /// Display name.
    pub name: String,
    /// Trend badges, in display order.
    #[serde(default)]
    pub indicators: Vec<TrendIndicator>,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Optional associated workflow.
    #[serde(default)]
    pub workflow: Option<WorkflowRef>,
}

impl Substage {
    /// Creates a substage with a fresh id and the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: SubstageId::new(),
            name: name.into(),
            indicators: Vec::new(),
            description: None,
            workflow: None,
        }
    }

    /// Adds a trend badge.
    #[must_use]
    pub fn with_indicator(mut self, indicator: TrendIndicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the associated workflow.
    #[must_use]
    pub fn with_workflow(mut self, workflow: WorkflowRef) -> Self {
        self.workflow = Some(workflow);
        self
    }
}

/// A named step in a business process.
///
/// Stages are either mid-flow process stages or terminal final stages;
/// `is_final` is fixed at creation and agrees with which collection of
/// [`StageCollection`](super::StageCollection) holds the stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Unique identifier.
    pub id: StageId,
    /// Display name; empty is permitted while being authored.
    pub name: String,
    /// Display-only counter of items "in" the stage; set directly, not
    /// derived from substages.
    #[serde(default)]
    pub count: u32,
    /// Trend badges, in display order.
    #[serde(default)]
    pub indicators: Vec<TrendIndicator>,
    /// Nested substages, in display order.
    #[serde(default)]
    pub substages: Vec<Substage>,
    /// Whether this is a terminal/outcome stage.
    pub is_final: bool,
    /// Presentational tag; only meaningful when `is_final` is true.
    #[serde(default)]
    pub status_color: Option<StatusColor>,
    /// Optional free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// When true, the stage is not chained into the main sequential flow
    /// and is reachable from any other stage.
    #[serde(default)]
    pub allow_incoming_transitions: bool,
    /// Transient authoring flag: true from creation until the name is
    /// committed.
    #[serde(default)]
    pub is_editing: bool,
}

impl Stage {
    /// Creates a freshly authored process stage: empty name, editing.
    #[must_use]
    pub fn draft_process() -> Self {
        Self {
            id: StageId::new(),
            name: String::new(),
            count: 0,
            indicators: Vec::new(),
            substages: Vec::new(),
            is_final: false,
            status_color: None,
            description: None,
            allow_incoming_transitions: false,
            is_editing: true,
        }
    }

    /// Creates a freshly authored final stage: empty name, editing, with
    /// the default status color.
    #[must_use]
    pub fn draft_final() -> Self {
        Self {
            status_color: Some(StatusColor::default()),
            is_final: true,
            ..Self::draft_process()
        }
    }

    /// Creates a committed process stage with the given name.
    #[must_use]
    pub fn process(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_editing: false,
            ..Self::draft_process()
        }
    }

    /// Creates a committed final stage with the given name and color.
    #[must_use]
    pub fn final_stage(name: impl Into<String>, color: StatusColor) -> Self {
        Self {
            name: name.into(),
            status_color: Some(color),
            is_editing: false,
            ..Self::draft_final()
        }
    }

    /// Sets the display counter.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count;
        self
    }

    /// Adds a trend badge.
    #[must_use]
    pub fn with_indicator(mut self, indicator: TrendIndicator) -> Self {
        self.indicators.push(indicator);
        self
    }

    /// Appends a substage.
    #[must_use]
    pub fn with_substage(mut self, substage: Substage) -> Self {
        self.substages.push(substage);
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Marks the stage as reachable from any other stage.
    #[must_use]
    pub fn freestanding(mut self) -> Self {
        self.allow_incoming_transitions = true;
        self
    }

    /// Looks up a substage by id.
    #[must_use]
    pub fn substage(&self, id: SubstageId) -> Option<&Substage> {
        self.substages.iter().find(|s| s.id == id)
    }

    /// Looks up a substage by id, mutably.
    pub(crate) fn substage_mut(&mut self, id: SubstageId) -> Option<&mut Substage> {
        self.substages.iter_mut().find(|s| s.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_ids_unique() {
        assert_ne!(StageId::new(), StageId::new());
        assert_ne!(SubstageId::new(), SubstageId::new());
    }

    #[test]
    fn test_draft_process_stage() {
        let stage = Stage::draft_process();
        assert!(stage.name.is_empty());
        assert!(stage.is_editing);
        assert!(!stage.is_final);
        assert!(stage.status_color.is_none());
        assert!(stage.substages.is_empty());
    }

    #[test]
    fn test_draft_final_stage_default_color() {
        let stage = Stage::draft_final();
        assert!(stage.is_final);
        assert_eq!(stage.status_color, Some(StatusColor::Slate));
        assert!(stage.is_editing);
    }

    #[test]
    fn test_committed_constructors() {
        let stage = Stage::process("Screening");
        assert_eq!(stage.name, "Screening");
        assert!(!stage.is_editing);

        let hired = Stage::final_stage("Hired", StatusColor::Emerald);
        assert!(hired.is_final);
        assert_eq!(hired.status_color, Some(StatusColor::Emerald));
    }

    #[test]
    fn test_substage_lookup() {
        let sub = Substage::new("Assessment").with_indicator(TrendIndicator::down(1));
        let sub_id = sub.id;
        let stage = Stage::process("Screening").with_substage(sub);

        assert_eq!(stage.substage(sub_id).map(|s| s.name.as_str()), Some("Assessment"));
        assert!(stage.substage(SubstageId::new()).is_none());
    }

    #[test]
    fn test_trend_indicator_constructors() {
        assert_eq!(TrendIndicator::up(3).direction, TrendDirection::Up);
        assert_eq!(TrendIndicator::down(1).value, 1);
    }

    #[test]
    fn test_stage_serialization_round_trip() {
        let stage = Stage::process("Interview")
            .with_count(2)
            .with_indicator(TrendIndicator::up(3))
            .with_substage(
                Substage::new("Primary Interview")
                    .with_workflow(WorkflowRef::new("interview", "Interview workflow")),
            );

        let json = serde_json::to_string(&stage).unwrap();
        let back: Stage = serde_json::from_str(&json).unwrap();
        assert_eq!(stage, back);
    }

    #[test]
    fn test_status_color_display() {
        assert_eq!(StatusColor::Emerald.to_string(), "emerald");
        assert_eq!(StatusColor::Rose.to_string(), "rose");
        assert_eq!(StatusColor::Slate.to_string(), "slate");
    }
}
