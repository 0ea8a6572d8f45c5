//! The stage/substage data model.
//!
//! This module provides:
//! - Stage and substage node types with their presentational attributes
//! - Partial-update patch types for merge-style edits
//! - The stage collection, the single source of truth for all
//!   structural mutation

mod collection;
mod patch;
mod stage;

pub use collection::StageCollection;
pub use patch::{StagePatch, SubstagePatch};
pub use stage::{
    Stage, StageId, StatusColor, Substage, SubstageId, TrendDirection,
    TrendIndicator, WorkflowId, WorkflowRef,
};
