//! # Flowboard
//!
//! The headless core of a stage-based business process editor.
//!
//! Flowboard owns the data model and view models behind a process editing
//! screen:
//!
//! - **Stage collection**: two ordered collections of process and final
//!   stages, each with nested substages, plus all structural mutation
//! - **Selection**: a single selection path (stage, or stage + substage)
//!   that the inspector panel binds to
//! - **View models**: list rows and map cards/connectors derived from the
//!   collection, including the generation-progress skeleton gating
//! - **Reveal sequencing**: a cancellable timer-driven state machine that
//!   progressively discloses rows while a flow is being "generated"
//! - **Event-driven observability**: structured editor events for
//!   monitoring and tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use flowboard::prelude::*;
//!
//! let mut session = EditorSession::new();
//! let stage = session.add_process_stage();
//! session.commit_stage_name(stage, "Screening")?;
//! let substage = session.add_substage(stage)?;
//!
//! let expansion = ViewExpansion::new();
//! let list = ListViewModel::build(&session, &expansion);
//! let map = MapViewModel::build(&session, &expansion);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod catalog;
pub mod editor;
pub mod errors;
pub mod events;
pub mod inspector;
pub mod model;
pub mod observability;
pub mod reveal;
pub mod selection;
pub mod testing;
pub mod timer;
pub mod upload;
pub mod utils;
pub mod views;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::catalog::{WorkflowCatalog, WorkflowOption};
    pub use crate::editor::{EditorSession, SharedSession, ViewMode};
    pub use crate::errors::FlowboardError;
    pub use crate::events::{
        CollectingEventSink, EditorEvent, EventSink, LoggingEventSink, NoOpEventSink,
    };
    pub use crate::inspector::InspectorModel;
    pub use crate::model::{
        Stage, StageCollection, StageId, StagePatch, StatusColor, Substage,
        SubstageId, SubstagePatch, TrendDirection, TrendIndicator, WorkflowId,
        WorkflowRef,
    };
    pub use crate::reveal::{RevealConfig, RevealDriver, RevealPhase, RevealSequencer, RevealStep};
    pub use crate::selection::Selection;
    pub use crate::timer::{CancellationToken, TickOutcome, TimerDriver};
    pub use crate::upload::{
        FileId, SourceFile, UploadConfig, UploadDriver, UploadSimulator, UploadState,
    };
    pub use crate::views::{ListRow, ListViewModel, MapViewModel, ViewExpansion};
}
