//! View models for the two synchronized editor views.
//!
//! Renderers here are headless: they derive pure data (rows, cards,
//! connectors, skeletons, selection highlights) from the session. Row
//! and card expansion is view-local state owned by the caller, not part
//! of the shared model.

mod expansion;
mod list;
mod map;

pub use expansion::ViewExpansion;
pub use list::{ListRow, ListSection, ListViewModel, StageRowModel, SubstageRowModel};
pub use map::{
    FinalCardModel, MapViewModel, StageCardModel, SubstageCardModel, SubstageLaneModel,
};
