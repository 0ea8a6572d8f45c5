//! Generation-progress reveal sequencing.
//!
//! While a business process is being "generated" from uploaded files, the
//! editor progressively discloses stage rows: position `i` becomes
//! visible once the reveal counter exceeds `i`. The sequencing is split
//! into a pure state machine ([`RevealSequencer`]) and a timer-driven
//! async driver ([`RevealDriver`]). The counter gates row visibility
//! only; it has no semantic effect on the underlying collections.

mod driver;
mod sequencer;

pub use driver::{RevealConfig, RevealDriver};
pub use sequencer::{RevealPhase, RevealSequencer, RevealStep};
