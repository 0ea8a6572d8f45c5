//! Event emission infrastructure for observability.
//!
//! Every editor mutation emits a structured [`EditorEvent`] through the
//! session's configured [`EventSink`], alongside a `tracing` log line.

mod event;
mod sink;

pub use event::EditorEvent;
pub use sink::{CollectingEventSink, EventSink, LoggingEventSink, NoOpEventSink};
