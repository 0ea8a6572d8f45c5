//! Simulated file upload.
//!
//! The upload flow exists only to hand `{id, name, size}` records to the
//! editor as the trigger to start generation; file content is never
//! consumed. Progress is simulated: every tick advances each uploading
//! file by a fixed step until it reaches 100 and flips to ready.

use crate::events::{EditorEvent, EventSink};
use crate::timer::{TickOutcome, TimerDriver};
use crate::utils::generate_uuid;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

/// Unique identifier of an uploaded file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FileId(Uuid);

impl FileId {
    /// Generates a fresh file id.
    #[must_use]
    pub fn new() -> Self {
        Self(generate_uuid())
    }
}

impl Default for FileId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Upload progress of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum UploadState {
    /// Still uploading, at the given percentage.
    Uploading {
        /// Progress percentage, 0..100.
        percent: u8,
    },
    /// Upload finished.
    Ready,
}

impl UploadState {
    /// Returns true once the upload finished.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }
}

/// A file record handed to the editor by the upload flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceFile {
    /// Unique identifier.
    pub id: FileId,
    /// Display name.
    pub name: String,
    /// Human-readable size label (e.g. "945 KB").
    pub size_label: String,
    /// Upload progress.
    pub state: UploadState,
}

impl SourceFile {
    /// Creates a file record at 0% progress.
    #[must_use]
    pub fn new(name: impl Into<String>, size_label: impl Into<String>) -> Self {
        Self {
            id: FileId::new(),
            name: name.into(),
            size_label: size_label.into(),
            state: UploadState::Uploading { percent: 0 },
        }
    }

    /// Creates a file record that is already uploaded.
    #[must_use]
    pub fn ready(name: impl Into<String>, size_label: impl Into<String>) -> Self {
        Self {
            state: UploadState::Ready,
            ..Self::new(name, size_label)
        }
    }
}

fn default_upload_interval() -> Duration {
    Duration::from_millis(300)
}

fn default_upload_step() -> u8 {
    10
}

/// Timing configuration for the upload simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Delay between progress ticks.
    #[serde(default = "default_upload_interval")]
    pub tick_interval: Duration,
    /// Percentage points added per tick.
    #[serde(default = "default_upload_step")]
    pub step: u8,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            tick_interval: default_upload_interval(),
            step: default_upload_step(),
        }
    }
}

/// Advances a set of file records toward ready, one step per tick.
#[derive(Debug, Clone, Default)]
pub struct UploadSimulator {
    files: Vec<SourceFile>,
    step: u8,
}

impl UploadSimulator {
    /// Creates an empty simulator with the default step.
    #[must_use]
    pub fn new() -> Self {
        Self {
            files: Vec::new(),
            step: default_upload_step(),
        }
    }

    /// Creates a simulator with an explicit step.
    #[must_use]
    pub fn with_step(step: u8) -> Self {
        Self {
            files: Vec::new(),
            step: step.max(1),
        }
    }

    /// Overrides the per-tick step.
    pub fn set_step(&mut self, step: u8) {
        self.step = step.max(1);
    }

    /// Enqueues a file at 0% progress and returns its id.
    pub fn enqueue(&mut self, name: impl Into<String>, size_label: impl Into<String>) -> FileId {
        let file = SourceFile::new(name, size_label);
        let id = file.id;
        self.files.push(file);
        id
    }

    /// Removes a file record (the list's trash affordance).
    pub fn remove(&mut self, id: FileId) -> Option<SourceFile> {
        let pos = self.files.iter().position(|f| f.id == id)?;
        Some(self.files.remove(pos))
    }

    /// Returns the file records in order.
    #[must_use]
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Returns true once every file is ready (and at least one exists).
    #[must_use]
    pub fn all_ready(&self) -> bool {
        !self.files.is_empty() && self.files.iter().all(|f| f.state.is_ready())
    }

    /// Advances every uploading file by one step; files reaching 100 flip
    /// to ready. Returns the ids of files that became ready on this tick.
    pub fn tick(&mut self) -> Vec<FileId> {
        let mut became_ready = Vec::new();
        for file in &mut self.files {
            if let UploadState::Uploading { percent } = file.state {
                let next = percent.saturating_add(self.step);
                if next >= 100 {
                    file.state = UploadState::Ready;
                    became_ready.push(file.id);
                } else {
                    file.state = UploadState::Uploading { percent: next };
                }
            }
        }
        became_ready
    }
}

/// Type alias for a simulator shared with an [`UploadDriver`].
pub type SharedUpload = Arc<Mutex<UploadSimulator>>;

/// Drives a shared upload simulator until every file is ready.
#[derive(Debug)]
pub struct UploadDriver {
    inner: TimerDriver,
}

impl UploadDriver {
    /// Spawns a driver over a shared simulator, emitting progress events
    /// through the sink.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(simulator: SharedUpload, config: UploadConfig, sink: Arc<dyn EventSink>) -> Self {
        simulator.lock().set_step(config.step);
        let inner = TimerDriver::spawn(config.tick_interval, move || {
            let mut simulator = simulator.lock();
            let became_ready = simulator.tick();

            for file in simulator.files() {
                match file.state {
                    UploadState::Uploading { percent } => {
                        sink.try_emit(EditorEvent::upload_progress(&file.name, percent));
                    }
                    UploadState::Ready if became_ready.contains(&file.id) => {
                        sink.try_emit(EditorEvent::upload_ready(&file.name));
                    }
                    UploadState::Ready => {}
                }
            }

            if simulator.all_ready() {
                TickOutcome::Stop
            } else {
                TickOutcome::Continue
            }
        });

        Self { inner }
    }

    /// Cancels the driver, clearing any pending timer.
    pub fn cancel(&self, reason: impl Into<String>) {
        self.inner.cancel(reason);
    }

    /// Returns whether the driver task has finished.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.inner.is_finished()
    }
}
