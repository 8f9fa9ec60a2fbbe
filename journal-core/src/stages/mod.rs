//! The four pipeline stages.
//!
//! Each stage reads the fields it needs from a [`JournalState`] and returns
//! one [`StateUpdate`] for the field it owns:
//!
//! | Stage        | Reads                          | Writes       |
//! |--------------|--------------------------------|--------------|
//! | `Mood`       | `entry_text`                   | `sentiment`  |
//! | `Tags`       | `entry_text`                   | `tags`       |
//! | `Reflection` | `entry_text, sentiment, tags`  | `reflection` |
//! | `History`    | `reflection, history`          | `history`    |

mod history;
mod mood;
mod reflection;
mod tags;

pub use history::HistoryStage;
pub use mood::MoodStage;
pub use reflection::ReflectionStage;
pub use tags::TagStage;

use crate::pipeline::PipelineError;
use crate::state::{JournalState, StateUpdate};
use async_trait::async_trait;

/// One step of the pipeline.
#[async_trait]
pub trait Stage: Send + Sync {
    /// Short name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Compute this stage's update from the current state.
    async fn run(&self, state: &JournalState) -> Result<StateUpdate, PipelineError>;
}
