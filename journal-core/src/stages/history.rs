use super::Stage;
use crate::pipeline::PipelineError;
use crate::state::{JournalState, StateUpdate};
use async_trait::async_trait;

/// Appends the reflection to the history log.
///
/// An empty reflection leaves history as it was. The appended list is a new
/// `Vec`; the incoming history is never modified in place.
#[derive(Debug, Default, Clone, Copy)]
pub struct HistoryStage;

impl HistoryStage {
    pub fn new() -> Self {
        Self
    }

    /// The history that results from appending `reflection` to `history`.
    pub fn append(reflection: Option<&str>, history: Option<&[String]>) -> Option<Vec<String>> {
        let reflection = match reflection {
            Some(r) if !r.is_empty() => r,
            _ => return history.map(<[String]>::to_vec),
        };

        let mut appended = history.map(<[String]>::to_vec).unwrap_or_default();
        appended.push(reflection.to_string());
        Some(appended)
    }
}

#[async_trait]
impl Stage for HistoryStage {
    fn name(&self) -> &'static str {
        "history"
    }

    async fn run(&self, state: &JournalState) -> Result<StateUpdate, PipelineError> {
        Ok(StateUpdate::History(Self::append(
            state.reflection.as_deref(),
            state.history.as_deref(),
        )))
    }
}
