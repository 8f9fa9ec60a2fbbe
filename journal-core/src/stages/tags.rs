use super::Stage;
use crate::analyst::Analyst;
use crate::pipeline::PipelineError;
use crate::state::{JournalState, StateUpdate};
use async_trait::async_trait;

/// Extracts theme tags from the entry.
pub struct TagStage {
    analyst: Analyst,
}

impl TagStage {
    pub fn new(analyst: Analyst) -> Self {
        Self { analyst }
    }
}

#[async_trait]
impl Stage for TagStage {
    fn name(&self) -> &'static str {
        "tags"
    }

    async fn run(&self, state: &JournalState) -> Result<StateUpdate, PipelineError> {
        let tags = self
            .analyst
            .extract_tags(&state.entry_text)
            .await
            .map_err(|source| PipelineError::service(self.name(), source))?;
        Ok(StateUpdate::Tags(tags))
    }
}
