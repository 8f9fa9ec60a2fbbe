use super::Stage;
use crate::analyst::Analyst;
use crate::pipeline::PipelineError;
use crate::state::{JournalState, StateUpdate};
use async_trait::async_trait;

/// Classifies the entry's tone.
pub struct MoodStage {
    analyst: Analyst,
}

impl MoodStage {
    pub fn new(analyst: Analyst) -> Self {
        Self { analyst }
    }
}

#[async_trait]
impl Stage for MoodStage {
    fn name(&self) -> &'static str {
        "mood"
    }

    async fn run(&self, state: &JournalState) -> Result<StateUpdate, PipelineError> {
        let sentiment = self
            .analyst
            .classify(&state.entry_text)
            .await
            .map_err(|source| PipelineError::service(self.name(), source))?;
        Ok(StateUpdate::Sentiment(sentiment))
    }
}
