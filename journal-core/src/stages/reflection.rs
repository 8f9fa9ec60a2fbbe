use super::Stage;
use crate::analyst::Analyst;
use crate::pipeline::PipelineError;
use crate::state::{JournalState, StateUpdate};
use async_trait::async_trait;

/// Writes a short reflection from the entry, its sentiment, and its tags.
pub struct ReflectionStage {
    analyst: Analyst,
}

impl ReflectionStage {
    pub fn new(analyst: Analyst) -> Self {
        Self { analyst }
    }
}

#[async_trait]
impl Stage for ReflectionStage {
    fn name(&self) -> &'static str {
        "reflection"
    }

    async fn run(&self, state: &JournalState) -> Result<StateUpdate, PipelineError> {
        let sentiment = state
            .sentiment
            .ok_or_else(|| PipelineError::missing(self.name(), "sentiment"))?;
        let tags = state
            .tags
            .as_deref()
            .ok_or_else(|| PipelineError::missing(self.name(), "tags"))?;

        let reflection = self
            .analyst
            .reflect(&state.entry_text, sentiment, tags)
            .await
            .map_err(|source| PipelineError::service(self.name(), source))?;
        Ok(StateUpdate::Reflection(reflection))
    }
}
