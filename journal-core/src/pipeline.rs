//! The pipeline driver.
//!
//! A pipeline is an ordered list of stages. Running it awaits each stage in
//! turn and applies its update to the state before the next one starts. There
//! is no branching, no retry, and no validation here; the first stage error
//! ends the run.
//!
//! # Extending
//!
//! [`Pipeline::with_stages`] accepts any ordered stage list. A mood-dependent
//! stage (for example a gratitude reframe that only acts when the sentiment is
//! negative) belongs between [`TagStage`] and [`ReflectionStage`], and must
//! decide for itself whether to act: the driver never skips a stage.

use crate::analyst::Analyst;
use crate::service::ServiceError;
use crate::stages::{HistoryStage, MoodStage, ReflectionStage, Stage, TagStage};
use crate::state::JournalState;
use thiserror::Error;

/// Errors that end a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("{stage} stage failed: {source}")]
    Service {
        stage: &'static str,
        #[source]
        source: ServiceError,
    },

    #[error("{stage} stage needs `{field}`, which no earlier stage set")]
    MissingField {
        stage: &'static str,
        field: &'static str,
    },
}

impl PipelineError {
    pub fn service(stage: &'static str, source: ServiceError) -> Self {
        PipelineError::Service { stage, source }
    }

    pub fn missing(stage: &'static str, field: &'static str) -> Self {
        PipelineError::MissingField { stage, field }
    }

    /// The stage the run stopped at.
    pub fn stage(&self) -> &'static str {
        match self {
            PipelineError::Service { stage, .. } | PipelineError::MissingField { stage, .. } => {
                *stage
            }
        }
    }
}

/// An ordered sequence of stages.
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    /// The journal pipeline: mood, tags, reflection, history.
    pub fn journal(analyst: Analyst) -> Self {
        let stages: Vec<Box<dyn Stage>> = vec![
            Box::new(MoodStage::new(analyst.clone())),
            Box::new(TagStage::new(analyst.clone())),
            Box::new(ReflectionStage::new(analyst)),
            Box::new(HistoryStage::new()),
        ];
        Self::with_stages(stages)
    }

    /// A pipeline running exactly `stages`, in order.
    pub fn with_stages(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Stage names in execution order.
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run every stage in order and return the final state.
    pub async fn run(&self, mut state: JournalState) -> Result<JournalState, PipelineError> {
        for stage in &self.stages {
            tracing::debug!(stage = stage.name(), "running stage");
            let update = stage.run(&state).await?;
            tracing::trace!(stage = stage.name(), field = update.field(), "applying update");
            state.apply(update);
        }
        Ok(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{Sentiment, StateUpdate};
    use crate::testing::ScriptedService;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    fn journal_pipeline(service: &Arc<ScriptedService>) -> Pipeline {
        Pipeline::journal(Analyst::new(service.clone()))
    }

    #[test]
    fn test_journal_stage_order() {
        let service = Arc::new(ScriptedService::silent());
        assert_eq!(
            journal_pipeline(&service).stage_names(),
            vec!["mood", "tags", "reflection", "history"]
        );
    }

    #[tokio::test]
    async fn test_full_run() {
        let service = Arc::new(ScriptedService::new([
            "negative",
            "work, stress, meetings",
            "Work has been heavy lately. The stress makes sense.",
        ]));
        let state = JournalState::new(
            "Too many meetings today.",
            vec!["Earlier reflection.".to_string()],
        );

        let result = journal_pipeline(&service).run(state).await.unwrap();

        assert_eq!(result.entry_text, "Too many meetings today.");
        assert_eq!(result.sentiment, Some(Sentiment::Negative));
        assert_eq!(result.tags_or_empty(), ["work", "stress", "meetings"]);
        assert_eq!(
            result.history_or_empty(),
            [
                "Earlier reflection.",
                "Work has been heavy lately. The stress makes sense."
            ]
        );
        assert_eq!(service.calls(), 3);
    }

    #[tokio::test]
    async fn test_prompts_are_issued_in_stage_order() {
        let service = Arc::new(ScriptedService::new(["positive", "rest", "Rest well."]));
        journal_pipeline(&service)
            .run(JournalState::without_history("Slept in."))
            .await
            .unwrap();

        let prompts = service.prompts();
        assert!(prompts[0].contains("mood classifier"));
        assert!(prompts[1].contains("tag generator"));
        assert!(prompts[2].contains("reflection writer"));
    }

    #[tokio::test]
    async fn test_empty_entry_still_reflects() {
        let service = Arc::new(ScriptedService::new(["Some days are quiet."]));
        let result = journal_pipeline(&service)
            .run(JournalState::new("", vec![]))
            .await
            .unwrap();

        assert_eq!(result.sentiment, Some(Sentiment::Neutral));
        assert_eq!(result.tags, Some(vec![]));
        assert_eq!(result.history_or_empty(), ["Some days are quiet."]);
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_reflection_leaves_history_unchanged() {
        let service = Arc::new(ScriptedService::new(["neutral", "routine", "   "]));
        let history = vec!["One.".to_string(), "Two.".to_string()];

        let result = journal_pipeline(&service)
            .run(JournalState::new("Usual day.", history.clone()))
            .await
            .unwrap();

        assert_eq!(result.reflection.as_deref(), Some(""));
        assert_eq!(result.history, Some(history));
    }

    #[tokio::test]
    async fn test_service_failure_stops_the_run() {
        let service = Arc::new(
            ScriptedService::silent()
                .then_reply("positive")
                .then_fail("connection reset"),
        );

        let err = journal_pipeline(&service)
            .run(JournalState::without_history("Good day."))
            .await
            .unwrap_err();

        assert_eq!(err.stage(), "tags");
        assert!(err.to_string().contains("connection reset"));
        assert_eq!(service.calls(), 2);
    }

    struct Recorder {
        name: &'static str,
        log: Arc<Mutex<Vec<&'static str>>>,
    }

    #[async_trait]
    impl Stage for Recorder {
        fn name(&self) -> &'static str {
            self.name
        }

        async fn run(&self, state: &JournalState) -> Result<StateUpdate, PipelineError> {
            self.log.lock().unwrap().push(self.name);
            let mut seen = state.tags.clone().unwrap_or_default();
            seen.push(self.name.to_string());
            Ok(StateUpdate::Tags(seen))
        }
    }

    #[tokio::test]
    async fn test_custom_stages_run_in_order_and_see_prior_updates() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let stages: Vec<Box<dyn Stage>> = ["first", "second", "third"]
            .into_iter()
            .map(|name| {
                Box::new(Recorder {
                    name,
                    log: log.clone(),
                }) as Box<dyn Stage>
            })
            .collect();

        let result = Pipeline::with_stages(stages)
            .run(JournalState::without_history("x"))
            .await
            .unwrap();

        assert_eq!(*log.lock().unwrap(), vec!["first", "second", "third"]);
        assert_eq!(result.tags_or_empty(), ["first", "second", "third"]);
    }
}
