//! Journal sessions: one pipeline plus the history it appends to.

use crate::analyst::Analyst;
use crate::config::JournalConfig;
use crate::history::{HistoryError, HistoryStore};
use crate::pipeline::{Pipeline, PipelineError};
use crate::service::{ClaudeService, ServiceError, TextService};
use crate::state::JournalState;
use std::sync::Arc;
use thiserror::Error;

/// Errors from a journal session.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("No API key configured - set ANTHROPIC_API_KEY environment variable")]
    NoApiKey,

    #[error("Text service error: {0}")]
    Client(#[from] ServiceError),
}

/// A journal backed by a text service and a history file.
///
/// Processing an entry and persisting its result are separate calls, so the
/// caller decides what happens in between (the CLI prints the result first).
pub struct Journal {
    pipeline: Pipeline,
    store: HistoryStore,
}

impl Journal {
    /// Create a journal that talks to Claude.
    ///
    /// Requires the `ANTHROPIC_API_KEY` environment variable.
    pub fn new(config: JournalConfig) -> Result<Self, JournalError> {
        let service = ClaudeService::from_env(&config).map_err(|e| match e {
            ServiceError::Client(claude::Error::NoApiKey) => JournalError::NoApiKey,
            other => JournalError::Client(other),
        })?;
        tracing::debug!(model = service.model(), history = %config.history_path.display(), "journal ready");

        Ok(Self::with_service(
            Arc::new(service),
            HistoryStore::new(config.history_path),
        ))
    }

    /// Create a journal over any text service and store.
    pub fn with_service(service: Arc<dyn TextService>, store: HistoryStore) -> Self {
        Self::with_pipeline(Pipeline::journal(Analyst::new(service)), store)
    }

    /// Create a journal running a custom pipeline.
    pub fn with_pipeline(pipeline: Pipeline, store: HistoryStore) -> Self {
        Self { pipeline, store }
    }

    pub fn store(&self) -> &HistoryStore {
        &self.store
    }

    /// Seed a fresh state for `entry` with the stored history.
    pub async fn begin(&self, entry: impl Into<String>) -> JournalState {
        JournalState::new(entry, self.store.load().await)
    }

    /// Run the pipeline for one entry. Nothing is written to disk.
    pub async fn process(&self, entry: impl Into<String>) -> Result<JournalState, JournalError> {
        let state = self.begin(entry).await;
        Ok(self.pipeline.run(state).await?)
    }

    /// Persist the history of a finished run.
    pub async fn persist(&self, state: &JournalState) -> Result<(), JournalError> {
        self.store.save(state.history_or_empty()).await?;
        Ok(())
    }

    /// Process an entry and persist the result.
    pub async fn record(&self, entry: impl Into<String>) -> Result<JournalState, JournalError> {
        let state = self.process(entry).await?;
        self.persist(&state).await?;
        Ok(state)
    }

    /// The history as currently stored.
    pub async fn history(&self) -> Vec<String> {
        self.store.load().await
    }
}
