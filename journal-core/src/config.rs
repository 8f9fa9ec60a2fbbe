//! Journal configuration.

use std::path::PathBuf;

/// File the history log is kept in when no path is configured.
pub const DEFAULT_HISTORY_FILE: &str = "history.json";

/// Configuration for a journal session.
#[derive(Debug, Clone)]
pub struct JournalConfig {
    /// The model to use (defaults to the client's default model).
    pub model: Option<String>,

    /// Maximum tokens for each service response.
    pub max_tokens: usize,

    /// Temperature for generation. Zero keeps classification repeatable.
    pub temperature: Option<f32>,

    /// How many times the client retries a transient failure.
    pub max_retries: u32,

    /// Where the reflection history is persisted.
    pub history_path: PathBuf,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            model: None,
            max_tokens: 1024,
            temperature: Some(0.0),
            max_retries: 2,
            history_path: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}

impl JournalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: usize) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    pub fn with_history_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = path.into();
        self
    }
}
