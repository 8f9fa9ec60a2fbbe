//! Persistence for the reflection history.
//!
//! The log is a single pretty-printed JSON document:
//!
//! ```json
//! {
//!   "history": [
//!     "First reflection.",
//!     "Second reflection."
//!   ]
//! }
//! ```
//!
//! Loading never fails. A missing file is an empty history; an unreadable or
//! malformed one is too, with a warning logged. Saving overwrites the whole
//! file and reports errors. Writes are not atomic and there is no locking, so
//! only one process should use a given file at a time.

use crate::config::DEFAULT_HISTORY_FILE;
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;

/// Errors from saving history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Serialize)]
struct HistoryFile<'a> {
    history: &'a [String],
}

/// File-backed store for the reflection log.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `history.json` in the current working directory.
    pub fn default_path() -> PathBuf {
        PathBuf::from(DEFAULT_HISTORY_FILE)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored history.
    ///
    /// Returns an empty list if the file is missing, unreadable, not valid
    /// UTF-8 JSON, or not an object whose `history` key holds a list.
    /// Non-string list elements are dropped.
    pub async fn load(&self) -> Vec<String> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "could not read history file");
                return Vec::new();
            }
        };

        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "history file is not valid UTF-8");
                return Vec::new();
            }
        };

        let data: Value = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "history file is not valid JSON");
                return Vec::new();
            }
        };

        match data.get("history") {
            Some(Value::Array(items)) => {
                let history: Vec<String> = items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect();
                if history.len() != items.len() {
                    tracing::debug!(
                        dropped = items.len() - history.len(),
                        "ignored non-string history entries"
                    );
                }
                history
            }
            _ => {
                tracing::warn!(
                    path = %self.path.display(),
                    "history file has no `history` list"
                );
                Vec::new()
            }
        }
    }

    /// Overwrite the stored history with `history`.
    pub async fn save(&self, history: &[String]) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(&HistoryFile { history })?;
        fs::write(&self.path, content).await?;
        tracing::debug!(path = %self.path.display(), entries = history.len(), "saved history");
        Ok(())
    }
}

impl Default for HistoryStore {
    fn default() -> Self {
        Self::new(Self::default_path())
    }
}
