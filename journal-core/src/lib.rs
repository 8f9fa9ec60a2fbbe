//! Mood journal pipeline.
//!
//! This crate provides:
//! - A four-stage pipeline: sentiment, tags, reflection, history append
//! - Normalization of untrusted language-model output
//! - A JSON file store for the reflection history
//! - A scripted text service for deterministic tests
//!
//! # Quick Start
//!
//! ```ignore
//! use journal_core::{Journal, JournalConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let journal = Journal::new(JournalConfig::default())?;
//!
//!     let state = journal.process("Long day, but dinner with friends helped.").await?;
//!     println!("{:?} {:?}", state.sentiment, state.tags);
//!     println!("{}", state.reflection.as_deref().unwrap_or_default());
//!
//!     journal.persist(&state).await?;
//!     Ok(())
//! }
//! ```

pub mod analyst;
pub mod config;
pub mod history;
pub mod journal;
pub mod normalize;
pub mod pipeline;
pub mod prompts;
pub mod service;
pub mod stages;
pub mod state;
pub mod testing;

// Primary public API
pub use analyst::Analyst;
pub use config::JournalConfig;
pub use history::{HistoryError, HistoryStore};
pub use journal::{Journal, JournalError};
pub use pipeline::{Pipeline, PipelineError};
pub use service::{ClaudeService, ServiceError, TextService};
pub use stages::{HistoryStage, MoodStage, ReflectionStage, Stage, TagStage};
pub use state::{JournalState, Sentiment, StateUpdate};
pub use testing::ScriptedService;
