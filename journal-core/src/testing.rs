//! Testing utilities for the journal pipeline.
//!
//! This module provides:
//! - `ScriptedService` for deterministic runs without API calls
//! - Assertion helpers for checking tag output

use crate::normalize::MAX_TAGS;
use crate::service::{ServiceError, TextService};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A text service that returns canned responses in order.
///
/// Every prompt it receives is recorded, so tests can check both what was
/// asked and how many calls were made. Responses may be deliberately
/// malformed to exercise normalization.
#[derive(Default)]
pub struct ScriptedService {
    responses: Mutex<VecDeque<ScriptedReply>>,
    prompts: Mutex<Vec<String>>,
}

/// One scripted reply: either text or a service failure.
#[derive(Debug, Clone)]
pub enum ScriptedReply {
    Text(String),
    Failure(String),
}

impl ScriptedService {
    /// Create a service that answers with `responses`, one per call.
    pub fn new<I, S>(responses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let responses = responses
            .into_iter()
            .map(|r| ScriptedReply::Text(r.into()))
            .collect();
        Self {
            responses: Mutex::new(responses),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a service with no scripted responses; any call fails.
    pub fn silent() -> Self {
        Self::default()
    }

    /// Queue a text response.
    pub fn then_reply(self, text: impl Into<String>) -> Self {
        self.push(ScriptedReply::Text(text.into()));
        self
    }

    /// Queue a failure, as if the service were down.
    pub fn then_fail(self, reason: impl Into<String>) -> Self {
        self.push(ScriptedReply::Failure(reason.into()));
        self
    }

    /// Number of calls made so far.
    pub fn calls(&self) -> usize {
        self.lock_prompts().len()
    }

    /// Every prompt received, in order.
    pub fn prompts(&self) -> Vec<String> {
        self.lock_prompts().clone()
    }

    /// Number of scripted replies not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lock_responses().len()
    }

    fn push(&self, reply: ScriptedReply) {
        self.lock_responses().push_back(reply);
    }

    fn lock_responses(&self) -> std::sync::MutexGuard<'_, VecDeque<ScriptedReply>> {
        self.responses.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_prompts(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.prompts.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl TextService for ScriptedService {
    async fn complete(&self, prompt: &str) -> Result<String, ServiceError> {
        self.lock_prompts().push(prompt.to_string());

        match self.lock_responses().pop_front() {
            Some(ScriptedReply::Text(text)) => Ok(text),
            Some(ScriptedReply::Failure(reason)) => Err(ServiceError::Unavailable(reason)),
            None => Err(ServiceError::Unavailable(
                "no scripted responses left".to_string(),
            )),
        }
    }
}

// ============================================================================
// Assertion Helpers
// ============================================================================

/// Assert that tags are within the cap, unique, and use only `[a-z0-9-]`.
#[track_caller]
pub fn assert_valid_tags(tags: &[String]) {
    assert!(tags.len() <= MAX_TAGS, "Expected at most {MAX_TAGS} tags, got {tags:?}");
    for (i, tag) in tags.iter().enumerate() {
        assert!(!tag.is_empty(), "Empty tag in {tags:?}");
        assert!(
            tag.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
            "Tag {tag:?} has characters outside [a-z0-9-]"
        );
        assert!(!tags[..i].contains(tag), "Duplicate tag {tag:?} in {tags:?}");
    }
}
