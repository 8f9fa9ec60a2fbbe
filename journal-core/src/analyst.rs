//! The three language-model capabilities the pipeline relies on.
//!
//! `Analyst` wraps a [`TextService`] and exposes exactly what the stages need:
//! classify an entry, extract its tags, and write a reflection. It owns the
//! prompt construction, the blank-entry short-circuits, and normalization of
//! the raw responses.

use crate::normalize::{is_blank, normalize_reflection, normalize_sentiment, parse_tags};
use crate::prompts::{mood_prompt, reflection_prompt, tags_prompt};
use crate::service::{ServiceError, TextService};
use crate::state::Sentiment;
use std::sync::Arc;

/// Prompt builder and response normalizer in front of a text service.
#[derive(Clone)]
pub struct Analyst {
    service: Arc<dyn TextService>,
}

impl Analyst {
    pub fn new(service: Arc<dyn TextService>) -> Self {
        Self { service }
    }

    /// Classify the tone of an entry.
    ///
    /// Blank entries are `Neutral` without a service call. Responses that are
    /// not a recognizable label also degrade to `Neutral`.
    pub async fn classify(&self, entry: &str) -> Result<Sentiment, ServiceError> {
        if is_blank(entry) {
            return Ok(Sentiment::Neutral);
        }

        let raw = self.service.complete(&mood_prompt(entry)).await?;
        let sentiment = normalize_sentiment(&raw);
        tracing::debug!(raw = %raw, %sentiment, "classified entry");
        Ok(sentiment)
    }

    /// Extract up to four theme tags from an entry.
    ///
    /// Blank entries yield no tags without a service call.
    pub async fn extract_tags(&self, entry: &str) -> Result<Vec<String>, ServiceError> {
        if is_blank(entry) {
            return Ok(Vec::new());
        }

        let raw = self.service.complete(&tags_prompt(entry)).await?;
        let tags = parse_tags(&raw);
        tracing::debug!(raw = %raw, ?tags, "extracted tags");
        Ok(tags)
    }

    /// Write a short reflection for an entry.
    ///
    /// The response is trimmed and otherwise returned as-is.
    pub async fn reflect(
        &self,
        entry: &str,
        sentiment: Sentiment,
        tags: &[String],
    ) -> Result<String, ServiceError> {
        let raw = self
            .service
            .complete(&reflection_prompt(entry, sentiment, tags))
            .await?;
        let reflection = normalize_reflection(&raw);
        tracing::debug!(chars = reflection.chars().count(), "generated reflection");
        Ok(reflection)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedService;

    fn analyst(service: &Arc<ScriptedService>) -> Analyst {
        Analyst::new(service.clone())
    }

    #[tokio::test]
    async fn test_blank_entry_skips_service() {
        let service = Arc::new(ScriptedService::silent());
        let analyst = analyst(&service);

        for entry in ["", "   ", "\n\t"] {
            assert_eq!(analyst.classify(entry).await.unwrap(), Sentiment::Neutral);
            assert!(analyst.extract_tags(entry).await.unwrap().is_empty());
        }
        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn test_classify_normalizes_response() {
        let service = Arc::new(ScriptedService::new(["Label: positive"]));
        let sentiment = analyst(&service).classify("Great dinner.").await.unwrap();

        assert_eq!(sentiment, Sentiment::Positive);
        assert!(service.prompts()[0].contains("Great dinner."));
    }

    #[tokio::test]
    async fn test_extract_tags_parses_response() {
        let service = Arc::new(ScriptedService::new([
            "work, stress, meetings, deadlines, overload",
        ]));
        let tags = analyst(&service).extract_tags("Busy.").await.unwrap();

        assert_eq!(tags, vec!["work", "stress", "meetings", "deadlines"]);
    }

    #[tokio::test]
    async fn test_reflect_passes_text_through() {
        let service = Arc::new(ScriptedService::new(["  Not even about the tags?  "]));
        let reflection = analyst(&service)
            .reflect("Entry.", Sentiment::Neutral, &["rest".to_string()])
            .await
            .unwrap();

        assert_eq!(reflection, "Not even about the tags?");
        assert!(service.prompts()[0].contains("rest"));
    }

    #[tokio::test]
    async fn test_reflect_is_called_even_for_blank_entry() {
        let service = Arc::new(ScriptedService::new(["A quiet page is fine too."]));
        let reflection = analyst(&service)
            .reflect("", Sentiment::Neutral, &[])
            .await
            .unwrap();

        assert_eq!(reflection, "A quiet page is fine too.");
        assert_eq!(service.calls(), 1);
    }

    #[tokio::test]
    async fn test_service_failure_propagates() {
        let service = Arc::new(ScriptedService::silent().then_fail("down"));
        let err = analyst(&service).classify("Entry.").await.unwrap_err();
        assert!(matches!(err, ServiceError::Unavailable(_)));
    }
}
