//! Journal state threaded through the pipeline.
//!
//! A `JournalState` is built fresh for every entry. Each stage reads the
//! fields it needs and returns a single [`StateUpdate`], which the pipeline
//! applies before running the next stage.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse emotional tone of an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Every label, in the order the classifier prompt lists them.
    pub const ALL: [Sentiment; 3] = [Sentiment::Positive, Sentiment::Neutral, Sentiment::Negative];

    /// The lowercase label used in prompts, output, and storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not exactly one of the three labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sentiment label: {0:?}")]
pub struct UnknownSentiment(pub String);

impl FromStr for Sentiment {
    type Err = UnknownSentiment;

    /// Exact match only. Lenient parsing of model output lives in
    /// [`crate::normalize::normalize_sentiment`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(UnknownSentiment(other.to_string())),
        }
    }
}

/// The record passed through the pipeline for one entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JournalState {
    /// The raw entry. Set once at construction, never changed.
    pub entry_text: String,
    /// Written by the mood stage.
    pub sentiment: Option<Sentiment>,
    /// Written by the tag stage. At most four unique lowercase tags.
    pub tags: Option<Vec<String>>,
    /// Written by the reflection stage.
    pub reflection: Option<String>,
    /// Seeded from the history store, extended by the history stage.
    pub history: Option<Vec<String>>,
}

impl JournalState {
    /// Seed a state for a new entry with previously persisted history.
    pub fn new(entry_text: impl Into<String>, history: Vec<String>) -> Self {
        Self {
            entry_text: entry_text.into(),
            history: Some(history),
            ..Default::default()
        }
    }

    /// Seed a state with no history at all (first run, or tests).
    pub fn without_history(entry_text: impl Into<String>) -> Self {
        Self {
            entry_text: entry_text.into(),
            ..Default::default()
        }
    }

    /// Merge one stage's output into the state.
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::Sentiment(sentiment) => self.sentiment = Some(sentiment),
            StateUpdate::Tags(tags) => self.tags = Some(tags),
            StateUpdate::Reflection(reflection) => self.reflection = Some(reflection),
            StateUpdate::History(history) => self.history = history,
        }
    }

    /// Tags, or an empty slice if the tag stage has not run.
    pub fn tags_or_empty(&self) -> &[String] {
        self.tags.as_deref().unwrap_or(&[])
    }

    /// History, or an empty slice if none was seeded.
    pub fn history_or_empty(&self) -> &[String] {
        self.history.as_deref().unwrap_or(&[])
    }
}

/// A partial update produced by one stage.
///
/// One variant per writable field, so a stage can only touch the field it owns.
#[derive(Debug, Clone, PartialEq)]
pub enum StateUpdate {
    Sentiment(Sentiment),
    Tags(Vec<String>),
    Reflection(String),
    /// `None` only when no history existed and there was nothing to append.
    History(Option<Vec<String>>),
}

impl StateUpdate {
    /// Name of the state field this update writes.
    pub fn field(&self) -> &'static str {
        match self {
            StateUpdate::Sentiment(_) => "sentiment",
            StateUpdate::Tags(_) => "tags",
            StateUpdate::Reflection(_) => "reflection",
            StateUpdate::History(_) => "history",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentiment_labels_round_trip() {
        for sentiment in Sentiment::ALL {
            assert_eq!(sentiment.as_str().parse::<Sentiment>(), Ok(sentiment));
            assert_eq!(sentiment.to_string(), sentiment.as_str());
        }
    }

    #[test]
    fn test_sentiment_parse_is_exact() {
        assert!("Positive".parse::<Sentiment>().is_err());
        assert!(" neutral".parse::<Sentiment>().is_err());
        assert_eq!(
            "happy".parse::<Sentiment>(),
            Err(UnknownSentiment("happy".to_string()))
        );
    }

    #[test]
    fn test_sentiment_serializes_lowercase() {
        let json = serde_json::to_string(&Sentiment::Negative).unwrap();
        assert_eq!(json, "\"negative\"");
    }

    #[test]
    fn test_new_state_seeds_history_only() {
        let state = JournalState::new("a quiet day", vec!["old".to_string()]);
        assert_eq!(state.entry_text, "a quiet day");
        assert_eq!(state.history, Some(vec!["old".to_string()]));
        assert!(state.sentiment.is_none());
        assert!(state.tags.is_none());
        assert!(state.reflection.is_none());
    }

    #[test]
    fn test_apply_writes_only_the_named_field() {
        let mut state = JournalState::without_history("entry");

        state.apply(StateUpdate::Sentiment(Sentiment::Positive));
        state.apply(StateUpdate::Tags(vec!["work".to_string()]));
        state.apply(StateUpdate::Reflection("Nice.".to_string()));
        state.apply(StateUpdate::History(Some(vec!["Nice.".to_string()])));

        assert_eq!(state.entry_text, "entry");
        assert_eq!(state.sentiment, Some(Sentiment::Positive));
        assert_eq!(state.tags_or_empty(), ["work".to_string()]);
        assert_eq!(state.reflection.as_deref(), Some("Nice."));
        assert_eq!(state.history_or_empty(), ["Nice.".to_string()]);
    }

    #[test]
    fn test_update_field_names() {
        assert_eq!(StateUpdate::Sentiment(Sentiment::Neutral).field(), "sentiment");
        assert_eq!(StateUpdate::Tags(vec![]).field(), "tags");
        assert_eq!(StateUpdate::Reflection(String::new()).field(), "reflection");
        assert_eq!(StateUpdate::History(None).field(), "history");
    }
}
