//! Coercion of raw model output into domain values.
//!
//! The text service is free to ramble, change case, add punctuation, or answer
//! in the wrong format. Nothing in here fails: every function degrades to a
//! well-defined default instead.

use crate::state::Sentiment;

/// Maximum number of tags kept from a single response.
///
/// The tag prompt asks for up to five; only the first four survive.
pub const MAX_TAGS: usize = 4;

/// Prefix the mood prompt's few-shot examples use before each answer.
const LABEL_PREFIX: &str = "label:";

/// True for empty or whitespace-only text.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Map a classifier response onto one of the three sentiment labels.
///
/// Tried in order, on the trimmed lowercase response:
/// 1. the whole response,
/// 2. the response with an echoed `Label:` prefix removed,
/// 3. the first whitespace-delimited token.
///
/// Anything else is `Neutral`.
pub fn normalize_sentiment(raw: &str) -> Sentiment {
    let label = raw.trim().to_lowercase();

    if let Ok(sentiment) = label.parse() {
        return sentiment;
    }

    let unprefixed = label
        .strip_prefix(LABEL_PREFIX)
        .map(str::trim)
        .unwrap_or(label.as_str());

    if let Ok(sentiment) = unprefixed.parse() {
        return sentiment;
    }

    unprefixed
        .split_whitespace()
        .next()
        .and_then(|word| word.parse().ok())
        .unwrap_or(Sentiment::Neutral)
}

/// Parse a tag response into at most [`MAX_TAGS`] unique, cleaned tags.
///
/// Newlines count as separators, so one-tag-per-line answers work. A candidate
/// with internal whitespace keeps only its first word. Every character outside
/// `[a-z0-9-]` is stripped; candidates that end up empty are dropped.
/// Insertion order is preserved.
///
/// There is no minimum length: a one-letter tag such as `i` is kept.
pub fn parse_tags(raw: &str) -> Vec<String> {
    let raw = raw.trim().to_lowercase();
    if raw.is_empty() {
        return Vec::new();
    }

    let raw = raw.replace('\n', ",");
    let mut tags: Vec<String> = Vec::with_capacity(MAX_TAGS);

    for candidate in raw.split(',') {
        let Some(first_word) = candidate.split_whitespace().next() else {
            continue;
        };

        let cleaned: String = first_word
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
            .collect();

        if !cleaned.is_empty() && !tags.contains(&cleaned) {
            tags.push(cleaned);
        }

        if tags.len() == MAX_TAGS {
            break;
        }
    }

    tags
}

/// Reflections are passed through as written, minus surrounding whitespace.
///
/// Sentence count, tag usage, and banned phrases are requested in the prompt
/// but not checked here.
pub fn normalize_reflection(raw: &str) -> String {
    raw.trim().to_string()
}
