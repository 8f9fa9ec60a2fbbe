//! Terminal output for a finished run.

use journal_core::JournalState;

/// The results block printed after each entry.
pub fn results(state: &JournalState) -> String {
    let sentiment = state
        .sentiment
        .map(|s| s.to_string())
        .unwrap_or_else(|| "-".to_string());

    format!(
        "\n--- Results ---\nSentiment: {}\nTags: [{}]\nReflection: {}\n",
        sentiment,
        state.tags_or_empty().join(", "),
        state.reflection.as_deref().unwrap_or(""),
    )
}

/// Numbered listing of the stored history.
pub fn history(history: &[String]) -> String {
    let lines: String = history
        .iter()
        .enumerate()
        .map(|(i, reflection)| format!("{:>3}. {reflection}\n", i + 1))
        .collect();

    format!("\n--- History ({} entries) ---\n{lines}", history.len())
}
