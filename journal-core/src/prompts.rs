//! Prompts sent to the text service.

use crate::state::Sentiment;

/// Phrases the reflection writer is told to avoid.
pub const BANNED_PHRASES: &[&str] = &[
    "brave first step",
    "crucial step",
    "guide you",
    "find relief",
    "significant recognition",
    "indicator",
    "managing effectively",
];

/// Build the mood classification prompt.
pub fn mood_prompt(entry: &str) -> String {
    format!(
        r#"You are a mood classifier for a personal journal app.
Your task is to read a short journal entry and classify the overall emotional tone.

You must respond with exactly one word, chosen from this list:
- positive
- neutral
- negative

Use these examples as a guide:

Example 1
Entry: "Had a great day, finished my tasks and enjoyed dinner with friends."
Label: positive

Example 2
Entry: "Today was okay. Nothing special happened, just went through the routine."
Label: neutral

Example 3
Entry: "Feeling exhausted and stressed. Too many meetings and I didn't finish my work."
Label: negative

Rules:
- If the entry feels mostly upbeat, grateful, satisfied, or happy -> respond positive.
- If the entry feels mostly stressed, sad, upset, frustrated, or overwhelmed -> respond negative.
- If the entry feels mixed, flat, factual, or unclear -> respond neutral.
- Calm or relaxed can be positive; routine or ordinary with no emotion is neutral.
- Do not explain your reasoning.
- Do not output anything else. Only one word: positive, neutral, or negative.

Journal entry:
<entry>
{entry}
</entry>

Your answer (one word only):"#
    )
}

/// Build the tag extraction prompt.
pub fn tags_prompt(entry: &str) -> String {
    format!(
        r#"You are a tag generator for a personal mood journal app.
Your task is to read a short journal entry and extract 2 to 5 high-level themes.

Rules:
- Return only a comma-separated list of single-word, lowercase tags.
- Each tag should be a general theme (work, family, health, stress, energy, relationships, productivity, rest, motivation, burnout, focus).
- Do NOT include explanations.
- Do NOT repeat the same word.
- Do NOT include punctuation other than commas between tags.
- Drop 1-letter tokens (like i).
- Drop meta words (revised, wait, sorry, correction, etc.).
- Only include emotions like stress or burnout if explicitly stated.
- If you break the format, you fail. Output must be ONLY the tags line.

Example output:
work, stress, meetings

Journal entry:
<entry>
{entry}
</entry>

Your answer (comma-separated tags only):"#
    )
}

/// Build the reflection prompt from the entry and the earlier stages' output.
pub fn reflection_prompt(entry: &str, sentiment: Sentiment, tags: &[String]) -> String {
    let banned = BANNED_PHRASES
        .iter()
        .map(|p| format!("\"{p}\""))
        .collect::<Vec<_>>()
        .join(", ");
    let tags = if tags.is_empty() {
        "(none)".to_string()
    } else {
        tags.join(", ")
    };

    format!(
        r#"You are a supportive reflection writer for a personal mood journal app.
Your task is to write a short, thoughtful reflection based on a journal entry.

Rules:
- Write exactly 2 to 4 sentences. Do not write 1 long sentence.
- Match the tone to the given sentiment:
  - positive -> affirming and encouraging
  - neutral -> calm and reflective
  - negative -> supportive and validating
- Include at least ONE tag word exactly as written (copy the word into the reflection).
- Avoid repeating the same tag more than once.
- Be gentle, empathetic, and human.
- Do NOT give direct advice.
- Do NOT ask questions.
- Do NOT use bullet points.
- Do NOT use therapy or coaching language.
- Do NOT say "you should".
- Avoid phrases like: {banned}.
- Do NOT mention the rules or your reasoning.
- If you break the format, you fail. Output must be ONLY the reflection text.

Journal entry:
<entry>
{entry}
</entry>

Sentiment:
{sentiment}

Tags:
{tags}

Your answer (reflection text only):"#
    )
}
