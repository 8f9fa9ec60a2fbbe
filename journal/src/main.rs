//! Mood journal CLI.
//!
//! Asks how your day was, classifies the mood, pulls out a few theme tags,
//! writes a short reflection, and appends it to the history file.
//!
//! ```bash
//! journal                                   # Prompt for an entry
//! journal --entry "Long day, good dinner."  # One-shot
//! journal --history ~/notes/history.json --show-history
//! ```

mod output;

use anyhow::Context;
use clap::Parser;
use journal_core::{Journal, JournalConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "journal", version, about = "Mood journal with generated reflections")]
struct Cli {
    /// Journal entry text (prompts for one if omitted)
    #[arg(short, long)]
    entry: Option<String>,

    /// Path to the history file
    #[arg(long, env = "JOURNAL_HISTORY", default_value = journal_core::config::DEFAULT_HISTORY_FILE)]
    history: PathBuf,

    /// Model to use for all three prompts
    #[arg(long, env = "JOURNAL_MODEL")]
    model: Option<String>,

    /// Print the full reflection history after this entry
    #[arg(long)]
    show_history: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = JournalConfig::default().with_history_path(&cli.history);
    if let Some(model) = cli.model {
        config = config.with_model(model);
    }

    let journal = Journal::new(config)?;

    let entry = match cli.entry {
        Some(entry) => entry.trim().to_string(),
        None => read_entry("How was your day? ")?,
    };

    let state = journal.process(entry).await?;
    print!("{}", output::results(&state));

    journal
        .persist(&state)
        .await
        .with_context(|| format!("failed to save history to {}", cli.history.display()))?;
    tracing::info!(
        path = %cli.history.display(),
        entries = state.history_or_empty().len(),
        "history saved"
    );

    if cli.show_history {
        print!("{}", output::history(&journal.history().await));
    }

    Ok(())
}

/// Prompt on stdout and read one trimmed line from stdin.
fn read_entry(prompt: &str) -> anyhow::Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{prompt}")?;
    stdout.flush()?;

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read entry from stdin")?;
    Ok(line.trim().to_string())
}
