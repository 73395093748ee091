use crate::board::GuessRow;
use crate::error::PublishError;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

/// What an attempt hands to downstream publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOutcome {
    pub solution: String,
    pub won: bool,
    pub rows: Vec<GuessRow>,
    /// Words rejected by the filter during the attempt.
    pub discarded: usize,
}

impl GameOutcome {
    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.rows.iter().filter(|row| row.is_evaluated()).count()
    }

    /// `"<name> <date> <n>/<max>"` (`X` instead of `n` when lost) followed by
    /// one emoji line per evaluated row.
    #[must_use]
    pub fn share_text(&self, name: &str, date: NaiveDate) -> String {
        let score = if self.won {
            self.guesses_used().to_string()
        } else {
            "X".to_string()
        };
        let mut text = format!("{name} {date} {score}/{}\n", self.rows.len());
        for evaluation in self.rows.iter().filter_map(|row| row.evaluation.as_ref()) {
            text.push('\n');
            text.extend(evaluation.iter().map(|e| e.to_emoji()));
        }
        text
    }
}

/// Receives the final outcome of a successful run.
pub trait OutcomeSink {
    /// # Errors
    ///
    /// Implementations report their own transport failures.
    fn publish(&mut self, outcome: &GameOutcome, share_text: &str) -> Result<(), PublishError>;
}

/// Writes the share text to a file.
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }
}

impl OutcomeSink for FileSink {
    fn publish(&mut self, outcome: &GameOutcome, share_text: &str) -> Result<(), PublishError> {
        fs::write(&self.path, format!("{share_text}\n"))?;
        log::info!(
            "Saved shared text to {} (won: {})",
            self.path.display(),
            outcome.won
        );
        Ok(())
    }
}
