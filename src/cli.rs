use crate::config::EngineConfig;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Plays the daily word game unattended.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Newline-delimited dictionary, in traversal order
    #[arg(short = 'd', long = "dictionary", env = "WORDLE_DICTIONARY", default_value = "words.txt")]
    pub dictionary_path: PathBuf,

    /// Solution of the local game
    #[arg(short = 's', long, env = "WORDLE_SOLUTION")]
    pub solution: String,

    /// Words the local game accepts as guesses; defaults to the dictionary
    #[arg(short = 'a', long = "allowed", env = "WORDLE_ALLOWED")]
    pub allowed_path: Option<PathBuf>,

    /// Where the share text is written
    #[arg(short = 'o', long = "output", env = "WORDLE_OUTPUT", default_value = "output.txt")]
    pub output_path: PathBuf,

    /// Name printed at the top of the share text
    #[arg(long, default_value = "Wordle")]
    pub name: String,

    #[arg(long, default_value_t = crate::config::DEFAULT_WORD_LENGTH)]
    pub word_length: usize,

    #[arg(long, default_value_t = crate::config::DEFAULT_MAX_GUESSES)]
    pub max_guesses: usize,

    /// Full game attempts before giving up
    #[arg(long, default_value_t = crate::config::DEFAULT_MAX_ATTEMPTS)]
    pub attempts: u32,

    /// Pause between attempts, in milliseconds
    #[arg(long, default_value_t = 1000)]
    pub retry_delay_ms: u64,

    /// How long to wait for the game to accept input, in milliseconds
    #[arg(long, default_value_t = 5000)]
    pub readiness_timeout_ms: u64,

    #[arg(long, default_value_t = 100)]
    pub poll_interval_ms: u64,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    #[must_use]
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            word_length: self.word_length,
            max_guesses: self.max_guesses,
            max_attempts: self.attempts,
            retry_delay: Duration::from_millis(self.retry_delay_ms),
            readiness_timeout: Duration::from_millis(self.readiness_timeout_ms),
            poll_interval: Duration::from_millis(self.poll_interval_ms),
        }
    }
}

#[must_use]
pub fn parse_cli() -> Cli {
    Cli::parse()
}
