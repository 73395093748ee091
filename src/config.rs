use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_WORD_LENGTH: usize = 5;
pub const DEFAULT_MAX_GUESSES: usize = 6;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);
pub const DEFAULT_READINESS_TIMEOUT: Duration = Duration::from_secs(5);
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Knobs for one run of the engine. Built by the CLI; the engine itself
/// never reads the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub word_length: usize,
    pub max_guesses: usize,
    pub max_attempts: u32,
    pub retry_delay: Duration,
    pub readiness_timeout: Duration,
    pub poll_interval: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            word_length: DEFAULT_WORD_LENGTH,
            max_guesses: DEFAULT_MAX_GUESSES,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_delay: DEFAULT_RETRY_DELAY,
            readiness_timeout: DEFAULT_READINESS_TIMEOUT,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl EngineConfig {
    /// Number of readiness checks before giving up (50 with the defaults).
    #[must_use]
    pub fn readiness_polls(&self) -> u32 {
        let interval = self.poll_interval.as_millis().max(1);
        u32::try_from(self.readiness_timeout.as_millis() / interval).unwrap_or(u32::MAX)
    }

    /// # Errors
    ///
    /// Reports the first setting that cannot drive a game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.word_length == 0 {
            return Err(ConfigError::ZeroWordLength);
        }
        if self.max_guesses == 0 {
            return Err(ConfigError::ZeroMaxGuesses);
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::ZeroAttempts);
        }
        if self.poll_interval.is_zero() {
            return Err(ConfigError::ZeroPollInterval);
        }
        Ok(())
    }

    /// # Errors
    ///
    /// [`ConfigError::SolutionLength`] when `solution` does not fit the board.
    pub fn check_solution(&self, solution: &str) -> Result<(), ConfigError> {
        if solution.chars().count() != self.word_length {
            return Err(ConfigError::SolutionLength {
                solution: solution.to_string(),
                expected: self.word_length,
            });
        }
        Ok(())
    }
}
