use crate::clock::Clock;
use crate::config::EngineConfig;
use crate::error::RetryError;
use std::fmt::Display;
use std::time::Duration;

/// Fixed number of attempts with a constant pause after each failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl From<&EngineConfig> for RetryPolicy {
    fn from(config: &EngineConfig) -> Self {
        Self {
            max_attempts: config.max_attempts,
            delay: config.retry_delay,
        }
    }
}

/// Runs `attempt` until it succeeds or the policy is used up. The attempt
/// receives its 1-based number and the clock.
///
/// # Errors
///
/// [`RetryError::PermanentFailure`] carrying the last attempt's error once
/// every attempt has failed.
pub fn run_with_retries<C, T, E, F>(
    policy: RetryPolicy,
    clock: &mut C,
    mut attempt: F,
) -> Result<T, RetryError>
where
    C: Clock + ?Sized,
    E: Display,
    F: FnMut(u32, &mut C) -> Result<T, E>,
{
    let mut last = None;
    for i in 1..=policy.max_attempts {
        log::info!("==================== ATTEMPT {i} ====================");
        match attempt(i, clock) {
            Ok(value) => {
                log::info!("DONE");
                return Ok(value);
            }
            Err(e) => {
                log::error!("Attempt {i} failed: {e}");
                last = Some(e.to_string());
                log::info!("Sleeping for {:?} before trying again", policy.delay);
                clock.sleep(policy.delay);
            }
        }
    }

    log::error!("FAILED PERMANENTLY");
    Err(RetryError::PermanentFailure {
        attempts: policy.max_attempts,
        last: last.unwrap_or_else(|| "no attempt was made".to_string()),
    })
}
