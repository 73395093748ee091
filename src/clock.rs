use chrono::{Local, NaiveDate};
use std::thread;
use std::time::Duration;

/// Source of the calendar date and of every delay the engine takes.
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn sleep(&mut self, duration: Duration);
}

/// Local wall clock and real sleeps.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Fixed date; records sleeps instead of taking them.
#[derive(Debug, Clone)]
pub struct ManualClock {
    today: NaiveDate,
    sleeps: Vec<Duration>,
}

impl ManualClock {
    #[must_use]
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            sleeps: Vec::new(),
        }
    }

    #[must_use]
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }

    #[must_use]
    pub fn total_slept(&self) -> Duration {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}
