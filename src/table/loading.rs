use std::fmt;

use tokio::time::{sleep, Duration, Instant};

use crate::constants::DEFAULT_MIN_LOADING_MS;

/// The operation a table is busy with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Create,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Operation::Load => "Loading",
            Operation::Create => "Creating",
            Operation::Update => "Updating",
            Operation::Delete => "Deleting",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activity {
    #[default]
    Idle,
    Busy(Operation),
}

impl Activity {
    pub fn is_busy(&self) -> bool {
        matches!(self, Activity::Busy(_))
    }
}

/// Minimum time a loading indicator stays up once an operation starts, so
/// fast responses do not flash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadingPolicy {
    min_visible: Duration,
}

impl LoadingPolicy {
    pub fn new(min_visible: Duration) -> Self {
        Self { min_visible }
    }

    /// No minimum; results apply as soon as they arrive.
    pub fn immediate() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn min_visible(&self) -> Duration {
        self.min_visible
    }

    /// Wait out whatever remains of the minimum since `started`.
    pub async fn settle(&self, started: Instant) {
        let elapsed = started.elapsed();
        if elapsed < self.min_visible {
            sleep(self.min_visible - elapsed).await;
        }
    }
}

impl Default for LoadingPolicy {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_MIN_LOADING_MS))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_settle_waits_for_the_remainder() {
        let policy = LoadingPolicy::new(Duration::from_millis(1500));
        let started = Instant::now();
        sleep(Duration::from_millis(500)).await;

        policy.settle(started).await;
        assert!(started.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_settle_is_free_after_the_minimum() {
        let policy = LoadingPolicy::new(Duration::from_millis(100));
        let started = Instant::now();
        sleep(Duration::from_millis(300)).await;

        let before = Instant::now();
        policy.settle(started).await;
        assert_eq!(before.elapsed(), Duration::ZERO);
    }

    #[test]
    fn test_activity_display() {
        assert!(!Activity::Idle.is_busy());
        assert!(Activity::Busy(Operation::Delete).is_busy());
        assert_eq!(Operation::Create.to_string(), "Creating");
    }
}
