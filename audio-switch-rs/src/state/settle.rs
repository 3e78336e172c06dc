//! Resettable settle timer for cosmetic effects.

use std::time::{Duration, Instant};

/// Active for `duration` after the most recent trigger.
#[derive(Debug, Clone)]
pub struct SettleTimer {
    duration: Duration,
    deadline: Option<Instant>,
}

impl SettleTimer {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            deadline: None,
        }
    }

    /// Arm the timer, replacing any pending deadline.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.duration);
    }

    /// Whether the effect should still be shown.
    pub fn is_active(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Time left before the timer settles.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .and_then(|deadline| deadline.checked_duration_since(now))
            .filter(|left| !left.is_zero())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETTLE: Duration = Duration::from_millis(1200);

    #[test]
    fn test_inactive_until_triggered() {
        let timer = SettleTimer::new(SETTLE);
        let now = Instant::now();
        assert!(!timer.is_active(now));
        assert_eq!(timer.remaining(now), None);
    }

    #[test]
    fn test_settles_after_duration() {
        let mut timer = SettleTimer::new(SETTLE);
        let start = Instant::now();
        timer.trigger(start);

        assert!(timer.is_active(start + Duration::from_millis(1199)));
        assert!(!timer.is_active(start + SETTLE));
        assert_eq!(timer.remaining(start + SETTLE), None);
    }

    #[test]
    fn test_retrigger_resets_deadline() {
        let mut timer = SettleTimer::new(SETTLE);
        let start = Instant::now();
        timer.trigger(start);
        timer.trigger(start + Duration::from_millis(1000));

        assert!(timer.is_active(start + Duration::from_millis(2000)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(2000)),
            Some(Duration::from_millis(200))
        );
    }
}
