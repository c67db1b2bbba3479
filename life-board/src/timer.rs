use std::time::{Duration, Instant};

/// Cancellable repeating deadline driving the generation loop.
///
/// The timer is running exactly when a deadline is pending, and there is
/// never more than one pending deadline.
#[derive(Clone, Debug)]
pub struct StepTimer {
    interval: Duration,
    next_deadline: Option<Instant>,
}

impl StepTimer {
    pub fn new(interval: Duration) -> Self {
        assert!(!interval.is_zero());
        Self {
            interval,
            next_deadline: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.next_deadline
    }

    /// Starts the chain with the first step due at `now`. Returns false and
    /// changes nothing if already running.
    pub fn run(&mut self, now: Instant) -> bool {
        if self.is_running() {
            return false;
        }
        self.next_deadline = Some(now);
        true
    }

    /// Cancels the pending deadline. Returns whether the timer was running.
    pub fn stop(&mut self) -> bool {
        self.next_deadline.take().is_some()
    }

    /// Returns true when a step is due at `now`, and schedules the next one.
    /// Deadlines missed while the caller was busy are skipped rather than
    /// fired in a burst.
    pub fn fire(&mut self, now: Instant) -> bool {
        let Some(deadline) = self.next_deadline else {
            return false;
        };
        if now < deadline {
            return false;
        }

        let missed = (now - deadline).as_nanos() / self.interval.as_nanos();
        let next = u32::try_from(missed + 1)
            .ok()
            .and_then(|steps| self.interval.checked_mul(steps))
            .and_then(|offset| deadline.checked_add(offset))
            .unwrap_or(now + self.interval);
        self.next_deadline = Some(next);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(500);

    #[test]
    fn first_step_is_due_immediately() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        assert!(timer.run(start));
        assert_eq!(timer.next_deadline(), Some(start));
        assert!(timer.fire(start));
        assert_eq!(timer.next_deadline(), Some(start + INTERVAL));
    }

    #[test]
    fn second_run_keeps_single_chain() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        assert!(timer.run(start));
        assert!(timer.fire(start));

        assert!(!timer.run(start + Duration::from_millis(100)));
        assert_eq!(timer.next_deadline(), Some(start + INTERVAL));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        timer.run(start);
        assert!(timer.fire(start));
        assert!(!timer.fire(start + Duration::from_millis(499)));
        assert!(timer.fire(start + INTERVAL));
        assert!(!timer.fire(start + INTERVAL));
    }

    #[test]
    fn missed_deadlines_are_skipped() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        timer.run(start);
        assert!(timer.fire(start + Duration::from_millis(1700)));
        assert_eq!(timer.next_deadline(), Some(start + Duration::from_millis(2000)));
        assert!(!timer.fire(start + Duration::from_millis(1900)));
    }

    #[test]
    fn long_stall_reschedules_past_now() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        timer.run(start);
        let woken = start + Duration::from_secs(3600) + Duration::from_millis(250);
        assert!(timer.fire(woken));
        assert_eq!(
            timer.next_deadline(),
            Some(start + Duration::from_secs(3600) + INTERVAL)
        );
    }

    #[test]
    fn deadline_hit_exactly_schedules_one_interval_later() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        timer.run(start);
        assert!(timer.fire(start + INTERVAL * 2));
        assert_eq!(timer.next_deadline(), Some(start + INTERVAL * 3));
    }

    #[test]
    fn stop_cancels_pending_deadline() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        timer.run(start);
        assert!(timer.stop());
        assert!(!timer.is_running());
        assert_eq!(timer.next_deadline(), None);
        assert!(!timer.fire(start + INTERVAL * 4));
    }

    #[test]
    fn stop_without_run_is_a_no_op() {
        let mut timer = StepTimer::new(INTERVAL);
        assert!(!timer.stop());
        assert!(!timer.stop());
        assert!(!timer.is_running());
    }

    #[test]
    fn run_after_stop_restarts() {
        let start = Instant::now();
        let mut timer = StepTimer::new(INTERVAL);
        timer.run(start);
        timer.stop();
        let later = start + Duration::from_secs(3);
        assert!(timer.run(later));
        assert!(timer.fire(later));
    }
}
