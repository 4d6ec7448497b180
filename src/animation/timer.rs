use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

/// Shared one-way cancellation flag.
///
/// Clones observe the same flag. Everything runs on the UI thread, so the flag is not `Send`.
#[derive(Clone, Debug, Default)]
pub struct CancellationToken(Rc<Cell<bool>>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

/// Outcome of advancing a [`Timer`] to a timestamp.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimerStep {
    /// Linear progress in `[0, 1)`.
    Running(f64),
    /// The duration has elapsed; progress is 1.
    Finished,
    /// The timer was cancelled; the caller must not apply any progress.
    Cancelled,
}

/// One-shot timed animation driven by host timestamps.
#[derive(Debug)]
pub struct Timer {
    started_at: Duration,
    duration: Duration,
    token: CancellationToken,
}

impl Timer {
    pub fn start(now: Duration, duration: Duration) -> Self {
        Self {
            started_at: now,
            duration,
            token: CancellationToken::new(),
        }
    }

    /// Handle for hosts that need to know when to stop scheduling frames.
    pub fn token(&self) -> CancellationToken {
        self.token.clone()
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub fn duration(&self) -> Duration {
        self.duration
    }

    pub fn step(&self, now: Duration) -> TimerStep {
        if self.token.is_cancelled() {
            return TimerStep::Cancelled;
        }
        let elapsed = now.saturating_sub(self.started_at);
        if elapsed >= self.duration {
            return TimerStep::Finished;
        }
        let t = elapsed.as_secs_f64() / self.duration.as_secs_f64();
        TimerStep::Running(t.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn progresses_linearly_then_finishes() {
        let timer = Timer::start(ms(1_000), ms(2_000));
        assert_eq!(timer.step(ms(1_000)), TimerStep::Running(0.0));
        assert_eq!(timer.step(ms(2_000)), TimerStep::Running(0.5));
        assert_eq!(timer.step(ms(3_000)), TimerStep::Finished);
        assert_eq!(timer.step(ms(9_000)), TimerStep::Finished);
    }

    #[test]
    fn progress_is_linear_in_elapsed_time() {
        let timer = Timer::start(ms(0), ms(30_000));
        for (at, expected) in [(7_500, 0.25), (15_000, 0.5), (22_500, 0.75)] {
            assert_eq!(timer.step(ms(at)), TimerStep::Running(expected));
        }
    }

    #[test]
    fn timestamps_before_start_clamp_to_zero() {
        let timer = Timer::start(ms(1_000), ms(2_000));
        assert_eq!(timer.step(ms(10)), TimerStep::Running(0.0));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let timer = Timer::start(ms(5), Duration::ZERO);
        assert_eq!(timer.step(ms(5)), TimerStep::Finished);
    }

    #[test]
    fn cancel_is_observed_through_clones() {
        let timer = Timer::start(ms(0), ms(100));
        let token = timer.token();
        assert!(!token.is_cancelled());
        timer.cancel();
        assert!(token.is_cancelled());
        assert_eq!(timer.step(ms(50)), TimerStep::Cancelled);
        assert_eq!(timer.step(ms(500)), TimerStep::Cancelled);
    }
}
