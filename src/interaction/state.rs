use std::time::Duration;

use crate::animation::timer::{CancellationToken, Timer, TimerStep};
use crate::foundation::core::YearSpan;
use crate::interaction::pointer::PointerEvent;
use crate::scale::LinearScale;

/// Who drives the displayed year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartMode {
    Sweeping,
    Interactive,
}

/// Changes the chart must apply after an input. `None` fields are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Update {
    pub year: Option<f64>,
    pub label_active: Option<bool>,
}

impl Update {
    fn year(year: f64) -> Self {
        Self {
            year: Some(year),
            label_active: None,
        }
    }

    fn label(active: bool) -> Self {
        Self {
            year: None,
            label_active: Some(active),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.label_active.is_none()
    }
}

/// Two-state machine: a timed sweep, then pointer scrubbing for the rest of the mount.
#[derive(Debug)]
pub enum Interaction {
    Sweeping(Timer),
    Interactive,
}

impl Interaction {
    pub fn sweep(now: Duration, duration: Duration) -> Self {
        Self::Sweeping(Timer::start(now, duration))
    }

    pub fn mode(&self) -> ChartMode {
        match self {
            Self::Sweeping(_) => ChartMode::Sweeping,
            Self::Interactive => ChartMode::Interactive,
        }
    }

    /// Cancellation handle of the running sweep, if any.
    pub fn token(&self) -> Option<CancellationToken> {
        match self {
            Self::Sweeping(timer) => Some(timer.token()),
            Self::Interactive => None,
        }
    }

    /// Advance the sweep to `now`. Interactive mode ignores ticks.
    pub fn tick(&mut self, now: Duration, years: YearSpan) -> Update {
        let Self::Sweeping(timer) = self else {
            return Update::default();
        };
        match timer.step(now) {
            TimerStep::Running(t) => Update::year(years.at(t)),
            TimerStep::Finished => {
                timer.cancel();
                *self = Self::Interactive;
                tracing::debug!("sweep finished, enabling interaction");
                Update::year(years.end)
            }
            TimerStep::Cancelled => {
                *self = Self::Interactive;
                Update::default()
            }
        }
    }

    /// React to a pointer event. `scrub` maps overlay x positions back to years.
    pub fn pointer(&mut self, event: PointerEvent, scrub: &LinearScale) -> Update {
        match self {
            Self::Sweeping(timer) => match event {
                PointerEvent::Enter(_) => {
                    timer.cancel();
                    *self = Self::Interactive;
                    tracing::debug!("pointer entered during sweep, enabling interaction");
                    Update::label(true)
                }
                PointerEvent::Leave | PointerEvent::Move(_) | PointerEvent::TouchMove(_) => {
                    Update::default()
                }
            },
            Self::Interactive => match event {
                PointerEvent::Enter(_) => Update::label(true),
                PointerEvent::Leave => Update::label(false),
                PointerEvent::Move(p) | PointerEvent::TouchMove(p) => {
                    Update::year(scrub.invert(p.x))
                }
            },
        }
    }

    /// Stop the sweep without changing state; used on unmount.
    pub fn cancel(&self) {
        if let Self::Sweeping(timer) = self {
            timer.cancel();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/state.rs"]
mod tests;
