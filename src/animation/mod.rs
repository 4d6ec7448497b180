//! The cancellable sweep timer.

pub mod timer;

pub use timer::{CancellationToken, Timer, TimerStep};
