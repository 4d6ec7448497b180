//! Sweep-then-scrub interaction.

pub mod pointer;
pub mod state;

pub use pointer::{PointerEvent, RawPointer};
pub use state::{ChartMode, Interaction, Update};
