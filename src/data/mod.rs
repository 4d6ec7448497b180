//! Entities, their sparse time series and per-year interpolated frames.

pub mod dataset;
pub mod frame;
pub mod series;

pub use dataset::{Dataset, Entity, EntityDef};
pub use frame::{Frame, FrameEntry};
pub use series::{Attribute, Sample, Series};
