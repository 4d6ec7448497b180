//! Retained render layer: axes, captions, year label, overlay and one dot per entity.

pub mod axis;
pub mod svg;
pub mod tree;

pub use tree::{Dot, ElementId, ViewTree, YearLabel};
