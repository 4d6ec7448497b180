//! Frame sinks for offline rendering.

pub mod sink;

pub use sink::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
