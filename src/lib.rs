//! nations-chart renders the "Wealth and Health of Nations" animated bubble chart.
//!
//! The public API is mount-oriented:
//!
//! - Load a [`Dataset`] of per-entity time series
//! - Mount a [`TemporalBubbleChart`] into a [`Surface`]; it sweeps through the years
//! - Feed it animation ticks and pointer input to scrub once the sweep is over
//! - Serialize the view as SVG, rasterize it, or stream a whole sweep into a [`FrameSink`]
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod chart;
pub mod config;
pub mod data;
pub mod deck;
pub mod encode;
pub mod interaction;
pub mod raster;
pub mod scale;
pub mod session;
pub mod surface;
pub mod view;

pub use crate::foundation::core::{Canvas, Fps, Margin, Point, Rect, Rgb8, Size, Vec2, YearSpan};
pub use crate::foundation::error::{ChartError, ChartResult};

pub use crate::animation::CancellationToken;
pub use crate::chart::{TemporalBubbleChart, ViewState};
pub use crate::config::ChartConfig;
pub use crate::data::{Attribute, Dataset, Frame, FrameEntry, Sample, Series};
pub use crate::deck::{Deck, Key, Slide};
pub use crate::encode::{FrameSink, InMemorySink, PngSequenceSink, SinkConfig};
pub use crate::interaction::{ChartMode, PointerEvent, RawPointer};
pub use crate::raster::{FrameRGBA, Rasterizer, save_png};
pub use crate::scale::ChartScales;
pub use crate::session::{RecordStats, record_sweep};
pub use crate::surface::Surface;
pub use crate::view::ViewTree;
