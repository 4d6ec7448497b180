//! Domain → pixel/color mappings, fixed once per mount.

pub mod continuous;
pub mod ordinal;

pub use continuous::{LinearScale, LogScale, SqrtScale};
pub use ordinal::OrdinalScale;

use crate::config::ChartConfig;
use crate::data::frame::{Frame, FrameEntry};
use crate::foundation::core::{Point, Rgb8};

/// The four scales of the chart: income → x, life expectancy → y, population → radius,
/// region → fill.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartScales {
    pub x: LogScale,
    pub y: LinearScale,
    pub radius: SqrtScale,
    pub color: OrdinalScale,
}

impl ChartScales {
    /// Configure from constants; region colors are assigned in the order regions appear in
    /// `initial`.
    pub fn new(config: &ChartConfig, initial: &Frame) -> Self {
        let plot = config.plot_size();
        Self {
            x: LogScale::new(config.income_domain, [0.0, plot.width]),
            y: LinearScale::new(config.life_expectancy_domain, [plot.height, 0.0]),
            radius: SqrtScale::new(config.population_domain, [0.0, config.max_radius]),
            color: OrdinalScale::from_keys(
                initial.entries.iter().map(|e| e.region.as_str()),
                config.palette.clone(),
                config.fallback_color,
            ),
        }
    }

    pub fn center(&self, entry: &FrameEntry) -> Point {
        Point::new(self.x.apply(entry.income), self.y.apply(entry.life_expectancy))
    }

    pub fn radius(&self, entry: &FrameEntry) -> f64 {
        self.radius.apply(entry.population)
    }

    pub fn fill(&self, entry: &FrameEntry) -> Rgb8 {
        self.color.get(&entry.region)
    }
}
