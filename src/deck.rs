use std::sync::Arc;
use std::time::Duration;

use crate::chart::TemporalBubbleChart;
use crate::config::ChartConfig;
use crate::data::dataset::Dataset;
use crate::foundation::error::{ChartError, ChartResult};
use crate::interaction::RawPointer;
use crate::surface::Surface;

/// Route every deck starts at and falls back to.
pub const DEFAULT_ROUTE: &str = "/slide/0";

const ROUTE_PREFIX: &str = "/slide/";

/// Keyboard input the deck reacts to, by DOM key name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Key {
    ArrowRight,
    ArrowLeft,
    Space,
    Other(String),
}

impl Key {
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowRight" => Self::ArrowRight,
            "ArrowLeft" => Self::ArrowLeft,
            " " | "Space" => Self::Space,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Content of one slide.
#[derive(Clone, Debug, PartialEq)]
pub enum Slide {
    /// The animated bubble chart.
    Chart { title: String },
    /// A static text slide.
    Text { title: String },
}

impl Slide {
    pub fn title(&self) -> &str {
        match self {
            Self::Chart { title } | Self::Text { title } => title,
        }
    }
}

/// A sequence of slides addressed by `/slide/<n>` routes, one [`Surface`] shared by all of them.
///
/// Entering a chart slide mounts a fresh chart; leaving it unmounts the chart.
#[derive(Debug)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
    surface: Surface,
    chart: Option<TemporalBubbleChart>,
    dataset: Arc<Dataset>,
    config: ChartConfig,
}

impl Deck {
    pub const CHART_TITLE: &'static str = "Wealth and Health of nations";

    pub fn new(
        slides: Vec<Slide>,
        dataset: Arc<Dataset>,
        config: ChartConfig,
    ) -> ChartResult<Self> {
        if slides.is_empty() {
            return Err(ChartError::validation("deck needs at least one slide"));
        }
        config.validate()?;
        Ok(Self {
            slides,
            current: 0,
            surface: Surface::new(config.canvas),
            chart: None,
            dataset,
            config,
        })
    }

    /// The chart slide followed by two text slides.
    pub fn standard(dataset: Arc<Dataset>, config: ChartConfig) -> ChartResult<Self> {
        let slides = vec![
            Slide::Chart {
                title: Self::CHART_TITLE.to_owned(),
            },
            Slide::Text {
                title: "Slide 1".to_owned(),
            },
            Slide::Text {
                title: "Slide 2".to_owned(),
            },
        ];
        Self::new(slides, dataset, config)
    }

    /// Slide index addressed by `location`, if such a slide exists.
    pub fn resolve(&self, location: &str) -> Option<usize> {
        let n = location.strip_prefix(ROUTE_PREFIX)?.parse::<usize>().ok()?;
        (n < self.slides.len()).then_some(n)
    }

    /// Navigate to `location`, redirecting unknown routes to [`DEFAULT_ROUTE`].
    ///
    /// Returns the route actually shown.
    pub fn open(&mut self, location: &str, now: Duration) -> ChartResult<String> {
        let index = match self.resolve(location) {
            Some(index) => index,
            None => {
                tracing::debug!(location, "unknown route, redirecting to {DEFAULT_ROUTE}");
                0
            }
        };
        self.enter(index, now)?;
        Ok(self.location())
    }

    /// ArrowRight/Space request the next slide, ArrowLeft the previous one. Returns the new route,
    /// or `None` when the key is ignored.
    pub fn handle_key(&mut self, key: &Key, now: Duration) -> ChartResult<Option<String>> {
        let target = match key {
            Key::ArrowRight | Key::Space => self.current as i64 + 1,
            Key::ArrowLeft => self.current as i64 - 1,
            Key::Other(_) => return Ok(None),
        };
        self.open(&format!("{ROUTE_PREFIX}{target}"), now).map(Some)
    }

    /// Animation-frame callback, forwarded to the mounted chart.
    pub fn tick(&mut self, now: Duration) {
        if let Some(chart) = self.chart.as_mut() {
            chart.tick(&mut self.surface, now);
        }
    }

    pub fn pointer(&mut self, raw: RawPointer) {
        if let Some(chart) = self.chart.as_mut() {
            chart.pointer(&mut self.surface, raw);
        }
    }

    pub fn location(&self) -> String {
        format!("{ROUTE_PREFIX}{}", self.current)
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current]
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn chart(&self) -> Option<&TemporalBubbleChart> {
        self.chart.as_ref()
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    fn enter(&mut self, index: usize, now: Duration) -> ChartResult<()> {
        if let Some(chart) = self.chart.take() {
            chart.unmount(&mut self.surface);
        }
        self.current = index;
        if let Slide::Chart { .. } = self.slides[index] {
            let chart = TemporalBubbleChart::mount(
                &mut self.surface,
                Arc::clone(&self.dataset),
                self.config.clone(),
                now,
            )?;
            self.chart = Some(chart);
        }
        tracing::debug!(slide = index, "slide entered");
        Ok(())
    }
}
