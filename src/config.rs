use std::path::Path;
use std::time::Duration;

use anyhow::Context as _;

use crate::foundation::core::{Canvas, Margin, Rgb8, Size, YearSpan};
use crate::foundation::error::{ChartError, ChartResult};

/// d3's `schemeCategory10`.
pub const CATEGORY10: [Rgb8; 10] = [
    Rgb8::new(0x1f, 0x77, 0xb4),
    Rgb8::new(0xff, 0x7f, 0x0e),
    Rgb8::new(0x2c, 0xa0, 0x2c),
    Rgb8::new(0xd6, 0x27, 0x28),
    Rgb8::new(0x94, 0x67, 0xbd),
    Rgb8::new(0x8c, 0x56, 0x4b),
    Rgb8::new(0xe3, 0x77, 0xc2),
    Rgb8::new(0x7f, 0x7f, 0x7f),
    Rgb8::new(0xbc, 0xbd, 0x22),
    Rgb8::new(0x17, 0xbe, 0xcf),
];

/// Timed sweep settings. The year always advances linearly with time.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub duration_ms: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            duration_ms: 30_000,
        }
    }
}

/// Year label typography. The metrics estimate the label's bounding box, which doubles as the
/// scrub region.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub font_size: f64,
    pub font_family: String,
    pub digit_advance_em: f64,
    pub ascent_em: f64,
    pub descent_em: f64,
    /// Distance of the baseline above the bottom of the plot area.
    pub baseline_offset: f64,
    /// Horizontal inset of the scrub range inside the label box.
    pub scrub_inset: f64,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            font_size: 196.0,
            font_family: "Helvetica Neue, Helvetica, sans-serif".to_owned(),
            digit_advance_em: 0.556,
            ascent_em: 0.952,
            descent_em: 0.213,
            baseline_offset: 24.0,
            scrub_inset: 10.0,
        }
    }
}

/// Everything the chart needs to configure its scales, sweep and chrome.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub canvas: Canvas,
    pub margin: Margin,
    pub years: YearSpan,
    pub income_domain: [f64; 2],
    pub life_expectancy_domain: [f64; 2],
    pub population_domain: [f64; 2],
    pub max_radius: f64,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub sweep: SweepConfig,
    pub label: LabelConfig,
    pub palette: Vec<Rgb8>,
    pub fallback_color: Rgb8,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            margin: Margin::default(),
            years: YearSpan::default(),
            income_domain: [300.0, 1e5],
            life_expectancy_domain: [10.0, 85.0],
            population_domain: [0.0, 5e8],
            max_radius: 40.0,
            x_ticks: 12,
            y_ticks: 10,
            sweep: SweepConfig::default(),
            label: LabelConfig::default(),
            palette: CATEGORY10.to_vec(),
            fallback_color: Rgb8::new(0xbb, 0xbb, 0xbb),
        }
    }
}

impl ChartConfig {
    pub fn from_json_str(s: &str) -> ChartResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> ChartResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn validate(&self) -> ChartResult<()> {
        YearSpan::new(self.years.start, self.years.end)?;

        let plot = self.plot_size();
        if plot.width <= 0.0 || plot.height <= 0.0 {
            return Err(ChartError::validation("margins leave no plot area"));
        }

        let [i0, i1] = self.income_domain;
        if !(i0 > 0.0 && i1 > 0.0 && i0 != i1 && i0.is_finite() && i1.is_finite()) {
            return Err(ChartError::validation(
                "income_domain must be finite, positive and non-degenerate",
            ));
        }
        for (name, [d0, d1]) in [
            ("life_expectancy_domain", self.life_expectancy_domain),
            ("population_domain", self.population_domain),
        ] {
            if !(d0.is_finite() && d1.is_finite() && d0 != d1) {
                return Err(ChartError::validation(format!(
                    "{name} must be finite and non-degenerate"
                )));
            }
        }
        if self.population_domain.iter().any(|v| *v < 0.0) {
            return Err(ChartError::validation("population_domain must be >= 0"));
        }
        if !(self.max_radius.is_finite() && self.max_radius > 0.0) {
            return Err(ChartError::validation("max_radius must be > 0"));
        }
        if self.palette.is_empty() {
            return Err(ChartError::validation("palette must not be empty"));
        }
        if !(self.label.font_size.is_finite() && self.label.font_size > 0.0) {
            return Err(ChartError::validation("label.font_size must be > 0"));
        }
        Ok(())
    }

    /// Plot area inside the margins.
    ///
    /// Both left and right margins are subtracted, so the plot is 901 wide by default rather
    /// than `canvas.width - margin.right` (940.5) as in the classic chart, and the chart stays
    /// inside the canvas.
    pub fn plot_size(&self) -> Size {
        Size::new(
            f64::from(self.canvas.width) - self.margin.left - self.margin.right,
            f64::from(self.canvas.height) - self.margin.top - self.margin.bottom,
        )
    }

    pub fn sweep_duration(&self) -> Duration {
        Duration::from_millis(self.sweep.duration_ms)
    }
}
