use std::fmt;

use crate::foundation::error::{ChartError, ChartResult};

/// The three time-varying measures carried by every entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Attribute {
    Income,
    Population,
    LifeExpectancy,
}

impl Attribute {
    pub const ALL: [Attribute; 3] = [
        Attribute::Income,
        Attribute::Population,
        Attribute::LifeExpectancy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Population => "population",
            Self::LifeExpectancy => "lifeExpectancy",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `(year, value)` observation. Serialized as a two-element array.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "(f64, f64)", into = "(f64, f64)")]
pub struct Sample {
    pub year: f64,
    pub value: f64,
}

impl Sample {
    pub const fn new(year: f64, value: f64) -> Self {
        Self { year, value }
    }
}

impl From<(f64, f64)> for Sample {
    fn from((year, value): (f64, f64)) -> Self {
        Self { year, value }
    }
}

impl From<Sample> for (f64, f64) {
    fn from(s: Sample) -> Self {
        (s.year, s.value)
    }
}

/// A validated, non-empty series sorted ascending by year.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Series {
    samples: Vec<Sample>, // sorted by year, len >= 1
}

impl Series {
    /// Validate raw samples for `entity`/`attribute`.
    ///
    /// Rejects empty series, non-finite values and years that go backwards. Equal adjacent
    /// years are allowed.
    pub fn new(entity: &str, attribute: Attribute, samples: Vec<Sample>) -> ChartResult<Self> {
        if samples.is_empty() {
            return Err(ChartError::malformed(entity, attribute, "series is empty"));
        }
        if let Some(bad) = samples
            .iter()
            .find(|s| !s.year.is_finite() || !s.value.is_finite())
        {
            return Err(ChartError::malformed(
                entity,
                attribute,
                format!("non-finite sample ({}, {})", bad.year, bad.value),
            ));
        }
        if !samples.windows(2).all(|w| w[0].year <= w[1].year) {
            return Err(ChartError::malformed(
                entity,
                attribute,
                "samples must be sorted by year",
            ));
        }
        Ok(Self { samples })
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn first(&self) -> Sample {
        self.samples[0]
    }

    pub fn last(&self) -> Sample {
        self.samples[self.samples.len() - 1]
    }

    /// Value at fractional `year`.
    ///
    /// Bisects for the left insertion point among all but the last sample, then blends the
    /// bounding pair linearly. The blend fraction is clamped to `[0, 1]`, so years outside the
    /// sampled range hold the boundary value.
    pub fn value_at(&self, year: f64) -> f64 {
        let hi = self.samples.len() - 1;
        let i = self.samples[..hi].partition_point(|s| s.year < year);
        let a = self.samples[i];
        if i == 0 {
            return a.value;
        }

        let b = self.samples[i - 1];
        let denom = b.year - a.year;
        let f = if denom == 0.0 {
            0.0
        } else {
            ((year - a.year) / denom).clamp(0.0, 1.0)
        };
        a.value * (1.0 - f) + b.value * f
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/series.rs"]
mod tests;
