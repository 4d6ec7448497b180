use std::time::Duration;

use crate::foundation::error::{ChartError, ChartResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Logical size of the drawing surface the chart mounts into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in logical units.
    pub width: u32,
    /// Height in logical units.
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 960,
            height: 500,
        }
    }
}

/// Space reserved around the plot area for axes and titles.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 19.5,
            right: 19.5,
            bottom: 19.5,
            left: 39.5,
        }
    }
}

/// Inclusive span of fractional years, `[start, end]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct YearSpan {
    pub start: f64,
    pub end: f64,
}

impl Default for YearSpan {
    fn default() -> Self {
        Self {
            start: 1800.0,
            end: 2009.0,
        }
    }
}

impl YearSpan {
    pub fn new(start: f64, end: f64) -> ChartResult<Self> {
        if !start.is_finite() || !end.is_finite() || start >= end {
            return Err(ChartError::validation(
                "YearSpan must be finite with start < end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Clamp a year into the span. Out-of-range years are not an error.
    pub fn clamp(self, year: f64) -> f64 {
        if year.is_nan() {
            return self.start;
        }
        year.clamp(self.start, self.end)
    }

    /// Year at normalized progress `t` (0 → start, 1 → end).
    pub fn at(self, t: f64) -> f64 {
        self.start + (self.end - self.start) * t
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    pub num: u32,
    pub den: u32, // must be > 0
}

impl Fps {
    pub fn new(num: u32, den: u32) -> ChartResult<Self> {
        if den == 0 {
            return Err(ChartError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ChartError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }

    /// Timestamp of frame `index`, measured from the first frame.
    pub fn frame_time(self, index: u64) -> Duration {
        Duration::from_secs_f64((index as f64) * f64::from(self.den) / f64::from(self.num))
    }

    /// Number of frames needed to cover `span`, including the frame at `span` itself.
    pub fn frames_covering(self, span: Duration) -> u64 {
        (span.as_secs_f64() * self.as_f64()).ceil().max(0.0) as u64 + 1
    }
}

/// Opaque 8-bit sRGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#RRGGBB` (the leading `#` is optional).
    pub fn from_hex(s: &str) -> ChartResult<Self> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);
        if s.len() != 6 || !s.is_ascii() {
            return Err(ChartError::validation(format!(
                "color \"{s}\" must be #RRGGBB"
            )));
        }

        let byte = |pair: &str| {
            u8::from_str_radix(pair, 16)
                .map_err(|_| ChartError::validation(format!("invalid hex byte \"{pair}\"")))
        };
        Ok(Self::new(byte(&s[0..2])?, byte(&s[2..4])?, byte(&s[4..6])?))
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
