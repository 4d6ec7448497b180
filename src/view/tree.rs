use std::collections::{HashMap, HashSet};

use crate::config::{ChartConfig, LabelConfig};
use crate::data::frame::{Frame, FrameEntry};
use crate::foundation::core::{Canvas, Margin, Point, Rect, Rgb8, Size};
use crate::scale::ChartScales;
use crate::view::axis::Axis;

/// Stable identity of a rendered element, assigned when the element is first created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u64);

/// One circle per entity, joined to frame entries by `key` (the entity name).
#[derive(Clone, Debug, PartialEq)]
pub struct Dot {
    pub id: ElementId,
    pub key: String,
    pub region: String,
    pub center: Point,
    pub radius: f64,
    pub fill: Rgb8,
    /// False while the entity maps to non-finite geometry (e.g. zero income on the log axis).
    /// Hidden dots keep their id and last drawn geometry and are not rendered.
    pub visible: bool,
}

impl Dot {
    fn geometry(entry: &FrameEntry, scales: &ChartScales) -> Option<(Point, f64)> {
        let center = scales.center(entry);
        let radius = scales.radius(entry);
        if center.is_finite() && radius.is_finite() {
            Some((center, radius))
        } else {
            None
        }
    }

    /// Tooltip text.
    pub fn title(&self) -> &str {
        &self.key
    }
}

/// The big background year readout.
#[derive(Clone, Debug, PartialEq)]
pub struct YearLabel {
    pub text: String,
    /// End-anchored baseline position.
    pub anchor: Point,
    pub font_size: f64,
    pub font_family: String,
    pub active: bool,
}

impl YearLabel {
    pub const FILL: Rgb8 = Rgb8::new(0xdd, 0xdd, 0xdd);
    pub const FILL_ACTIVE: Rgb8 = Rgb8::new(0xaa, 0xaa, 0xaa);

    pub fn fill(&self) -> Rgb8 {
        if self.active {
            Self::FILL_ACTIVE
        } else {
            Self::FILL
        }
    }

    /// Estimated bounding box of the current text from digit advance and font metrics.
    pub fn bounding_box(&self, metrics: &LabelConfig) -> Rect {
        let fs = self.font_size;
        let width = self.text.chars().count() as f64 * metrics.digit_advance_em * fs;
        Rect::new(
            self.anchor.x - width,
            self.anchor.y - metrics.ascent_em * fs,
            self.anchor.x,
            self.anchor.y + metrics.descent_em * fs,
        )
    }
}

/// Text placed at a fixed spot, optionally rotated -90°.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    pub text: String,
    pub position: Point,
    pub rotated: bool,
}

/// Retained view of a mounted chart: static chrome plus one dot per entity.
///
/// Dots live across frame updates; [`ViewTree::apply_frame`] joins them to frame entries by name
/// and only creates or removes elements when entities appear or vanish.
#[derive(Clone, Debug, PartialEq)]
pub struct ViewTree {
    pub canvas: Canvas,
    pub margin: Margin,
    pub plot: Size,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub x_caption: Caption,
    pub y_caption: Caption,
    pub label: YearLabel,
    /// Pointer-sensitive area over the year label, in plot coordinates.
    pub overlay: Rect,
    dots: Vec<Dot>, // draw order, first = bottom
    next_id: u64,
}

impl ViewTree {
    pub const X_CAPTION: &'static str = "income per capita, inflation-adjusted (dollars)";
    pub const Y_CAPTION: &'static str = "life expectancy (years)";

    /// Build the static chrome. The label shows the first year; no dots exist yet.
    pub fn build(config: &ChartConfig, scales: &ChartScales) -> Self {
        let plot = config.plot_size();
        let label = YearLabel {
            text: year_text(config.years.start),
            anchor: Point::new(plot.width, plot.height - config.label.baseline_offset),
            font_size: config.label.font_size,
            font_family: config.label.font_family.clone(),
            active: false,
        };
        let overlay = label.bounding_box(&config.label);

        Self {
            canvas: config.canvas,
            margin: config.margin,
            plot,
            x_axis: Axis::bottom_log(&scales.x, config.x_ticks, plot.width),
            y_axis: Axis::left_linear(&scales.y, config.y_ticks),
            x_caption: Caption {
                text: Self::X_CAPTION.to_owned(),
                position: Point::new(plot.width, plot.height - 6.0),
                rotated: false,
            },
            y_caption: Caption {
                text: Self::Y_CAPTION.to_owned(),
                position: Point::new(0.0, 6.0),
                rotated: true,
            },
            label,
            overlay,
            dots: Vec::new(),
            next_id: 0,
        }
    }

    /// Update dots and the year label from `frame`.
    ///
    /// Existing dots are updated in place, entities new to the tree get a dot, and dots whose
    /// entity is missing from the frame are removed. An entity with non-finite geometry keeps its
    /// dot but hides it until the geometry is finite again. Dots are then re-sorted by descending
    /// radius so smaller circles draw on top. Applying the same frame twice leaves the tree
    /// unchanged.
    pub fn apply_frame(&mut self, frame: &Frame, scales: &ChartScales) {
        let by_key: HashMap<&str, &FrameEntry> = frame
            .entries
            .iter()
            .map(|e| (e.name.as_str(), e))
            .collect();

        self.dots.retain_mut(|dot| {
            let Some(entry) = by_key.get(dot.key.as_str()) else {
                return false;
            };
            match Dot::geometry(entry, scales) {
                Some((center, radius)) => {
                    dot.center = center;
                    dot.radius = radius;
                    dot.visible = true;
                }
                None => {
                    if dot.visible {
                        tracing::debug!(entity = %dot.key, "non-finite geometry, hiding dot");
                    }
                    dot.visible = false;
                }
            }
            dot.region.clone_from(&entry.region);
            dot.fill = scales.fill(entry);
            true
        });

        let present: HashSet<String> = self.dots.iter().map(|d| d.key.clone()).collect();
        for entry in &frame.entries {
            if present.contains(&entry.name) {
                continue;
            }
            let geometry = Dot::geometry(entry, scales);
            if geometry.is_none() {
                tracing::debug!(entity = %entry.name, "non-finite geometry, hiding dot");
            }
            let (center, radius) = geometry.unwrap_or((Point::ZERO, 0.0));
            let id = ElementId(self.next_id);
            self.next_id += 1;
            self.dots.push(Dot {
                id,
                key: entry.name.clone(),
                region: entry.region.clone(),
                center,
                radius,
                fill: scales.fill(entry),
                visible: geometry.is_some(),
            });
        }

        self.dots.sort_by(|a, b| b.radius.total_cmp(&a.radius));
        self.label.text = year_text(frame.year);
    }

    pub fn set_label_active(&mut self, active: bool) {
        self.label.active = active;
    }

    /// Dots in draw order (first drawn first, i.e. beneath later ones), hidden ones included.
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// Dots that are actually drawn, in draw order.
    pub fn visible_dots(&self) -> impl Iterator<Item = &Dot> {
        self.dots.iter().filter(|d| d.visible)
    }

    pub fn dot(&self, key: &str) -> Option<&Dot> {
        self.dots.iter().find(|d| d.key == key)
    }

    pub fn draw_order(&self) -> Vec<&str> {
        self.dots.iter().map(|d| d.key.as_str()).collect()
    }

    /// Map a point in surface coordinates into plot coordinates.
    pub fn to_plot(&self, p: Point) -> Point {
        Point::new(p.x - self.margin.left, p.y - self.margin.top)
    }
}

/// Rounded integer year text (`1903.5` → `"1904"`).
pub fn year_text(year: f64) -> String {
    format!("{}", year.round() as i64)
}

#[cfg(test)]
#[path = "../../tests/unit/view/tree.rs"]
mod tests;
