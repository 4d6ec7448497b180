use crate::scale::continuous::{LinearScale, LogScale, format_linear_tick};

/// Which side of the plot an axis sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AxisOrient {
    Bottom,
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Offset along the axis in plot units.
    pub offset: f64,
    /// `None` for minor ticks drawn without text.
    pub label: Option<String>,
}

/// Static axis geometry, computed once per mount.
#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: AxisOrient,
    /// Range covered by the domain line, in plot units.
    pub extent: [f64; 2],
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub const TICK_SIZE: f64 = 6.0;
    pub const TICK_PADDING: f64 = 3.0;

    pub fn bottom_log(scale: &LogScale, count: usize, width: f64) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                offset: scale.apply(value),
                label: scale.tick_label(value, count),
            })
            .collect();
        Self {
            orient: AxisOrient::Bottom,
            extent: [0.0, width],
            ticks,
        }
    }

    pub fn left_linear(scale: &LinearScale, count: usize) -> Self {
        let step = scale.tick_step(count);
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|value| Tick {
                value,
                offset: scale.apply(value),
                label: Some(format_linear_tick(value, step)),
            })
            .collect();
        let [r0, r1] = scale.range();
        Self {
            orient: AxisOrient::Left,
            extent: [r0.min(r1), r0.max(r1)],
            ticks,
        }
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.ticks.iter().filter_map(|t| t.label.as_deref())
    }
}
