use std::sync::Arc;
use std::time::Duration;

use crate::chart::TemporalBubbleChart;
use crate::config::ChartConfig;
use crate::data::dataset::Dataset;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{ChartError, ChartResult};
use crate::raster::{FrameRGBA, Rasterizer};
use crate::surface::Surface;

/// Counters reported by [`record_sweep`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RecordStats {
    /// Frames pushed to the sink.
    pub frames_total: u64,
    /// Frames actually rasterized.
    pub frames_rendered: u64,
    /// Frames whose document matched the previous one and reused its pixels.
    pub frames_elided: u64,
}

/// Mount a chart, drive its sweep at `fps` and stream every frame into `sink`.
///
/// Frame `i` is the chart as it looks at `fps.frame_time(i)` after mounting; the last frame
/// lands on (or just past) the end of the sweep. The chart is unmounted before returning.
#[tracing::instrument(skip_all, fields(fps = fps.as_f64()))]
pub fn record_sweep(
    dataset: Arc<Dataset>,
    config: ChartConfig,
    fps: Fps,
    sink: &mut dyn FrameSink,
    rasterizer: &Rasterizer,
) -> ChartResult<RecordStats> {
    let canvas = config.canvas;
    let frames_total = fps.frames_covering(config.sweep_duration());

    let mut surface = Surface::new(canvas);
    let mut chart = TemporalBubbleChart::mount(&mut surface, dataset, config, Duration::ZERO)?;

    sink.begin(SinkConfig {
        width: canvas.width,
        height: canvas.height,
        fps,
    })?;

    let mut stats = RecordStats {
        frames_total,
        frames_rendered: 0,
        frames_elided: 0,
    };
    let mut last: Option<(String, FrameRGBA)> = None;

    for idx in 0..frames_total {
        chart.tick(&mut surface, fps.frame_time(idx));
        let view = surface
            .view()
            .ok_or_else(|| ChartError::render("chart lost its view while recording"))?;
        let svg = view.to_svg();

        let cached = last
            .as_ref()
            .filter(|(prev, _)| *prev == svg)
            .map(|(_, frame)| frame);
        if let Some(frame) = cached {
            sink.push_frame(idx, frame)?;
            stats.frames_elided += 1;
            continue;
        }

        let frame = rasterizer.rasterize(&svg)?;
        sink.push_frame(idx, &frame)?;
        stats.frames_rendered += 1;
        last = Some((svg, frame));
    }

    sink.end()?;
    chart.unmount(&mut surface);
    tracing::debug!(
        rendered = stats.frames_rendered,
        elided = stats.frames_elided,
        "sweep recorded"
    );
    Ok(stats)
}
