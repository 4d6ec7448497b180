use std::path::PathBuf;

use crate::foundation::core::Fps;
use crate::foundation::error::ChartResult;
use crate::raster::{FrameRGBA, save_png};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output frame width in pixels.
    pub width: u32,
    /// Output frame height in pixels.
    pub height: u32,
    /// Frame rate of the stream.
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices.
pub trait FrameSink {
    /// Called once before the first frame.
    fn begin(&mut self, cfg: SinkConfig) -> ChartResult<()>;
    /// Receive frame `idx`. The frame may be the same pixels as the previous index when the
    /// chart did not change between them.
    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ChartResult<()>;
    /// Called once after the last frame; flush and finalize.
    fn end(&mut self) -> ChartResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, FrameRGBA)>,
    ended: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration from the last `begin`.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Received frames with their indices, in push order.
    pub fn frames(&self) -> &[(u64, FrameRGBA)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ChartResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ChartResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ChartResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Writes each frame to `<dir>/<prefix><index:05>.png`.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    prefix: String,
    written: u64,
}

impl PngSequenceSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            prefix: prefix.into(),
            written: 0,
        }
    }

    /// File that frame `idx` is written to.
    pub fn path_for(&self, idx: u64) -> PathBuf {
        self.dir.join(format!("{}{idx:05}.png", self.prefix))
    }

    /// Frames written since the last `begin`.
    pub fn written(&self) -> u64 {
        self.written
    }
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, _cfg: SinkConfig) -> ChartResult<()> {
        self.written = 0;
        std::fs::create_dir_all(&self.dir).map_err(anyhow::Error::from)?;
        Ok(())
    }

    fn push_frame(&mut self, idx: u64, frame: &FrameRGBA) -> ChartResult<()> {
        save_png(&self.path_for(idx), frame)?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ChartResult<()> {
        tracing::debug!(frames = self.written, dir = %self.dir.display(), "png sequence complete");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> FrameRGBA {
        FrameRGBA {
            width: 1,
            height: 1,
            data: vec![10, 20, 30, 255],
            premultiplied: true,
        }
    }

    #[test]
    fn in_memory_sink_keeps_frames_in_order() {
        let mut sink = InMemorySink::new();
        sink.begin(SinkConfig {
            width: 1,
            height: 1,
            fps: Fps::new(30, 1).unwrap(),
        })
        .unwrap();
        sink.push_frame(0, &tiny()).unwrap();
        sink.push_frame(1, &tiny()).unwrap();
        sink.end().unwrap();

        assert_eq!(sink.config().unwrap().fps.num, 30);
        let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| *i).collect();
        assert_eq!(idx, vec![0, 1]);
        assert!(sink.is_ended());
    }

    #[test]
    fn png_sequence_names_are_zero_padded() {
        let sink = PngSequenceSink::new("out", "sweep_");
        assert_eq!(sink.path_for(42), PathBuf::from("out").join("sweep_00042.png"));
    }

    #[test]
    fn png_sequence_writes_files() {
        let dir = std::env::temp_dir().join(format!("nations-chart-sink-{}", std::process::id()));
        let mut sink = PngSequenceSink::new(&dir, "f");
        sink.begin(SinkConfig {
            width: 1,
            height: 1,
            fps: Fps::new(1, 1).unwrap(),
        })
        .unwrap();
        sink.push_frame(3, &tiny()).unwrap();
        sink.end().unwrap();

        assert_eq!(sink.written(), 1);
        let img = image::open(sink.path_for(3)).unwrap().to_rgba8();
        assert_eq!(img.get_pixel(0, 0).0, [10, 20, 30, 255]);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
