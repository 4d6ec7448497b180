use std::sync::Arc;
use std::time::Duration;

use crate::animation::timer::CancellationToken;
use crate::config::ChartConfig;
use crate::data::dataset::Dataset;
use crate::data::frame::Frame;
use crate::foundation::error::ChartResult;
use crate::interaction::{ChartMode, Interaction, PointerEvent, RawPointer, Update};
use crate::scale::{ChartScales, LinearScale};
use crate::surface::Surface;

/// Observable state of a mounted chart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ViewState {
    pub current_year: f64,
    pub mode: ChartMode,
    pub label_active: bool,
}

/// Everything a mounted chart owns besides the dataset: fixed scales, the scrub mapping and the
/// mutable view state.
#[derive(Debug)]
struct ChartContext {
    generation: u64,
    config: ChartConfig,
    scales: ChartScales,
    scrub: LinearScale,
    interaction: Interaction,
    current_year: f64,
    label_active: bool,
}

/// Animated bubble chart of income, life expectancy, population and region over time.
///
/// Mounting draws the first year and starts the sweep; the host then feeds [`tick`] and
/// pointer input. All operations take the [`Surface`] the chart was mounted into. Once another
/// chart is mounted into that surface, or this one is unmounted, every operation is a no-op.
///
/// [`tick`]: TemporalBubbleChart::tick
#[derive(Debug)]
pub struct TemporalBubbleChart {
    dataset: Arc<Dataset>,
    ctx: ChartContext,
}

impl TemporalBubbleChart {
    #[tracing::instrument(skip_all, fields(entities = dataset.len()))]
    pub fn mount(
        surface: &mut Surface,
        dataset: Arc<Dataset>,
        config: ChartConfig,
        now: Duration,
    ) -> ChartResult<Self> {
        config.validate()?;

        let year = config.years.start;
        let initial = Frame::interpolate(&dataset, year);
        let scales = ChartScales::new(&config, &initial);

        let mut tree = crate::view::ViewTree::build(&config, &scales);
        tree.apply_frame(&initial, &scales);

        let inset = config.label.scrub_inset;
        let scrub = LinearScale::new(
            [config.years.start, config.years.end],
            [tree.overlay.x0 + inset, tree.overlay.x1 - inset],
        )
        .clamped();

        let interaction = Interaction::sweep(now, config.sweep_duration());
        let generation = surface.attach(tree, interaction.token());
        tracing::debug!(year, generation, "chart mounted");

        Ok(Self {
            dataset,
            ctx: ChartContext {
                generation,
                config,
                scales,
                scrub,
                interaction,
                current_year: year,
                label_active: false,
            },
        })
    }

    pub fn view_state(&self) -> ViewState {
        ViewState {
            current_year: self.ctx.current_year,
            mode: self.ctx.interaction.mode(),
            label_active: self.ctx.label_active,
        }
    }

    pub fn config(&self) -> &ChartConfig {
        &self.ctx.config
    }

    pub fn scales(&self) -> &ChartScales {
        &self.ctx.scales
    }

    /// Year mapping used while scrubbing.
    pub fn scrub_scale(&self) -> &LinearScale {
        &self.ctx.scrub
    }

    /// Token of the running sweep. Hosts stop scheduling frames once it is cancelled.
    pub fn animation_token(&self) -> Option<CancellationToken> {
        self.ctx.interaction.token()
    }

    /// Whether this chart still owns the view on `surface`.
    pub fn is_mounted_on(&self, surface: &Surface) -> bool {
        surface.is_current(self.ctx.generation)
    }

    /// Animation-frame callback.
    pub fn tick(&mut self, surface: &mut Surface, now: Duration) {
        if !self.is_mounted_on(surface) {
            self.ctx.interaction.cancel();
            return;
        }
        let years = self.ctx.config.years;
        let update = self.ctx.interaction.tick(now, years);
        self.apply(surface, update);
    }

    /// Deliver an already routed overlay event.
    pub fn handle_pointer(&mut self, surface: &mut Surface, event: PointerEvent) {
        if !self.is_mounted_on(surface) {
            return;
        }
        let update = self.ctx.interaction.pointer(event, &self.ctx.scrub);
        self.apply(surface, update);
    }

    /// Hit-test raw input on the surface and deliver the resulting events in order.
    pub fn pointer(&mut self, surface: &mut Surface, raw: RawPointer) {
        if !self.is_mounted_on(surface) {
            return;
        }
        for event in surface.route(raw) {
            self.handle_pointer(surface, event);
        }
    }

    /// Show `year` (clamped to the configured span) immediately.
    pub fn display_year(&mut self, surface: &mut Surface, year: f64) {
        if !self.is_mounted_on(surface) {
            return;
        }
        let year = self.ctx.config.years.clamp(year);
        self.ctx.current_year = year;
        let frame = Frame::interpolate(&self.dataset, year);
        if let Some(view) = surface.view_mut() {
            view.apply_frame(&frame, &self.ctx.scales);
        }
    }

    /// Cancel the sweep and remove everything the chart put on the surface.
    ///
    /// A chart that has already been replaced leaves the newer mount alone.
    pub fn unmount(self, surface: &mut Surface) {
        self.ctx.interaction.cancel();
        if self.is_mounted_on(surface) {
            surface.clear();
        }
        tracing::debug!(generation = self.ctx.generation, "chart unmounted");
    }

    fn apply(&mut self, surface: &mut Surface, update: Update) {
        if let Some(active) = update.label_active {
            self.ctx.label_active = active;
            if let Some(view) = surface.view_mut() {
                view.set_label_active(active);
            }
        }
        if let Some(year) = update.year {
            self.display_year(surface, year);
        }
    }
}

impl Drop for TemporalBubbleChart {
    fn drop(&mut self) {
        self.ctx.interaction.cancel();
    }
}
