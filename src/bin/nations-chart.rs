use std::{
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use nations_chart::{
    ChartConfig, Dataset, Deck, Fps, Key, PngSequenceSink, Point, RawPointer, Rasterizer, Surface,
    TemporalBubbleChart,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "nations-chart", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the chart at one year as PNG or SVG.
    Frame(FrameArgs),
    /// Render the whole sweep as a PNG sequence.
    Sweep(SweepArgs),
    /// Let the sweep finish, hover the year label at `x` and render the result.
    Scrub(ScrubArgs),
    /// Replay key presses against the slide deck and print every route shown.
    Present(PresentArgs),
}

#[derive(Parser, Debug)]
struct Input {
    /// Input dataset JSON (array of entities).
    #[arg(long)]
    data: PathBuf,

    /// Optional chart configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    #[command(flatten)]
    input: Input,

    /// Year to display (clamped to the configured span).
    #[arg(long)]
    year: f64,

    /// Output path; `.svg` writes the document, anything else a PNG.
    #[arg(long)]
    out: PathBuf,

    /// Output pixels per logical unit (PNG only).
    #[arg(long, default_value_t = 1.0)]
    scale: f32,
}

#[derive(Parser, Debug)]
struct SweepArgs {
    #[command(flatten)]
    input: Input,

    /// Frames per second.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Directory receiving the PNG frames.
    #[arg(long)]
    out_dir: PathBuf,

    /// File name prefix of each frame.
    #[arg(long, default_value = "frame_")]
    prefix: String,
}

#[derive(Parser, Debug)]
struct ScrubArgs {
    #[command(flatten)]
    input: Input,

    /// Pointer x position in surface coordinates.
    #[arg(long)]
    x: f64,

    /// Output path; `.svg` writes the document, anything else a PNG.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct PresentArgs {
    #[command(flatten)]
    input: Input,

    /// Route opened first.
    #[arg(long, default_value = nations_chart::deck::DEFAULT_ROUTE)]
    start: String,

    /// Key names, e.g. `ArrowRight,Space,ArrowLeft`.
    #[arg(long, value_delimiter = ',')]
    keys: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sweep(args) => cmd_sweep(args),
        Command::Scrub(args) => cmd_scrub(args),
        Command::Present(args) => cmd_present(args),
    }
}

fn load(input: &Input) -> anyhow::Result<(Arc<Dataset>, ChartConfig)> {
    let dataset = Dataset::from_path(&input.data)
        .with_context(|| format!("load dataset '{}'", input.data.display()))?;
    if !dataset.skipped().is_empty() {
        eprintln!("skipped {} malformed entities", dataset.skipped().len());
    }
    let config = match &input.config {
        Some(path) => ChartConfig::from_path(path)
            .with_context(|| format!("load config '{}'", path.display()))?,
        None => ChartConfig::default(),
    };
    Ok((Arc::new(dataset), config))
}

fn write_view(surface: &Surface, out: &Path, scale: f32) -> anyhow::Result<()> {
    let view = surface.view().context("chart is not mounted")?;
    let svg = view.to_svg();

    let is_svg = out
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
    if is_svg {
        if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(out, svg).with_context(|| format!("write svg '{}'", out.display()))?;
    } else {
        let frame = Rasterizer::new().with_scale(scale)?.rasterize(&svg)?;
        nations_chart::save_png(out, &frame)?;
    }

    eprintln!("wrote {}", out.display());
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let (dataset, config) = load(&args.input)?;
    let mut surface = Surface::new(config.canvas);
    let mut chart = TemporalBubbleChart::mount(&mut surface, dataset, config, Duration::ZERO)?;
    chart.display_year(&mut surface, args.year);

    write_view(&surface, &args.out, args.scale)?;
    chart.unmount(&mut surface);
    Ok(())
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let (dataset, config) = load(&args.input)?;
    let fps = Fps::new(args.fps, 1)?;
    let mut sink = PngSequenceSink::new(&args.out_dir, args.prefix);

    let stats = nations_chart::record_sweep(dataset, config, fps, &mut sink, &Rasterizer::new())?;

    eprintln!(
        "wrote {} frames to {} ({} rendered, {} reused)",
        stats.frames_total,
        args.out_dir.display(),
        stats.frames_rendered,
        stats.frames_elided
    );
    Ok(())
}

fn cmd_scrub(args: ScrubArgs) -> anyhow::Result<()> {
    let (dataset, config) = load(&args.input)?;
    let end = config.sweep_duration();
    let mut surface = Surface::new(config.canvas);
    let mut chart = TemporalBubbleChart::mount(&mut surface, dataset, config, Duration::ZERO)?;
    chart.tick(&mut surface, end);

    let view = surface.view().context("chart is not mounted")?;
    let y = view.margin.top + view.overlay.center().y;
    chart.pointer(&mut surface, RawPointer::Mouse(Point::new(args.x, y)));

    let state = chart.view_state();
    println!("{}", serde_json::to_string(&state)?);

    write_view(&surface, &args.out, 1.0)?;
    chart.unmount(&mut surface);
    Ok(())
}

fn cmd_present(args: PresentArgs) -> anyhow::Result<()> {
    let (dataset, config) = load(&args.input)?;
    let mut deck = Deck::standard(dataset, config)?;

    let route = deck.open(&args.start, Duration::ZERO)?;
    println!("{route}  {}", deck.current_slide().title());
    for name in &args.keys {
        if let Some(route) = deck.handle_key(&Key::from_name(name), Duration::ZERO)? {
            println!("{route}  {}", deck.current_slide().title());
        }
    }
    Ok(())
}
