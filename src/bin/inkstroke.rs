use std::{
    io::Write as _,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use inkstroke::{
    AlphaMask, BrushConfig, FrameInput, Noise2D, Point, ScreenBrush, ScreenBrushSettings,
    StreakMask, StrokeRenderer,
};

#[derive(Parser, Debug)]
#[command(name = "inkstroke", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sweep progress over a stroke and print one JSON stats line per frame.
    Sweep(SweepArgs),
    /// Write the streak alpha mask as a grayscale PNG.
    Mask(MaskArgs),
    /// Rasterize the screen-space brush at one progress value.
    Screen(ScreenArgs),
}

#[derive(Parser, Debug)]
struct SweepArgs {
    /// Control points JSON (`[[x, y, z], ...]`).
    #[arg(long)]
    points: PathBuf,

    /// Brush config JSON; defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of progress steps between 0 and 1.
    #[arg(long, default_value_t = 10)]
    steps: u32,

    /// Seconds of elapsed time per step.
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Sweep from 1 back to 0 after the forward pass.
    #[arg(long)]
    reverse: bool,
}

#[derive(Parser, Debug)]
struct MaskArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Noise seed.
    #[arg(long, default_value_t = 7)]
    seed: u64,

    /// Mask edge length in pixels.
    #[arg(long, default_value_t = 256)]
    size: u32,
}

#[derive(Parser, Debug)]
struct ScreenArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Reveal progress in `[0, 1]`.
    #[arg(long, default_value_t = 1.0)]
    progress: f32,

    /// Elapsed seconds.
    #[arg(long, default_value_t = 0.0)]
    time: f32,

    /// UV-space points JSON (`[[u, v], ...]`); a vertical line when omitted.
    #[arg(long)]
    points: Option<PathBuf>,

    #[arg(long, default_value_t = 256)]
    width: u32,

    #[arg(long, default_value_t = 256)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Sweep(args) => cmd_sweep(args),
        Command::Mask(args) => cmd_mask(args),
        Command::Screen(args) => cmd_screen(args),
    }
}

fn cmd_sweep(args: SweepArgs) -> anyhow::Result<()> {
    let config = match &args.config {
        Some(path) => BrushConfig::from_path(path)?,
        None => BrushConfig::default(),
    };
    let points = inkstroke::load_control_points(&args.points)?;

    let mut renderer = StrokeRenderer::new(config)?;
    renderer.set_control_points(&points);

    let steps = args.steps.max(1);
    let mut schedule: Vec<f32> = (0..=steps).map(|k| k as f32 / steps as f32).collect();
    if args.reverse {
        schedule.extend((0..steps).rev().map(|k| k as f32 / steps as f32));
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    for (k, progress) in schedule.into_iter().enumerate() {
        let frame = renderer.frame(FrameInput::new(progress, k as f32 * args.dt));
        let line = serde_json::to_string(&frame.stats()).context("encode frame stats")?;
        writeln!(out, "{line}").context("write frame stats")?;
    }
    renderer.teardown();
    Ok(())
}

fn cmd_mask(args: MaskArgs) -> anyhow::Result<()> {
    let streak = StreakMask {
        size: args.size,
        ..StreakMask::default()
    };
    let mask = streak.generate(&Noise2D::new(args.seed));
    write_mask(&args.out, &mask)
}

fn cmd_screen(args: ScreenArgs) -> anyhow::Result<()> {
    let points: Vec<Point> = match &args.points {
        Some(path) => inkstroke::load_control_points(path)?
            .into_iter()
            .map(|p| Point::new(f64::from(p.x), f64::from(p.y)))
            .collect(),
        None => Vec::new(),
    };
    let brush = ScreenBrush::new(&points, ScreenBrushSettings::default());
    let mask = brush.rasterize(args.width, args.height, args.progress, args.time);
    write_mask(&args.out, &mask)
}

fn write_mask(out: &Path, mask: &AlphaMask) -> anyhow::Result<()> {
    if let Some(parent) = out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &mask.data,
        mask.width,
        mask.height,
        image::ColorType::L8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
