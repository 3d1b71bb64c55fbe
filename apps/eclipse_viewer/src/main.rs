use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use std::fs;
use std::path::{Path, PathBuf};

use eclipse::config::{self, EclipseSettings};
use eclipse::rendering::FrameFormat;
use eclipse::{presets, AnimationDriver, MoonSlider};

#[cfg(feature = "window")]
mod window;

#[derive(Parser, Debug)]
#[command(author, version, about = "Draw a solar eclipse as two overlapping disks")]
struct Args {
    /// Built-in eclipse (see `presets`)
    #[arg(long, global = true, conflicts_with = "config")]
    preset: Option<String>,

    /// Settings file; defaults to configs/eclipse.toml when present
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List built-in eclipses
    Presets,
    /// Print the computed geometry
    Info,
    /// Greatest eclipse as a single frame
    Static {
        #[arg(long, help = "Output file (.svg or .json)")]
        out: PathBuf,
    },
    /// One frame with the Moon at a horizontal slider position
    Slider {
        #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
        value: f64,
        #[arg(long, help = "Output file (.svg or .json)")]
        out: PathBuf,
    },
    /// Headless sweep animation written frame by frame
    Frames {
        #[arg(long, default_value_t = 1200)]
        count: u64,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long, value_enum, default_value_t = OutputFormat::Svg)]
        format: OutputFormat,
        /// Keep one frame in every N
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u64).range(1..))]
        every: u64,
    },
    /// Live view
    #[cfg(feature = "window")]
    Window {
        #[arg(long, value_enum, default_value_t = window::WindowMode::Sweep)]
        mode: window::WindowMode,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Svg,
    Json,
}

impl From<OutputFormat> for FrameFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Svg => FrameFormat::Svg,
            OutputFormat::Json => FrameFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let settings = resolve_settings(&args)?;

    match args.command {
        Command::Presets => list_presets(),
        Command::Info => print_info(&settings),
        Command::Static { out } => {
            settings
                .scene()
                .render_static()
                .write_to(&out)
                .with_context(|| format!("writing static frame to {}", out.display()))?;
            log::info!("static frame written to {}", out.display());
        }
        Command::Slider { value, out } => {
            let scene = settings.scene();
            let mut slider = MoonSlider::for_geometry(&scene.geometry);
            let stored = slider.set_value(value);
            if (stored - value).abs() > slider.step() {
                log::warn!("slider value {value} clamped to {stored}");
            }
            scene
                .render_slider(slider.moon_x(&scene.geometry))
                .write_to(&out)
                .with_context(|| format!("writing slider frame to {}", out.display()))?;
            log::info!("slider frame written to {}", out.display());
        }
        Command::Frames {
            count,
            out_dir,
            format,
            every,
        } => write_frames(&settings, count, &out_dir, format.into(), every)?,
        #[cfg(feature = "window")]
        Command::Window { mode } => window::run(settings, mode),
    }
    Ok(())
}

fn resolve_settings(args: &Args) -> anyhow::Result<EclipseSettings> {
    if let Some(name) = &args.preset {
        return Ok(EclipseSettings::preset(name)?);
    }
    let path = args.config.clone().or_else(config::find_settings_file);
    match path {
        Some(path) => EclipseSettings::load(&path)
            .with_context(|| format!("loading settings from {}", path.display())),
        None => {
            log::debug!("no settings file, using preset {}", presets::DEFAULT_PRESET);
            Ok(EclipseSettings::default())
        }
    }
}

fn list_presets() {
    for preset in presets::all() {
        println!(
            "{:<12} gamma={:>9.5} canvas={:>4}px variant={:?}",
            preset.name, preset.gamma, preset.canvas_size, preset.variant
        );
    }
}

fn print_info(settings: &EclipseSettings) {
    let g = settings.geometry();
    let range = g.offset_range();
    println!("eclipse          {}", settings.name);
    println!("kind             {}", g.kind());
    println!("gamma            {:.5}", g.gamma);
    println!("sun diameter     {:.3} px", g.sun_diameter);
    println!("moon diameter    {:.3} px", g.moon_diameter);
    println!("vertical offset  {:.3} px", g.vertical_offset);
    println!("offset range     [{:.3}, {:.3}] px", range.lower, range.upper);
    println!("total capable    {}", g.classification.is_total_capable);
    println!(
        "direction        {}",
        if g.direction > 0.0 { "north" } else { "south" }
    );
}

fn write_frames(
    settings: &EclipseSettings,
    count: u64,
    out_dir: &Path,
    format: FrameFormat,
    every: u64,
) -> anyhow::Result<()> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let scene = settings.scene();
    let mut driver = AnimationDriver::with_timing(scene.geometry, settings.timing);
    let mut written = 0u64;

    for index in 0..count {
        let tick = driver.tick();
        if index % every != 0 {
            continue;
        }
        let mut frame = scene.render_sweep(tick.moon_x, tick.phase);
        frame.metadata.frame_index = Some(index);
        let path = out_dir.join(format!("frame_{index:05}.{}", format.extension()));
        frame
            .write_to(&path)
            .with_context(|| format!("writing frame {index}"))?;
        written += 1;
    }

    log::info!("wrote {written} frames to {}", out_dir.display());
    Ok(())
}
