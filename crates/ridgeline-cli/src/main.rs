//! Command-line ridgeline generator: resolve parameters from a JSON file,
//! presets and flags, then write the SVG verbatim.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use ridgeline_core::{export_filename, generate, random_seed, CanvasPreset, GeneratorParams};
use tracing::level_filters::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "ridgeline", about = "Generate a Joy Division style ridgeline SVG")]
struct Args {
    /// JSON params document (camelCase fields; missing fields use defaults).
    #[arg(short, long)]
    params: Option<PathBuf>,

    /// Canvas size preset, applied before explicit --width/--height.
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    /// Number of stacked lines.
    #[arg(long)]
    lines: Option<u32>,
    /// Vertical gap between baselines in px.
    #[arg(long)]
    spacing: Option<f64>,
    /// Peak height ceiling in px.
    #[arg(long)]
    amplitude: Option<f64>,
    #[arg(long)]
    peaks_min: Option<u32>,
    #[arg(long)]
    peaks_max: Option<u32>,
    /// Base oscillation count across the width.
    #[arg(long)]
    wave_freq: Option<f64>,
    /// Fine-texture amplitude scale.
    #[arg(long)]
    noise: Option<f64>,
    #[arg(long)]
    stroke_width: Option<f64>,

    /// Reproducibility key.
    #[arg(short, long, conflicts_with = "random_seed")]
    seed: Option<u64>,

    /// Draw a fresh seed instead of using the configured one.
    #[arg(long)]
    random_seed: bool,

    /// Pull every parameter into the UI slider ranges before generating.
    #[arg(long)]
    clamp: bool,

    /// Output path, or `-` for stdout. Defaults to joy_division_<seed>.svg.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the resolved params as JSON and exit without generating.
    #[arg(long)]
    print_params: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Preset {
    Portrait,
    PortraitLarge,
    PortraitXl,
}

impl From<Preset> for CanvasPreset {
    fn from(p: Preset) -> Self {
        match p {
            Preset::Portrait => CanvasPreset::Portrait,
            Preset::PortraitLarge => CanvasPreset::PortraitLarge,
            Preset::PortraitXl => CanvasPreset::PortraitXl,
        }
    }
}

// ── Parameter resolution ──────────────────────────────────────────────────────

/// Layering: defaults < params file < preset < explicit flags < seed choice
/// < optional clamping.
fn resolve_params(args: &Args) -> Result<GeneratorParams> {
    let mut p = match &args.params {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading params file {}", path.display()))?;
            GeneratorParams::from_json(&json)
                .with_context(|| format!("parsing params file {}", path.display()))?
        }
        None => GeneratorParams::default(),
    };

    if let Some(preset) = args.preset {
        p = p.with_preset(preset.into());
    }

    let overrides = [
        (&mut p.width, args.width),
        (&mut p.height, args.height),
        (&mut p.line_spacing, args.spacing),
        (&mut p.max_amplitude, args.amplitude),
        (&mut p.wave_freq, args.wave_freq),
        (&mut p.noise_level, args.noise),
        (&mut p.stroke_width, args.stroke_width),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }
    if let Some(v) = args.lines {
        p.num_lines = v;
    }
    if let Some(v) = args.peaks_min {
        p.num_peaks_min = v;
    }
    if let Some(v) = args.peaks_max {
        p.num_peaks_max = v;
    }

    if args.random_seed {
        p.seed = random_seed();
        tracing::info!(seed = p.seed, "drew a fresh seed");
    } else if let Some(seed) = args.seed {
        p.seed = seed;
    }

    if args.clamp {
        p = p.clamp_to_ranges();
    }
    Ok(p)
}

fn output_target(args: &Args, seed: u64) -> Option<PathBuf> {
    match &args.output {
        Some(path) if path.as_os_str() == "-" => None,
        Some(path) => Some(path.clone()),
        None => Some(PathBuf::from(export_filename(seed))),
    }
}

fn write_svg(target: Option<&Path>, svg: &str) -> Result<()> {
    match target {
        Some(path) => {
            fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(svg.as_bytes()).context("writing to stdout")?;
            stdout.flush().context("flushing stdout")?;
        }
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let params = resolve_params(&args)?;

    if args.print_params {
        println!("{}", serde_json::to_string_pretty(&params)?);
        return Ok(());
    }

    let svg = generate(&params).context("generating ridgeline document")?;
    write_svg(output_target(&args, params.seed).as_deref(), &svg)
}
