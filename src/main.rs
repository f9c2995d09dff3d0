use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anyhow::Context;
use serde::Serialize;

use dominant_color::{
    PaletteExtractor, Rgb, DEFAULT_ALPHA_CUTOFF, DEFAULT_COLOR_COUNT, DEFAULT_MAX_ITERATIONS,
};
use swatch::report::{ContrastReport, InfoReport, PaletteReport, ShadesReport};

#[derive(Parser)]
#[command(name = "swatch")]
#[command(about = "Extract dominant color palettes from images and inspect colors")]
struct Cli {
    /// Emit JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract a dominant-color palette from an image file
    Extract {
        /// Path to the image file
        image: PathBuf,

        /// Number of colors to extract (recommended 1-12)
        #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
        count: usize,

        /// Alpha threshold below which pixels count as transparent
        #[arg(long, default_value_t = DEFAULT_ALPHA_CUTOFF)]
        alpha_cutoff: u8,

        /// Iteration cap for the clustering loop
        #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
        max_iterations: usize,
    },
    /// Check the WCAG contrast ratio between two colors
    Contrast {
        /// Foreground color, e.g. "#0F172A"
        foreground: String,

        /// Background color, e.g. "#FFFFFF"
        background: String,
    },
    /// Show the RGB, HSL and CMYK forms of a color
    Info {
        /// Color to inspect (hex)
        color: String,
    },
    /// Generate tints and shades of a color
    Shades {
        /// Base color (hex)
        color: String,

        /// How many tints and how many shades to generate
        #[arg(short, long, default_value_t = 5)]
        steps: usize,
    },
    /// Print random colors
    Random {
        /// Number of colors to generate
        #[arg(short, long, default_value_t = DEFAULT_COLOR_COUNT)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "swatch=warn,dominant_color=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Commands::Extract {
            image,
            count,
            alpha_cutoff,
            max_iterations,
        } => run_extract(&image, count, alpha_cutoff, max_iterations, cli.json).await,
        Commands::Contrast {
            foreground,
            background,
        } => run_contrast(&foreground, &background, cli.json),
        Commands::Info { color } => run_info(&color, cli.json),
        Commands::Shades { color, steps } => run_shades(&color, steps, cli.json),
        Commands::Random { count } => run_random(count, cli.json),
    }
}

async fn run_extract(
    image: &Path,
    count: usize,
    alpha_cutoff: u8,
    max_iterations: usize,
    json: bool,
) -> anyhow::Result<()> {
    let extractor = PaletteExtractor::new()
        .count(count)
        .alpha_cutoff(alpha_cutoff)
        .max_iterations(max_iterations);

    let palette = extractor
        .extract_path(image)
        .await
        .with_context(|| format!("could not extract a palette from {}", image.display()))?;

    if palette.is_empty() {
        tracing::warn!("every sampled pixel was below the alpha cutoff");
    }

    let report = PaletteReport::new(&palette);
    emit(&report, report.render_text(), json)
}

fn run_contrast(foreground: &str, background: &str, json: bool) -> anyhow::Result<()> {
    let report = ContrastReport::new(parse_color(foreground)?, parse_color(background)?);
    emit(&report, report.render_text(), json)
}

fn run_info(color: &str, json: bool) -> anyhow::Result<()> {
    let report = InfoReport::new(parse_color(color)?);
    emit(&report, report.render_text(), json)
}

fn run_shades(color: &str, steps: usize, json: bool) -> anyhow::Result<()> {
    let report = ShadesReport::new(parse_color(color)?, steps);
    emit(&report, report.render_text(), json)
}

fn run_random(count: usize, json: bool) -> anyhow::Result<()> {
    let mut rng = rand::thread_rng();
    let colors: Vec<Rgb> = (0..count).map(|_| Rgb::random(&mut rng)).collect();
    let report = PaletteReport::new(&colors);
    emit(&report, report.render_text(), json)
}

fn parse_color(input: &str) -> anyhow::Result<Rgb> {
    input
        .parse()
        .with_context(|| format!("invalid color {input:?} (expected hex like \"#1A2B3C\")"))
}

fn emit<T: Serialize>(report: &T, text: String, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{text}");
    }
    Ok(())
}
