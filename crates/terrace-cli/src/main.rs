//! terrace CLI: terrain generation, snapshot inspection and config checks.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use terrace_export::ExportFormat;
use terrace_terrain::ColorMode;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "terrace")]
#[command(version, about = "Diamond-square terrain height-field synthesizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a terrain and export its render buffers.
    Generate(GenerateArgs),

    /// Inspect a grid snapshot file.
    Inspect {
        /// Path to snapshot file.
        path: PathBuf,
    },

    /// Validate a terrain config.
    Validate {
        /// Path to config file (TOML).
        path: PathBuf,
    },
}

#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Terrain config (TOML). Defaults are used when omitted.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Detail level n; the grid is (2^n + 1) on a side.
    #[arg(short, long)]
    pub detail: Option<u32>,

    /// PRNG seed for a reproducible terrain.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Coloring: banded, linear or trig.
    #[arg(long)]
    pub color: Option<ColorMode>,

    /// Export format: json or obj.
    #[arg(short, long, default_value_t = ExportFormat::Json)]
    pub format: ExportFormat,

    /// Output path. Defaults to `terrain.<format>`.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Also save a binary grid snapshot to this path.
    #[arg(long)]
    pub snapshot: Option<PathBuf>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate(args) => commands::generate(&args),
        Commands::Inspect { path } => commands::inspect(&path),
        Commands::Validate { path } => commands::validate(&path),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
