//! CLI command implementations.

use std::error::Error;
use std::path::{Path, PathBuf};

use terrace_export::GridSnapshot;
use terrace_telemetry::EventBus;
use terrace_terrain::{HeightFieldSynthesizer, Terrain, TerrainConfig};

use crate::GenerateArgs;

type CliResult = Result<(), Box<dyn Error>>;

/// Generate a terrain, export it, and optionally snapshot the grid.
pub fn generate(args: &GenerateArgs) -> CliResult {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => TerrainConfig::default(),
    };
    if let Some(detail) = args.detail {
        config.detail = detail;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(color) = args.color {
        config.color_mode = color;
    }

    println!("Terrace Terrain Generator");
    println!("─────────────────────────");
    println!();

    let mut synth =
        HeightFieldSynthesizer::new(config.clone())?.with_telemetry(EventBus::with_tracing());
    synth.synthesize()?;
    if let Some(bus) = synth.telemetry_mut() {
        bus.finalize();
    }
    let terrain = synth.take_terrain()?;
    print_summary(&config, &terrain);

    let exporter = args.format.exporter();
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(format!("terrain.{}", exporter.extension())));
    exporter.export_to_path(&terrain.buffers, &output)?;
    println!("Mesh written to:     {}", output.display());

    if let Some(path) = &args.snapshot {
        GridSnapshot::from_terrain(&config, &terrain).save(path)?;
        println!("Snapshot written to: {}", path.display());
    }

    Ok(())
}

/// Inspect a grid snapshot.
pub fn inspect(path: &Path) -> CliResult {
    println!("Terrace Snapshot Inspector");
    println!("──────────────────────────");
    println!();

    let snapshot = GridSnapshot::load(path)?;
    let grid = &snapshot.grid;
    let (min, max) = grid.height_range();
    let [c00, c0n, cn0, cnn] = grid.corners();

    println!("Version:      {}", snapshot.version);
    println!("Detail:       {}", snapshot.config.detail);
    println!("Side:         {}", grid.side());
    match snapshot.seed {
        Some(seed) => println!("Seed:         {seed}"),
        None => println!("Seed:         (unknown)"),
    }
    println!("Color mode:   {}", snapshot.config.color_mode);
    println!("Height range: [{min:.4}, {max:.4}]");
    println!("Corners:      {c00:.4} {c0n:.4} {cn0:.4} {cnn:.4}");

    Ok(())
}

/// Validate a terrain config.
pub fn validate(path: &Path) -> CliResult {
    println!("Terrace Config Validator");
    println!("────────────────────────");
    println!();

    println!("Validating config: {}", path.display());
    let config = load_config(path)?;
    println!(
        "Config is valid: detail {} ({side}x{side}), color {}, seed {}.",
        config.detail,
        config.color_mode,
        config
            .seed
            .map_or_else(|| "from entropy".to_string(), |s| s.to_string()),
        side = config.side(),
    );
    Ok(())
}

fn load_config(path: &Path) -> Result<TerrainConfig, Box<dyn Error>> {
    let content = std::fs::read_to_string(path)?;
    Ok(TerrainConfig::from_toml_str(&content)?)
}

fn print_summary(config: &TerrainConfig, terrain: &Terrain) {
    let mesh = terrain.mesh();
    println!("Grid:         {side}x{side}", side = terrain.side());
    if let Some(seed) = terrain.seed {
        println!("Seed:         {seed}");
    }
    println!("Color mode:   {}", config.color_mode);
    println!("Vertices:     {}", mesh.vertex_count());
    println!("Triangles:    {}", mesh.triangle_count());
    println!("Height range: [{:.4}, {:.4}]", mesh.min_height, mesh.max_height);
    println!();
}
