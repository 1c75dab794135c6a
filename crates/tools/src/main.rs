use std::fs;

use anyhow::{Context, Result};
use cave_core::mapgen::{CaveGrid, GeneratedMap, GenerationConfig, MapGenerator};
use cave_core::types::TileKind;
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML file with generation parameters.
    #[arg(long)]
    config: Option<String>,

    /// Map width in cells.
    #[arg(long)]
    width: Option<usize>,

    /// Map height in cells.
    #[arg(long)]
    height: Option<usize>,

    /// Percentage of interior cells seeded solid.
    #[arg(long)]
    fill: Option<u32>,

    /// Seed text; omitting it derives a fresh random seed.
    #[arg(long)]
    seed: Option<String>,

    /// Smoothing passes to run.
    #[arg(long)]
    iterations: Option<u32>,

    /// Keep small wall and floor regions instead of pruning them.
    #[arg(long)]
    keep_small_regions: bool,

    /// Skip the passage-carving connection pass.
    #[arg(long)]
    no_connect: bool,

    /// Print the bordered grid instead of the logical one.
    #[arg(long)]
    bordered: bool,

    /// Write the generated map as JSON to this path.
    #[arg(long)]
    json: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = build_config(&args)?;
    let mut generator = MapGenerator::new(config).context("invalid generation parameters")?;
    let map = generator.generate().clone();

    let shown = if args.bordered { &map.bordered } else { &map.grid };
    print!("{}", ascii_map(shown));
    println!("seed: {}", map.resolved_seed);
    println!(
        "open tiles: {} of {}",
        map.grid.count(TileKind::Floor),
        map.grid.width() * map.grid.height()
    );

    if let Some(path) = &args.json {
        write_json(&map, path)?;
        println!("wrote {path}");
    }
    Ok(())
}

fn build_config(args: &Args) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {path}"))?;
            toml::from_str(&raw).with_context(|| format!("failed to parse config file: {path}"))?
        }
        None => GenerationConfig::default(),
    };
    apply_overrides(&mut config, args);
    Ok(config)
}

fn apply_overrides(config: &mut GenerationConfig, args: &Args) {
    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fill) = args.fill {
        config.random_fill_percent = fill;
    }
    if let Some(iterations) = args.iterations {
        config.smooth_iterations = iterations;
    }
    if let Some(seed) = &args.seed {
        config.seed = seed.clone();
        config.use_random_seed = false;
    }
    if args.keep_small_regions {
        config.remove_small_regions = false;
    }
    if args.no_connect {
        config.connect_regions = false;
    }
}

fn ascii_map(grid: &CaveGrid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for pos in grid.positions() {
        out.push(match grid.tile(pos) {
            TileKind::Wall => '#',
            TileKind::Floor => '.',
        });
        if pos.x as usize == grid.width() - 1 {
            out.push('\n');
        }
    }
    out
}

fn write_json(map: &GeneratedMap, path: &str) -> Result<()> {
    let payload = serde_json::to_string_pretty(map).context("failed to serialize map")?;
    fs::write(path, payload).with_context(|| format!("failed to write {path}"))?;
    Ok(())
}
