use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use cavegen_core::ascii;
use cavegen_core::mapgen::{CaveGenerator, GenerationParameters};
use clap::Parser;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Fixed seed; omit for a time-derived one
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    #[arg(long)]
    fill_probability: Option<f64>,
    /// Path to a JSON parameter preset; CLI flags override its fields
    #[arg(short, long)]
    preset: Option<PathBuf>,
    /// Directory the ASCII map file is written to
    #[arg(short, long, default_value = "maps")]
    out: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut params = match &args.preset {
        Some(path) => {
            let preset_data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read preset file: {}", path.display()))?;
            serde_json::from_str::<GenerationParameters>(&preset_data)
                .with_context(|| "Failed to deserialize preset JSON")?
        }
        None => GenerationParameters::default(),
    };

    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    if let Some(fill_probability) = args.fill_probability {
        params.fill_probability = fill_probability;
    }
    if let Some(seed) = args.seed {
        params.use_custom_seed = true;
        params.custom_seed = seed;
    }

    let generator = CaveGenerator::new(params);
    let cave = generator.generate();

    let path = ascii::save_to_dir(&args.out, &cave)
        .with_context(|| format!("Failed to write map under {}", args.out.display()))?;

    println!("Generated {}x{} cave.", cave.grid.width(), cave.grid.height());
    println!("Seed: {}", cave.seed);
    println!("Outcome: {:?}", cave.outcome);
    println!("Floor percentage: {:.1}%", cave.floor_percentage() * 100.0);
    match (cave.start, cave.end) {
        (Some(start), Some(end)) => println!("Start: {start:?}  End: {end:?}"),
        _ => println!("No start/end markers were placed."),
    }
    for event in &cave.events {
        println!("Event: {event:?}");
    }
    println!("Fingerprint: {:016x}", cave.fingerprint());
    println!("Saved: {}", path.display());

    Ok(())
}
