use anyhow::Result;
use cavegen_core::mapgen::{CaveGenerator, GenerationOutcome, GenerationParameters};
use cavegen_core::types::{Cell, Pos};
use clap::Parser;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for the sweep itself
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of caves to generate
    #[arg(short, long, default_value_t = 200)]
    runs: u32,
    #[arg(long, default_value_t = 64)]
    width: usize,
    #[arg(long, default_value_t = 48)]
    height: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Sweeping {} generations from sweep seed {}...", args.runs, args.seed);
    let mut sweep_rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut fallback_count = 0_u32;
    let mut missing_endpoint_count = 0_u32;

    for run in 0..args.runs {
        let cave_seed = sweep_rng.next_u64();
        let params = GenerationParameters {
            width: args.width,
            height: args.height,
            use_custom_seed: true,
            custom_seed: cave_seed,
            ..GenerationParameters::default()
        };
        let cave = CaveGenerator::new(params).generate();

        // Assert invariants
        assert!(cave.floor_percentage() > 0.0, "run {run}: empty map for seed {cave_seed}");
        for x in 0..cave.grid.width() as i32 {
            assert_eq!(cave.grid.cell_at(Pos { y: 0, x }), Cell::Wall);
            assert_eq!(
                cave.grid.cell_at(Pos { y: cave.grid.height() as i32 - 1, x }),
                Cell::Wall,
                "run {run}: border breach for seed {cave_seed}"
            );
        }
        if let (Some(start), Some(end)) = (cave.start, cave.end) {
            assert_eq!(cave.grid.cell_at(start), Cell::Start);
            assert_eq!(cave.grid.cell_at(end), Cell::End);
        } else {
            missing_endpoint_count += 1;
        }
        if cave.outcome == GenerationOutcome::ExhaustedFallback {
            fallback_count += 1;
        }
    }

    println!(
        "Sweep completed: {} runs, {} fallbacks, {} without endpoints.",
        args.runs, fallback_count, missing_endpoint_count
    );
    Ok(())
}
