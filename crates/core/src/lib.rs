pub mod ascii;
pub mod mapgen;
pub mod types;

pub use mapgen::{
    CaveGenerator, GeneratedCave, GenerationEvent, GenerationOutcome, GenerationParameters,
    PlacementFailure, generate_cave,
};
pub use types::{Cell, Pos};
