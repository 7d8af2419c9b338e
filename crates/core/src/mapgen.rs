//! Procedural cave generation domain split into coherent submodules.
//!
//! The pipeline runs strictly downward once per attempt: random fill,
//! automaton smoothing, connectivity repair, wall pruning, optional feature
//! carving, validation, endpoint placement. Only the orchestrator in
//! [`generator`] loops.

pub mod connectivity;
pub mod endpoints;
pub mod features;
pub mod grid;
pub mod initializer;
pub mod model;
pub mod params;
pub mod pruner;
pub mod regions;
pub mod smoother;

mod generator;
mod seed;

pub use endpoints::{EndpointPair, PlacementFailure};
pub use generator::CaveGenerator;
pub use grid::Grid;
pub use model::{GeneratedCave, GenerationEvent, GenerationOutcome};
pub use params::GenerationParameters;
pub use regions::Region;
pub use seed::generate_runtime_seed;

/// One-shot convenience over [`CaveGenerator`].
pub fn generate_cave(params: GenerationParameters) -> GeneratedCave {
    CaveGenerator::new(params).generate()
}

#[cfg(test)]
mod tests {
    use super::{CaveGenerator, GenerationParameters};

    #[test]
    fn generate_cave_matches_cave_generator_output() {
        let params = GenerationParameters {
            use_custom_seed: true,
            custom_seed: 99,
            ..GenerationParameters::default()
        };

        let from_helper = super::generate_cave(params.clone());
        let from_generator = CaveGenerator::new(params).generate();

        assert_eq!(from_helper, from_generator);
    }
}
