//! Orchestration of the full pipeline: fill, smooth, repair, prune, carve
//! features, validate, and place endpoints, inside a bounded retry loop with
//! a guaranteed fallback.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::types::Cell;

use super::connectivity::ensure_connectivity;
use super::endpoints::place_endpoints;
use super::features::{carve_chambers, carve_fallback_layout, carve_rooms};
use super::grid::Grid;
use super::initializer::fill_random;
use super::model::{GeneratedCave, GenerationEvent, GenerationOutcome};
use super::params::GenerationParameters;
use super::pruner::remove_small_wall_clusters;
use super::seed::resolve_seed;
use super::smoother::{SmoothingRules, smooth};

/// Orchestrator-level attempt cap, separate from the nested
/// `max_regeneration_attempts` budget inside raw generation.
const MAX_GENERATION_ATTEMPTS: usize = 5;
const FILL_PROBABILITY_STEP: f64 = 0.05;
const MIN_FILL_PROBABILITY: f64 = 0.30;

/// Drives one generation per [`CaveGenerator::generate`] call. Holds only the
/// normalized parameters; the grid and RNG live on the stack of a single call
/// so no state leaks between runs.
pub struct CaveGenerator {
    params: GenerationParameters,
}

impl CaveGenerator {
    pub fn new(params: GenerationParameters) -> Self {
        Self { params: params.normalized() }
    }

    pub fn params(&self) -> &GenerationParameters {
        &self.params
    }

    /// Generate with the configured seed source: the custom seed when one is
    /// set, otherwise a fresh time-derived seed.
    pub fn generate(&self) -> GeneratedCave {
        self.generate_with_seed(resolve_seed(&self.params))
    }

    /// Generate with an explicit seed. Same seed and parameters reproduce a
    /// bit-identical result.
    pub fn generate_with_seed(&self, seed: u64) -> GeneratedCave {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut events = Vec::new();

        let mut fill_probability = self.params.fill_probability;
        let mut accepted = None;
        let mut last_attempt_grid = None;

        for attempt in 0..MAX_GENERATION_ATTEMPTS {
            let mut grid = self.raw_generate(fill_probability, &mut rng);

            ensure_connectivity(&mut grid, self.params.min_room_size, &mut rng);
            remove_small_wall_clusters(&mut grid, self.params.min_room_size);

            if self.params.generate_rooms {
                carve_rooms(
                    &mut grid,
                    self.params.number_of_rooms,
                    self.params.room_size_range,
                    &mut rng,
                );
            }
            if self.params.generate_chambers {
                carve_chambers(
                    &mut grid,
                    self.params.number_of_chambers,
                    self.params.chamber_radius_range,
                    &mut rng,
                );
            }

            let floor_percentage = grid.floor_percentage();
            if floor_percentage >= self.params.min_floor_percentage {
                accepted = Some(grid);
                break;
            }

            events.push(GenerationEvent::AttemptRejected { attempt, floor_percentage });
            fill_probability = (fill_probability - FILL_PROBABILITY_STEP).max(MIN_FILL_PROBABILITY);
            events.push(GenerationEvent::FillProbabilityLowered { attempt, fill_probability });
            last_attempt_grid = Some(grid);
        }

        let (mut grid, outcome) = match accepted {
            Some(grid) => (grid, GenerationOutcome::Success),
            None => {
                let mut grid = last_attempt_grid
                    .unwrap_or_else(|| Grid::filled(self.params.width, self.params.height, Cell::Wall));
                carve_fallback_layout(&mut grid, &mut rng);
                events.push(GenerationEvent::FallbackApplied);
                (grid, GenerationOutcome::ExhaustedFallback)
            }
        };

        // Placement runs exactly once, after acceptance or fallback, and its
        // failure never triggers another attempt.
        let (start, end) = match place_endpoints(&mut grid, &mut rng) {
            Ok(pair) => (Some(pair.start), Some(pair.end)),
            Err(failure) => {
                events.push(GenerationEvent::PlacementFailed(failure));
                (None, None)
            }
        };

        GeneratedCave { grid, seed, start, end, outcome, events }
    }

    /// Fill plus the full smoothing pass, with its own nested safety net: if
    /// post-smoothing coverage is short and regeneration budget remains, the
    /// local fill probability drops one step and fill-and-smooth restarts.
    /// The drift stays local to this call, so the nested loop and the
    /// orchestrator's retry loop cannot compound across attempts.
    fn raw_generate(&self, initial_fill_probability: f64, rng: &mut ChaCha8Rng) -> Grid {
        let rules = SmoothingRules::from_params(&self.params);
        let mut fill_probability = initial_fill_probability;
        let mut remaining_budget = self.params.max_regeneration_attempts;

        loop {
            let mut grid = fill_random(self.params.width, self.params.height, fill_probability, rng);
            for _ in 0..self.params.smooth_iterations {
                grid = smooth(&grid, &rules);
            }

            if grid.floor_percentage() >= self.params.min_floor_percentage
                || remaining_budget == 0
            {
                return grid;
            }
            remaining_budget -= 1;
            fill_probability = (fill_probability - FILL_PROBABILITY_STEP).max(MIN_FILL_PROBABILITY);
        }
    }
}
