//! Generation parameters and the clamping rules applied before a run.

use serde::{Deserialize, Serialize};

pub const MIN_MAP_DIMENSION: usize = 10;
pub const MAX_FEATURE_COUNT: usize = 20;
pub const MAX_REGENERATION_ATTEMPT_CAP: usize = 10;
pub const MAX_SMOOTH_ITERATIONS: usize = 16;

/// Full configuration surface for one generation run. Values are immutable
/// during a run; [`GenerationParameters::normalized`] clamps every field into
/// its valid range before the generator uses it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationParameters {
    pub width: usize,
    pub height: usize,
    /// Probability in `(0, 1)` that an interior cell starts as wall.
    pub fill_probability: f64,
    pub smooth_iterations: usize,
    pub birth_limit: f64,
    pub death_limit: f64,
    pub use_weighted_smoothing: bool,
    pub cardinal_weight: f64,
    pub diagonal_weight: f64,
    /// Regions smaller than this are filled back in during repair; also the
    /// wall-cluster size threshold for pruning.
    pub min_room_size: usize,
    /// Minimum fraction of interior cells that must be walkable for a map to
    /// be accepted without retrying.
    pub min_floor_percentage: f64,
    /// Budget for the nested fill-and-smooth restart inside raw generation,
    /// separate from the orchestrator's own attempt cap.
    pub max_regeneration_attempts: usize,
    pub generate_rooms: bool,
    pub number_of_rooms: usize,
    pub room_size_range: (usize, usize),
    pub generate_chambers: bool,
    pub number_of_chambers: usize,
    pub chamber_radius_range: (usize, usize),
    pub use_custom_seed: bool,
    pub custom_seed: u64,
}

impl Default for GenerationParameters {
    fn default() -> Self {
        Self {
            width: 64,
            height: 64,
            fill_probability: 0.45,
            smooth_iterations: 5,
            birth_limit: 4.0,
            death_limit: 3.0,
            use_weighted_smoothing: false,
            cardinal_weight: 1.0,
            diagonal_weight: 0.7,
            min_room_size: 10,
            min_floor_percentage: 0.3,
            max_regeneration_attempts: 3,
            generate_rooms: false,
            number_of_rooms: 4,
            room_size_range: (4, 8),
            generate_chambers: false,
            number_of_chambers: 3,
            chamber_radius_range: (3, 6),
            use_custom_seed: false,
            custom_seed: 0,
        }
    }
}

impl GenerationParameters {
    /// Clamp every field into its valid range. Out-of-range inputs are
    /// corrected rather than rejected, so generation can never fail on
    /// configuration alone.
    pub fn normalized(&self) -> Self {
        let mut normalized = self.clone();
        normalized.width = normalized.width.max(MIN_MAP_DIMENSION);
        normalized.height = normalized.height.max(MIN_MAP_DIMENSION);
        normalized.fill_probability = normalized.fill_probability.clamp(0.01, 0.99);
        normalized.smooth_iterations = normalized.smooth_iterations.min(MAX_SMOOTH_ITERATIONS);
        normalized.min_room_size = normalized.min_room_size.max(1);
        normalized.min_floor_percentage = normalized.min_floor_percentage.clamp(0.0, 1.0);
        normalized.max_regeneration_attempts =
            normalized.max_regeneration_attempts.min(MAX_REGENERATION_ATTEMPT_CAP);
        normalized.number_of_rooms = normalized.number_of_rooms.min(MAX_FEATURE_COUNT);
        normalized.number_of_chambers = normalized.number_of_chambers.min(MAX_FEATURE_COUNT);
        normalized.room_size_range = corrected_range(normalized.room_size_range, 1);
        normalized.chamber_radius_range = corrected_range(normalized.chamber_radius_range, 1);
        normalized
    }
}

fn corrected_range(range: (usize, usize), floor: usize) -> (usize, usize) {
    let min_value = range.0.max(floor);
    (min_value, range.1.max(min_value))
}
