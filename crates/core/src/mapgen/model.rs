//! Public result types for a finished generation run.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::Pos;

use super::endpoints::PlacementFailure;
use super::grid::Grid;

/// How the run terminated. Floor-coverage failure is never surfaced as an
/// error: exhausting the attempt budget degrades into the fallback carve.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationOutcome {
    Success,
    ExhaustedFallback,
}

/// Notable decisions recorded during a run, in order. This is the reporting
/// channel for recoveries and placement failures; nothing here is fatal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GenerationEvent {
    AttemptRejected { attempt: usize, floor_percentage: f64 },
    FillProbabilityLowered { attempt: usize, fill_probability: f64 },
    FallbackApplied,
    PlacementFailed(PlacementFailure),
}

/// Final product of one orchestrator run: the grid, the seed that actually
/// drove the RNG, the chosen endpoints (absent on placement failure), the
/// outcome tag, and the event log.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedCave {
    pub grid: Grid,
    pub seed: u64,
    pub start: Option<Pos>,
    pub end: Option<Pos>,
    pub outcome: GenerationOutcome,
    pub events: Vec<GenerationEvent>,
}

impl GeneratedCave {
    pub fn floor_percentage(&self) -> f64 {
        self.grid.floor_percentage()
    }

    pub fn has_endpoints(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Stable byte encoding of everything deterministic about the result.
    /// The event log is excluded: it carries floats and is derived data.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = self.grid.canonical_bytes();
        bytes.extend(self.seed.to_le_bytes());
        for endpoint in [self.start, self.end] {
            match endpoint {
                Some(pos) => {
                    bytes.push(1);
                    bytes.extend(pos.y.to_le_bytes());
                    bytes.extend(pos.x.to_le_bytes());
                }
                None => bytes.push(0),
            }
        }
        bytes.push(match self.outcome {
            GenerationOutcome::Success => 0,
            GenerationOutcome::ExhaustedFallback => 1,
        });
        bytes
    }

    /// xxh3 fingerprint of [`Self::canonical_bytes`], for quick comparisons
    /// and traceable output filenames.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
