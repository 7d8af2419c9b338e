//! Start/end marker placement over the accessible-cell list.

use rand_chacha::ChaCha8Rng;

use crate::types::{Cell, Pos};

use super::grid::{Grid, euclidean_distance};
use super::regions::{accessible_cells_from, find_regions};
use super::seed::random_usize;

const MIN_ENDPOINT_SEPARATION: f64 = 30.0;
const SEPARATION_RETRY_BUDGET: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EndpointPair {
    pub start: Pos,
    pub end: Pos,
}

/// Why endpoint placement left the grid without markers. Placement is never
/// retried; callers detect this through the absent start/end coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlacementFailure {
    NoRegions,
    TooFewAccessibleCells { count: usize },
}

impl std::fmt::Display for PlacementFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoRegions => write!(f, "no path regions exist on the final grid"),
            Self::TooFewAccessibleCells { count } => {
                write!(f, "only {count} accessible cell(s), need at least 2")
            }
        }
    }
}

/// Pick a start/end pair from the cells reachable out of the largest region's
/// seed and stamp them onto the grid. Both chosen cells were path before the
/// overwrite; no other cell type is ever touched.
pub fn place_endpoints(
    grid: &mut Grid,
    rng: &mut ChaCha8Rng,
) -> Result<EndpointPair, PlacementFailure> {
    let regions = find_regions(grid);
    let Some(largest) = regions.iter().max_by_key(|region| region.size) else {
        return Err(PlacementFailure::NoRegions);
    };

    let accessible = accessible_cells_from(grid, largest.seed);
    if accessible.len() < 2 {
        return Err(PlacementFailure::TooFewAccessibleCells { count: accessible.len() });
    }

    let pair = find_distant_points(&accessible, rng);
    grid.set_cell(pair.start, Cell::Start);
    grid.set_cell(pair.end, Cell::End);
    Ok(pair)
}

/// Best-effort separated pair from a visitation-ordered cell list. First try
/// one draw from the first quarter against one from the last quarter; while
/// the pair is closer than the separation threshold, retry with fully random
/// indices over the whole list, up to the retry budget. The last pair stands
/// even if the threshold was never met.
pub fn find_distant_points(cells: &[Pos], rng: &mut ChaCha8Rng) -> EndpointPair {
    debug_assert!(cells.len() >= 2);
    let quarter = (cells.len() / 4).max(1);

    let mut start_index = random_usize(rng, 0, quarter - 1);
    let mut end_index = random_usize(rng, cells.len() - quarter, cells.len() - 1);

    let mut remaining_retries = SEPARATION_RETRY_BUDGET;
    while euclidean_distance(cells[start_index], cells[end_index]) < MIN_ENDPOINT_SEPARATION
        && remaining_retries > 0
    {
        remaining_retries -= 1;
        start_index = random_usize(rng, 0, cells.len() - 1);
        end_index = random_usize(rng, 0, cells.len() - 1);
        if end_index == start_index {
            end_index = (end_index + 1) % cells.len();
        }
    }

    EndpointPair { start: cells[start_index], end: cells[end_index] }
}
