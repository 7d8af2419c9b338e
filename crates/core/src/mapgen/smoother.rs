//! Birth/death-limit cellular automaton smoothing passes.

use crate::types::{Cell, Pos};

use super::grid::{Grid, all_neighbors};
use super::params::GenerationParameters;

/// Transition rule inputs for one smoothing pass. Limits are `f64` because
/// weighted scoring produces fractional neighbor sums.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SmoothingRules {
    pub birth_limit: f64,
    pub death_limit: f64,
    pub weighted: bool,
    pub cardinal_weight: f64,
    pub diagonal_weight: f64,
}

impl SmoothingRules {
    pub fn from_params(params: &GenerationParameters) -> Self {
        Self {
            birth_limit: params.birth_limit,
            death_limit: params.death_limit,
            weighted: params.use_weighted_smoothing,
            cardinal_weight: params.cardinal_weight,
            diagonal_weight: params.diagonal_weight,
        }
    }
}

/// One automaton pass over the whole grid, producing a new grid of the same
/// dimensions with the border forced to wall. Iterating is the caller's
/// concern: the pass count is a tunable blur strength, not a fixed point.
pub fn smooth(grid: &Grid, rules: &SmoothingRules) -> Grid {
    let mut next = Grid::filled(grid.width(), grid.height(), Cell::Wall);
    for y in 1..(grid.height() as i32 - 1) {
        for x in 1..(grid.width() as i32 - 1) {
            let pos = Pos { y, x };
            let score = neighbor_wall_score(grid, pos, rules);
            let cell = match grid.cell_at(pos) {
                Cell::Wall => {
                    if score >= rules.death_limit {
                        Cell::Wall
                    } else {
                        Cell::Path
                    }
                }
                _ => {
                    if score > rules.birth_limit {
                        Cell::Wall
                    } else {
                        Cell::Path
                    }
                }
            };
            next.set_cell(pos, cell);
        }
    }
    next
}

/// Weighted or plain count of the eight surrounding wall cells. Out-of-grid
/// neighbors read as wall, which only matters for cells hugging the border.
fn neighbor_wall_score(grid: &Grid, pos: Pos, rules: &SmoothingRules) -> f64 {
    let mut score = 0.0;
    for (index, neighbor) in all_neighbors(pos).into_iter().enumerate() {
        if grid.cell_at(neighbor) != Cell::Wall {
            continue;
        }
        score += if !rules.weighted {
            1.0
        } else if index < 4 {
            rules.cardinal_weight
        } else {
            rules.diagonal_weight
        };
    }
    score
}
