//! Connected-region discovery over walkable cells (4-connectivity).

use std::collections::VecDeque;

use crate::types::{Cell, Pos};

use super::grid::{Grid, orthogonal_neighbors};

/// One maximal 4-connected set of path cells. The seed is the first cell the
/// row-major scan visited; member coordinates are deliberately not tracked,
/// the repair step only needs seed and size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Region {
    pub seed: Pos,
    pub size: usize,
}

/// Scan interior cells in row-major order and flood-fill each unvisited path
/// cell into a region. The sum of all returned sizes equals the interior
/// path-cell count.
pub fn find_regions(grid: &Grid) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for y in 1..(grid.height() as i32 - 1) {
        for x in 1..(grid.width() as i32 - 1) {
            let seed = Pos { y, x };
            if visited[cell_index(grid, seed)] || grid.cell_at(seed) != Cell::Path {
                continue;
            }
            let size = flood_count(grid, seed, &mut visited);
            regions.push(Region { seed, size });
        }
    }

    regions
}

/// All path cells reachable from `seed` through 4-connected moves, in BFS
/// visitation order. Used for endpoint placement, where order matters: early
/// entries cluster near the seed, late entries near the frontier.
pub fn accessible_cells_from(grid: &Grid, seed: Pos) -> Vec<Pos> {
    if grid.cell_at(seed) != Cell::Path || !grid.is_interior(seed) {
        return Vec::new();
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    visited[cell_index(grid, seed)] = true;
    let mut open = VecDeque::from([seed]);
    let mut cells = Vec::new();

    while let Some(pos) = open.pop_front() {
        cells.push(pos);
        for neighbor in orthogonal_neighbors(pos) {
            if !grid.is_interior(neighbor)
                || grid.cell_at(neighbor) != Cell::Path
                || visited[cell_index(grid, neighbor)]
            {
                continue;
            }
            visited[cell_index(grid, neighbor)] = true;
            open.push_back(neighbor);
        }
    }

    cells
}

/// Overwrite the whole 4-connected region containing `seed` with
/// `replacement`. Used to discard undersized regions during repair.
pub fn flood_fill_region(grid: &mut Grid, seed: Pos, replacement: Cell) {
    let target = grid.cell_at(seed);
    if target == replacement || !grid.is_interior(seed) {
        return;
    }

    let mut open = VecDeque::from([seed]);
    grid.set_cell(seed, replacement);

    while let Some(pos) = open.pop_front() {
        for neighbor in orthogonal_neighbors(pos) {
            if !grid.is_interior(neighbor) || grid.cell_at(neighbor) != target {
                continue;
            }
            grid.set_cell(neighbor, replacement);
            open.push_back(neighbor);
        }
    }
}

fn flood_count(grid: &Grid, seed: Pos, visited: &mut [bool]) -> usize {
    visited[cell_index(grid, seed)] = true;
    let mut open = VecDeque::from([seed]);
    let mut size = 0;

    while let Some(pos) = open.pop_front() {
        size += 1;
        for neighbor in orthogonal_neighbors(pos) {
            if !grid.is_interior(neighbor)
                || grid.cell_at(neighbor) != Cell::Path
                || visited[cell_index(grid, neighbor)]
            {
                continue;
            }
            visited[cell_index(grid, neighbor)] = true;
            open.push_back(neighbor);
        }
    }

    size
}

fn cell_index(grid: &Grid, pos: Pos) -> usize {
    (pos.y as usize) * grid.width() + (pos.x as usize)
}
