//! Stochastic initial fill of the raw cave grid.

use rand_chacha::ChaCha8Rng;

use crate::types::{Cell, Pos};

use super::grid::Grid;
use super::seed::random_unit;

/// Allocate a grid with a sealed wall border and fill the interior cell by
/// cell in row-major order: one uniform draw per cell, wall when the draw is
/// below `fill_probability`.
pub fn fill_random(
    width: usize,
    height: usize,
    fill_probability: f64,
    rng: &mut ChaCha8Rng,
) -> Grid {
    let mut grid = Grid::filled(width, height, Cell::Wall);
    for y in 1..(height - 1) {
        for x in 1..(width - 1) {
            let cell =
                if random_unit(rng) < fill_probability { Cell::Wall } else { Cell::Path };
            grid.set_cell(Pos { y: y as i32, x: x as i32 }, cell);
        }
    }
    grid
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use super::*;

    #[test]
    fn zero_probability_leaves_the_whole_interior_open() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = fill_random(16, 12, 0.0, &mut rng);
        for y in 1..11 {
            for x in 1..15 {
                assert_eq!(grid.cell_at(Pos { y, x }), Cell::Path);
            }
        }
    }

    #[test]
    fn full_probability_produces_a_solid_grid() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let grid = fill_random(16, 12, 1.0, &mut rng);
        assert_eq!(grid.interior_walkable_count(), 0);
    }

    #[test]
    fn same_seed_fills_identically() {
        let mut rng_a = ChaCha8Rng::seed_from_u64(42);
        let mut rng_b = ChaCha8Rng::seed_from_u64(42);
        let grid_a = fill_random(32, 24, 0.45, &mut rng_a);
        let grid_b = fill_random(32, 24, 0.45, &mut rng_b);
        assert_eq!(grid_a, grid_b);
    }

    #[test]
    fn border_is_wall_regardless_of_probability() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let grid = fill_random(20, 14, 0.0, &mut rng);
        for x in 0..20 {
            assert_eq!(grid.cell_at(Pos { y: 0, x }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: 13, x }), Cell::Wall);
        }
    }
}
