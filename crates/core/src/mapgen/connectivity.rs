//! Region repair: keep the largest region, discard specks, carve corridors.

use rand_chacha::ChaCha8Rng;

use crate::types::{Cell, Pos};

use super::grid::Grid;
use super::regions::{find_regions, flood_fill_region};
use super::seed::{random_bool, random_usize};

/// One random hallway per this many grid cells.
const HALLWAY_CELL_DIVISOR: usize = 5000;
const HALLWAY_MIN_LENGTH: usize = 5;
const HALLWAY_MAX_LENGTH_EXCLUSIVE: usize = 20;

/// Reconnect the map around its largest region. Random straight hallways are
/// sprinkled first as connectivity noise not tied to any specific
/// disconnection; then undersized secondary regions are filled back to wall
/// and every surviving secondary region gets an L-shaped corridor to the main
/// region. Hallways go first so the corridor pass sees (and reconnects) any
/// region a hallway opened up.
pub fn ensure_connectivity(grid: &mut Grid, min_room_size: usize, rng: &mut ChaCha8Rng) {
    carve_random_hallways(grid, rng);

    let mut regions = find_regions(grid);
    if regions.len() <= 1 {
        return;
    }

    // Stable sort: equal-sized regions keep their scan order, so the
    // main-region choice is deterministic.
    regions.sort_by(|a, b| b.size.cmp(&a.size));
    let main_seed = regions[0].seed;

    // Discard before carving. A corridor crossing a doomed region would
    // merge it with the main region, and flood-filling it afterwards would
    // erase everything it had been merged with.
    for region in &regions[1..] {
        if region.size < min_room_size {
            flood_fill_region(grid, region.seed, Cell::Wall);
        }
    }
    for region in &regions[1..] {
        if region.size >= min_room_size {
            carve_corridor_between(grid, main_seed, region.seed);
        }
    }
}

/// L-shaped corridor: a horizontal run on the anchor's row spanning both
/// x-coordinates, then a vertical run on the branch's column spanning both
/// y-coordinates. Overwrites whatever terrain lies in between, so the two
/// endpoints always end up connected.
pub fn carve_corridor_between(grid: &mut Grid, anchor: Pos, branch: Pos) {
    carve_horizontal_run(grid, anchor.y, anchor.x.min(branch.x), anchor.x.max(branch.x));
    carve_vertical_run(grid, branch.x, anchor.y.min(branch.y), anchor.y.max(branch.y));
}

fn carve_random_hallways(grid: &mut Grid, rng: &mut ChaCha8Rng) {
    let hallway_count = grid.width() * grid.height() / HALLWAY_CELL_DIVISOR;
    for _ in 0..hallway_count {
        let anchor = Pos {
            y: random_usize(rng, 1, grid.height() - 2) as i32,
            x: random_usize(rng, 1, grid.width() - 2) as i32,
        };
        let length =
            random_usize(rng, HALLWAY_MIN_LENGTH, HALLWAY_MAX_LENGTH_EXCLUSIVE - 1) as i32;
        if random_bool(rng) {
            carve_horizontal_run(grid, anchor.y, anchor.x, anchor.x + length - 1);
        } else {
            carve_vertical_run(grid, anchor.x, anchor.y, anchor.y + length - 1);
        }
    }
}

// Runs are clipped to the interior so the border ring stays wall.

fn carve_horizontal_run(grid: &mut Grid, y: i32, from_x: i32, to_x: i32) {
    for x in from_x..=to_x {
        let pos = Pos { y, x };
        if grid.is_interior(pos) {
            grid.set_cell(pos, Cell::Path);
        }
    }
}

fn carve_vertical_run(grid: &mut Grid, x: i32, from_y: i32, to_y: i32) {
    for y in from_y..=to_y {
        let pos = Pos { y, x };
        if grid.is_interior(pos) {
            grid.set_cell(pos, Cell::Path);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::rand_core::SeedableRng;

    use crate::ascii;

    use super::super::regions::accessible_cells_from;
    use super::*;

    #[test]
    fn corridor_connects_two_seeds_through_solid_wall() {
        let mut grid = Grid::filled(12, 12, Cell::Wall);
        let anchor = Pos { y: 2, x: 2 };
        let branch = Pos { y: 9, x: 9 };
        grid.set_cell(anchor, Cell::Path);
        grid.set_cell(branch, Cell::Path);

        carve_corridor_between(&mut grid, anchor, branch);

        let reachable = accessible_cells_from(&grid, anchor);
        assert!(reachable.contains(&branch), "branch seed should be reachable after carving");
    }

    #[test]
    fn undersized_regions_are_filled_back_to_wall() {
        let mut grid = ascii::parse(concat!(
            "##########\n",
            "#....##.##\n",
            "#....##.##\n",
            "#....#####\n",
            "##########\n",
        ))
        .expect("map should parse");

        let mut rng = ChaCha8Rng::seed_from_u64(5);
        ensure_connectivity(&mut grid, 4, &mut rng);

        // The 2-cell region fell below min_room_size and was discarded.
        assert_eq!(grid.cell_at(Pos { y: 1, x: 7 }), Cell::Wall);
        assert_eq!(grid.cell_at(Pos { y: 2, x: 7 }), Cell::Wall);
        assert_eq!(find_regions(&grid).len(), 1);
    }

    #[test]
    fn surviving_regions_become_reachable_from_the_main_region() {
        let mut grid = ascii::parse(concat!(
            "############\n",
            "#.....##...#\n",
            "#.....##...#\n",
            "#.....##...#\n",
            "############\n",
        ))
        .expect("map should parse");

        let mut rng = ChaCha8Rng::seed_from_u64(11);
        ensure_connectivity(&mut grid, 3, &mut rng);

        let regions = find_regions(&grid);
        assert_eq!(regions.len(), 1, "both rooms should merge into one region");
    }

    #[test]
    fn small_grids_get_no_random_hallways() {
        // 12x12 = 144 cells, well under the divisor: the hallway pass must
        // consume no randomness and carve nothing.
        let mut grid = Grid::filled(12, 12, Cell::Wall);
        grid.set_cell(Pos { y: 5, x: 5 }, Cell::Path);
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        ensure_connectivity(&mut grid, 1, &mut rng);
        assert_eq!(grid.interior_walkable_count(), 1);
    }

    #[test]
    fn border_stays_sealed_after_repair() {
        let mut grid = Grid::filled(80, 80, Cell::Path);
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        ensure_connectivity(&mut grid, 5, &mut rng);
        for x in 0..80 {
            assert_eq!(grid.cell_at(Pos { y: 0, x }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: 79, x }), Cell::Wall);
        }
    }
}
