//! Removal of tiny wall specks left behind by smoothing.

use std::collections::VecDeque;

use crate::types::{Cell, Pos};

use super::grid::{Grid, all_neighbors};

/// Flood-fill interior wall clusters with 8-connectivity and convert every
/// cluster smaller than `max_size` entirely to path. The border ring is never
/// visited, so walls attached to it always survive.
pub fn remove_small_wall_clusters(grid: &mut Grid, max_size: usize) {
    let mut visited = vec![false; grid.width() * grid.height()];

    for y in 1..(grid.height() as i32 - 1) {
        for x in 1..(grid.width() as i32 - 1) {
            let seed = Pos { y, x };
            let seed_index = (y as usize) * grid.width() + x as usize;
            if visited[seed_index] || grid.cell_at(seed) != Cell::Wall {
                continue;
            }

            let members = collect_wall_cluster(grid, seed, &mut visited);
            if members.len() < max_size {
                for member in members {
                    grid.set_cell(member, Cell::Path);
                }
            }
        }
    }
}

fn collect_wall_cluster(grid: &Grid, seed: Pos, visited: &mut [bool]) -> Vec<Pos> {
    visited[(seed.y as usize) * grid.width() + seed.x as usize] = true;
    let mut open = VecDeque::from([seed]);
    let mut members = Vec::new();

    while let Some(pos) = open.pop_front() {
        members.push(pos);
        for neighbor in all_neighbors(pos) {
            if !grid.is_interior(neighbor) || grid.cell_at(neighbor) != Cell::Wall {
                continue;
            }
            let index = (neighbor.y as usize) * grid.width() + neighbor.x as usize;
            if visited[index] {
                continue;
            }
            visited[index] = true;
            open.push_back(neighbor);
        }
    }

    members
}

#[cfg(test)]
mod tests {
    use crate::ascii;

    use super::*;

    #[test]
    fn single_cell_specks_are_converted_to_path() {
        let mut grid = ascii::parse(concat!(
            "########\n",
            "#......#\n",
            "#..#...#\n",
            "#......#\n",
            "########\n",
        ))
        .expect("map should parse");

        remove_small_wall_clusters(&mut grid, 2);
        assert_eq!(grid.cell_at(Pos { y: 2, x: 3 }), Cell::Path);
    }

    #[test]
    fn diagonal_wall_chains_count_as_one_cluster() {
        let mut grid = ascii::parse(concat!(
            "########\n",
            "#.#....#\n",
            "#..#...#\n",
            "#...#..#\n",
            "########\n",
        ))
        .expect("map should parse");

        // Three diagonally touching walls form one 8-connected cluster of
        // size 3, which survives a threshold of 3.
        remove_small_wall_clusters(&mut grid, 3);
        assert_eq!(grid.cell_at(Pos { y: 1, x: 2 }), Cell::Wall);
        assert_eq!(grid.cell_at(Pos { y: 2, x: 3 }), Cell::Wall);
        assert_eq!(grid.cell_at(Pos { y: 3, x: 4 }), Cell::Wall);

        remove_small_wall_clusters(&mut grid, 4);
        assert_eq!(grid.cell_at(Pos { y: 1, x: 2 }), Cell::Path);
        assert_eq!(grid.cell_at(Pos { y: 2, x: 3 }), Cell::Path);
        assert_eq!(grid.cell_at(Pos { y: 3, x: 4 }), Cell::Path);
    }

    #[test]
    fn no_interior_cluster_below_threshold_remains_afterwards() {
        let mut grid = ascii::parse(concat!(
            "##########\n",
            "#.#....#.#\n",
            "#....#...#\n",
            "#.##.#...#\n",
            "#........#\n",
            "##########\n",
        ))
        .expect("map should parse");

        let threshold = 3;
        remove_small_wall_clusters(&mut grid, threshold);

        let mut visited = vec![false; grid.width() * grid.height()];
        for y in 1..(grid.height() as i32 - 1) {
            for x in 1..(grid.width() as i32 - 1) {
                let pos = Pos { y, x };
                let index = (y as usize) * grid.width() + x as usize;
                if visited[index] || grid.cell_at(pos) != Cell::Wall {
                    continue;
                }
                let members = collect_wall_cluster(&grid, pos, &mut visited);
                assert!(
                    members.len() >= threshold,
                    "cluster of size {} at {pos:?} should have been pruned",
                    members.len()
                );
            }
        }
    }

    #[test]
    fn border_walls_are_never_altered() {
        let mut grid = Grid::filled(10, 10, Cell::Path);
        remove_small_wall_clusters(&mut grid, 100);
        for x in 0..10 {
            assert_eq!(grid.cell_at(Pos { y: 0, x }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: 9, x }), Cell::Wall);
        }
    }
}
