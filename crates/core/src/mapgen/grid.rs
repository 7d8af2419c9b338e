//! Dense cell grid with a permanently sealed wall border.

use crate::types::{Cell, Pos};

/// Row-major `width x height` cell array. Every public mutation path in this
/// crate preserves the invariant that the outer ring stays [`Cell::Wall`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn filled(width: usize, height: usize, cell: Cell) -> Self {
        let mut grid = Self { width, height, cells: vec![cell; width * height] };
        grid.seal_border();
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// True for cells strictly inside the permanent wall ring.
    pub fn is_interior(&self, pos: Pos) -> bool {
        pos.x >= 1
            && pos.y >= 1
            && (pos.x as usize) < self.width - 1
            && (pos.y as usize) < self.height - 1
    }

    /// Out-of-bounds positions read as walls, so neighbor scans need no guards.
    pub fn cell_at(&self, pos: Pos) -> Cell {
        if !self.in_bounds(pos) {
            return Cell::Wall;
        }
        self.cells[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub fn set_cell(&mut self, pos: Pos, cell: Cell) {
        debug_assert!(self.in_bounds(pos), "set_cell out of bounds: {pos:?}");
        self.cells[(pos.y as usize) * self.width + (pos.x as usize)] = cell;
    }

    pub fn seal_border(&mut self) {
        for x in 0..self.width {
            self.cells[x] = Cell::Wall;
            self.cells[(self.height - 1) * self.width + x] = Cell::Wall;
        }
        for y in 0..self.height {
            self.cells[y * self.width] = Cell::Wall;
            self.cells[y * self.width + self.width - 1] = Cell::Wall;
        }
    }

    pub fn interior_cell_count(&self) -> usize {
        (self.width - 2) * (self.height - 2)
    }

    pub fn interior_walkable_count(&self) -> usize {
        let mut count = 0;
        for y in 1..(self.height - 1) {
            for x in 1..(self.width - 1) {
                if self.cells[y * self.width + x].is_walkable() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Fraction of interior cells that are walkable. The permanent border is
    /// excluded from both numerator and denominator.
    pub fn floor_percentage(&self) -> f64 {
        self.interior_walkable_count() as f64 / self.interior_cell_count() as f64
    }

    pub fn find_cell(&self, wanted: Cell) -> Option<Pos> {
        for y in 0..self.height {
            for x in 0..self.width {
                if self.cells[y * self.width + x] == wanted {
                    return Some(Pos { y: y as i32, x: x as i32 });
                }
            }
        }
        None
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                Cell::Wall => 0,
                Cell::Path => 1,
                Cell::Start => 2,
                Cell::End => 3,
            });
        }
        bytes
    }
}

/// The four orthogonal neighbors in BFS visitation order.
pub(super) fn orthogonal_neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
    ]
}

/// All eight surrounding neighbors, orthogonals first.
pub(super) fn all_neighbors(pos: Pos) -> [Pos; 8] {
    [
        Pos { y: pos.y - 1, x: pos.x },
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
        Pos { y: pos.y - 1, x: pos.x - 1 },
        Pos { y: pos.y - 1, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x - 1 },
        Pos { y: pos.y + 1, x: pos.x + 1 },
    ]
}

pub(super) fn euclidean_distance(a: Pos, b: Pos) -> f64 {
    let dx = (a.x - b.x) as f64;
    let dy = (a.y - b.y) as f64;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_grid_seals_border_even_when_filled_with_path() {
        let grid = Grid::filled(12, 9, Cell::Path);
        for x in 0..12 {
            assert_eq!(grid.cell_at(Pos { y: 0, x }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y: 8, x }), Cell::Wall);
        }
        for y in 0..9 {
            assert_eq!(grid.cell_at(Pos { y, x: 0 }), Cell::Wall);
            assert_eq!(grid.cell_at(Pos { y, x: 11 }), Cell::Wall);
        }
        assert_eq!(grid.cell_at(Pos { y: 4, x: 5 }), Cell::Path);
    }

    #[test]
    fn out_of_bounds_reads_as_wall() {
        let grid = Grid::filled(10, 10, Cell::Path);
        assert_eq!(grid.cell_at(Pos { y: -1, x: 3 }), Cell::Wall);
        assert_eq!(grid.cell_at(Pos { y: 3, x: 10 }), Cell::Wall);
    }

    #[test]
    fn floor_percentage_counts_only_interior_cells() {
        let mut grid = Grid::filled(10, 10, Cell::Wall);
        grid.set_cell(Pos { y: 1, x: 1 }, Cell::Path);
        grid.set_cell(Pos { y: 1, x: 2 }, Cell::Start);
        let expected = 2.0 / 64.0;
        assert!((grid.floor_percentage() - expected).abs() < 1e-12);
    }
}
