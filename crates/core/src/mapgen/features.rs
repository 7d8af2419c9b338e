//! Optional room and chamber stamping, plus the guaranteed fallback layout.

use rand_chacha::ChaCha8Rng;

use crate::types::{Cell, Pos};

use super::connectivity::carve_corridor_between;
use super::grid::Grid;
use super::seed::random_usize;

/// Stamp `count` rectangular rooms at random interior positions. Room
/// dimensions are drawn from `size_range` (inclusive) and clamped so every
/// rectangle fits strictly inside the border ring. Carving is unconditional
/// and may punch through walls; disconnected pockets this creates are caught
/// by the orchestrator's floor validation, not re-repaired here.
pub fn carve_rooms(
    grid: &mut Grid,
    count: usize,
    size_range: (usize, usize),
    rng: &mut ChaCha8Rng,
) {
    for _ in 0..count {
        let room_width = random_usize(rng, size_range.0, size_range.1).min(grid.width() - 2);
        let room_height = random_usize(rng, size_range.0, size_range.1).min(grid.height() - 2);
        let left = random_usize(rng, 1, grid.width() - 1 - room_width);
        let top = random_usize(rng, 1, grid.height() - 1 - room_height);
        carve_rect(grid, top, left, room_width, room_height);
    }
}

/// Stamp `count` circular chambers. The radius is drawn from `radius_range`
/// and clamped so the full disc stays inside the interior.
pub fn carve_chambers(
    grid: &mut Grid,
    count: usize,
    radius_range: (usize, usize),
    rng: &mut ChaCha8Rng,
) {
    let max_fitting_radius = (grid.width().min(grid.height()) - 3) / 2;
    for _ in 0..count {
        let radius = random_usize(rng, radius_range.0, radius_range.1).min(max_fitting_radius);
        let center = Pos {
            y: random_usize(rng, 1 + radius, grid.height() - 2 - radius) as i32,
            x: random_usize(rng, 1 + radius, grid.width() - 2 - radius) as i32,
        };
        carve_circle(grid, center, radius);
    }
}

/// Last-resort carve after every generation attempt failed validation: one
/// large central chamber, four smaller rectangles around it, and a corridor
/// from each rectangle back to the center. Guarantees nonzero floor space
/// without re-running validation.
pub fn carve_fallback_layout(grid: &mut Grid, rng: &mut ChaCha8Rng) {
    let center = Pos { y: grid.height() as i32 / 2, x: grid.width() as i32 / 2 };
    let max_fitting_radius = (grid.width().min(grid.height()) - 3) / 2;
    let radius = (grid.width().min(grid.height()) / 4).max(3).min(max_fitting_radius);
    carve_circle(grid, center, radius);

    let quarter_x = grid.width() / 4;
    let quarter_y = grid.height() / 4;
    let satellite_centers = [
        Pos { y: quarter_y as i32, x: quarter_x as i32 },
        Pos { y: quarter_y as i32, x: (grid.width() - 1 - quarter_x) as i32 },
        Pos { y: (grid.height() - 1 - quarter_y) as i32, x: quarter_x as i32 },
        Pos { y: (grid.height() - 1 - quarter_y) as i32, x: (grid.width() - 1 - quarter_x) as i32 },
    ];

    for satellite in satellite_centers {
        let side = random_usize(rng, 3, 5);
        let half = side as i32 / 2;
        let top = (satellite.y - half).clamp(1, grid.height() as i32 - 1 - side as i32);
        let left = (satellite.x - half).clamp(1, grid.width() as i32 - 1 - side as i32);
        carve_rect(grid, top as usize, left as usize, side, side);
        carve_corridor_between(grid, center, satellite);
    }
}

fn carve_rect(grid: &mut Grid, top: usize, left: usize, width: usize, height: usize) {
    for y in top..(top + height) {
        for x in left..(left + width) {
            let pos = Pos { y: y as i32, x: x as i32 };
            if grid.is_interior(pos) {
                grid.set_cell(pos, Cell::Path);
            }
        }
    }
}

fn carve_circle(grid: &mut Grid, center: Pos, radius: usize) {
    let radius = radius as i32;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let pos = Pos { y: center.y + dy, x: center.x + dx };
            if grid.is_interior(pos) {
                grid.set_cell(pos, Cell::Path);
            }
        }
    }
}
