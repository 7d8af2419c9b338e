//! Plain-text map format: one line per row, one character per cell.
//!
//! `#` wall, `.` path, `S` start, `E` end, every row terminated by a line
//! break. Saved filenames carry the generating seed for traceability.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::mapgen::{GeneratedCave, Grid};
use crate::types::{Cell, Pos};

/// Why a text map could not be turned back into a grid.
#[derive(Debug)]
pub enum AsciiMapError {
    Io(io::Error),
    Empty,
    RaggedRow { line: usize, expected: usize, found: usize },
    UnknownCell { line: usize, column: usize, found: char },
}

impl fmt::Display for AsciiMapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "map I/O error: {e}"),
            Self::Empty => write!(f, "map text contains no rows"),
            Self::RaggedRow { line, expected, found } => {
                write!(f, "row {line} has {found} cells, expected {expected}")
            }
            Self::UnknownCell { line, column, found } => {
                write!(f, "unknown cell character {found:?} at line {line}, column {column}")
            }
        }
    }
}

pub fn render(grid: &Grid) -> String {
    let mut text = String::with_capacity((grid.width() + 1) * grid.height());
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            text.push(match grid.cell_at(Pos { y, x }) {
                Cell::Wall => '#',
                Cell::Path => '.',
                Cell::Start => 'S',
                Cell::End => 'E',
            });
        }
        text.push('\n');
    }
    text
}

pub fn parse(text: &str) -> Result<Grid, AsciiMapError> {
    let rows: Vec<&str> = text.lines().collect();
    if rows.is_empty() {
        return Err(AsciiMapError::Empty);
    }

    let width = rows[0].chars().count();
    if width == 0 {
        return Err(AsciiMapError::Empty);
    }

    let mut grid = Grid::filled(width, rows.len(), Cell::Wall);
    for (row_index, row) in rows.iter().enumerate() {
        let mut column_count = 0;
        for (column_index, character) in row.chars().enumerate() {
            column_count += 1;
            let cell = match character {
                '#' => Cell::Wall,
                '.' => Cell::Path,
                'S' => Cell::Start,
                'E' => Cell::End,
                other => {
                    return Err(AsciiMapError::UnknownCell {
                        line: row_index + 1,
                        column: column_index + 1,
                        found: other,
                    });
                }
            };
            grid.set_cell(Pos { y: row_index as i32, x: column_index as i32 }, cell);
        }
        if column_count != width {
            return Err(AsciiMapError::RaggedRow {
                line: row_index + 1,
                expected: width,
                found: column_count,
            });
        }
    }

    Ok(grid)
}

/// Write the cave's grid under `dir` as `cave_<seed>.txt` and return the
/// full path. The directory is created if missing.
pub fn save_to_dir(dir: &Path, cave: &GeneratedCave) -> io::Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(format!("cave_{}.txt", cave.seed));
    fs::write(&path, render(&cave.grid))?;
    Ok(path)
}

pub fn load_from_file(path: &Path) -> Result<Grid, AsciiMapError> {
    let text = fs::read_to_string(path).map_err(AsciiMapError::Io)?;
    parse(&text)
}
