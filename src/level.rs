//! Row-based text level format
//!
//! Each line is a grid row, each character a cell:
//!
//! | char | tile |
//! |------|------|
//! | `T` | flat block |
//! | `R` `L` | 45° rising right / left |
//! | `s` `l` | 22.5° rising right, lower / upper |
//! | `p` `o` | 22.5° rising left, lower / upper |
//! | `1` `2` `3` `4` | 11.25° rising right, bottom to top |
//! | `$` `#` `@` `!` | 11.25° rising left, bottom to top |
//!
//! Anything else is empty space. Rows may differ in length; the grid is as
//! wide as the longest one.

use std::collections::BTreeSet;
use std::path::Path;

use glam::Vec2;
use thiserror::Error;

use crate::sim::{Grid, TileKind};

/// Character written for empty cells by [`level_to_text`]
pub const EMPTY_SYMBOL: char = '.';

/// Errors from loading a level file
#[derive(Debug, Error)]
pub enum LevelError {
    #[error("failed to read level {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Build a grid from level text. Never fails; unknown symbols become empty cells.
pub fn parse_level(text: &str, cell_size: Vec2) -> Grid {
    let rows: Vec<&str> = text
        .lines()
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect();
    let cols = rows.iter().map(|r| r.chars().count()).max().unwrap_or(0);

    let mut grid = Grid::new(rows.len(), cols, cell_size);
    let mut unknown = BTreeSet::new();

    for (row, line) in rows.iter().enumerate() {
        for (col, symbol) in line.chars().enumerate() {
            match TileKind::from_symbol(symbol) {
                Some(kind) => grid.place(row, col, kind),
                None if symbol != EMPTY_SYMBOL && symbol != ' ' => {
                    unknown.insert(symbol);
                }
                None => {}
            }
        }
    }

    for symbol in &unknown {
        log::debug!("Unrecognised level symbol {:?} treated as empty", symbol);
    }
    log::info!(
        "Parsed level: {}x{} cells, {} tiles",
        grid.cols(),
        grid.rows(),
        grid.tile_count()
    );
    grid
}

/// Read and parse a level file
pub fn load_level(path: impl AsRef<Path>, cell_size: Vec2) -> Result<Grid, LevelError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| LevelError::Io {
        path: path.display().to_string(),
        source,
    })?;
    Ok(parse_level(&text, cell_size))
}

/// Write a grid back out in the level format
pub fn level_to_text(grid: &Grid) -> String {
    let mut text = String::with_capacity(grid.rows() * (grid.cols() + 1));
    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let symbol = grid
                .cell(row as i64, col as i64)
                .map(|tile| tile.kind.symbol())
                .unwrap_or(EMPTY_SYMBOL);
            text.push(symbol);
        }
        text.push('\n');
    }
    text
}
