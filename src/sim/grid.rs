//! Dense tile grid with world <-> cell index mapping
//!
//! Cells are stored in row-major order: index = row * cols + col.
//! Cell (row, col) covers `[col*W, (col+1)*W) x [row*H, (row+1)*H)`.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use super::tile::{Tile, TileKind};

/// Grid axis for index mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal, maps to columns
    X,
    /// Vertical, maps to rows
    Y,
}

/// Errors from rebuilding a grid out of serialized data
#[derive(Debug, Error)]
pub enum GridError {
    #[error("grid of {rows}x{cols} needs {expected} cells, got {found}")]
    CellCount {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },
}

/// Fixed-extent grid of optional tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "GridData", into = "GridData")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cell_size: Vec2,
    cells: Vec<Option<Tile>>,
}

/// Wire form of [`Grid`]. Only tile kinds are stored; hitboxes are
/// re-derived from the cell indices on load.
#[derive(Serialize, Deserialize)]
struct GridData {
    rows: usize,
    cols: usize,
    cell_size: Vec2,
    cells: Vec<Option<TileKind>>,
}

impl TryFrom<GridData> for Grid {
    type Error = GridError;

    fn try_from(data: GridData) -> Result<Self, Self::Error> {
        let expected = data.rows.checked_mul(data.cols);
        if expected != Some(data.cells.len()) {
            return Err(GridError::CellCount {
                rows: data.rows,
                cols: data.cols,
                expected: expected.unwrap_or(usize::MAX),
                found: data.cells.len(),
            });
        }
        let mut grid = Grid::new(data.rows, data.cols, data.cell_size);
        for (i, kind) in data.cells.into_iter().enumerate() {
            if let Some(kind) = kind {
                grid.place(i / data.cols, i % data.cols, kind);
            }
        }
        Ok(grid)
    }
}

impl From<Grid> for GridData {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cell_size: grid.cell_size,
            cells: grid.cells.into_iter().map(|c| c.map(|tile| tile.kind)).collect(),
        }
    }
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize, cell_size: Vec2) -> Self {
        Self {
            rows,
            cols,
            cell_size,
            cells: vec![None; rows * cols],
        }
    }

    /// Put a tile of `kind` into cell (row, col).
    ///
    /// The hitbox is derived from the indices. Out-of-range cells are ignored.
    pub fn place(&mut self, row: usize, col: usize, kind: TileKind) {
        if row >= self.rows || col >= self.cols {
            log::warn!(
                "Ignoring tile at ({}, {}) outside {}x{} grid",
                row,
                col,
                self.rows,
                self.cols
            );
            return;
        }
        let hitbox = Rect::from_cell(row, col, self.cell_size);
        self.cells[row * self.cols + col] = Some(Tile { kind, hitbox });
    }

    /// Builder-style `place`
    pub fn with_tile(mut self, row: usize, col: usize, kind: TileKind) -> Self {
        self.place(row, col, kind);
        self
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn cell_size(&self) -> Vec2 {
        self.cell_size
    }

    /// Cell index containing `coordinate` along `axis`: `floor(coordinate / cell)`
    #[inline]
    pub fn cell_index(&self, coordinate: f32, axis: Axis) -> i64 {
        let cell = match axis {
            Axis::X => self.cell_size.x,
            Axis::Y => self.cell_size.y,
        };
        (coordinate / cell).floor() as i64
    }

    /// Tile stored at (row, col). Indices outside the grid read as empty.
    pub fn cell(&self, row: i64, col: i64) -> Option<&Tile> {
        if row < 0 || col < 0 || row >= self.rows as i64 || col >= self.cols as i64 {
            return None;
        }
        self.cells[row as usize * self.cols + col as usize].as_ref()
    }

    /// Tile whose cell contains the world-space point
    pub fn tile_at(&self, point: Vec2) -> Option<&Tile> {
        self.cell(
            self.cell_index(point.y, Axis::Y),
            self.cell_index(point.x, Axis::X),
        )
    }

    /// Tile at (row, col) if its hitbox overlaps `hitbox` with positive area
    pub fn test_intersection(&self, row: i64, col: i64, hitbox: &Rect) -> Option<Tile> {
        self.cell(row, col)
            .filter(|tile| tile.hitbox.intersects(hitbox))
            .copied()
    }

    /// Probe the cell under a sample point against a hitbox
    pub fn probe(&self, point: Vec2, hitbox: &Rect) -> Option<Tile> {
        self.test_intersection(
            self.cell_index(point.y, Axis::Y),
            self.cell_index(point.x, Axis::X),
            hitbox,
        )
    }

    /// All solid cells as (row, col, tile), row-major
    pub fn tiles(&self) -> impl Iterator<Item = (usize, usize, &Tile)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, cell)| cell.as_ref().map(|tile| (i / cols, i % cols, tile)))
    }

    /// World-space bounds of the grid
    pub fn bounds(&self) -> Rect {
        Rect::new(
            Vec2::ZERO,
            Vec2::new(
                self.cols as f32 * self.cell_size.x,
                self.rows as f32 * self.cell_size.y,
            ),
        )
    }

    /// Count of non-empty cells
    pub fn tile_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}
