//! Tile model: flat blocks and slope segments

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::slope::SlopeVariant;

/// What a solid cell is made of
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TileKind {
    #[default]
    Flat,
    Slope(SlopeVariant),
}

impl TileKind {
    /// Level-file character for this kind
    pub fn symbol(self) -> char {
        match self {
            TileKind::Flat => 'T',
            TileKind::Slope(variant) => variant.symbol(),
        }
    }

    /// Parse a level-file character; `None` means an empty cell
    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'T' => Some(TileKind::Flat),
            other => SlopeVariant::from_symbol(other).map(TileKind::Slope),
        }
    }
}

/// A solid grid cell. Immutable once the grid is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    /// Always the rectangle of the cell that holds the tile
    pub hitbox: Rect,
}

impl Tile {
    pub fn is_slope(&self) -> bool {
        matches!(self.kind, TileKind::Slope(_))
    }

    pub fn slope(&self) -> Option<SlopeVariant> {
        match self.kind {
            TileKind::Slope(variant) => Some(variant),
            TileKind::Flat => None,
        }
    }

    /// World-space y of the slope surface at world x, `None` for flat tiles
    pub fn surface_y(&self, x: f32) -> Option<f32> {
        let variant = self.slope()?;
        let dx = x - self.hitbox.left();
        Some(self.hitbox.bottom() - variant.height(dx, self.hitbox.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_kind_symbols() {
        assert_eq!(TileKind::from_symbol('T'), Some(TileKind::Flat));
        assert_eq!(
            TileKind::from_symbol('R'),
            Some(TileKind::Slope(SlopeVariant::Right45))
        );
        assert_eq!(
            TileKind::from_symbol('#'),
            Some(TileKind::Slope(SlopeVariant::Left11b))
        );
        assert_eq!(TileKind::from_symbol('.'), None);
        assert_eq!(TileKind::from_symbol(' '), None);
        assert_eq!(TileKind::Flat.symbol(), 'T');
    }

    #[test]
    fn test_surface_y() {
        let hitbox = Rect::from_cell(1, 0, Vec2::splat(32.0));
        let slope = Tile {
            kind: TileKind::Slope(SlopeVariant::Right45),
            hitbox,
        };
        // Bottom at 64, height 16 at the tile's middle
        assert_eq!(slope.surface_y(16.0), Some(48.0));
        assert!(slope.is_slope());

        let flat = Tile {
            kind: TileKind::Flat,
            hitbox,
        };
        assert_eq!(flat.surface_y(16.0), None);
        assert!(!flat.is_slope());
        assert_eq!(flat.slope(), None);
    }
}
