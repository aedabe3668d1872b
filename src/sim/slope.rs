//! Slope variants and their surface height table
//!
//! Ramps come in three angle families. Gentler families span several tiles,
//! one segment per tile, so a 22.5° ramp is two tiles long and an 11.25° ramp
//! is four. Segment `a` is always the lowest tile of its ramp:
//!
//! ```text
//! rising right:  R    s l    1 2 3 4
//! rising left:   L    o p    ! @ # $   (read left to right: high -> low)
//! ```
//!
//! The variant, not the tile's grid position, decides which segment formula
//! applies, so levels must lay out complete sequences for a continuous ramp.

use serde::{Deserialize, Serialize};

/// One of the 14 supported ramp segments (2 + 4 + 8 across the three families)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlopeVariant {
    /// 45°, rises to the right
    Right45,
    /// 45°, rises to the left
    Left45,
    /// 22.5°, rising right, lower half
    Right22a,
    /// 22.5°, rising right, upper half
    Right22b,
    /// 22.5°, rising left, lower half
    Left22a,
    /// 22.5°, rising left, upper half
    Left22b,
    /// 11.25°, rising right, quarters from the bottom
    Right11a,
    Right11b,
    Right11c,
    Right11d,
    /// 11.25°, rising left, quarters from the bottom
    Left11a,
    Left11b,
    Left11c,
    Left11d,
}

impl SlopeVariant {
    pub const ALL: [SlopeVariant; 14] = [
        SlopeVariant::Right45,
        SlopeVariant::Left45,
        SlopeVariant::Right22a,
        SlopeVariant::Right22b,
        SlopeVariant::Left22a,
        SlopeVariant::Left22b,
        SlopeVariant::Right11a,
        SlopeVariant::Right11b,
        SlopeVariant::Right11c,
        SlopeVariant::Right11d,
        SlopeVariant::Left11a,
        SlopeVariant::Left11b,
        SlopeVariant::Left11c,
        SlopeVariant::Left11d,
    ];

    /// Surface height above the tile's bottom edge.
    ///
    /// `dx` is the horizontal offset of the probe from the tile's left edge,
    /// normally in `[0, cell_width)`. `h` is the tile height.
    pub fn height(self, dx: f32, h: f32) -> f32 {
        match self {
            // 45 degrees
            SlopeVariant::Right45 => dx,
            SlopeVariant::Left45 => h - dx,
            // 22.5 degrees
            SlopeVariant::Right22a => dx / 2.0,
            SlopeVariant::Right22b => (h + dx) / 2.0,
            SlopeVariant::Left22a => h - (h + dx) / 2.0,
            SlopeVariant::Left22b => h - dx / 2.0,
            // 11.25 degrees
            SlopeVariant::Right11a => dx / 4.0,
            SlopeVariant::Right11b => (h + dx) / 4.0,
            SlopeVariant::Right11c => dx / 4.0 + h / 2.0,
            SlopeVariant::Right11d => (h + dx) / 4.0 + h / 2.0,
            SlopeVariant::Left11a => h - ((h + dx) / 4.0 + h / 2.0),
            SlopeVariant::Left11b => h - (dx / 4.0 + h / 2.0),
            SlopeVariant::Left11c => h - (h + dx) / 4.0,
            SlopeVariant::Left11d => h - dx / 4.0,
        }
    }

    /// Signed rise over run; positive when the surface climbs to the right
    pub fn gradient(self) -> f32 {
        match self {
            SlopeVariant::Right45 => 1.0,
            SlopeVariant::Left45 => -1.0,
            SlopeVariant::Right22a | SlopeVariant::Right22b => 0.5,
            SlopeVariant::Left22a | SlopeVariant::Left22b => -0.5,
            SlopeVariant::Right11a
            | SlopeVariant::Right11b
            | SlopeVariant::Right11c
            | SlopeVariant::Right11d => 0.25,
            SlopeVariant::Left11a
            | SlopeVariant::Left11b
            | SlopeVariant::Left11c
            | SlopeVariant::Left11d => -0.25,
        }
    }

    /// Family name angle in degrees (45, 22.5 or 11.25).
    ///
    /// Halving the gradient is named as halving the angle; the true incline of
    /// the gentler families is `gradient().atan()`.
    pub fn angle_degrees(self) -> f32 {
        45.0 * self.gradient().abs()
    }

    /// Level-file character for this variant
    pub fn symbol(self) -> char {
        match self {
            SlopeVariant::Right45 => 'R',
            SlopeVariant::Left45 => 'L',
            SlopeVariant::Right22a => 's',
            SlopeVariant::Right22b => 'l',
            SlopeVariant::Left22a => 'p',
            SlopeVariant::Left22b => 'o',
            SlopeVariant::Right11a => '1',
            SlopeVariant::Right11b => '2',
            SlopeVariant::Right11c => '3',
            SlopeVariant::Right11d => '4',
            SlopeVariant::Left11a => '$',
            SlopeVariant::Left11b => '#',
            SlopeVariant::Left11c => '@',
            SlopeVariant::Left11d => '!',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'R' => Some(SlopeVariant::Right45),
            'L' => Some(SlopeVariant::Left45),
            's' => Some(SlopeVariant::Right22a),
            'l' => Some(SlopeVariant::Right22b),
            'p' => Some(SlopeVariant::Left22a),
            'o' => Some(SlopeVariant::Left22b),
            '1' => Some(SlopeVariant::Right11a),
            '2' => Some(SlopeVariant::Right11b),
            '3' => Some(SlopeVariant::Right11c),
            '4' => Some(SlopeVariant::Right11d),
            '$' => Some(SlopeVariant::Left11a),
            '#' => Some(SlopeVariant::Left11b),
            '@' => Some(SlopeVariant::Left11c),
            '!' => Some(SlopeVariant::Left11d),
            _ => None,
        }
    }
}
