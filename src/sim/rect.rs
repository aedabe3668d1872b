//! Axis-aligned rectangle geometry for hitboxes
//!
//! World space is screen-style: x grows right, y grows down. A rectangle is
//! defined by:
//! - min: top-left corner
//! - size: width and height (both non-negative)

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    /// Rectangle covered by grid cell (row, col)
    pub fn from_cell(row: usize, col: usize, cell: Vec2) -> Self {
        Self {
            min: Vec2::new(col as f32 * cell.x, row as f32 * cell.y),
            size: cell,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Overlap test requiring positive area on both axes.
    ///
    /// Rectangles that only share an edge or a corner do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Half-open containment: left/top edges inside, right/bottom edges outside
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn square(x: f32, y: f32, side: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::splat(side))
    }

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::new(32.0, 48.0));
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 42.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 68.0);
        assert_eq!(r.center(), Vec2::new(26.0, 44.0));
    }

    #[test]
    fn test_from_cell() {
        let r = Rect::from_cell(2, 3, Vec2::splat(32.0));
        assert_eq!(r.min, Vec2::new(96.0, 64.0));
        assert_eq!(r.size, Vec2::splat(32.0));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = square(0.0, 0.0, 32.0);
        assert!(!a.intersects(&square(32.0, 0.0, 32.0)));
        assert!(!a.intersects(&square(0.0, 32.0, 32.0)));
        assert!(!a.intersects(&square(32.0, 32.0, 32.0)));
        assert!(!a.intersects(&square(-32.0, 0.0, 32.0)));
    }

    #[test]
    fn test_positive_overlap_intersects() {
        let a = square(0.0, 0.0, 32.0);
        assert!(a.intersects(&square(31.5, 31.5, 32.0)));
        assert!(a.intersects(&square(8.0, 8.0, 4.0)));
        assert!(a.intersects(&a));
    }

    #[test]
    fn test_contains_point_half_open() {
        let a = square(0.0, 0.0, 32.0);
        assert!(a.contains_point(Vec2::ZERO));
        assert!(a.contains_point(Vec2::new(31.9, 31.9)));
        assert!(!a.contains_point(Vec2::new(32.0, 10.0)));
        assert!(!a.contains_point(Vec2::new(10.0, 32.0)));
    }

    proptest! {
        #[test]
        fn intersects_is_symmetric(
            ax in -200.0f32..200.0, ay in -200.0f32..200.0,
            bx in -200.0f32..200.0, by in -200.0f32..200.0,
            aw in 1.0f32..64.0, bw in 1.0f32..64.0,
        ) {
            let a = square(ax, ay, aw);
            let b = square(bx, by, bw);
            prop_assert_eq!(a.intersects(&b), b.intersects(&a));
        }

        #[test]
        fn shared_vertical_edge_never_intersects(
            x in -500i32..500, y in -500i32..500, dy in -31i32..31,
        ) {
            let a = square(x as f32, y as f32, 32.0);
            let b = square(x as f32 + 32.0, (y + dy) as f32, 32.0);
            prop_assert!(!a.intersects(&b));
        }

        #[test]
        fn overlap_with_positive_area_intersects(
            x in -500i32..500, y in -500i32..500,
            dx in 1i32..32, dy in 1i32..32,
        ) {
            let a = square(x as f32, y as f32, 32.0);
            let b = square((x + dx) as f32, (y + dy) as f32, 32.0);
            prop_assert!(a.intersects(&b));
        }
    }
}
