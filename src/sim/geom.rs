//! Axis-aligned geometry utilities
//!
//! Everything in the simulation is a rectangle or a circle; these are the
//! only overlap tests either game needs.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Overlapping region of two rectangles, if it has positive area on
    /// both axes. Touching along an edge or at a corner is not an
    /// intersection.
    pub fn intersect(&self, other: &Rect) -> Option<Rect> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());
        if x2 > x && y2 > y {
            Some(Rect::new(x, y, x2 - x, y2 - y))
        } else {
            None
        }
    }

    /// Point containment, inclusive on all four boundaries.
    pub fn contains_point(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.right() && py >= self.y && py <= self.bottom()
    }
}

/// Circle-vs-rectangle overlap, tested axis-separated with the circle's
/// bounding square. Deliberately not a true circular distance check: block
/// collision timing depends on this exact behavior, so a corner graze that
/// a distance test would miss still counts as a hit.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.x
        && center.x - radius < rect.right()
        && center.y + radius > rect.y
        && center.y - radius < rect.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intersect_overlapping() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        let inter = a.intersect(&b).unwrap();
        assert_eq!(inter, Rect::new(5.0, 5.0, 5.0, 5.0));
    }

    #[test]
    fn test_intersect_edge_touch_is_none() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        // Shares the x=10 edge: zero-area overlap, not an intersection
        let b = Rect::new(10.0, 0.0, 10.0, 10.0);
        assert!(a.intersect(&b).is_none());
        // Corner touch
        let c = Rect::new(10.0, 10.0, 5.0, 5.0);
        assert!(a.intersect(&c).is_none());
    }

    #[test]
    fn test_contains_point_inclusive_boundaries() {
        let r = Rect::new(2.0, 3.0, 4.0, 5.0);
        assert!(r.contains_point(2.0, 3.0));
        assert!(r.contains_point(6.0, 8.0));
        assert!(r.contains_point(4.0, 5.0));
        assert!(!r.contains_point(1.99, 5.0));
        assert!(!r.contains_point(6.01, 5.0));
    }

    #[test]
    fn test_circle_rect_bounding_square_corner() {
        let r = Rect::new(10.0, 10.0, 10.0, 10.0);
        // Center diagonally off the corner: the bounding square overlaps
        // even though the true circular distance (~5.66) exceeds the radius.
        let center = Vec2::new(6.0, 6.0);
        assert!(circle_overlaps_rect(center, 5.0, &r));
        assert!(!circle_overlaps_rect(center, 3.9, &r));
    }

    #[test]
    fn test_circle_rect_clear_miss() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!circle_overlaps_rect(Vec2::new(30.0, 5.0), 5.0, &r));
    }
}
