//! Axis-aligned rectangle shared by paddles and the ball

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A colored quad ready for the render surface (screen coordinates)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub color: [f32; 4],
}

/// Rectangle described by its center and size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub center: Vec2,
    pub size: Vec2,
    pub color: [f32; 4],
}

impl Rect {
    pub fn new(center: Vec2, size: Vec2, color: [f32; 4]) -> Self {
        Self {
            center,
            size,
            color,
        }
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Strict overlap test: touching edges do not count as contact
    pub fn intersects(&self, other: &Rect) -> bool {
        let a_min = self.center - self.half_extents();
        let a_max = self.center + self.half_extents();
        let b_min = other.center - other.half_extents();
        let b_max = other.center + other.half_extents();

        a_min.x < b_max.x && a_max.x > b_min.x && a_min.y < b_max.y && a_max.y > b_min.y
    }

    /// Top and bottom edge (y grows downward)
    pub fn vertical_span(&self) -> (f32, f32) {
        let half = self.half_extents().y;
        (self.center.y - half, self.center.y + half)
    }

    /// Corner points for rendering
    pub fn corners(&self) -> Quad {
        let half = self.half_extents();
        Quad {
            x1: self.center.x - half.x,
            y1: self.center.y - half.y,
            x2: self.center.x + half.x,
            y2: self.center.y + half.y,
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x: f32, y: f32, side: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::splat(side), [1.0; 4])
    }

    #[test]
    fn test_overlapping_rects_intersect() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(7.0, 3.0, 10.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_shared_edge_is_not_contact() {
        let a = square(0.0, 0.0, 10.0);
        let right = square(10.0, 0.0, 10.0);
        let below = square(0.0, 10.0, 10.0);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn test_overlap_on_one_axis_only() {
        let a = square(0.0, 0.0, 10.0);
        let b = square(5.0, 40.0, 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_corners() {
        let rect = Rect::new(Vec2::new(100.0, 50.0), Vec2::new(10.0, 60.0), [0.5; 4]);
        let quad = rect.corners();
        assert_eq!(quad.x1, 95.0);
        assert_eq!(quad.y1, 20.0);
        assert_eq!(quad.x2, 105.0);
        assert_eq!(quad.y2, 80.0);
        assert_eq!(quad.color, [0.5; 4]);
        assert_eq!(rect.vertical_span(), (20.0, 80.0));
    }
}
