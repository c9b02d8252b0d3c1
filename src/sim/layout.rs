//! Static table layout
//!
//! Walls and bumpers are immutable descriptors created once at startup. The
//! layout is plain data so alternative tables can be swapped in (or loaded
//! from JSON) without touching the collision resolver.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// An immutable wall segment
///
/// The outward normal is derived from the segment direction rotated +90
/// degrees: `n = (-dy, dx) / len`. Segments do not respond at their endpoints,
/// so table layouts should overlap or extend segments to cover corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    pub a: Vec2,
    pub b: Vec2,
}

impl Wall {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            a: Vec2::new(x1, y1),
            b: Vec2::new(x2, y2),
        }
    }

    /// Unit outward normal, or `None` for a degenerate zero-length segment
    pub fn normal(&self) -> Option<Vec2> {
        let d = self.b - self.a;
        let len = d.length();
        if len <= f32::EPSILON {
            return None;
        }
        Some(Vec2::new(-d.y, d.x) / len)
    }
}

/// An immutable scoring bumper
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bumper {
    pub pos: Vec2,
    pub radius: f32,
    /// Points awarded per hit
    pub value: u32,
    /// Renderer hint (0xRRGGBB), ignored by physics
    pub color: u32,
}

impl Bumper {
    pub fn new(x: f32, y: f32, radius: f32, value: u32, color: u32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius,
            value,
            color,
        }
    }
}

/// The static collision field: a list of wall segments and a list of bumpers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layout {
    pub walls: Vec<Wall>,
    pub bumpers: Vec<Bumper>,
}

impl Default for Layout {
    /// The classic table: three border walls, two sloped drain walls funneling
    /// toward the flippers, five bumpers in a diamond
    fn default() -> Self {
        let w = PLAYFIELD_WIDTH;
        let h = PLAYFIELD_HEIGHT;
        Self {
            walls: vec![
                Wall::new(30.0, 30.0, 30.0, h - 80.0),
                Wall::new(w - 30.0, 30.0, w - 30.0, h - 80.0),
                Wall::new(30.0, 30.0, w - 30.0, 30.0),
                // Sloped bottom walls
                Wall::new(30.0, h - 80.0, w / 2.0 - 100.0, h - 10.0),
                Wall::new(w - 30.0, h - 80.0, w / 2.0 + 100.0, h - 10.0),
            ],
            bumpers: vec![
                Bumper::new(w / 2.0, 170.0, 28.0, 100, 0xf5426c),
                Bumper::new(w / 2.0 - 90.0, 250.0, 20.0, 50, 0x42f554),
                Bumper::new(w / 2.0 + 90.0, 250.0, 20.0, 50, 0x42c6f5),
                Bumper::new(w / 2.0 - 60.0, 350.0, 16.0, 25, 0xf5b942),
                Bumper::new(w / 2.0 + 60.0, 350.0, 16.0, 25, 0xf542d4),
            ],
        }
    }
}

impl Layout {
    /// Load a table layout from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Serialize the layout to pretty JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wall_normal_perpendicular() {
        let wall = Wall::new(0.0, 100.0, 200.0, 100.0);
        let n = wall.normal().unwrap();
        assert!((n.x - 0.0).abs() < 1e-6);
        assert!((n.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_length_wall_has_no_normal() {
        let wall = Wall::new(50.0, 50.0, 50.0, 50.0);
        assert!(wall.normal().is_none());
    }

    #[test]
    fn test_default_layout_shape() {
        let layout = Layout::default();
        assert_eq!(layout.walls.len(), 5);
        assert_eq!(layout.bumpers.len(), 5);
        let total: u32 = layout.bumpers.iter().map(|b| b.value).sum();
        assert_eq!(total, 250);
    }

    #[test]
    fn test_layout_json_round_trip() {
        let layout = Layout::default();
        let json = layout.to_json().unwrap();
        let restored = Layout::from_json(&json).unwrap();
        assert_eq!(restored, layout);
    }
}
