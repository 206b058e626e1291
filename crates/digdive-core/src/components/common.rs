//! Spatial components shared by every mobile entity.

use digdive_logic::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// World-space position of an entity's center.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub world: Vec2,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            world: Vec2::new(x, y),
        }
    }
}

/// Velocity in units per second.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Velocity {
    pub vx: f32,
    pub vy: f32,
}

/// Facing angle in degrees: 0 = right, 180 = left, -90 = up, 90 = down.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Facing {
    pub degrees: f32,
}

/// Collision box half-extents plus the ground-contact flag maintained by the
/// physics step.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Body {
    pub half_w: f32,
    pub half_h: f32,
    /// True when downward motion was stopped by a blocked tile last step.
    pub on_ground: bool,
}

impl Body {
    pub fn new(half_w: f32, half_h: f32) -> Self {
        Self {
            half_w,
            half_h,
            on_ground: false,
        }
    }

    /// World-space AABB around a center point.
    pub fn bounds(&self, center: Vec2) -> Rect {
        Rect::from_center(center, self.half_w, self.half_h)
    }
}
