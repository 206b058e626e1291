//! Surface and submerged velocity rules, facing, and the tool offset.
//!
//! Pure per-tick arithmetic: given the held directional keys and the agent's
//! current state, compute the velocity it should have this tick. Integration
//! and tile collision live in the engine crate; nothing here touches a grid.

use crate::geometry::Vec2;

/// Held directional keys for one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputAxes {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl InputAxes {
    /// Raw input vector with left/right and up/down pairs resolved the way
    /// the cursor keys resolve them: left and up win ties.
    pub fn direction(&self) -> Vec2 {
        let x = if self.left {
            -1.0
        } else if self.right {
            1.0
        } else {
            0.0
        };
        let y = if self.up {
            -1.0
        } else if self.down {
            1.0
        } else {
            0.0
        };
        Vec2::new(x, y)
    }
}

/// Result of the surface movement rule for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceStep {
    /// New horizontal velocity.
    pub vx: f32,
    /// Whether a jump impulse fires this tick.
    pub jump: bool,
    /// New facing in degrees, if the input changed it.
    pub facing: Option<f32>,
}

/// Surface rule: direct horizontal control with drag decay, jump only from
/// the ground.
///
/// - `current_vx`: horizontal velocity carried from last tick
/// - `on_ground`: whether the agent is resting on a blocked tile below
/// - `speed`: target speed when a direction is held
/// - `drag`: per-tick decay factor in (0, 1) applied with no input
pub fn surface_step(
    axes: InputAxes,
    current_vx: f32,
    on_ground: bool,
    speed: f32,
    drag: f32,
) -> SurfaceStep {
    let (vx, facing) = if axes.left {
        (-speed, Some(180.0))
    } else if axes.right {
        (speed, Some(0.0))
    } else {
        (current_vx * drag, None)
    };

    SurfaceStep {
        vx,
        jump: axes.up && on_ground,
        facing,
    }
}

/// Result of the submerged movement rule for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubmergedStep {
    pub velocity: Vec2,
    /// New facing in degrees, only set while there is directional input.
    pub facing: Option<f32>,
}

/// Submerged rule: velocity is rebuilt from scratch each tick from the input
/// vector, normalized so diagonals are no faster than straight lines. No
/// input means a dead stop.
pub fn submerged_step(axes: InputAxes, speed: f32) -> SubmergedStep {
    let dir = axes.direction();
    if dir == Vec2::ZERO {
        return SubmergedStep {
            velocity: Vec2::ZERO,
            facing: None,
        };
    }

    let facing = dir.y.atan2(dir.x).to_degrees();
    SubmergedStep {
        velocity: dir.normalize() * speed,
        facing: Some(facing),
    }
}

/// The tool point trails the agent's facing at a fixed distance from its
/// center. Recomputed every tick.
pub fn tool_position(center: Vec2, facing_degrees: f32, offset: f32) -> Vec2 {
    center + Vec2::from_degrees(facing_degrees) * offset
}

#[cfg(test)]
mod tests {
    use super::*;

    const SPEED: f32 = 200.0;
    const DRAG: f32 = 0.85;

    #[test]
    fn test_surface_horizontal_control() {
        let left = surface_step(
            InputAxes {
                left: true,
                ..Default::default()
            },
            0.0,
            true,
            SPEED,
            DRAG,
        );
        assert_eq!(left.vx, -SPEED);
        assert_eq!(left.facing, Some(180.0));

        let right = surface_step(
            InputAxes {
                right: true,
                ..Default::default()
            },
            0.0,
            true,
            SPEED,
            DRAG,
        );
        assert_eq!(right.vx, SPEED);
        assert_eq!(right.facing, Some(0.0));
    }

    #[test]
    fn test_surface_drag_decays_toward_zero() {
        let mut vx = SPEED;
        for _ in 0..60 {
            let step = surface_step(InputAxes::default(), vx, true, SPEED, DRAG);
            assert!(step.vx.abs() < vx.abs() || vx == 0.0);
            assert_eq!(step.facing, None);
            vx = step.vx;
        }
        assert!(vx.abs() < 1.0);
    }

    #[test]
    fn test_jump_requires_ground() {
        let axes = InputAxes {
            up: true,
            ..Default::default()
        };
        assert!(surface_step(axes, 0.0, true, SPEED, DRAG).jump);
        assert!(!surface_step(axes, 0.0, false, SPEED, DRAG).jump);
    }

    #[test]
    fn test_submerged_idle_is_dead_stop() {
        let step = submerged_step(InputAxes::default(), SPEED);
        assert_eq!(step.velocity, Vec2::ZERO);
        assert_eq!(step.facing, None);
    }

    #[test]
    fn test_submerged_diagonal_is_normalized() {
        let step = submerged_step(
            InputAxes {
                right: true,
                down: true,
                ..Default::default()
            },
            SPEED,
        );
        assert!((step.velocity.length() - SPEED).abs() < 0.01);
        assert_eq!(step.facing, Some(45.0));
    }

    #[test]
    fn test_submerged_facing_tracks_input() {
        let up = submerged_step(
            InputAxes {
                up: true,
                ..Default::default()
            },
            SPEED,
        );
        assert_eq!(up.facing, Some(-90.0));
    }

    #[test]
    fn test_tool_position_follows_facing() {
        let center = Vec2::new(100.0, 50.0);
        let right = tool_position(center, 0.0, 24.0);
        assert!((right.x - 124.0).abs() < 1e-4);
        assert!((right.y - 50.0).abs() < 1e-4);

        let down = tool_position(center, 90.0, 24.0);
        assert!((down.x - 100.0).abs() < 1e-4);
        assert!((down.y - 74.0).abs() < 1e-4);
    }
}
