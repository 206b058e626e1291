//! Movement systems - zone-gated control, physics integration, tool tracking.
//!
//! Three passes per tick, in order: player control turns input into velocity
//! intent, physics integrates every moving body against the tile grid, and
//! the tool point is snapped to the player's new center.

use hecs::World;

use digdive_logic::config::WorldConfig;
use digdive_logic::geometry::Vec2;
use digdive_logic::grid::TileGrid;
use digdive_logic::movement::{submerged_step, surface_step, tool_position};
use digdive_logic::zone::{classify, Zone};

use crate::components::{Body, Facing, Player, Position, Tool, Velocity};
use crate::input::InputState;

/// Apply the zone-specific movement rules to the player's velocity intent.
pub fn player_control_system(world: &mut World, input: InputState, config: &WorldConfig) {
    for (_, (_, pos, vel, facing, body)) in
        world.query_mut::<(&Player, &Position, &mut Velocity, &mut Facing, &Body)>()
    {
        match classify(pos.world.y, body.half_h) {
            Zone::Surface => {
                let step = surface_step(
                    input.axes(),
                    vel.vx,
                    body.on_ground,
                    config.player_speed,
                    config.player_drag,
                );
                vel.vx = step.vx;
                if step.jump {
                    vel.vy = config.player_jump_velocity;
                }
                if let Some(degrees) = step.facing {
                    facing.degrees = degrees;
                }
            }
            Zone::Submerged => {
                let step = submerged_step(input.axes(), config.player_speed);
                vel.vx = step.velocity.x;
                vel.vy = step.velocity.y;
                if let Some(degrees) = step.facing {
                    facing.degrees = degrees;
                }
            }
        }
    }
}

/// Integrate every body against the grid: surface gravity, then an
/// axis-separated sweep so agents slide along walls instead of sticking.
/// Ground contact is derived here and read by jump/dig checks next tick.
pub fn physics_system(world: &mut World, grid: &TileGrid, config: &WorldConfig, dt: f32) {
    for (_, (pos, vel, body)) in world.query_mut::<(&mut Position, &mut Velocity, &mut Body)>() {
        if classify(pos.world.y, body.half_h) == Zone::Surface {
            vel.vy += config.surface_gravity * dt;
        }

        let (new_x, hit_x) = sweep_axis(grid, pos.world, body, vel.vx * dt, Axis::X);
        pos.world.x = new_x;
        if hit_x {
            vel.vx = 0.0;
        }

        let falling = vel.vy > 0.0;
        let (new_y, hit_y) = sweep_axis(grid, pos.world, body, vel.vy * dt, Axis::Y);
        pos.world.y = new_y;
        body.on_ground = hit_y && falling;
        if hit_y {
            vel.vy = 0.0;
        }
    }
}

/// Keep the player's tool point at the fixed offset along its facing.
pub fn tool_system(world: &mut World, config: &WorldConfig) {
    for (_, (_, pos, facing, tool)) in
        world.query_mut::<(&Player, &Position, &Facing, &mut Tool)>()
    {
        tool.position = tool_position(pos.world, facing.degrees, config.tool_offset);
    }
}

enum Axis {
    X,
    Y,
}

/// Move a body along one axis, clamping against the first blocked tile.
/// Returns the new center coordinate for that axis and whether it hit.
fn sweep_axis(grid: &TileGrid, center: Vec2, body: &Body, delta: f32, axis: Axis) -> (f32, bool) {
    use digdive_logic::constants::TILE_SIZE;

    let (current, half) = match axis {
        Axis::X => (center.x, body.half_w),
        Axis::Y => (center.y, body.half_h),
    };
    if delta == 0.0 {
        return (current, false);
    }

    // Walk the displacement in sub-tile steps: a single destination check
    // would let a fast enough body pass clean through a blocked tile.
    let steps = (delta.abs() / (TILE_SIZE / 2.0)).ceil().max(1.0);
    let step = delta / steps;
    let mut sample = current;
    for _ in 0..steps as u32 {
        sample += step;
        let moved = match axis {
            Axis::X => Vec2::new(sample, center.y),
            Axis::Y => Vec2::new(center.x, sample),
        };
        if grid.rect_hits_blocked(&body.bounds(moved)) {
            // Clamp flush against the tile edge we ran into.
            let clamped = if delta > 0.0 {
                let tile = ((sample + half) / TILE_SIZE).floor();
                tile * TILE_SIZE - half
            } else {
                let tile = ((sample - half) / TILE_SIZE).floor();
                (tile + 1.0) * TILE_SIZE + half
            };
            return (clamped, true);
        }
    }
    (current + delta, false)
}
