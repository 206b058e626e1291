//! Dig/fill action processing - one pending player action per tick.
//!
//! Targeting differs by zone. On the surface the player digs straight down
//! through the ground row it stands on, holding the action key. Submerged,
//! the tool point picks the tile, and dig/fill fire on key press edges so a
//! held key does not chew through the map.

use hecs::World;
use log::{debug, info};

use digdive_logic::dig::{dig, fill, DigOutcome, FillOutcome};
use digdive_logic::grid::TileGrid;
use digdive_logic::zone::{classify, Zone};

use crate::components::{Body, Player, Position, Tool};
use crate::input::{InputEdges, InputState};

/// The row surface digging targets: the ground line itself.
const SURFACE_DIG_ROW: i32 = 0;

/// Process the player's pending dig or fill action against the grid.
pub fn dig_system(
    world: &mut World,
    grid: &mut TileGrid,
    input: InputState,
    edges: InputEdges,
) {
    let Some((pos, body, tool)) = world
        .query::<(&Player, &Position, &Body, &Tool)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body, tool))| (*pos, *body, *tool))
    else {
        return;
    };

    match classify(pos.world.y, body.half_h) {
        Zone::Surface => {
            // Digging through the ground needs solid footing.
            if input.action && body.on_ground {
                let (tile_x, _) = TileGrid::world_to_tile(pos.world);
                apply_dig(grid, tile_x, SURFACE_DIG_ROW);
            }
        }
        Zone::Submerged => {
            let (tile_x, tile_y) = TileGrid::world_to_tile(tool.position);
            if edges.action_pressed {
                apply_dig(grid, tile_x, tile_y);
            }
            if edges.fill_pressed {
                let bounds = body.bounds(pos.world);
                match fill(grid, tile_x, tile_y, &bounds) {
                    Ok(FillOutcome::Filled) => info!("filled tile ({tile_x}, {tile_y})"),
                    Ok(FillOutcome::WouldEntomb) => {
                        debug!("fill refused at ({tile_x}, {tile_y}): player overlaps tile");
                    }
                    Ok(FillOutcome::AlreadySolid) => {}
                    Err(err) => debug!("fill target rejected: {err}"),
                }
            }
        }
    }
}

fn apply_dig(grid: &mut TileGrid, tile_x: i32, tile_y: i32) {
    match dig(grid, tile_x, tile_y) {
        Ok(DigOutcome::Dug) => info!("dug tile ({tile_x}, {tile_y})"),
        Ok(DigOutcome::AlreadyOpen) => {}
        Err(err) => debug!("dig target rejected: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Facing, Velocity};
    use digdive_logic::config::WorldConfig;
    use digdive_logic::geometry::Vec2;
    use digdive_logic::grid::TileState;

    fn press_action() -> (InputState, InputEdges) {
        let held = InputState {
            action: true,
            ..Default::default()
        };
        (held, InputEdges::detect(InputState::default(), held))
    }

    fn spawn_surface_player(world: &mut World, config: &WorldConfig, tile_x: i32) {
        let mut body = Body::new(config.player_half_extent, config.player_half_extent);
        body.on_ground = true;
        world.spawn((
            Player,
            Position::new(tile_x as f32 * 32.0 + 16.0, -config.player_half_extent),
            Velocity::default(),
            Facing::default(),
            body,
            Tool::default(),
        ));
    }

    #[test]
    fn test_surface_dig_opens_ground_row() {
        let config = WorldConfig::default();
        let mut grid = TileGrid::new(16, 8, TileState::Passable);
        for x in 0..16 {
            grid.set_tile(x, 0, TileState::Blocked).unwrap();
        }

        let mut world = World::new();
        spawn_surface_player(&mut world, &config, 4);

        let (held, edges) = press_action();
        dig_system(&mut world, &mut grid, held, edges);
        assert_eq!(grid.tile_at(4, 0), Ok(TileState::Passable));
        // Neighbours untouched.
        assert_eq!(grid.tile_at(3, 0), Ok(TileState::Blocked));
        assert_eq!(grid.tile_at(5, 0), Ok(TileState::Blocked));
    }

    #[test]
    fn test_surface_dig_needs_footing() {
        let mut grid = TileGrid::new(16, 8, TileState::Blocked);

        let mut world = World::new();
        world.spawn((
            Player,
            Position::new(4.0 * 32.0, -40.0),
            Velocity::default(),
            Facing::default(),
            Body::new(8.0, 8.0), // airborne, on_ground = false
            Tool::default(),
        ));

        let (held, edges) = press_action();
        dig_system(&mut world, &mut grid, held, edges);
        assert_eq!(grid.tile_at(4, 0), Ok(TileState::Blocked));
    }

    #[test]
    fn test_submerged_dig_targets_tool_tile_on_press_only() {
        let mut grid = TileGrid::new(16, 8, TileState::Blocked);

        let mut world = World::new();
        world.spawn((
            Player,
            Position::new(100.0, 100.0),
            Velocity::default(),
            Facing::default(),
            Body::new(8.0, 8.0),
            Tool {
                position: Vec2::new(124.0, 100.0),
            },
        ));

        let (held, edges) = press_action();
        dig_system(&mut world, &mut grid, held, edges);
        // Tool at (124, 100) -> tile (3, 3).
        assert_eq!(grid.tile_at(3, 3), Ok(TileState::Passable));

        // Re-fill it, then hold the key without a new press: no dig.
        grid.set_tile(3, 3, TileState::Blocked).unwrap();
        dig_system(&mut world, &mut grid, held, InputEdges::default());
        assert_eq!(grid.tile_at(3, 3), Ok(TileState::Blocked));
    }

    #[test]
    fn test_submerged_fill_respects_entombment_guard() {
        let mut grid = TileGrid::new(16, 8, TileState::Passable);

        let mut world = World::new();
        // Player inside tile (3, 3); tool points at the same tile.
        world.spawn((
            Player,
            Position::new(100.0, 100.0),
            Velocity::default(),
            Facing::default(),
            Body::new(8.0, 8.0),
            Tool {
                position: Vec2::new(100.0, 100.0),
            },
        ));

        let held = InputState {
            fill: true,
            ..Default::default()
        };
        let edges = InputEdges::detect(InputState::default(), held);
        dig_system(&mut world, &mut grid, held, edges);
        assert_eq!(grid.tile_at(3, 3), Ok(TileState::Passable));
    }

    #[test]
    fn test_submerged_fill_closes_clear_tile() {
        let mut grid = TileGrid::new(16, 8, TileState::Passable);

        let mut world = World::new();
        // Tool reaches into tile (3, 3) while the player sits in (1, 3).
        world.spawn((
            Player,
            Position::new(48.0, 112.0),
            Velocity::default(),
            Facing::default(),
            Body::new(8.0, 8.0),
            Tool {
                position: Vec2::new(100.0, 100.0),
            },
        ));

        let held = InputState {
            fill: true,
            ..Default::default()
        };
        let edges = InputEdges::detect(InputState::default(), held);
        dig_system(&mut world, &mut grid, held, edges);
        assert_eq!(grid.tile_at(3, 3), Ok(TileState::Blocked));
    }

    #[test]
    fn test_out_of_bounds_target_is_silent_noop() {
        let mut grid = TileGrid::new(4, 4, TileState::Blocked);

        let mut world = World::new();
        world.spawn((
            Player,
            Position::new(10.0, 100.0),
            Velocity::default(),
            Facing::default(),
            Body::new(8.0, 8.0),
            Tool {
                position: Vec2::new(-20.0, 100.0), // off the left edge
            },
        ));

        let (held, edges) = press_action();
        // Must not panic, must not change anything.
        dig_system(&mut world, &mut grid, held, edges);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(grid.tile_at(x, y), Ok(TileState::Blocked));
            }
        }
    }
}
