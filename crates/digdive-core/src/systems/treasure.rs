//! Treasure spawning and collection.
//!
//! The spawner is a fixed-period repeating timer reduced to a dt accumulator:
//! every period it drops one treasure at a uniform random point in the
//! flooded region, capped at a maximum alive count. The player collects by
//! overlap.

use hecs::World;
use log::{debug, info};
use rand::Rng;

use digdive_logic::config::WorldConfig;
use digdive_logic::geometry::Rect;

use crate::components::{Body, Player, Position, Treasure};
use crate::events::GameEvent;

/// Accumulator state for the periodic treasure spawner.
#[derive(Debug, Clone)]
pub struct TreasureSpawner {
    /// Region treasures may appear in.
    pub spawn_area: Rect,
    elapsed: f32,
}

impl TreasureSpawner {
    pub fn new(spawn_area: Rect) -> Self {
        Self {
            spawn_area,
            elapsed: 0.0,
        }
    }
}

/// Advance the spawn timer and drop new treasures when it fires.
pub fn treasure_spawn_system(
    world: &mut World,
    spawner: &mut TreasureSpawner,
    config: &WorldConfig,
    dt: f32,
) {
    // A tiny map can leave no flooded band to drop into; rand panics on an
    // empty range, so bail out instead of sampling one.
    if spawner.spawn_area.width() <= 0.0 || spawner.spawn_area.height() <= 0.0 {
        return;
    }

    spawner.elapsed += dt;
    while spawner.elapsed >= config.treasure_spawn_period {
        spawner.elapsed -= config.treasure_spawn_period;

        let alive = world.query::<&Treasure>().iter().count() as u32;
        if alive >= config.max_treasures {
            debug!("treasure cap reached ({alive}), skipping spawn");
            continue;
        }

        let mut rng = rand::thread_rng();
        let x = rng.gen_range(spawner.spawn_area.min.x..spawner.spawn_area.max.x);
        let y = rng.gen_range(spawner.spawn_area.min.y..spawner.spawn_area.max.y);
        world.spawn((
            Treasure {
                value: config.treasure_value,
            },
            Position::new(x, y),
        ));
        debug!("treasure spawned at ({x:.0}, {y:.0})");
    }
}

/// Collect any treasure the player overlaps; bumps the running total and
/// emits an event per pickup.
pub fn treasure_collect_system(
    world: &mut World,
    collected_total: &mut u32,
    events: &mut Vec<GameEvent>,
) {
    let Some(player_bounds) = world
        .query::<(&Player, &Position, &Body)>()
        .iter()
        .next()
        .map(|(_, (_, pos, body))| body.bounds(pos.world))
    else {
        return;
    };

    let picked: Vec<(hecs::Entity, u32)> = world
        .query::<(&Treasure, &Position)>()
        .iter()
        .filter(|(_, (_, pos))| player_bounds.contains(&pos.world))
        .map(|(entity, (treasure, _))| (entity, treasure.value))
        .collect();

    for (entity, value) in picked {
        let _ = world.despawn(entity);
        *collected_total += value;
        info!("treasure collected, total {collected_total}");
        events.push(GameEvent::TreasureCollected {
            value,
            total: *collected_total,
        });
    }
}
