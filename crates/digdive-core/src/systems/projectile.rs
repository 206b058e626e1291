//! Rock projectiles - thrown from the tool point, lethal to zombies.
//!
//! Rocks fly in a straight line, ignore the grid, and expire after a fixed
//! lifetime. The first zombie a rock touches takes the hit; a killed zombie
//! is removed from the world after its death event is queued.

use hecs::{Entity, World};
use log::{debug, info};

use digdive_logic::config::WorldConfig;
use digdive_logic::geometry::Vec2;

use crate::components::{Body, Facing, Health, Player, Position, Rock, Tool, Velocity, Zombie};
use crate::events::GameEvent;

/// Spawn a rock at the player's tool point, flying along its facing.
pub fn throw_rock(world: &mut World, config: &WorldConfig) {
    let Some((origin, facing)) = world
        .query::<(&Player, &Tool, &Facing)>()
        .iter()
        .next()
        .map(|(_, (_, tool, facing))| (tool.position, facing.degrees))
    else {
        return;
    };

    let velocity = Vec2::from_degrees(facing) * config.rock_speed;
    world.spawn((
        Rock {
            time_left: config.rock_lifetime,
        },
        Position::new(origin.x, origin.y),
        Velocity {
            vx: velocity.x,
            vy: velocity.y,
        },
    ));
    debug!("rock thrown from ({:.0}, {:.0})", origin.x, origin.y);
}

/// Advance rocks, expire them, and resolve zombie hits.
pub fn projectile_system(
    world: &mut World,
    config: &WorldConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    // Integrate first; hit tests come after so the queries never overlap.
    // Both ends of this tick's travel are kept: a point-blank rock starts
    // on a zombie's edge and would be outside it after one step.
    let mut expired: Vec<Entity> = Vec::new();
    let mut flying: Vec<(Entity, Vec2, Vec2)> = Vec::new();
    for (rock_entity, (rock, pos, vel)) in
        world.query_mut::<(&mut Rock, &mut Position, &Velocity)>()
    {
        let start = pos.world;
        pos.world.x += vel.vx * dt;
        pos.world.y += vel.vy * dt;
        rock.time_left -= dt;
        if rock.time_left <= 0.0 {
            expired.push(rock_entity);
        } else {
            flying.push((rock_entity, start, pos.world));
        }
    }

    for entity in expired {
        let _ = world.despawn(entity);
    }

    if flying.is_empty() {
        return;
    }

    let zombies: Vec<(Entity, digdive_logic::geometry::Rect)> = world
        .query::<(&Zombie, &Position, &Body, &Health)>()
        .iter()
        .filter(|(_, (_, _, _, health))| health.is_alive())
        .map(|(entity, (_, pos, body, _))| (entity, body.bounds(pos.world)))
        .collect();

    let mut hits: Vec<(Entity, Entity)> = Vec::new();
    for (rock_entity, start, end) in flying {
        if let Some((zombie_entity, _)) = zombies
            .iter()
            .find(|(_, bounds)| bounds.contains(&start) || bounds.contains(&end))
        {
            hits.push((rock_entity, *zombie_entity));
        }
    }

    for (rock_entity, zombie_entity) in hits {
        let _ = world.despawn(rock_entity);

        // A zombie already killed this tick absorbs no further rocks.
        let killed = match world.get::<&mut Health>(zombie_entity) {
            Ok(mut health) if health.is_alive() => !health.take_damage(config.rock_damage),
            _ => false,
        };
        if killed {
            info!("zombie killed by rock");
            events.push(GameEvent::ZombieDied);
            let _ = world.despawn(zombie_entity);
        }
    }
}
