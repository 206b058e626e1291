//! Contact damage - zombies hurt the player on overlap, rate-limited.
//!
//! Each zombie carries its own cooldown timestamp so two zombies piling on
//! still hit independently, but a single zombie cannot shred the player at
//! tick rate.

use hecs::World;
use log::debug;

use digdive_logic::config::WorldConfig;

use crate::components::{Body, Health, Player, Position, Zombie};
use crate::events::GameEvent;

/// Apply contact damage from overlapping zombies to the player.
pub fn combat_system(
    world: &mut World,
    config: &WorldConfig,
    sim_time: f64,
    events: &mut Vec<GameEvent>,
) {
    let Some((player_entity, player_bounds)) = world
        .query::<(&Player, &Position, &Body, &Health)>()
        .iter()
        .next()
        .filter(|(_, (_, _, _, health))| health.is_alive())
        .map(|(entity, (_, pos, body, _))| (entity, body.bounds(pos.world)))
    else {
        return;
    };

    // Collect hits first: the player's Health is mutated after the query.
    let mut hits = 0u32;
    for (_, (zombie, pos, body)) in world.query::<(&mut Zombie, &Position, &Body)>().iter() {
        let off_cooldown = zombie
            .last_hit_time
            .map_or(true, |last| sim_time - last >= f64::from(config.damage_cooldown));
        if off_cooldown && body.bounds(pos.world).overlaps(&player_bounds) {
            zombie.last_hit_time = Some(sim_time);
            hits += 1;
        }
    }

    if hits == 0 {
        return;
    }

    if let Ok(mut health) = world.get::<&mut Health>(player_entity) {
        for _ in 0..hits {
            if !health.is_alive() {
                break;
            }
            health.take_damage(config.contact_damage);
            debug!("zombie hit: player health {:.1}", health.current());
            events.push(GameEvent::HealthChanged {
                current: health.current(),
                max: health.max(),
            });
        }
    }
}
