//! Oxygen system - zone-driven drain/refill and suffocation damage.
//!
//! Runs after movement and actions so it sees the player's final position
//! for the tick; the terminal death check reads the health it writes.

use hecs::World;
use log::debug;

use digdive_logic::config::WorldConfig;
use digdive_logic::zone::{classify, Zone};

use crate::components::{Body, Health, Oxygen, Player, Position};
use crate::events::GameEvent;

/// Drain oxygen while submerged, refill on the surface, and bleed health
/// once the tank is dry. Suffocation damage lands once per tick.
pub fn oxygen_system(
    world: &mut World,
    config: &WorldConfig,
    dt: f32,
    events: &mut Vec<GameEvent>,
) {
    for (_, (_, pos, body, oxygen, health)) in
        world.query_mut::<(&Player, &Position, &Body, &mut Oxygen, &mut Health)>()
    {
        match classify(pos.world.y, body.half_h) {
            Zone::Surface => {
                oxygen.gauge.refill(config.oxygen_refill_rate * dt);
            }
            Zone::Submerged => {
                oxygen.gauge.drain(config.oxygen_depletion_rate * dt);
                if oxygen.gauge.is_empty() && health.is_alive() {
                    health.take_damage(config.suffocation_damage);
                    debug!("suffocating: health at {:.1}", health.current());
                    events.push(GameEvent::HealthChanged {
                        current: health.current(),
                        max: health.max(),
                    });
                }
            }
        }
    }
}
