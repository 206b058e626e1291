//! Zombie AI system - motivation transitions and chase steering.
//!
//! Runs after movement, so a freshly triggered chase shows up as motion on
//! the following tick. Zombies only hunt along the surface; a submerged
//! zombie holds still and keeps whatever motivation it had.

use hecs::World;

use digdive_logic::ai::{next_motivation, steering_velocity, TargetView};
use digdive_logic::config::WorldConfig;
use digdive_logic::zone::{classify, Zone};

use crate::components::{Body, Health, Player, Position, Velocity, Zombie};

/// Advance every zombie's motivation against the player and set its
/// horizontal velocity intent for the next physics step.
pub fn ai_system(world: &mut World, config: &WorldConfig) {
    let target = player_view(world);

    for (_, (zombie, pos, vel, body)) in
        world.query_mut::<(&mut Zombie, &Position, &mut Velocity, &Body)>()
    {
        match classify(pos.world.y, body.half_h) {
            Zone::Surface => {
                zombie.motivation = next_motivation(
                    zombie.motivation,
                    pos.world.x,
                    target,
                    config.chase_threshold,
                );
                vel.vx = steering_velocity(
                    zombie.motivation,
                    pos.world.x,
                    target,
                    config.zombie_speed,
                );
            }
            Zone::Submerged => {
                vel.vx = 0.0;
                vel.vy = 0.0;
            }
        }
    }
}

/// What zombies can see of the player. A dead player is no target at all.
fn player_view(world: &World) -> Option<TargetView> {
    world
        .query::<(&Player, &Position, &Body, &Health)>()
        .iter()
        .next()
        .and_then(|(_, (_, pos, body, health))| {
            if health.is_alive() {
                Some(TargetView {
                    x: pos.world.x,
                    on_surface: classify(pos.world.y, body.half_h) == Zone::Surface,
                })
            } else {
                None
            }
        })
}
