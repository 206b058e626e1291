//! World configuration.
//!
//! Every tunable the engine reads lives here, with defaults matching the
//! shipped game's constants. Harness scenarios deserialize overrides from
//! JSON, so all fields default individually.

use serde::{Deserialize, Serialize};

use crate::constants::{self, player, rock, treasure, zombie};

/// Full tuning for one world. Construct with `WorldConfig::default()` and
/// override fields as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Grid dimensions in tiles.
    pub grid_width: u32,
    pub grid_height: u32,
    /// Player spawn column.
    pub player_start_tile_x: u32,
    /// Zombie spawn columns, offsets from the player start.
    pub zombie_spawn_offsets: Vec<i32>,

    /// Downward acceleration on the surface, units/s^2.
    pub surface_gravity: f32,

    pub player_speed: f32,
    pub player_drag: f32,
    pub player_jump_velocity: f32,
    pub player_half_extent: f32,
    pub player_max_health: f32,
    pub tool_offset: f32,

    pub max_oxygen: f32,
    pub oxygen_depletion_rate: f32,
    pub oxygen_refill_rate: f32,
    pub suffocation_damage: f32,

    pub zombie_speed: f32,
    pub zombie_half_extent: f32,
    pub zombie_max_health: f32,
    pub chase_threshold: f32,
    pub contact_damage: f32,
    pub damage_cooldown: f32,

    pub treasure_spawn_period: f32,
    pub max_treasures: u32,
    pub treasure_value: u32,

    pub rock_speed: f32,
    pub rock_lifetime: f32,
    pub rock_damage: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            grid_width: constants::GRID_WIDTH,
            grid_height: constants::GRID_HEIGHT,
            player_start_tile_x: player::START_TILE_X,
            zombie_spawn_offsets: vec![-15, 15],

            surface_gravity: constants::SURFACE_GRAVITY,

            player_speed: player::SPEED,
            player_drag: player::DRAG,
            player_jump_velocity: player::JUMP_VELOCITY,
            player_half_extent: player::HALF_EXTENT,
            player_max_health: player::MAX_HEALTH,
            tool_offset: player::TOOL_OFFSET,

            max_oxygen: player::MAX_OXYGEN,
            oxygen_depletion_rate: player::OXYGEN_DEPLETION_RATE,
            oxygen_refill_rate: player::OXYGEN_REFILL_RATE,
            suffocation_damage: player::SUFFOCATION_DAMAGE,

            zombie_speed: zombie::SPEED,
            zombie_half_extent: zombie::HALF_EXTENT,
            zombie_max_health: zombie::MAX_HEALTH,
            chase_threshold: zombie::CHASE_THRESHOLD,
            contact_damage: zombie::CONTACT_DAMAGE,
            damage_cooldown: zombie::DAMAGE_COOLDOWN,

            treasure_spawn_period: treasure::SPAWN_PERIOD,
            max_treasures: treasure::MAX_ALIVE,
            treasure_value: treasure::VALUE,

            rock_speed: rock::SPEED,
            rock_lifetime: rock::LIFETIME,
            rock_damage: rock::DAMAGE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_constants() {
        let config = WorldConfig::default();
        assert_eq!(config.grid_width, 256);
        assert_eq!(config.grid_height, 32);
        assert_eq!(config.player_speed, 200.0);
        assert_eq!(config.chase_threshold, 200.0);
        assert_eq!(config.oxygen_depletion_rate, 10.0);
    }

    #[test]
    fn test_partial_json_override() {
        let config: WorldConfig =
            serde_json::from_str(r#"{ "grid_width": 40, "oxygen_depletion_rate": 5.0 }"#).unwrap();
        assert_eq!(config.grid_width, 40);
        assert_eq!(config.oxygen_depletion_rate, 5.0);
        // Untouched fields keep their defaults.
        assert_eq!(config.grid_height, 32);
        assert_eq!(config.player_drag, 0.85);
    }
}
