//! Gameplay constants — tile geometry, movement tuning, resource rates.
//!
//! These are the authoritative numbers for the default world; `WorldConfig`
//! copies them into its `Default` so scenarios can override any of them.

/// Width and height of one tile in world units.
pub const TILE_SIZE: f32 = 32.0;

/// Default grid dimensions in tiles.
pub const GRID_WIDTH: u32 = 256;
pub const GRID_HEIGHT: u32 = 32;

/// The waterline. Anything whose bottom edge is at or above (<=) this y is on
/// the surface. y grows downward, tiles occupy y >= 0.
pub const SURFACE_LEVEL_Y: f32 = 0.0;

/// Downward acceleration applied to surface agents, units/s^2.
pub const SURFACE_GRAVITY: f32 = 800.0;

pub mod player {
    /// Horizontal and submerged movement speed, units/s.
    pub const SPEED: f32 = 200.0;
    /// Per-tick multiplier applied to horizontal velocity with no input.
    pub const DRAG: f32 = 0.85;
    /// Upward impulse when jumping off the ground (negative = up).
    pub const JUMP_VELOCITY: f32 = -200.0;
    /// Distance from the agent center to the tool point.
    pub const TOOL_OFFSET: f32 = 24.0;
    /// Half-extent of the collision box.
    pub const HALF_EXTENT: f32 = 8.0;
    pub const MAX_HEALTH: f32 = 100.0;
    pub const MAX_OXYGEN: f32 = 100.0;
    /// Oxygen drained per second while submerged.
    pub const OXYGEN_DEPLETION_RATE: f32 = 10.0;
    /// Oxygen recovered per second while on the surface.
    pub const OXYGEN_REFILL_RATE: f32 = 10.0;
    /// Damage per tick once oxygen is empty and the player is submerged.
    pub const SUFFOCATION_DAMAGE: f32 = 1.0;
    /// Starting column, chosen mid-map.
    pub const START_TILE_X: u32 = super::GRID_WIDTH / 2;
}

pub mod zombie {
    /// Horizontal chase speed, units/s.
    pub const SPEED: f32 = 150.0;
    /// Horizontal distance within which a surface target is chased.
    pub const CHASE_THRESHOLD: f32 = 200.0;
    /// Half-extent of the collision box (oversized sprite).
    pub const HALF_EXTENT: f32 = 24.0;
    pub const MAX_HEALTH: f32 = 50.0;
    /// Damage dealt to the player on contact.
    pub const CONTACT_DAMAGE: f32 = 10.0;
    /// Minimum seconds between contact hits from the same zombie.
    pub const DAMAGE_COOLDOWN: f32 = 1.0;
}

pub mod treasure {
    /// Seconds between spawn attempts.
    pub const SPAWN_PERIOD: f32 = 2.0;
    /// Spawner stops once this many treasures are alive.
    pub const MAX_ALIVE: u32 = 10;
    pub const VALUE: u32 = 1;
}

pub mod rock {
    /// Flight speed along the facing direction, units/s.
    pub const SPEED: f32 = 400.0;
    /// Seconds before an unspent rock despawns.
    pub const LIFETIME: f32 = 1.0;
    pub const DAMAGE: f32 = 25.0;
}
