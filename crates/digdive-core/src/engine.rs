//! Game engine - main entry point for running the simulation.
//!
//! One `update(dt, input)` call is one tick. The ordering inside a tick is
//! load-bearing: zone-gated movement runs before AI so a new chase shows up
//! as motion next tick, actions mutate the grid before gauges update, and
//! the terminal death check reads the health written this same tick.

use hecs::{Entity, World};
use log::info;

use digdive_logic::config::WorldConfig;
use digdive_logic::constants::TILE_SIZE;
use digdive_logic::gauge::Gauge;
use digdive_logic::geometry::{Rect, Vec2};
use digdive_logic::grid::{TileGrid, TileState};
use digdive_logic::zone::{classify, Zone};

use crate::components::*;
use crate::events::{GameEvent, SCENE_KEY};
use crate::input::{InputEdges, InputState};
use crate::systems::*;

/// Main game engine: the ECS world, the tile grid, and per-tick driving.
pub struct GameEngine {
    /// ECS world containing all entities
    pub world: World,
    /// The one collidable tile layer
    pub grid: TileGrid,
    config: WorldConfig,
    player: Entity,
    spawner: TreasureSpawner,
    treasure_total: u32,
    sim_time: f64,
    previous_input: InputState,
    events: Vec<GameEvent>,
    game_over: bool,
}

impl GameEngine {
    /// Build a fresh world from configuration: water everywhere, one solid
    /// ground row at the waterline, the player mid-map on top of it, zombies
    /// at their configured offsets.
    pub fn new(config: WorldConfig) -> Self {
        let mut grid = TileGrid::new(config.grid_width, config.grid_height, TileState::Passable);
        for x in 0..config.grid_width as i32 {
            // The ground row never fails: x is in range by construction.
            let _ = grid.set_tile(x, 0, TileState::Blocked);
        }

        let mut world = World::new();

        let player_x = config.player_start_tile_x as f32 * TILE_SIZE + TILE_SIZE / 2.0;
        let player = world.spawn((
            Player,
            Position::new(player_x, -config.player_half_extent),
            Velocity::default(),
            Facing::default(),
            Body::new(config.player_half_extent, config.player_half_extent),
            Tool::default(),
            Health::new(config.player_max_health),
            Oxygen::new(config.max_oxygen),
        ));

        for offset in &config.zombie_spawn_offsets {
            let tile_x = config.player_start_tile_x as i32 + offset;
            world.spawn((
                Zombie::default(),
                Position::new(
                    tile_x as f32 * TILE_SIZE + TILE_SIZE / 2.0,
                    -config.zombie_half_extent,
                ),
                Velocity::default(),
                Body::new(config.zombie_half_extent, config.zombie_half_extent),
                Health::new(config.zombie_max_health),
            ));
        }

        // Treasures appear in the flooded band: below the ground row, above
        // the map bottom.
        let spawn_area = Rect::new(
            Vec2::new(0.0, TILE_SIZE),
            Vec2::new(
                config.grid_width as f32 * TILE_SIZE,
                (config.grid_height - 1) as f32 * TILE_SIZE,
            ),
        );

        Self {
            world,
            grid,
            config,
            player,
            spawner: TreasureSpawner::new(spawn_area),
            treasure_total: 0,
            sim_time: 0.0,
            previous_input: InputState::default(),
            events: Vec::new(),
            game_over: false,
        }
    }

    /// Advance the simulation by `dt` seconds. No-op once the game is over;
    /// call [`GameEngine::restart`] to play again.
    pub fn update(&mut self, dt: f32, input: InputState) {
        if self.game_over {
            return;
        }
        self.sim_time += f64::from(dt);

        let edges = InputEdges::detect(self.previous_input, input);
        self.previous_input = input;

        player_control_system(&mut self.world, input, &self.config);
        physics_system(&mut self.world, &self.grid, &self.config, dt);
        tool_system(&mut self.world, &self.config);

        ai_system(&mut self.world, &self.config);

        if edges.throw_pressed {
            throw_rock(&mut self.world, &self.config);
        }
        projectile_system(&mut self.world, &self.config, dt, &mut self.events);

        dig_system(&mut self.world, &mut self.grid, input, edges);

        treasure_spawn_system(&mut self.world, &mut self.spawner, &self.config, dt);
        treasure_collect_system(&mut self.world, &mut self.treasure_total, &mut self.events);

        oxygen_system(&mut self.world, &self.config, dt, &mut self.events);
        combat_system(&mut self.world, &self.config, self.sim_time, &mut self.events);

        // Terminal check last: it must see this tick's gauge updates.
        if !self.player_is_alive() {
            info!("player died, signalling game over");
            self.game_over = true;
            self.events.push(GameEvent::PlayerDied {
                scene: SCENE_KEY.to_string(),
            });
        }
    }

    /// Tear everything down and rebuild from the same configuration.
    pub fn restart(&mut self) {
        info!("restarting scene {SCENE_KEY}");
        *self = Self::new(self.config.clone());
    }

    /// Take all events queued since the last drain.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn sim_time(&self) -> f64 {
        self.sim_time
    }

    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    pub fn treasure_total(&self) -> u32 {
        self.treasure_total
    }

    // ── Player accessors for the UI layer ───────────────────────────────

    pub fn player_health(&self) -> Gauge {
        let health = self
            .world
            .get::<&Health>(self.player)
            .map(|h| (h.current(), h.max()));
        let (current, max) = health.unwrap_or((0.0, 0.0));
        let mut gauge = Gauge::new(max);
        gauge.set_value(current, None);
        gauge
    }

    pub fn player_is_alive(&self) -> bool {
        self.world
            .get::<&Health>(self.player)
            .map(|h| h.is_alive())
            .unwrap_or(false)
    }

    pub fn player_oxygen(&self) -> Gauge {
        self.world
            .get::<&Oxygen>(self.player)
            .map(|o| o.gauge)
            .unwrap_or_else(|_| Gauge::new(0.0))
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<&Position>(self.player)
            .map(|p| p.world)
            .unwrap_or(Vec2::ZERO)
    }

    /// The player's current zone, recomputed from position.
    pub fn player_zone(&self) -> Zone {
        let y = self.player_position().y;
        let half_h = self
            .world
            .get::<&Body>(self.player)
            .map(|b| b.half_h)
            .unwrap_or(0.0);
        classify(y, half_h)
    }

    pub fn zombie_count(&self) -> usize {
        self.world.query::<&Zombie>().iter().count()
    }

    pub fn treasure_count(&self) -> usize {
        self.world.query::<&Treasure>().iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn small_config() -> WorldConfig {
        WorldConfig {
            grid_width: 40,
            grid_height: 16,
            player_start_tile_x: 20,
            ..Default::default()
        }
    }

    #[test]
    fn test_engine_creation() {
        let engine = GameEngine::new(small_config());
        assert_eq!(engine.zombie_count(), 2);
        assert!(engine.player_is_alive());
        assert_eq!(engine.player_health().fraction(), 1.0);
        assert_eq!(engine.player_zone(), Zone::Surface);
        // Ground row solid, water below.
        assert!(engine.grid.is_blocked(0, 0));
        assert!(!engine.grid.is_blocked(0, 1));
    }

    #[test]
    fn test_idle_player_stays_on_surface() {
        let mut engine = GameEngine::new(small_config());
        for _ in 0..120 {
            engine.update(DT, InputState::default());
        }
        assert_eq!(engine.player_zone(), Zone::Surface);
        assert!(engine.player_oxygen().is_full());
    }

    #[test]
    fn test_dig_down_and_suffocate() {
        let mut engine = GameEngine::new(small_config());

        // Hold the dig key until the tile under the player opens and it
        // falls through into the water.
        let digging = InputState {
            action: true,
            ..Default::default()
        };
        for _ in 0..240 {
            engine.update(DT, digging);
        }
        assert_eq!(engine.player_zone(), Zone::Submerged);

        // Idle underwater long enough to empty the tank and die:
        // 10 s of oxygen, then 1 damage per tick against 100 health.
        let mut died = false;
        for _ in 0..(20 * 60) {
            engine.update(DT, InputState::default());
            for event in engine.drain_events() {
                if let GameEvent::PlayerDied { scene } = event {
                    assert_eq!(scene, SCENE_KEY);
                    died = true;
                }
            }
        }
        assert!(died);
        assert!(engine.is_game_over());
        assert!(!engine.player_is_alive());
    }

    #[test]
    fn test_game_over_latches_and_restart_resets() {
        // Death comes quickly: instant-drain oxygen, instant-kill damage.
        let mut config = small_config();
        config.suffocation_damage = 1000.0;
        config.oxygen_depletion_rate = 1000.0;
        let mut engine = GameEngine::new(config);

        let digging = InputState {
            action: true,
            ..Default::default()
        };
        for _ in 0..600 {
            engine.update(DT, digging);
        }
        assert!(engine.is_game_over());
        let died: usize = engine
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::PlayerDied { .. }))
            .count();
        assert_eq!(died, 1);

        // Frozen while game over.
        let time = engine.sim_time();
        engine.update(DT, InputState::default());
        assert_eq!(engine.sim_time(), time);

        engine.restart();
        assert!(!engine.is_game_over());
        assert!(engine.player_is_alive());
        assert_eq!(engine.sim_time(), 0.0);
        assert_eq!(engine.treasure_total(), 0);
    }

    #[test]
    fn test_shallow_map_runs_without_treasures() {
        // Ground row plus one water row: no flooded band left to drop
        // treasures into, which must skip spawning rather than blow up.
        let mut config = small_config();
        config.grid_height = 2;
        let mut engine = GameEngine::new(config);

        for _ in 0..(5 * 60) {
            engine.update(DT, InputState::default());
        }
        assert_eq!(engine.treasure_count(), 0);
        assert!(engine.player_is_alive());
    }

    #[test]
    fn test_treasures_accumulate_over_time() {
        let mut engine = GameEngine::new(small_config());
        // 30 seconds: spawner period is 2 s, cap is 10.
        for _ in 0..(30 * 60) {
            engine.update(DT, InputState::default());
        }
        let in_world = engine.treasure_count() as u32;
        assert!(in_world + engine.treasure_total() <= engine.config().max_treasures);
        assert!(in_world > 0);
    }
}
