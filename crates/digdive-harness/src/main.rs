//! DigDive Headless Simulation Harness
//!
//! Validates the gameplay core end to end without a renderer. Runs
//! entirely in-process and drives `GameEngine` at a fixed 60 Hz tick.
//!
//! Usage:
//!   cargo run -p digdive-harness
//!   cargo run -p digdive-harness -- --verbose
//!   cargo run -p digdive-harness -- --config tuning.json

use digdive_core::events::SCENE_KEY;
use digdive_core::prelude::*;
use digdive_logic::ai::Motivation;
use digdive_logic::config::WorldConfig;
use digdive_logic::dig::{self, DigOutcome, FillOutcome};
use digdive_logic::gauge::Gauge;
use digdive_logic::geometry::{Rect, Vec2};
use digdive_logic::grid::{TileGrid, TileState};
use digdive_logic::movement::{self, InputAxes};
use digdive_logic::zone::{self, Zone};
use log::info;

const DT: f32 = 1.0 / 60.0;

// ── Test harness ────────────────────────────────────────────────────────

struct TestResult {
    name: String,
    passed: bool,
    detail: String,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let verbose = args.iter().any(|a| a == "--verbose");
    let config_path = args
        .iter()
        .position(|a| a == "--config")
        .and_then(|i| args.get(i + 1))
        .cloned();

    println!("=== DigDive Simulation Harness ===\n");

    let mut results = Vec::new();

    // 1. World config (defaults or JSON overrides)
    let config = load_config(config_path, &mut results);

    // 2. Grid, dig and fill sweep
    results.extend(validate_grid_logic(verbose));

    // 3. Gauge clamping sweep
    results.extend(validate_gauge_logic(verbose));

    // 4. Zone and movement math
    results.extend(validate_movement_logic(verbose, &config));

    // 5. Zombie pursuit run
    results.extend(validate_chase_behavior(verbose, &config));

    // 6. Oxygen depletion and suffocation run
    results.extend(validate_oxygen_run(verbose, &config));

    // 7. Contact damage to game over, then restart
    results.extend(validate_combat_run(verbose, &config));

    // 8. Rock throw run
    results.extend(validate_rock_run(verbose, &config));

    // 9. Treasure spawner run
    results.extend(validate_treasure_run(verbose, &config));

    // ── Summary ──
    println!();
    let passed = results.iter().filter(|r| r.passed).count();
    let failed = results.iter().filter(|r| !r.passed).count();
    let total = results.len();

    for r in &results {
        let icon = if r.passed { "✓" } else { "✗" };
        if !r.passed || verbose {
            println!("  {} {}: {}", icon, r.name, r.detail);
        }
    }

    println!(
        "\n=== RESULT: {}/{} passed, {} failed ===",
        passed, total, failed
    );

    if failed > 0 {
        std::process::exit(1);
    }
}

// ── 1. World config ─────────────────────────────────────────────────────

fn load_config(path: Option<String>, results: &mut Vec<TestResult>) -> WorldConfig {
    println!("--- World Config ---");
    match path {
        None => {
            results.push(TestResult {
                name: "config_defaults".into(),
                passed: true,
                detail: "using built-in defaults".into(),
            });
            WorldConfig::default()
        }
        Some(p) => match std::fs::read_to_string(&p) {
            Err(e) => {
                results.push(TestResult {
                    name: "config_load".into(),
                    passed: false,
                    detail: format!("cannot read {}: {}", p, e),
                });
                WorldConfig::default()
            }
            Ok(text) => match serde_json::from_str::<WorldConfig>(&text) {
                Err(e) => {
                    results.push(TestResult {
                        name: "config_parse".into(),
                        passed: false,
                        detail: format!("JSON parse error in {}: {}", p, e),
                    });
                    WorldConfig::default()
                }
                Ok(cfg) => {
                    info!("loaded config overrides from {}", p);
                    results.push(TestResult {
                        name: "config_load".into(),
                        passed: true,
                        detail: format!("overrides loaded from {}", p),
                    });
                    cfg
                }
            },
        },
    }
}

// ── 2. Grid, dig and fill ───────────────────────────────────────────────

fn validate_grid_logic(verbose: bool) -> Vec<TestResult> {
    println!("--- Grid / Dig / Fill ---");
    let mut results = Vec::new();

    let mut grid = TileGrid::new(16, 8, TileState::Passable);
    for x in 0..16 {
        let _ = grid.set_tile(x, 0, TileState::Blocked);
    }

    let first = dig::dig(&mut grid, 5, 0);
    let second = dig::dig(&mut grid, 5, 0);
    results.push(TestResult {
        name: "dig_opens_then_noop".into(),
        passed: first == Ok(DigOutcome::Dug) && second == Ok(DigOutcome::AlreadyOpen),
        detail: format!("first={:?} second={:?}", first, second),
    });

    results.push(TestResult {
        name: "dig_out_of_bounds_errors".into(),
        passed: dig::dig(&mut grid, 99, 0).is_err(),
        detail: "x=99 on a 16-wide grid".into(),
    });

    let far_agent = Rect::from_center(Vec2::new(400.0, 400.0), 8.0, 8.0);
    let filled = dig::fill(&mut grid, 5, 0, &far_agent);
    results.push(TestResult {
        name: "fill_closes_empty_tile".into(),
        passed: filled == Ok(FillOutcome::Filled) && grid.is_blocked(5, 0),
        detail: format!("{:?}", filled),
    });

    let _ = dig::dig(&mut grid, 5, 0);
    let inside = Rect::from_center(TileGrid::tile_rect(5, 0).center(), 8.0, 8.0);
    let refused = dig::fill(&mut grid, 5, 0, &inside);
    results.push(TestResult {
        name: "fill_refuses_entombment".into(),
        passed: refused == Ok(FillOutcome::WouldEntomb) && !grid.is_blocked(5, 0),
        detail: format!("{:?}", refused),
    });

    if verbose {
        println!("  grid sweep on 16x8 with blocked crust row");
    }
    results
}

// ── 3. Gauges ───────────────────────────────────────────────────────────

fn validate_gauge_logic(verbose: bool) -> Vec<TestResult> {
    println!("--- Gauges ---");
    let mut results = Vec::new();

    let mut g = Gauge::new(100.0);
    results.push(TestResult {
        name: "gauge_starts_full".into(),
        passed: g.is_full() && (g.fraction() - 1.0).abs() < 1e-6,
        detail: format!("current={} max={}", g.current(), g.max()),
    });

    g.drain(150.0);
    let clamped_low = g.is_empty() && g.current() == 0.0;
    g.refill(30.0);
    g.refill(1000.0);
    let clamped_high = g.is_full();
    results.push(TestResult {
        name: "gauge_clamps_both_ends".into(),
        passed: clamped_low && clamped_high,
        detail: format!("empty_clamp={} full_clamp={}", clamped_low, clamped_high),
    });

    g.drain(-50.0);
    g.refill(-50.0);
    results.push(TestResult {
        name: "gauge_ignores_negative_amounts".into(),
        passed: g.is_full(),
        detail: format!("current={}", g.current()),
    });

    g.set_value(40.0, Some(20.0));
    results.push(TestResult {
        name: "gauge_set_value_reclamps".into(),
        passed: g.current() == 20.0 && g.max() == 20.0,
        detail: format!("current={} max={}", g.current(), g.max()),
    });

    if verbose {
        println!("  gauge clamp sweep complete");
    }
    results
}

// ── 4. Zones and movement math ──────────────────────────────────────────

fn validate_movement_logic(verbose: bool, config: &WorldConfig) -> Vec<TestResult> {
    println!("--- Zones / Movement ---");
    let mut results = Vec::new();

    let h = config.player_half_extent;
    let boundary = zone::classify(-h, h);
    let below = zone::classify(-h + 0.01, h);
    results.push(TestResult {
        name: "zone_waterline_is_inclusive".into(),
        passed: boundary == Zone::Surface && below == Zone::Submerged,
        detail: format!("flush={:?} dipped={:?}", boundary, below),
    });

    let axes = InputAxes {
        left: false,
        right: true,
        up: false,
        down: true,
    };
    let step = movement::submerged_step(axes, config.player_speed);
    let speed = step.velocity.length();
    results.push(TestResult {
        name: "submerged_diagonal_is_normalized".into(),
        passed: (speed - config.player_speed).abs() < 0.01,
        detail: format!("|v|={:.2} expected {:.2}", speed, config.player_speed),
    });

    let idle = InputAxes::default();
    let damped = movement::surface_step(idle, 100.0, true, config.player_speed, config.player_drag);
    results.push(TestResult {
        name: "surface_drag_decays_idle_velocity".into(),
        passed: (damped.vx - 100.0 * config.player_drag).abs() < 1e-4 && !damped.jump,
        detail: format!("vx 100 -> {:.2}", damped.vx),
    });

    let tool = movement::tool_position(Vec2::new(10.0, 20.0), 0.0, config.tool_offset);
    results.push(TestResult {
        name: "tool_sits_at_facing_offset".into(),
        passed: (tool.x - (10.0 + config.tool_offset)).abs() < 1e-4 && (tool.y - 20.0).abs() < 1e-4,
        detail: format!("tool=({:.1}, {:.1})", tool.x, tool.y),
    });

    if verbose {
        println!("  zone boundary and kinematics checks complete");
    }
    results
}

// ── 5. Zombie pursuit ───────────────────────────────────────────────────

fn zombie_motivations(engine: &GameEngine) -> Vec<Motivation> {
    engine
        .world
        .query::<&Zombie>()
        .iter()
        .map(|(_, z)| z.motivation)
        .collect()
}

fn validate_chase_behavior(verbose: bool, config: &WorldConfig) -> Vec<TestResult> {
    println!("--- Zombie Pursuit ---");
    let mut results = Vec::new();

    let mut cfg = config.clone();
    cfg.zombie_spawn_offsets = vec![15];
    let mut engine = GameEngine::new(cfg);

    engine.update(DT, InputState::default());
    let initial = zombie_motivations(&engine);
    results.push(TestResult {
        name: "distant_zombie_roams".into(),
        passed: initial == vec![Motivation::Roam],
        detail: format!("{:?}", initial),
    });

    // Walk toward it until the pursuit trigger distance is crossed.
    let walk = InputState {
        right: true,
        ..InputState::default()
    };
    let mut chased = false;
    for _ in 0..600 {
        engine.update(DT, walk);
        if zombie_motivations(&engine).contains(&Motivation::Chase) {
            chased = true;
            break;
        }
    }
    results.push(TestResult {
        name: "nearby_zombie_chases".into(),
        passed: chased,
        detail: format!("chase after walking to x={:.0}", engine.player_position().x),
    });

    if verbose {
        println!("  pursuit flip observed at t={:.2}s", engine.sim_time());
    }
    results
}

// ── 6. Oxygen and suffocation ───────────────────────────────────────────

/// Digs through the crust under the spawn point and lets the player sink.
fn dive_in(engine: &mut GameEngine) {
    let digging = InputState {
        action: true,
        ..InputState::default()
    };
    for _ in 0..30 {
        engine.update(DT, digging);
    }
}

fn validate_oxygen_run(verbose: bool, config: &WorldConfig) -> Vec<TestResult> {
    println!("--- Oxygen ---");
    let mut results = Vec::new();

    let mut cfg = config.clone();
    cfg.zombie_spawn_offsets = Vec::new();
    let mut engine = GameEngine::new(cfg.clone());

    dive_in(&mut engine);
    results.push(TestResult {
        name: "dug_player_is_submerged".into(),
        passed: engine.player_zone() == Zone::Submerged,
        detail: format!("zone={:?} y={:.1}", engine.player_zone(), engine.player_position().y),
    });

    // Idle underwater until the tank runs dry, then until suffocation ends it.
    let empty_after = cfg.max_oxygen / cfg.oxygen_depletion_rate;
    let mut deaths = 0;
    for _ in 0..((empty_after + 5.0) / DT) as usize {
        engine.update(DT, InputState::default());
        for ev in engine.drain_events() {
            if let GameEvent::PlayerDied { scene } = ev {
                deaths += 1;
                if scene != SCENE_KEY {
                    results.push(TestResult {
                        name: "death_names_scene".into(),
                        passed: false,
                        detail: format!("unexpected scene {:?}", scene),
                    });
                }
            }
        }
        if engine.is_game_over() {
            break;
        }
    }

    results.push(TestResult {
        name: "suffocation_ends_the_run".into(),
        passed: engine.is_game_over() && deaths == 1 && engine.player_oxygen().is_empty(),
        detail: format!(
            "game_over={} deaths={} oxygen={:.1}",
            engine.is_game_over(),
            deaths,
            engine.player_oxygen().current()
        ),
    });

    if verbose {
        println!("  drowned at t={:.2}s", engine.sim_time());
    }
    results
}

// ── 7. Contact damage and restart ───────────────────────────────────────

fn validate_combat_run(verbose: bool, config: &WorldConfig) -> Vec<TestResult> {
    println!("--- Contact Damage ---");
    let mut results = Vec::new();

    let mut cfg = config.clone();
    cfg.zombie_spawn_offsets = vec![2];
    cfg.contact_damage = 25.0;
    let mut engine = GameEngine::new(cfg.clone());

    let mut health_seen = Vec::new();
    let mut deaths = 0;
    for _ in 0..(20.0 / DT) as usize {
        engine.update(DT, InputState::default());
        for ev in engine.drain_events() {
            match ev {
                GameEvent::HealthChanged { current, .. } => health_seen.push(current),
                GameEvent::PlayerDied { .. } => deaths += 1,
                _ => {}
            }
        }
        if engine.is_game_over() {
            break;
        }
    }

    let monotone = health_seen.windows(2).all(|w| w[1] < w[0]);
    results.push(TestResult {
        name: "contact_grinds_health_down".into(),
        passed: monotone && health_seen.last() == Some(&0.0) && deaths == 1,
        detail: format!("health events {:?}, deaths={}", health_seen, deaths),
    });

    let frozen = engine.sim_time();
    engine.update(DT, InputState::default());
    let latched = engine.sim_time() == frozen;

    engine.restart();
    results.push(TestResult {
        name: "restart_resets_the_run".into(),
        passed: latched
            && !engine.is_game_over()
            && engine.player_is_alive()
            && engine.player_health().is_full(),
        detail: format!(
            "latched={} alive={} health={:.0}",
            latched,
            engine.player_is_alive(),
            engine.player_health().current()
        ),
    });

    if verbose {
        println!("  grind run took {:.2}s", frozen);
    }
    results
}

// ── 8. Rock throwing ────────────────────────────────────────────────────

fn validate_rock_run(verbose: bool, config: &WorldConfig) -> Vec<TestResult> {
    println!("--- Rock Throwing ---");
    let mut results = Vec::new();

    let mut cfg = config.clone();
    cfg.zombie_spawn_offsets = vec![2];
    let mut engine = GameEngine::new(cfg.clone());

    let throw = InputState {
        throw: true,
        ..InputState::default()
    };
    let mut kills = 0;
    let volleys_needed = (cfg.zombie_max_health / cfg.rock_damage).ceil() as usize;
    for _ in 0..volleys_needed + 2 {
        engine.update(DT, throw);
        for _ in 0..30 {
            engine.update(DT, InputState::default());
        }
        kills += engine
            .drain_events()
            .iter()
            .filter(|e| matches!(e, GameEvent::ZombieDied))
            .count();
        if kills > 0 {
            break;
        }
    }

    results.push(TestResult {
        name: "rock_volley_fells_zombie".into(),
        passed: kills == 1 && engine.zombie_count() == 0,
        detail: format!("kills={} remaining={}", kills, engine.zombie_count()),
    });

    if verbose {
        println!("  kill needed up to {} volleys", volleys_needed);
    }
    results
}

// ── 9. Treasure spawner ─────────────────────────────────────────────────

fn validate_treasure_run(verbose: bool, config: &WorldConfig) -> Vec<TestResult> {
    println!("--- Treasure ---");
    let mut results = Vec::new();

    // One tile column wide, with the player's body spanning it, so every
    // spawned treasure sits in the dive path and collection is exercised
    // for real.
    let mut cfg = config.clone();
    cfg.zombie_spawn_offsets = Vec::new();
    cfg.treasure_spawn_period = 0.1;
    cfg.grid_width = 1;
    cfg.player_start_tile_x = 0;
    cfg.player_half_extent = 16.0;
    let mut engine = GameEngine::new(cfg.clone());

    // Long enough for far more spawns than the cap allows.
    for _ in 0..(5.0 / DT) as usize {
        engine.update(DT, InputState::default());
    }

    let count = engine.treasure_count();
    results.push(TestResult {
        name: "spawner_fills_to_cap".into(),
        passed: count as u32 == cfg.max_treasures,
        detail: format!("{} alive, cap {}", count, cfg.max_treasures),
    });

    // Dive in and sweep: collections must raise the total and free the cap.
    dive_in(&mut engine);
    let dive = InputState {
        down: true,
        ..InputState::default()
    };
    let mut collected = Vec::new();
    for _ in 0..(10.0 / DT) as usize {
        engine.update(DT, dive);
        for ev in engine.drain_events() {
            if let GameEvent::TreasureCollected { total, .. } = ev {
                collected.push(total);
            }
        }
    }
    let totals_climb = collected.windows(2).all(|w| w[1] == w[0] + 1);
    results.push(TestResult {
        name: "dive_collects_sequential_totals".into(),
        passed: !collected.is_empty()
            && totals_climb
            && engine.treasure_total() == collected.last().copied().unwrap_or(0),
        detail: format!("collected {:?}", collected),
    });

    if verbose {
        println!("  spawner/collection sweep complete");
    }
    results
}
