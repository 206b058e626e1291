//! Events surfaced to the excluded UI and scene layers.
//!
//! The engine queues events as systems run and the host drains them once per
//! tick. This replaces per-callback registration: bar redraws key off
//! `HealthChanged`, the scene layer keys off `PlayerDied`.

use serde::{Deserialize, Serialize};

/// Scene identifier handed back with the game-over signal so the host can
/// restart the right scene.
pub const SCENE_KEY: &str = "dig-dive";

/// One gameplay event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player health changed; carries the new value for bar rendering.
    HealthChanged { current: f32, max: f32 },
    /// Player health hit zero. Emitted exactly once per life.
    PlayerDied { scene: String },
    /// A zombie was killed by a rock.
    ZombieDied,
    /// Player picked up a treasure; carries the running total.
    TreasureCollected { value: u32, total: u32 },
}
