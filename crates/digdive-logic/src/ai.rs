//! Zombie motivation state machine and chase steering.
//!
//! Two states, one transition function. A zombie only cares about a target
//! that is on the surface and within horizontal reach; everything else sends
//! it back to roaming.

use serde::{Deserialize, Serialize};

/// Current behavioral mode of a zombie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Motivation {
    /// Standing around. Zero horizontal velocity.
    #[default]
    Roam,
    /// Closing horizontally on the target.
    Chase,
}

/// What a zombie can see of its target this tick. `None` when the target is
/// gone (dead or despawned).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetView {
    pub x: f32,
    pub on_surface: bool,
}

/// Advance the motivation state machine by one tick.
///
/// Roam -> Chase: target exists, is on the surface, and is within
/// `chase_threshold` horizontally. Chase -> Roam: any of those stop holding.
pub fn next_motivation(
    current: Motivation,
    self_x: f32,
    target: Option<TargetView>,
    chase_threshold: f32,
) -> Motivation {
    let in_reach = |t: &TargetView| t.on_surface && (t.x - self_x).abs() <= chase_threshold;

    match current {
        Motivation::Roam => match target {
            Some(ref t) if in_reach(t) => Motivation::Chase,
            _ => Motivation::Roam,
        },
        Motivation::Chase => match target {
            Some(ref t) if in_reach(t) => Motivation::Chase,
            _ => Motivation::Roam,
        },
    }
}

/// Horizontal velocity for the current motivation. Chasing moves at full
/// speed toward the target; roaming stands still.
pub fn steering_velocity(
    motivation: Motivation,
    self_x: f32,
    target: Option<TargetView>,
    speed: f32,
) -> f32 {
    match (motivation, target) {
        (Motivation::Chase, Some(t)) if t.x < self_x => -speed,
        (Motivation::Chase, Some(t)) if t.x > self_x => speed,
        _ => 0.0,
    }
}
