//! Input snapshot consumed by the engine each tick.
//!
//! The host (or harness) polls its keyboard and hands the engine a plain
//! held-keys snapshot; the engine derives "just pressed" edges by comparing
//! against the previous tick, so callers never track edge state themselves.

use digdive_logic::movement::InputAxes;
use serde::{Deserialize, Serialize};

/// Keys held down during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    /// Dig action key.
    pub action: bool,
    /// Backfill action (shift).
    pub fill: bool,
    /// Throw a rock.
    pub throw: bool,
}

impl InputState {
    pub fn axes(&self) -> InputAxes {
        InputAxes {
            left: self.left,
            right: self.right,
            up: self.up,
            down: self.down,
        }
    }
}

/// Rising edges between two consecutive snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub action_pressed: bool,
    pub fill_pressed: bool,
    pub throw_pressed: bool,
}

impl InputEdges {
    pub fn detect(previous: InputState, current: InputState) -> Self {
        Self {
            action_pressed: current.action && !previous.action,
            fill_pressed: current.fill && !previous.fill,
            throw_pressed: current.throw && !previous.throw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_detection() {
        let idle = InputState::default();
        let held = InputState {
            action: true,
            ..Default::default()
        };

        let edges = InputEdges::detect(idle, held);
        assert!(edges.action_pressed);
        assert!(!edges.fill_pressed);

        // Holding the key across ticks is not a new press.
        let edges = InputEdges::detect(held, held);
        assert!(!edges.action_pressed);

        // Release and press again fires again.
        let edges = InputEdges::detect(idle, held);
        assert!(edges.action_pressed);
    }
}
