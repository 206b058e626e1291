//! Bounded current/max stat used for health and oxygen.

use serde::{Deserialize, Serialize};

/// A clamped resource value. `0 <= current <= max` always holds; a gauge
/// starts full.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    current: f32,
    max: f32,
}

impl Gauge {
    pub fn new(max: f32) -> Self {
        let max = max.max(0.0);
        Self { current: max, max }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    /// Set the current value, optionally changing the maximum first. The
    /// current value is clamped into `[0, max]` after any max change.
    pub fn set_value(&mut self, current: f32, max: Option<f32>) {
        if let Some(max) = max {
            self.max = max.max(0.0);
        }
        self.current = current.clamp(0.0, self.max);
    }

    /// Fill level in `[0, 1]`. A zero-capacity gauge reads as empty.
    pub fn fraction(&self) -> f32 {
        if self.max == 0.0 {
            0.0
        } else {
            self.current / self.max
        }
    }

    pub fn is_empty(&self) -> bool {
        self.current <= 0.0
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    pub fn drain(&mut self, amount: f32) {
        self.set_value(self.current - amount.max(0.0), None);
    }

    pub fn refill(&mut self, amount: f32) {
        self.set_value(self.current + amount.max(0.0), None);
    }
}
