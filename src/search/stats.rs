//! Statistics from the most recent AI move computation.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics collected while computing one AI move.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Leaf positions statically evaluated.
    pub evaluations: u64,

    /// Deepest iterative-deepening pass that ran (0 for a random opening).
    pub depth_reached: u8,

    /// Score of the chosen move at `depth_reached`, if a search ran.
    pub best_score: Option<i32>,

    /// Whether the move was picked at random instead of searched.
    pub random_opening: bool,

    /// Total thinking time (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Thinking time as a `Duration`.
    #[must_use]
    pub fn thinking_time(&self) -> Duration {
        Duration::from_micros(self.time_us)
    }

    /// Calculate evaluations per second.
    #[must_use]
    pub fn evaluations_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.evaluations as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
