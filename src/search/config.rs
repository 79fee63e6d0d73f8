//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default thinking time per AI move, in milliseconds.
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1000;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Thinking time per move (milliseconds) used by `SearchEngine::think`.
    /// Iterative deepening stops after the first depth that overruns it.
    pub time_budget_ms: u64,

    /// Opening plies during which shallow AIs play a random move.
    pub random_opening_plies: usize,

    /// Only AIs searching shallower than this play random openings.
    pub random_opening_max_depth: u8,

    /// Seed for the opening RNG (`None` = seeded from entropy on first use).
    pub seed: Option<u64>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            random_opening_plies: 2,
            random_opening_max_depth: 5,
            seed: None,
        }
    }
}

impl SearchConfig {
    /// Thinking time per move.
    #[must_use]
    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }

    /// Create a new config with a custom time budget.
    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget_ms = budget.as_millis() as u64;
        self
    }

    /// Create a new config with custom random-opening limits.
    #[must_use]
    pub fn with_random_opening(mut self, plies: usize, max_depth: u8) -> Self {
        self.random_opening_plies = plies;
        self.random_opening_max_depth = max_depth;
        self
    }

    /// Create a new config with a fixed seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
