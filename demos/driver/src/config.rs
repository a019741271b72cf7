//! Driver configuration.

use clap::ValueEnum;

/// Which demo scenario to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ScenarioKind {
    /// Four moving entities split across two groups.
    Movement,
    /// Two entities walking into each other and trading damage.
    Collision,
}

/// Configuration for a driver run.
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// The scenario to set up.
    pub scenario: ScenarioKind,
    /// Number of turns to simulate.
    pub turns: u32,
}

impl DemoConfig {
    /// Default number of turns per run.
    pub const DEFAULT_TURNS: u32 = 5;

    /// Create a config for `scenario` with the default turn count.
    #[must_use]
    pub fn new(scenario: ScenarioKind) -> Self {
        Self {
            scenario,
            turns: Self::DEFAULT_TURNS,
        }
    }

    /// Override the number of turns.
    #[must_use]
    pub fn with_turns(mut self, turns: u32) -> Self {
        self.turns = turns;
        self
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self::new(ScenarioKind::Collision)
    }
}
