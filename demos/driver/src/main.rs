//! # ecs_demo: Driver
//!
//! Runs one of the demo scenarios turn by turn and prints each entity's
//! state after every turn.
//!
//! ## Turn Sequence
//!
//! 1. Ask the group manager for each group's live members.
//! 2. Run the movement system over every member.
//! 3. In the collision scenario, run the collision system over every pair
//!    drawn from the two groups.
//! 4. Read components back out and report them.

mod config;
mod scenario;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{DemoConfig, ScenarioKind};
use scenario::Scenario;

#[derive(Parser)]
#[command(name = "ecs_demo", about = "Run the entity-component store demo scenarios")]
struct Args {
    /// Scenario to run
    #[arg(short, long, value_enum, default_value = "collision")]
    scenario: ScenarioKind,

    /// Number of turns to simulate
    #[arg(short, long, default_value_t = DemoConfig::DEFAULT_TURNS)]
    turns: u32,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("ecs_demo=info".parse()?))
        .init();

    let args = Args::parse();
    let config = DemoConfig::new(args.scenario).with_turns(args.turns);
    info!(scenario = ?config.scenario, turns = config.turns, "demo starting");

    let mut scenario = Scenario::from_kind(config.scenario)?;
    for report in scenario.run(config.turns) {
        println!("------- Turn {} -------", report.turn);
        for row in &report.rows {
            println!("{row}");
        }
        println!();
    }

    info!(
        entities = scenario.entities().len(),
        groups = scenario.groups().group_count(),
        "demo finished"
    );
    Ok(())
}
