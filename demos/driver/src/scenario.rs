//! Demo scenarios and the per-turn loop.
//!
//! A [`Scenario`] owns an entity manager, a group manager, and the systems.
//! Each turn it pulls the live members of its groups, feeds them to the
//! systems, and reads the components back out into a [`TurnReport`].

use std::fmt;

use anyhow::Result;
use demo_components::{Health, Position, Velocity};
use demo_systems::{CollisionSystem, MovementSystem};
use ecs_component::{EntityHandle, EntityManager};
use ecs_group::{GroupId, GroupManager};
use tracing::{debug, info};

use crate::config::ScenarioKind;

/// One entity's state as seen at the end of a turn.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityReport {
    /// Position of the group in the scenario's reporting order, from 1.
    pub group: usize,
    pub entity: EntityHandle,
    pub position: Option<Position>,
    pub health: Option<Health>,
}

impl fmt::Display for EntityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group {} - Entity {}", self.group, self.entity)?;
        match self.position {
            Some(p) => write!(f, " - Position: ({}, {})", p.x(), p.y())?,
            None => write!(f, " - Position: none")?,
        }
        if let Some(h) = self.health {
            write!(f, ", Health: {}", h.current)?;
        }
        Ok(())
    }
}

/// Everything reported after one turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnReport {
    /// Turn number, from 1.
    pub turn: u32,
    pub rows: Vec<EntityReport>,
}

/// A populated world plus the systems that run over it.
#[derive(Debug)]
pub struct Scenario {
    entities: EntityManager,
    groups: GroupManager,
    /// Groups processed and reported each turn, in order.
    active: Vec<GroupId>,
    movement: MovementSystem,
    /// Collision pass over every (first group, second group) pair, if any.
    collision: Option<(CollisionSystem, GroupId, GroupId)>,
    turn: u32,
}

impl Scenario {
    /// Build the scenario selected by `kind`.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity created during setup cannot be resolved.
    pub fn from_kind(kind: ScenarioKind) -> Result<Self> {
        match kind {
            ScenarioKind::Movement => Self::movement(),
            ScenarioKind::Collision => Self::collision(),
        }
    }

    fn empty() -> Self {
        Self {
            entities: EntityManager::new(),
            groups: GroupManager::new(),
            active: Vec::new(),
            movement: MovementSystem::new(),
            collision: None,
            turn: 0,
        }
    }

    /// Four movers split evenly over two groups.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity created during setup cannot be resolved.
    pub fn movement() -> Result<Self> {
        let mut scenario = Self::empty();
        let g1 = scenario.groups.create_group_with::<(Position, Velocity)>();
        let g2 = scenario.groups.create_group_with::<(Position, Velocity)>();

        let movers = [
            (g1, Position::new(0, 0), Velocity::new(1, 1)),
            (g1, Position::new(10, 10), Velocity::new(-1, -1)),
            (g2, Position::new(5, 5), Velocity::new(2, 2)),
            (g2, Position::new(9, 9), Velocity::new(-2, -2)),
        ];
        for (group, position, velocity) in movers {
            let handle = scenario.spawn(position, velocity, None)?;
            scenario.groups.add_to_group(group, handle);
        }

        scenario.active = vec![g1, g2];
        Ok(scenario)
    }

    /// Two entities, one per group, walking toward each other. They meet on
    /// turn 5.
    ///
    /// # Errors
    ///
    /// Returns an error if an entity created during setup cannot be resolved.
    pub fn collision() -> Result<Self> {
        let mut scenario = Self::empty();
        let g1 = scenario
            .groups
            .create_group_with::<(Position, Velocity, Health)>();
        let g2 = scenario
            .groups
            .create_group_with::<(Position, Velocity, Health)>();

        let a = scenario.spawn(
            Position::new(0, 0),
            Velocity::new(1, 1),
            Some(Health::new(100)),
        )?;
        let b = scenario.spawn(
            Position::new(10, 10),
            Velocity::new(-1, -1),
            Some(Health::new(100)),
        )?;
        scenario.groups.add_to_group(g1, a);
        scenario.groups.add_to_group(g2, b);

        scenario.active = vec![g1, g2];
        scenario.collision = Some((CollisionSystem::new(), g1, g2));
        Ok(scenario)
    }

    fn spawn(
        &mut self,
        position: Position,
        velocity: Velocity,
        health: Option<Health>,
    ) -> Result<EntityHandle> {
        let handle = self.entities.create_entity();
        let entity = self.entities.entity_mut(handle)?;
        entity.add_component(position);
        entity.add_component(velocity);
        if let Some(health) = health {
            entity.add_component(health);
        }
        Ok(handle)
    }

    /// Returns the scenario's entity manager.
    #[must_use]
    pub fn entities(&self) -> &EntityManager {
        &self.entities
    }

    /// Returns the scenario's group manager.
    #[must_use]
    pub fn groups(&self) -> &GroupManager {
        &self.groups
    }

    /// Run one turn and report the resulting state.
    pub fn step(&mut self) -> TurnReport {
        self.turn += 1;

        let mut moved = 0usize;
        for &group in &self.active {
            for handle in self.groups.live_entities_in_group(group, &self.entities) {
                if let Some(entity) = self.entities.get_mut(handle)
                    && self.movement.process(entity)
                {
                    moved += 1;
                }
            }
        }

        let mut collisions = 0usize;
        if let Some((system, first, second)) = &self.collision {
            let lhs = self.groups.live_entities_in_group(*first, &self.entities);
            let rhs = self.groups.live_entities_in_group(*second, &self.entities);
            for &a in &lhs {
                for &b in &rhs {
                    if let Some((ea, eb)) = self.entities.get_pair_mut(a, b)
                        && system.process(ea, eb)
                    {
                        collisions += 1;
                    }
                }
            }
        }

        debug!(turn = self.turn, moved, collisions, "turn processed");
        if collisions > 0 {
            info!(turn = self.turn, collisions, "collisions resolved");
        }

        TurnReport {
            turn: self.turn,
            rows: self.report(),
        }
    }

    /// Run `turns` turns, returning one report per turn.
    pub fn run(&mut self, turns: u32) -> Vec<TurnReport> {
        (0..turns).map(|_| self.step()).collect()
    }

    fn report(&self) -> Vec<EntityReport> {
        let mut rows = Vec::new();
        for (index, &group) in self.active.iter().enumerate() {
            for handle in self.groups.live_entities_in_group(group, &self.entities) {
                let Some(entity) = self.entities.get(handle) else {
                    continue;
                };
                rows.push(EntityReport {
                    group: index + 1,
                    entity: handle,
                    position: entity.component_value::<Position>(),
                    health: entity.component_value::<Health>(),
                });
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn positions(report: &TurnReport) -> Vec<(i32, i32)> {
        report
            .rows
            .iter()
            .filter_map(|row| row.position)
            .map(|p| (p.x(), p.y()))
            .collect()
    }

    fn healths(report: &TurnReport) -> Vec<i32> {
        report
            .rows
            .iter()
            .filter_map(|row| row.health)
            .map(|h| h.current)
            .collect()
    }

    #[test]
    fn test_movement_scenario_setup() {
        let scenario = Scenario::movement().unwrap();
        assert_eq!(scenario.entities().len(), 4);
        assert_eq!(scenario.groups().group_count(), 2);
        for group in scenario.groups().groups() {
            assert_eq!(group.len(), 2);
            assert_eq!(group.signature().len(), 2);
        }
    }

    #[test]
    fn test_movement_one_turn() {
        let mut scenario = Scenario::movement().unwrap();
        let report = scenario.step();
        assert_eq!(report.turn, 1);
        assert_eq!(positions(&report), vec![(1, 1), (9, 9), (7, 7), (7, 7)]);
    }

    #[test]
    fn test_movement_five_turns() {
        let mut scenario = Scenario::movement().unwrap();
        let reports = scenario.run(5);
        assert_eq!(reports.len(), 5);

        let last = reports.last().unwrap();
        assert_eq!(last.turn, 5);
        assert_eq!(positions(last), vec![(5, 5), (5, 5), (15, 15), (-1, -1)]);
        // No health components in this scenario.
        assert!(healths(last).is_empty());
    }

    #[test]
    fn test_collision_happens_on_turn_five() {
        let mut scenario = Scenario::collision().unwrap();
        let reports = scenario.run(5);

        for report in &reports[..4] {
            assert_eq!(healths(report), vec![100, 100]);
        }
        assert_eq!(positions(&reports[4]), vec![(5, 5), (5, 5)]);
        assert_eq!(healths(&reports[4]), vec![90, 90]);
    }

    #[test]
    fn test_collision_pair_separates_after_meeting() {
        let mut scenario = Scenario::collision().unwrap();
        let reports = scenario.run(6);
        assert_eq!(positions(&reports[5]), vec![(6, 6), (4, 4)]);
        assert_eq!(healths(&reports[5]), vec![90, 90]);
    }

    #[test]
    fn test_report_rows_are_grouped() {
        let mut scenario = Scenario::collision().unwrap();
        let report = scenario.step();
        let groups: Vec<_> = report.rows.iter().map(|row| row.group).collect();
        assert_eq!(groups, vec![1, 2]);
    }

    #[test]
    fn test_report_display() {
        let mut scenario = Scenario::collision().unwrap();
        let report = scenario.step();
        assert_eq!(
            report.rows[0].to_string(),
            "Group 1 - Entity 0v0 - Position: (1, 1), Health: 100"
        );
        assert_eq!(
            report.rows[1].to_string(),
            "Group 2 - Entity 1v0 - Position: (9, 9), Health: 100"
        );
    }

    #[test]
    fn test_from_kind() {
        let movement = Scenario::from_kind(ScenarioKind::Movement).unwrap();
        assert_eq!(movement.entities().len(), 4);
        let collision = Scenario::from_kind(ScenarioKind::Collision).unwrap();
        assert_eq!(collision.entities().len(), 2);
    }
}
