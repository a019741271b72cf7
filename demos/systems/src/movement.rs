//! Movement system: adds velocity to position once per call.

use demo_components::{Position, Velocity};
use ecs_component::Entity;
use tracing::trace;

/// Moves entities that have both a [`Position`] and a [`Velocity`].
#[derive(Debug, Clone, Copy, Default)]
pub struct MovementSystem;

impl MovementSystem {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Advance `entity` by one step.
    ///
    /// Returns `false` and leaves the entity untouched if either component is
    /// missing.
    pub fn process(&self, entity: &mut Entity) -> bool {
        let Some(velocity) = entity.component_value::<Velocity>() else {
            return false;
        };
        let Some(position) = entity.get_component_mut::<Position>() else {
            return false;
        };
        position.0 += velocity.0;
        trace!(x = position.x(), y = position.y(), "moved entity");
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mover(position: Position, velocity: Velocity) -> Entity {
        let mut entity = Entity::new();
        entity.add_component(position);
        entity.add_component(velocity);
        entity
    }

    #[test]
    fn test_single_step() {
        let mut entity = mover(Position::new(0, 0), Velocity::new(1, 1));
        assert!(MovementSystem::new().process(&mut entity));
        assert_eq!(entity.component_value::<Position>(), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_five_steps() {
        let system = MovementSystem::new();
        let mut entity = mover(Position::new(0, 0), Velocity::new(1, 1));
        for _ in 0..5 {
            system.process(&mut entity);
        }
        assert_eq!(entity.component_value::<Position>(), Some(Position::new(5, 5)));
    }

    #[test]
    fn test_negative_velocity() {
        let mut entity = mover(Position::new(10, 10), Velocity::new(-1, -1));
        MovementSystem::new().process(&mut entity);
        assert_eq!(entity.component_value::<Position>(), Some(Position::new(9, 9)));
    }

    #[test]
    fn test_missing_component_is_skipped() {
        let mut no_velocity = Entity::new();
        no_velocity.add_component(Position::new(2, 2));
        assert!(!MovementSystem::new().process(&mut no_velocity));
        assert_eq!(
            no_velocity.component_value::<Position>(),
            Some(Position::new(2, 2))
        );

        let mut no_position = Entity::new();
        no_position.add_component(Velocity::new(1, 1));
        assert!(!MovementSystem::new().process(&mut no_position));
        assert!(!no_position.has_component::<Position>());
    }
}
