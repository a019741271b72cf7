//! Collision system: entities sharing a cell damage each other.

use demo_components::{Health, Position};
use ecs_component::Entity;
use tracing::debug;

/// Hit points each side loses per collision.
pub const COLLISION_DAMAGE: i32 = 10;

/// Applies damage to pairs of entities standing on the same position.
#[derive(Debug, Clone, Copy)]
pub struct CollisionSystem {
    damage: i32,
}

impl CollisionSystem {
    /// A collision system dealing [`COLLISION_DAMAGE`] per hit.
    #[must_use]
    pub fn new() -> Self {
        Self {
            damage: COLLISION_DAMAGE,
        }
    }

    /// Override the damage dealt per collision.
    #[must_use]
    pub fn with_damage(mut self, damage: i32) -> Self {
        self.damage = damage;
        self
    }

    /// Returns `true` if both entities have a position and the positions are
    /// equal.
    #[must_use]
    pub fn collides(&self, a: &Entity, b: &Entity) -> bool {
        match (a.get_component::<Position>(), b.get_component::<Position>()) {
            (Some(pa), Some(pb)) => pa == pb,
            _ => false,
        }
    }

    /// Resolve one pair.
    ///
    /// If the two entities collide and both have [`Health`], each loses the
    /// configured damage. Returns `true` if damage was applied.
    pub fn process(&self, a: &mut Entity, b: &mut Entity) -> bool {
        if !self.collides(a, b) || !a.has_component::<Health>() || !b.has_component::<Health>() {
            return false;
        }

        for entity in [a, b] {
            if let Some(health) = entity.get_component_mut::<Health>() {
                health.damage(self.damage);
            }
        }
        debug!(damage = self.damage, "resolved collision");
        true
    }
}

impl Default for CollisionSystem {
    fn default() -> Self {
        Self::new()
    }
}
