//! Component definitions for the demo systems.
//!
//! Components are plain data: any `'static` type is attachable to an entity,
//! so these are ordinary structs with no trait impls to write.

use glam::IVec2;

/// Grid position of an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub IVec2);

impl Position {
    /// Create a position from its coordinates.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self(IVec2::new(x, y))
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.0.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.0.y
    }
}

/// Per-turn displacement applied by the movement system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity(pub IVec2);

impl Velocity {
    /// Zero velocity.
    pub const ZERO: Self = Self(IVec2::ZERO);

    /// Create a velocity from its per-turn deltas.
    #[must_use]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self(IVec2::new(dx, dy))
    }
}

/// Hit points. May go negative; nothing clamps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
}

impl Health {
    /// Create a health component with the given hit points.
    #[must_use]
    pub const fn new(current: i32) -> Self {
        Self { current }
    }

    /// Returns `true` while hit points are above zero.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Subtract `amount` hit points.
    pub fn damage(&mut self, amount: i32) {
        self.current -= amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_accessors() {
        let p = Position::new(3, -4);
        assert_eq!(p.x(), 3);
        assert_eq!(p.y(), -4);
        assert_eq!(p.0, IVec2::new(3, -4));
    }

    #[test]
    fn test_velocity_zero() {
        assert_eq!(Velocity::default(), Velocity::ZERO);
        assert_eq!(Velocity::new(0, 0), Velocity::ZERO);
    }

    #[test]
    fn test_health_damage() {
        let mut h = Health::new(100);
        assert!(h.is_alive());
        h.damage(10);
        assert_eq!(h.current, 90);
        h.damage(95);
        assert_eq!(h.current, -5);
        assert!(!h.is_alive());
    }
}
