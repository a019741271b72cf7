//! Entity handles.
//!
//! An [`EntityHandle`] is a lightweight, `Copy` reference to an entity owned
//! by an [`EntityManager`](crate::EntityManager). It pairs a slot index with
//! a generation counter: when an entity is destroyed its slot's generation is
//! bumped, so every handle still pointing at the old generation resolves to
//! nothing, even after the slot has been handed to a new entity.
//!
//! ```text
//! EntityHandle { index: 3, generation: 0 }  <- original
//! EntityHandle { index: 3, generation: 1 }  <- slot reused after destroy
//! ```

use std::fmt;

/// A generational reference to an entity.
///
/// A handle is only meaningful for the manager that issued it. Equality is
/// identity: two handles are equal exactly when they refer to the same
/// entity incarnation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityHandle {
    index: u32,
    generation: u32,
}

impl EntityHandle {
    /// Build a handle from its raw parts.
    #[must_use]
    pub const fn from_raw_parts(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns the arena slot index.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    /// Returns the slot generation this handle was issued for.
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityHandle({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for EntityHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.index, self.generation)
    }
}
