//! Entity ownership and lifecycle.
//!
//! The [`EntityManager`] is an arena of entity slots. Everyone else, groups
//! included, refers to entities through [`EntityHandle`]s.
//!
//! ## Memory Layout
//!
//! ```text
//! slots:     [ {gen 0, Some}, {gen 1, None}, {gen 0, Some} ]
//! free_list: [1]                <- slots available for reuse
//! live:      [h0, h2]           <- live handles, creation order
//! ```
//!
//! Creating pops from `free_list` if possible, otherwise pushes a fresh slot.
//! Destroying drops the entity, bumps the slot generation so outstanding
//! handles go stale, and pushes the index onto `free_list`.

use tracing::debug;

use crate::entity::Entity;
use crate::error::EntityError;
use crate::handle::EntityHandle;

#[derive(Debug, Default)]
struct Slot {
    generation: u32,
    entity: Option<Entity>,
}

/// Creates, owns, and destroys entities.
#[derive(Debug, Default)]
pub struct EntityManager {
    slots: Vec<Slot>,
    free_list: Vec<u32>,
    /// Live handles in creation order.
    live: Vec<EntityHandle>,
}

impl EntityManager {
    /// Create an empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: Vec::new(),
        }
    }

    /// Allocate a new entity with no components and start tracking it.
    pub fn create_entity(&mut self) -> EntityHandle {
        let handle = if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.entity = Some(Entity::new());
            EntityHandle::from_raw_parts(index, slot.generation)
        } else {
            let index = u32::try_from(self.slots.len()).unwrap_or_else(|_| {
                panic!("entity arena exhausted: more than {} slots", u32::MAX)
            });
            self.slots.push(Slot {
                generation: 0,
                entity: Some(Entity::new()),
            });
            EntityHandle::from_raw_parts(index, 0)
        };

        self.live.push(handle);
        debug!(entity = %handle, "created entity");
        handle
    }

    /// Create an entity and let `init` attach its components.
    pub fn create_entity_with(&mut self, init: impl FnOnce(&mut Entity)) -> EntityHandle {
        let handle = self.create_entity();
        if let Some(entity) = self.get_mut(handle) {
            init(entity);
        }
        handle
    }

    /// Destroy an entity, dropping all of its components.
    ///
    /// Returns `true` if the entity was alive. Destroying a stale or foreign
    /// handle is a no-op. Groups that still hold the handle are not touched;
    /// the handle simply resolves to nothing from now on.
    pub fn destroy_entity(&mut self, handle: EntityHandle) -> bool {
        if !self.is_alive(handle) {
            return false;
        }

        let slot = &mut self.slots[handle.index() as usize];
        slot.entity = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index());
        self.live.retain(|&h| h != handle);

        debug!(entity = %handle, "destroyed entity");
        true
    }

    /// Returns `true` if `handle` refers to a live entity.
    #[must_use]
    pub fn is_alive(&self, handle: EntityHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Resolve a handle to its entity.
    #[must_use]
    pub fn get(&self, handle: EntityHandle) -> Option<&Entity> {
        self.slots
            .get(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.entity.as_ref())
    }

    /// Resolve a handle to its entity, mutably.
    #[must_use]
    pub fn get_mut(&mut self, handle: EntityHandle) -> Option<&mut Entity> {
        self.slots
            .get_mut(handle.index() as usize)
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.entity.as_mut())
    }

    /// Resolve two distinct handles mutably at the same time.
    ///
    /// Returns `None` if either handle is stale or both refer to the same
    /// entity.
    #[must_use]
    pub fn get_pair_mut(
        &mut self,
        a: EntityHandle,
        b: EntityHandle,
    ) -> Option<(&mut Entity, &mut Entity)> {
        if a.index() == b.index() || !self.is_alive(a) || !self.is_alive(b) {
            return None;
        }

        let (ia, ib) = (a.index() as usize, b.index() as usize);
        let (low, high) = (ia.min(ib), ia.max(ib));
        let (head, tail) = self.slots.split_at_mut(high);
        let first = head[low].entity.as_mut()?;
        let second = tail[0].entity.as_mut()?;

        if ia < ib {
            Some((first, second))
        } else {
            Some((second, first))
        }
    }

    /// Like [`get`](Self::get), but reports a stale handle as an error.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Stale`] if the entity is not alive.
    pub fn entity(&self, handle: EntityHandle) -> Result<&Entity, EntityError> {
        self.get(handle).ok_or(EntityError::Stale(handle))
    }

    /// Like [`get_mut`](Self::get_mut), but reports a stale handle as an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`EntityError::Stale`] if the entity is not alive.
    pub fn entity_mut(&mut self, handle: EntityHandle) -> Result<&mut Entity, EntityError> {
        self.get_mut(handle).ok_or(EntityError::Stale(handle))
    }

    /// Returns the handles of all live entities in creation order.
    #[must_use]
    pub fn handles(&self) -> &[EntityHandle] {
        &self.live
    }

    /// Iterate over live entities in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (EntityHandle, &Entity)> + '_ {
        self.live
            .iter()
            .filter_map(|&handle| self.get(handle).map(|entity| (handle, entity)))
    }

    /// Returns the number of live entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.live.len()
    }

    /// Returns `true` if no entities are alive.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }

    /// Destroy every live entity.
    pub fn clear(&mut self) {
        for handle in std::mem::take(&mut self.live) {
            let slot = &mut self.slots[handle.index() as usize];
            slot.entity = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free_list.push(handle.index());
        }
        debug!("destroyed all entities");
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Health(i32);

    #[test]
    fn test_create_entity_is_empty_and_tracked() {
        let mut manager = EntityManager::new();
        let e = manager.create_entity();
        assert!(manager.is_alive(e));
        assert_eq!(manager.len(), 1);
        assert!(manager.get(e).is_some_and(Entity::is_empty));
    }

    #[test]
    fn test_handles_preserve_creation_order() {
        let mut manager = EntityManager::new();
        let e1 = manager.create_entity();
        let e2 = manager.create_entity();
        let e3 = manager.create_entity();
        assert_eq!(manager.handles(), &[e1, e2, e3]);
    }

    #[test]
    fn test_destroy_entity() {
        let mut manager = EntityManager::new();
        let e1 = manager.create_entity();
        let e2 = manager.create_entity();

        assert!(manager.destroy_entity(e1));
        assert!(!manager.is_alive(e1));
        assert!(manager.get(e1).is_none());
        assert_eq!(manager.handles(), &[e2]);
    }

    #[test]
    fn test_destroy_untracked_is_noop() {
        let mut manager = EntityManager::new();
        let e = manager.create_entity();
        assert!(manager.destroy_entity(e));
        assert!(!manager.destroy_entity(e));
        assert!(!manager.destroy_entity(EntityHandle::from_raw_parts(99, 0)));
        assert!(manager.is_empty());
    }

    #[test]
    fn test_destroy_releases_components() {
        let shared = Rc::new(());
        let mut manager = EntityManager::new();
        let e = manager.create_entity_with(|entity| {
            entity.add_component(Rc::clone(&shared));
        });
        assert_eq!(Rc::strong_count(&shared), 2);

        manager.destroy_entity(e);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_stale_handle_after_slot_reuse() {
        let mut manager = EntityManager::new();
        let old = manager.create_entity_with(|e| {
            e.add_component(Health(100));
        });
        manager.destroy_entity(old);

        let new = manager.create_entity();
        assert_eq!(new.index(), old.index());
        assert_ne!(new, old);
        assert!(manager.get(old).is_none());
        assert!(manager.get(new).is_some_and(|e| !e.has_component::<Health>()));
    }

    #[test]
    fn test_get_mut_mutates_in_place() {
        let mut manager = EntityManager::new();
        let e = manager.create_entity();
        if let Some(entity) = manager.get_mut(e) {
            entity.add_component(Health(10));
        }
        assert_eq!(
            manager.get(e).and_then(|e| e.component_value::<Health>()),
            Some(Health(10))
        );
    }

    #[test]
    fn test_get_pair_mut() {
        let mut manager = EntityManager::new();
        let a = manager.create_entity_with(|e| {
            e.add_component(Health(1));
        });
        let b = manager.create_entity_with(|e| {
            e.add_component(Health(2));
        });

        let (ea, eb) = manager.get_pair_mut(b, a).unwrap();
        assert_eq!(ea.component_value::<Health>(), Some(Health(2)));
        assert_eq!(eb.component_value::<Health>(), Some(Health(1)));
    }

    #[test]
    fn test_get_pair_mut_rejects_same_or_stale() {
        let mut manager = EntityManager::new();
        let a = manager.create_entity();
        let b = manager.create_entity();
        assert!(manager.get_pair_mut(a, a).is_none());

        manager.destroy_entity(b);
        assert!(manager.get_pair_mut(a, b).is_none());
    }

    #[test]
    fn test_strict_accessors() {
        let mut manager = EntityManager::new();
        let e = manager.create_entity();
        assert!(manager.entity(e).is_ok());

        manager.destroy_entity(e);
        assert_eq!(manager.entity(e).unwrap_err(), EntityError::Stale(e));
        assert!(manager.entity_mut(e).is_err());
    }

    #[test]
    fn test_iter_yields_live_entities() {
        let mut manager = EntityManager::new();
        let e1 = manager.create_entity();
        let e2 = manager.create_entity();
        let e3 = manager.create_entity();
        manager.destroy_entity(e2);

        let handles: Vec<_> = manager.iter().map(|(h, _)| h).collect();
        assert_eq!(handles, vec![e1, e3]);
    }

    #[test]
    fn test_clear_destroys_everything() {
        let mut manager = EntityManager::new();
        let e1 = manager.create_entity();
        let e2 = manager.create_entity();
        manager.clear();

        assert!(manager.is_empty());
        assert!(!manager.is_alive(e1));
        assert!(!manager.is_alive(e2));
    }
}
