//! Per-entity component storage.
//!
//! An [`Entity`] maps each [`ComponentTypeId`] to one boxed component value.
//! Values are stored type-erased as `Box<dyn Any>` and recovered with a
//! checked downcast, so a lookup can never hand out a value of the wrong
//! type: a mismatch reads as absence.

use std::any::Any;
use std::collections::HashMap;
use std::fmt;

use tracing::trace;

use crate::component::{Component, ComponentTypeId};

/// A stored component together with its type name for diagnostics.
struct ComponentSlot {
    name: &'static str,
    value: Box<dyn Any>,
}

/// An entity's component storage: at most one component per type.
///
/// Entities are normally created through an
/// [`EntityManager`](crate::EntityManager), which owns them, but a standalone
/// `Entity` is a perfectly usable component bag.
///
/// # Examples
///
/// ```rust
/// use ecs_component::Entity;
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Health(i32);
///
/// let mut entity = Entity::new();
/// entity.add_component(Health(100));
/// entity.add_component(Health(90));
/// assert_eq!(entity.get_component::<Health>(), Some(&Health(90)));
///
/// entity.remove_component::<Health>();
/// assert!(entity.get_component::<Health>().is_none());
/// ```
#[derive(Default)]
pub struct Entity {
    components: HashMap<ComponentTypeId, ComponentSlot>,
}

impl Entity {
    /// Create an entity with no components.
    #[must_use]
    pub fn new() -> Self {
        Self {
            components: HashMap::new(),
        }
    }

    /// Attach `component`, replacing any existing component of the same type.
    ///
    /// Returns the replaced component, if there was one.
    pub fn add_component<T: Component>(&mut self, component: T) -> Option<T> {
        let name = T::type_name();
        trace!(component = name, "attaching component");
        let previous = self.components.insert(
            ComponentTypeId::of::<T>(),
            ComponentSlot {
                name,
                value: Box::new(component),
            },
        );
        previous
            .and_then(|slot| slot.value.downcast::<T>().ok())
            .map(|boxed| *boxed)
    }

    /// Detach the component of type `T`, returning it.
    ///
    /// Removing a component the entity does not have is a no-op.
    pub fn remove_component<T: Component>(&mut self) -> Option<T> {
        let slot = self.components.remove(&ComponentTypeId::of::<T>())?;
        trace!(component = slot.name, "detached component");
        slot.value.downcast::<T>().ok().map(|boxed| *boxed)
    }

    /// Get a shared reference to the component of type `T`.
    #[must_use]
    pub fn get_component<T: Component>(&self) -> Option<&T> {
        self.components
            .get(&ComponentTypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_ref::<T>())
    }

    /// Get a mutable reference to the component of type `T`.
    #[must_use]
    pub fn get_component_mut<T: Component>(&mut self) -> Option<&mut T> {
        self.components
            .get_mut(&ComponentTypeId::of::<T>())
            .and_then(|slot| slot.value.downcast_mut::<T>())
    }

    /// Returns a copy of the component of type `T`.
    #[must_use]
    pub fn component_value<T: Component + Clone>(&self) -> Option<T> {
        self.get_component::<T>().cloned()
    }

    /// Returns `true` if a component of type `T` is attached.
    #[must_use]
    pub fn has_component<T: Component>(&self) -> bool {
        self.get_component::<T>().is_some()
    }

    /// Returns the number of attached components.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Returns `true` if no components are attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Returns the type names of all attached components, in no particular
    /// order.
    pub fn component_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.components.values().map(|slot| slot.name)
    }

    /// Drop every attached component.
    pub fn clear(&mut self) {
        self.components.clear();
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.component_names().collect();
        names.sort_unstable();
        f.debug_struct("Entity").field("components", &names).finish()
    }
}
