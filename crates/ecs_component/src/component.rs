//! Core [`Component`] trait and the type identity used to key storage.
//!
//! ## Type Identity
//!
//! [`ComponentTypeId`] wraps [`std::any::TypeId`], a token the compiler emits
//! once per monomorphised type. Any `'static` type gets a distinct key without
//! a central registration step. The value is only stable within a single run
//! of the program, so it must never be persisted or sent across processes.

use std::any::TypeId;
use std::fmt;

/// A unique identifier for a component type.
///
/// Two `ComponentTypeId`s compare equal exactly when they were produced for
/// the same Rust type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentTypeId(TypeId);

impl ComponentTypeId {
    /// Returns the [`ComponentTypeId`] for the component type `T`.
    #[must_use]
    pub fn of<T: Component>() -> Self {
        Self(TypeId::of::<T>())
    }

    /// Returns the underlying [`TypeId`].
    #[must_use]
    pub fn raw(self) -> TypeId {
        self.0
    }
}

impl fmt::Debug for ComponentTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentTypeId({:?})", self.0)
    }
}

/// The component marker trait.
///
/// Components carry no behaviour of their own: any `'static` type can be
/// attached to an [`Entity`](crate::Entity), so the trait is implemented for
/// every such type automatically.
///
/// # Examples
///
/// ```rust
/// use ecs_component::{Component, ComponentTypeId};
///
/// #[derive(Debug, Clone, Copy, PartialEq)]
/// struct Health {
///     current: i32,
/// }
///
/// assert_eq!(Health::component_type_id(), ComponentTypeId::of::<Health>());
/// assert!(Health::type_name().ends_with("Health"));
/// ```
pub trait Component: 'static {
    /// A human-readable name for this component type, used in logs and
    /// diagnostics only.
    fn type_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the [`ComponentTypeId`] for this component.
    fn component_type_id() -> ComponentTypeId
    where
        Self: Sized,
    {
        ComponentTypeId::of::<Self>()
    }
}

impl<T: 'static> Component for T {}
