//! # ecs_component
//!
//! The "E" and "C" of the store: what a component is, how an entity holds
//! its components, and who owns the entities.
//!
//! This crate provides:
//!
//! - [`Component`] trait: the marker every attachable data type satisfies.
//! - [`ComponentTypeId`]: per-type storage key, no registry required.
//! - [`Entity`]: type-keyed component storage, at most one value per type.
//! - [`EntityHandle`]: generational, revocable reference to an entity.
//! - [`EntityManager`]: arena that creates, tracks, and destroys entities.
//! - [`EntityError`]: errors returned by the strict accessors.

pub mod component;
pub mod entity;
pub mod error;
pub mod handle;
pub mod manager;

pub use component::{Component, ComponentTypeId};
pub use entity::Entity;
pub use error::EntityError;
pub use handle::EntityHandle;
pub use manager::EntityManager;
