//! # ecs_group
//!
//! Groups batch entity handles into ordered, duplicate-permitting
//! collections that systems iterate over.
//!
//! This crate provides:
//!
//! - [`GroupId`]: monotonically assigned group identifiers, starting at 1.
//! - [`Group`]: one group's membership list and its descriptive signature.
//! - [`GroupManager`]: creates groups and mutates their membership.
//! - [`Signature`]: describes the component tuple a group is meant for.
//! - [`GroupError`]: errors returned by the bulk update API.
//!
//! Group membership is independent of entity lifetime. A handle whose entity
//! has been destroyed stays in its groups and resolves to nothing; use
//! [`GroupManager::live_entities_in_group`] to skip such handles or
//! [`GroupManager::prune`] to drop them.

pub mod error;
pub mod group;
pub mod manager;
pub mod signature;

pub use error::GroupError;
pub use group::{Group, GroupId, GroupMembers};
pub use manager::GroupManager;
pub use signature::Signature;
