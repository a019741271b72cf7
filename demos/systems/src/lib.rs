//! Demo systems for the entity-component store.
//!
//! A system is any unit exposing `process` over one entity or a pair of
//! entities. Systems are handed entities resolved from group members and
//! only act when the components they need are present.

pub mod collision;
pub mod movement;

pub use collision::CollisionSystem;
pub use movement::MovementSystem;
