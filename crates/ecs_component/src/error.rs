//! Entity-layer error types.

use crate::handle::EntityHandle;

/// Errors returned by the strict entity accessors.
///
/// The primary API reports absence as `None`; these variants exist for
/// callers that would rather propagate a stale handle with `?`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityError {
    /// The handle's entity was destroyed, or the handle was never issued by
    /// this manager.
    #[error("entity {0} is not alive")]
    Stale(EntityHandle),
}
