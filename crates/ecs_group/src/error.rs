//! Group-layer error types.

use crate::group::GroupId;

/// Errors returned by [`GroupManager::update_group`](crate::GroupManager::update_group).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GroupError {
    /// No group with this identifier was ever created.
    #[error("unknown group {0}")]
    UnknownGroup(GroupId),
}
