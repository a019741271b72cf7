//! Group manager: creates groups and tracks their membership.
//!
//! Groups live for as long as the manager does: there is no way to delete
//! one, so an issued [`GroupId`] stays valid (possibly empty) until the
//! manager is dropped.
//!
//! Every operation that takes a `GroupId` treats an unknown identifier as
//! "nothing to do" rather than as an error. The one exception is
//! [`GroupManager::update_group`], which reports it so bulk callers can tell.

use std::collections::BTreeMap;

use ecs_component::{EntityHandle, EntityManager};
use tracing::{debug, trace};

use crate::error::GroupError;
use crate::group::{Group, GroupId, GroupMembers};
use crate::signature::Signature;

/// Owns every group and its membership list.
#[derive(Debug)]
pub struct GroupManager {
    /// Groups keyed by identifier, iterated in creation order.
    groups: BTreeMap<GroupId, Group>,
    next_id: u64,
}

impl GroupManager {
    /// Create a manager with no groups. The first group gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            groups: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create an empty group with no recorded signature.
    pub fn create_group(&mut self) -> GroupId {
        self.insert_group(Vec::new())
    }

    /// Create an empty group and record `S` as its component signature.
    ///
    /// The signature is descriptive only; it does not restrict or filter
    /// membership.
    pub fn create_group_with<S: Signature>(&mut self) -> GroupId {
        self.insert_group(S::type_names())
    }

    fn insert_group(&mut self, signature: Vec<&'static str>) -> GroupId {
        let id = GroupId(self.next_id);
        self.next_id += 1;
        debug!(group = %id, ?signature, "created group");
        self.groups.insert(id, Group::new(id, signature));
        id
    }

    /// Append `handle` to the group.
    ///
    /// Returns `false` (and does nothing) if the group is unknown. Adding an
    /// entity that is already a member adds a second entry.
    pub fn add_to_group(&mut self, id: GroupId, handle: EntityHandle) -> bool {
        match self.groups.get_mut(&id) {
            Some(group) => {
                group.push(handle);
                trace!(group = %id, entity = %handle, "added to group");
                true
            }
            None => false,
        }
    }

    /// Remove every occurrence of `handle` from the group.
    ///
    /// Returns the number of entries removed; 0 if the group is unknown or
    /// the entity was not a member.
    pub fn remove_from_group(&mut self, id: GroupId, handle: EntityHandle) -> usize {
        let Some(group) = self.groups.get_mut(&id) else {
            return 0;
        };
        let removed = group.remove_all(handle);
        if removed > 0 {
            trace!(group = %id, entity = %handle, removed, "removed from group");
        }
        removed
    }

    /// Returns a snapshot of the group's members in insertion order, or an
    /// empty list if the group is unknown.
    ///
    /// Stale handles are included; see
    /// [`live_entities_in_group`](Self::live_entities_in_group).
    #[must_use]
    pub fn entities_in_group(&self, id: GroupId) -> Vec<EntityHandle> {
        self.groups
            .get(&id)
            .map(|group| group.members().to_vec())
            .unwrap_or_default()
    }

    /// Like [`entities_in_group`](Self::entities_in_group), but skips handles
    /// whose entity is no longer alive in `entities`.
    #[must_use]
    pub fn live_entities_in_group(
        &self,
        id: GroupId,
        entities: &EntityManager,
    ) -> Vec<EntityHandle> {
        self.groups
            .get(&id)
            .map(|group| {
                group
                    .members()
                    .iter()
                    .copied()
                    .filter(|&handle| entities.is_alive(handle))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Returns `true` if `handle` is a member of the group.
    #[must_use]
    pub fn contains(&self, id: GroupId, handle: EntityHandle) -> bool {
        self.groups.get(&id).is_some_and(|group| group.contains(handle))
    }

    /// Returns a group by identifier.
    #[must_use]
    pub fn group(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(&id)
    }

    /// Iterate over all groups in identifier order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    /// Returns the number of groups ever created.
    #[must_use]
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Apply a batch of membership changes to one group.
    ///
    /// # Errors
    ///
    /// Returns [`GroupError::UnknownGroup`] if no group has this identifier;
    /// `f` is not called in that case.
    pub fn update_group<R>(
        &mut self,
        id: GroupId,
        f: impl FnOnce(&mut GroupMembers<'_>) -> R,
    ) -> Result<R, GroupError> {
        let group = self.groups.get_mut(&id).ok_or(GroupError::UnknownGroup(id))?;
        let mut members = GroupMembers::new(group);
        let result = f(&mut members);
        trace!(group = %id, len = members.as_slice().len(), "updated group");
        Ok(result)
    }

    /// Remove every handle whose entity is no longer alive in `entities`
    /// from every group.
    ///
    /// Returns the total number of entries removed.
    pub fn prune(&mut self, entities: &EntityManager) -> usize {
        let removed: usize = self
            .groups
            .values_mut()
            .map(|group| group.retain(|&handle| entities.is_alive(handle)))
            .sum();
        if removed > 0 {
            debug!(removed, "pruned stale group members");
        }
        removed
    }
}

impl Default for GroupManager {
    fn default() -> Self {
        Self::new()
    }
}
