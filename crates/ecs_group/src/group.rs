//! Group identifiers and membership lists.

use std::fmt;

use ecs_component::EntityHandle;

/// A group identifier.
///
/// Identifiers are issued by a [`GroupManager`](crate::GroupManager) in
/// strictly increasing order starting at 1 and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(pub u64);

impl GroupId {
    /// Returns the raw `u64` identifier.
    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Group({})", self.0)
    }
}

/// A named, ordered collection of entity handles.
///
/// Members keep insertion order and may repeat; a system iterating a group
/// processes a repeated member once per occurrence.
#[derive(Debug, Clone)]
pub struct Group {
    id: GroupId,
    signature: Vec<&'static str>,
    members: Vec<EntityHandle>,
}

impl Group {
    pub(crate) fn new(id: GroupId, signature: Vec<&'static str>) -> Self {
        Self {
            id,
            signature,
            members: Vec::new(),
        }
    }

    /// Returns this group's identifier.
    #[must_use]
    pub fn id(&self) -> GroupId {
        self.id
    }

    /// Returns the component type names the group was created for.
    ///
    /// Purely descriptive; membership is never checked against it.
    #[must_use]
    pub fn signature(&self) -> &[&'static str] {
        &self.signature
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn members(&self) -> &[EntityHandle] {
        &self.members
    }

    /// Returns `true` if `handle` appears at least once.
    #[must_use]
    pub fn contains(&self, handle: EntityHandle) -> bool {
        self.members.contains(&handle)
    }

    /// Returns the number of entries, counting duplicates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the group has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub(crate) fn push(&mut self, handle: EntityHandle) {
        self.members.push(handle);
    }

    pub(crate) fn remove_all(&mut self, handle: EntityHandle) -> usize {
        let before = self.members.len();
        self.members.retain(|&h| h != handle);
        before - self.members.len()
    }

    pub(crate) fn retain(&mut self, f: impl FnMut(&EntityHandle) -> bool) -> usize {
        let before = self.members.len();
        self.members.retain(f);
        before - self.members.len()
    }
}

/// Mutable access to one group's membership, handed out by
/// [`GroupManager::update_group`](crate::GroupManager::update_group).
///
/// Only the operations the manager itself offers are exposed, so a bulk
/// update cannot leave the group in a state the manager could not produce.
#[derive(Debug)]
pub struct GroupMembers<'a> {
    group: &'a mut Group,
}

impl<'a> GroupMembers<'a> {
    pub(crate) fn new(group: &'a mut Group) -> Self {
        Self { group }
    }

    /// Returns the members in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[EntityHandle] {
        self.group.members()
    }

    /// Append a member. Duplicates are allowed.
    pub fn push(&mut self, handle: EntityHandle) {
        self.group.push(handle);
    }

    /// Remove every occurrence of `handle`, returning how many were removed.
    pub fn remove_all(&mut self, handle: EntityHandle) -> usize {
        self.group.remove_all(handle)
    }

    /// Keep only the members for which `f` returns `true`, returning how
    /// many were removed.
    pub fn retain(&mut self, f: impl FnMut(&EntityHandle) -> bool) -> usize {
        self.group.retain(f)
    }

    /// Remove every member.
    pub fn clear(&mut self) {
        self.group.members.clear();
    }
}
