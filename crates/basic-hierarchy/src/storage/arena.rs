//! GroupArena - append-only group storage with a GroupIndex API.

use std::ops::{Index, IndexMut};

use super::index_types::GroupIndex;
use super::node::Group;

/// Append-only vector of groups addressed by `GroupIndex`.
///
/// Groups are never removed, so an index handed out once stays valid for
/// the lifetime of the arena.
#[derive(Debug, Default)]
pub struct GroupArena(Vec<Group>);

impl GroupArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Inserts a group, returning its index.
    pub fn insert(&mut self, group: Group) -> GroupIndex {
        let index = GroupIndex::new(self.0.len());
        self.0.push(group);
        index
    }

    /// Gets a reference to the group at `index`.
    #[inline]
    pub fn get(&self, index: GroupIndex) -> Option<&Group> {
        self.0.get(index.get())
    }

    /// Gets a mutable reference to the group at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: GroupIndex) -> Option<&mut Group> {
        self.0.get_mut(index.get())
    }

    /// Returns the number of stored groups.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the arena is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(index, group)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (GroupIndex, &Group)> + '_ {
        self.0
            .iter()
            .enumerate()
            .map(|(index, group)| (GroupIndex::new(index), group))
    }

    /// Links `child` below `parent` on both sides.
    pub(crate) fn attach(&mut self, parent: GroupIndex, child: GroupIndex) {
        self[child].set_parent(parent);
        self[parent].add_child(child);
    }
}

impl Index<GroupIndex> for GroupArena {
    type Output = Group;

    fn index(&self, index: GroupIndex) -> &Self::Output {
        &self.0[index.get()]
    }
}

impl IndexMut<GroupIndex> for GroupArena {
    fn index_mut(&mut self, index: GroupIndex) -> &mut Self::Output {
        &mut self.0[index.get()]
    }
}
