//! Group node stored in the arena.

use thin_vec::ThinVec;

use super::index_types::{GroupIndex, OptionGroupIndex};
use crate::id::NodeId;
use crate::types::Instance;

/// A node of the hierarchy.
///
/// Links are arena indices, so the parent back-reference never owns
/// anything. Only the builder mutates a group; once the hierarchy is
/// returned every group is read-only.
#[derive(Debug)]
pub struct Group {
    id: NodeId,
    parent: OptionGroupIndex,
    children: ThinVec<GroupIndex>,
    instances: Vec<Instance>,
    artificial: bool,
}

impl Group {
    /// Creates a group read from the input.
    pub(crate) fn new(id: NodeId, instances: Vec<Instance>) -> Self {
        Self {
            id,
            parent: OptionGroupIndex::none(),
            children: ThinVec::new(),
            instances,
            artificial: false,
        }
    }

    /// Creates an empty placeholder below `parent`.
    pub(crate) fn artificial(id: NodeId, parent: Option<GroupIndex>) -> Self {
        Self {
            id,
            parent: parent.into(),
            children: ThinVec::new(),
            instances: Vec::new(),
            artificial: true,
        }
    }

    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.id
    }

    /// Returns the parent index, or None for the root.
    #[inline]
    pub fn parent(&self) -> Option<GroupIndex> {
        self.parent.get()
    }

    #[inline]
    pub fn has_parent(&self) -> bool {
        !self.parent.is_none()
    }

    #[inline]
    pub fn children(&self) -> &[GroupIndex] {
        &self.children
    }

    /// Instances attached directly to this group (not to descendants).
    #[inline]
    pub fn instances(&self) -> &[Instance] {
        &self.instances
    }

    /// True for placeholders synthesized to close depth or breadth gaps.
    #[inline]
    pub fn is_artificial(&self) -> bool {
        self.artificial
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    pub(crate) fn set_parent(&mut self, parent: GroupIndex) {
        self.parent = parent.into();
    }

    /// Adds a child node index.
    pub(crate) fn add_child(&mut self, child: GroupIndex) {
        if !self.children.contains(&child) {
            self.children.push(child);
        }
    }

    pub(crate) fn children_mut(&mut self) -> &mut ThinVec<GroupIndex> {
        &mut self.children
    }
}
