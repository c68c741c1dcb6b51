//! Breadth-gap repair.
//!
//! Makes the child numbering of every group contiguous: if a group has
//! children `.0` and `.3`, empty placeholders `.1` and `.2` are added.

use std::collections::VecDeque;

use fnv::FnvHashSet;

use crate::error::{HierarchyError, Result};
use crate::id::{compare, is_direct_parent};
use crate::storage::{Group, GroupArena, GroupIndex};

/// Walks the tree breadth-first from `root`, filling holes in each group's
/// child indices and sorting the children numerically.
///
/// Expects depth gaps to be closed already, so every group is reachable
/// from the root. A child that is not a direct descendant of the group
/// listing it means the links are corrupt and aborts the repair.
pub(super) fn fill_breadth_gaps(
    arena: &mut GroupArena,
    root: GroupIndex,
    synthesized: &mut Vec<GroupIndex>,
) -> Result<()> {
    let mut queue = VecDeque::from([root]);

    while let Some(current) = queue.pop_front() {
        let mut existing = FnvHashSet::default();
        let mut max_index: Option<u32> = None;

        for &child in arena[current].children() {
            let parent_id = arena[current].id();
            let child_id = arena[child].id();
            if !is_direct_parent(parent_id, child_id) {
                return Err(HierarchyError::BrokenChildLink {
                    parent: parent_id.to_string(),
                    child: child_id.to_string(),
                });
            }
            // Direct children always have at least one segment.
            if let Some(index) = child_id.last_segment() {
                existing.insert(index);
                max_index = max_index.max(Some(index));
            }
        }

        if let Some(max_index) = max_index {
            for index in 0..max_index {
                if existing.contains(&index) {
                    continue;
                }
                let id = arena[current].id().child(index);
                log::debug!("synthesizing {} to close breadth gap", id);
                let placeholder = arena.insert(Group::artificial(id, Some(current)));
                arena[current].add_child(placeholder);
                synthesized.push(placeholder);
            }
        }

        let mut children = std::mem::take(arena[current].children_mut());
        children.sort_by(|&a, &b| compare(arena[a].id(), arena[b].id()));
        queue.extend(children.iter().copied());
        *arena[current].children_mut() = children;
    }

    Ok(())
}
