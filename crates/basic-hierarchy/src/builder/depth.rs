//! Depth-gap repair.
//!
//! A group whose direct parent is not in the input gets a chain of empty
//! placeholder ancestors down from its nearest present ancestor.

use crate::config::AncestorScope;
use crate::error::{HierarchyError, Result};
use crate::id::{is_strict_ancestor, NodeId};
use crate::storage::{Group, GroupArena, GroupIndex};

/// Attaches every orphaned input group below its nearest ancestor,
/// synthesizing the missing levels in between.
///
/// Orphans are handled in input order. Placeholders created for earlier
/// orphans are searched too, so siblings sharing a missing ancestor share
/// one placeholder. Newly synthesized groups are appended to `synthesized`.
pub(super) fn fill_depth_gaps(
    arena: &mut GroupArena,
    root: GroupIndex,
    groups: &[GroupIndex],
    scope: AncestorScope,
    synthesized: &mut Vec<GroupIndex>,
) -> Result<()> {
    for (position, &orphan) in groups.iter().enumerate() {
        if orphan == root || arena[orphan].has_parent() {
            continue;
        }

        let target = arena[orphan].id().clone();
        let pool: &[GroupIndex] = match scope {
            AncestorScope::Preceding => &groups[..position],
            AncestorScope::All => groups,
        };

        let candidates = std::iter::once(root)
            .chain(pool.iter().copied())
            .chain(synthesized.iter().copied());
        let Some((ancestor, ancestor_depth)) = nearest_ancestor(arena, &target, candidates) else {
            return Err(HierarchyError::MissingAncestor(target.to_string()));
        };

        let mut parent = ancestor;
        for level in ancestor_depth..target.depth() - 1 {
            let id = arena[parent].id().child(target.segments()[level]);
            log::debug!("synthesizing {} as ancestor of {}", id, target);
            let placeholder = arena.insert(Group::artificial(id, Some(parent)));
            arena[parent].add_child(placeholder);
            synthesized.push(placeholder);
            parent = placeholder;
        }
        arena.attach(parent, orphan);
    }
    Ok(())
}

/// Returns the deepest candidate that is a proper ancestor of `target`.
///
/// Ties keep the first candidate seen.
fn nearest_ancestor(
    arena: &GroupArena,
    target: &NodeId,
    candidates: impl Iterator<Item = GroupIndex>,
) -> Option<(GroupIndex, usize)> {
    let mut nearest: Option<(GroupIndex, usize)> = None;
    for candidate in candidates {
        let id = arena[candidate].id();
        let deeper = nearest.map_or(true, |(_, depth)| id.depth() > depth);
        if deeper && is_strict_ancestor(id, target) {
            nearest = Some((candidate, id.depth()));
        }
    }
    nearest
}
