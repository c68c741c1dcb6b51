//! Parent-child linking from identifiers alone.

use crate::id::is_direct_parent;
use crate::storage::{GroupArena, GroupIndex};

/// Wires every group in `groups` to its direct parent among `groups`.
///
/// Compares every ordered pair, which is quadratic in the number of groups
/// (not instances). Children are appended in input order. Returns the
/// number of links made; groups whose parent is absent stay parentless and
/// are left to the depth-gap repair.
pub(super) fn link_parents(arena: &mut GroupArena, groups: &[GroupIndex]) -> usize {
    let mut links = 0;
    for &parent in groups {
        for &child in groups {
            if parent != child && is_direct_parent(arena[parent].id(), arena[child].id()) {
                arena.attach(parent, child);
                links += 1;
            }
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::NodeId;
    use crate::storage::Group;

    fn insert_all(arena: &mut GroupArena, ids: &[&str]) -> Vec<GroupIndex> {
        ids.iter()
            .map(|raw| arena.insert(Group::new(NodeId::parse(raw).unwrap(), Vec::new())))
            .collect()
    }

    #[test]
    fn links_direct_children_only() {
        let mut arena = GroupArena::new();
        let groups = insert_all(&mut arena, &["gen.0", "gen.0.1", "gen.0.1.0", "gen.0.3.2"]);

        let links = link_parents(&mut arena, &groups);
        assert_eq!(links, 2);

        assert_eq!(arena[groups[0]].children(), &[groups[1]]);
        assert_eq!(arena[groups[1]].parent(), Some(groups[0]));
        assert_eq!(arena[groups[2]].parent(), Some(groups[1]));
        // gen.0.3 is missing, so gen.0.3.2 stays orphaned.
        assert_eq!(arena[groups[3]].parent(), None);
    }

    #[test]
    fn order_of_input_does_not_matter() {
        let mut arena = GroupArena::new();
        let groups = insert_all(&mut arena, &["gen.0.0.1", "gen.0.1", "gen.0.0", "gen.0"]);

        link_parents(&mut arena, &groups);

        assert_eq!(arena[groups[0]].parent(), Some(groups[2]));
        assert_eq!(arena[groups[1]].parent(), Some(groups[3]));
        assert_eq!(arena[groups[2]].parent(), Some(groups[3]));
        // Children follow input order, not identifier order.
        assert_eq!(arena[groups[3]].children(), &[groups[1], groups[2]]);
    }
}
