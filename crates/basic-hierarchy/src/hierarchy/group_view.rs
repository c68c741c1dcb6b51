//! Read-only navigation over a finished hierarchy.
//!
//! Derived properties (depth, ancestry, subtree contents) are computed by
//! walking the parent/children links instead of being stored per group.

use super::Hierarchy;
use crate::id::NodeId;
use crate::storage::{Group, GroupIndex};
use crate::types::Instance;

/// A group together with the hierarchy it lives in.
#[derive(Debug, Clone, Copy)]
pub struct GroupView<'a> {
    hierarchy: &'a Hierarchy,
    index: GroupIndex,
}

impl<'a> GroupView<'a> {
    /// Creates a view; `index` must belong to `hierarchy`.
    #[inline]
    pub(crate) fn new(hierarchy: &'a Hierarchy, index: GroupIndex) -> Self {
        Self { hierarchy, index }
    }

    #[inline]
    pub fn index(&self) -> GroupIndex {
        self.index
    }

    #[inline]
    pub fn group(&self) -> &'a Group {
        &self.hierarchy.arena()[self.index]
    }

    #[inline]
    pub fn id(&self) -> &'a NodeId {
        self.group().id()
    }

    #[inline]
    pub fn is_artificial(&self) -> bool {
        self.group().is_artificial()
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.group().is_leaf()
    }

    /// Instances attached directly to this group.
    #[inline]
    pub fn instances(&self) -> &'a [Instance] {
        self.group().instances()
    }

    pub fn parent(&self) -> Option<GroupView<'a>> {
        self.group()
            .parent()
            .map(|parent| GroupView::new(self.hierarchy, parent))
    }

    pub fn children(&self) -> impl Iterator<Item = GroupView<'a>> + 'a {
        let hierarchy = self.hierarchy;
        self.group()
            .children()
            .iter()
            .map(move |&child| GroupView::new(hierarchy, child))
    }

    /// Iterates from the parent up to the root.
    pub fn ancestors(&self) -> Ancestors<'a> {
        Ancestors { next: self.parent() }
    }

    /// Number of links between this group and the root, plus one; the root
    /// has depth 1, matching its identifier.
    pub fn depth(&self) -> usize {
        self.ancestors().count() + 1
    }

    /// Instances of this group and of every group below it, preorder.
    pub fn subtree_instances(&self) -> Vec<&'a Instance> {
        let mut result = Vec::new();
        let mut stack = vec![*self];
        while let Some(view) = stack.pop() {
            result.extend(view.instances());
            let mark = stack.len();
            stack.extend(view.children());
            stack[mark..].reverse();
        }
        result
    }

    /// Number of groups in the subtree rooted here, this group included.
    pub fn subtree_group_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![*self];
        while let Some(view) = stack.pop() {
            count += 1;
            stack.extend(view.children());
        }
        count
    }
}

/// Iterator over a group's ancestors, nearest first.
pub struct Ancestors<'a> {
    next: Option<GroupView<'a>>,
}

impl<'a> Iterator for Ancestors<'a> {
    type Item = GroupView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = current.parent();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use crate::builder::build_hierarchy;
    use crate::config::BuildOptions;
    use crate::id::NodeId;
    use crate::types::{GroupInput, Instance};

    fn group(raw: &str, names: &[&str]) -> GroupInput {
        let id = NodeId::parse(raw).unwrap();
        let instances = names
            .iter()
            .map(|name| Instance::new(id.clone(), vec![1.0]).with_name(*name))
            .collect();
        GroupInput::new(raw).unwrap().with_instances(instances)
    }

    fn sample() -> crate::Hierarchy {
        build_hierarchy(
            vec![
                group("gen.0", &["r"]),
                group("gen.0.0", &["a", "b"]),
                group("gen.0.0.1", &["c"]),
                group("gen.0.1", &["d"]),
            ],
            &BuildOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn parent_and_children() {
        let hierarchy = sample();
        let root = hierarchy.root();
        assert!(root.parent().is_none());
        let children: Vec<_> = root.children().map(|c| c.id().to_string()).collect();
        assert_eq!(children, vec!["gen.0.0", "gen.0.1"]);

        let leaf = hierarchy.find_group("gen.0.0.1").unwrap();
        assert!(leaf.is_leaf());
        assert_eq!(leaf.parent().unwrap().id().as_str(), "gen.0.0");
    }

    #[test]
    fn depth_and_ancestors() {
        let hierarchy = sample();
        let leaf = hierarchy.find_group("gen.0.0.1").unwrap();
        assert_eq!(leaf.depth(), 3);
        let ancestors: Vec<_> = leaf.ancestors().map(|a| a.id().to_string()).collect();
        assert_eq!(ancestors, vec!["gen.0.0", "gen.0"]);
        assert_eq!(hierarchy.root().depth(), 1);
    }

    #[test]
    fn subtree_queries() {
        let hierarchy = sample();
        let root = hierarchy.root();
        let names: Vec<_> = root
            .subtree_instances()
            .iter()
            .map(|instance| instance.name.as_deref().unwrap())
            .collect();
        assert_eq!(names, vec!["r", "a", "b", "c", "d"]);
        assert_eq!(root.subtree_group_count(), 4);

        let branch = hierarchy.find_group("gen.0.0").unwrap();
        assert_eq!(branch.subtree_instances().len(), 3);
        assert_eq!(branch.subtree_group_count(), 2);
    }
}
