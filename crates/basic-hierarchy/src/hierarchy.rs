//! The finished, immutable hierarchy.

mod classes;
mod display;
mod group_view;

use crate::builder::FilledTree;
use crate::error::Result;
use crate::id::{is_ancestor, NodeId};
use crate::storage::{Group, GroupArena, GroupIndex};
use crate::types::Instance;

pub use classes::ClassIndex;
pub use display::TreeDisplay;
pub use group_view::{Ancestors, GroupView};

/// A contiguous group tree plus the ground-truth class index.
///
/// Groups live in an arena; [`groups`](Self::groups) yields them in
/// construction order (synthesized placeholders first, then the input
/// groups in input order), which is not identifier order.
#[derive(Debug)]
pub struct Hierarchy {
    arena: GroupArena,
    root: GroupIndex,
    order: Vec<GroupIndex>,
    classes: ClassIndex,
    instance_count: usize,
    synthesized: usize,
}

impl Hierarchy {
    pub(crate) fn new<I>(tree: FilledTree, class_counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let FilledTree {
            arena,
            root,
            order,
            synthesized,
        } = tree;
        let classes = ClassIndex::new(class_counts)?;
        let instance_count = arena.iter().map(|(_, group)| group.instances().len()).sum();
        Ok(Self {
            arena,
            root,
            order,
            classes,
            instance_count,
            synthesized,
        })
    }

    #[inline]
    pub(crate) fn arena(&self) -> &GroupArena {
        &self.arena
    }

    #[inline]
    pub fn root(&self) -> GroupView<'_> {
        GroupView::new(self, self.root)
    }

    #[inline]
    pub fn root_index(&self) -> GroupIndex {
        self.root
    }

    pub fn group(&self, index: GroupIndex) -> Option<&Group> {
        self.arena.get(index)
    }

    pub fn view(&self, index: GroupIndex) -> Option<GroupView<'_>> {
        self.arena.get(index).map(|_| GroupView::new(self, index))
    }

    /// All groups in construction order.
    pub fn groups(&self) -> impl Iterator<Item = &Group> + '_ {
        self.order.iter().map(move |&index| &self.arena[index])
    }

    /// Arena indices in construction order.
    pub fn group_indices(&self) -> &[GroupIndex] {
        &self.order
    }

    pub fn group_count(&self) -> usize {
        self.order.len()
    }

    /// Number of placeholder groups created by gap repair.
    pub fn synthesized_count(&self) -> usize {
        self.synthesized
    }

    /// Total instances across all groups.
    pub fn instance_count(&self) -> usize {
        self.instance_count
    }

    pub fn number_of_classes(&self) -> usize {
        self.classes.len()
    }

    /// Class labels sorted by identifier order.
    pub fn classes(&self) -> &[String] {
        self.classes.classes()
    }

    pub fn class_index(&self) -> &ClassIndex {
        &self.classes
    }

    /// Instances labelled `class`; with `with_inheritance`, instances of
    /// every descendant class are included. `None` if the class is unknown.
    pub fn class_count(&self, class: &str, with_inheritance: bool) -> Option<usize> {
        self.classes.count(class, with_inheritance)
    }

    /// Position of `class` in [`classes`](Self::classes), or the insertion
    /// point where it would go.
    pub fn class_search(&self, class: &str) -> std::result::Result<usize, usize> {
        self.classes.search(class)
    }

    /// Looks a group up by identifier, descending from the root one segment
    /// at a time. When placeholders duplicate a real group, the first child
    /// in link order wins.
    pub fn find_group(&self, id: &str) -> Option<GroupView<'_>> {
        let target = NodeId::parse(id).ok()?;
        let root_id = self.arena[self.root].id();
        if !is_ancestor(root_id, &target) {
            return None;
        }

        let mut current = self.root;
        for &segment in &target.segments()[root_id.depth()..] {
            current = self.arena[current]
                .children()
                .iter()
                .copied()
                .find(|&child| self.arena[child].id().last_segment() == Some(segment))?;
        }
        Some(GroupView::new(self, current))
    }

    /// The first instance of the first non-empty group in construction order.
    pub fn first_instance(&self) -> Option<&Instance> {
        self.groups().find_map(|group| group.instances().first())
    }

    /// Feature vector length, taken from the first instance; 0 when the
    /// hierarchy holds no instances.
    pub fn feature_count(&self) -> usize {
        self.first_instance()
            .map(|instance| instance.data.len())
            .unwrap_or(0)
    }

    /// Text rendering of the whole tree, one group per line.
    pub fn render_tree(&self) -> String {
        TreeDisplay::new(self.root()).to_string()
    }
}
