//! Hierarchy reconstruction.
//!
//! Turns a flat list of groups into a single contiguous tree:
//! 1. **Link** (`link`): connect each group to its direct parent
//! 2. **Depth gaps** (`depth`): synthesize missing ancestors for orphans
//! 3. **Breadth gaps** (`breadth`, optional): synthesize missing siblings
//! 4. Wrap the tree and the class tallies into a `Hierarchy`
//!
//! The whole pass is a synchronous batch computation. Any structural error
//! aborts the load; nothing partially built escapes.

mod breadth;
mod collect;
mod depth;
mod link;

use fnv::{FnvHashMap, FnvHashSet};

use crate::config::BuildOptions;
use crate::error::{HierarchyError, Result};
use crate::hierarchy::Hierarchy;
use crate::id::NodeId;
use crate::storage::{Group, GroupArena, GroupIndex};
use crate::types::GroupInput;

pub use collect::GroupCollector;

/// A repaired group tree before the class index is attached.
#[derive(Debug)]
pub(crate) struct FilledTree {
    pub arena: GroupArena,
    pub root: GroupIndex,
    /// Synthesized groups in creation order, then input groups in input order.
    pub order: Vec<GroupIndex>,
    pub synthesized: usize,
}

/// Links the input groups and closes depth gaps (and breadth gaps when
/// `options.fix_breadth_gaps` is set).
pub(crate) fn fill_hierarchy(groups: Vec<GroupInput>, options: &BuildOptions) -> Result<FilledTree> {
    let root_id = options.validate()?;

    let mut arena = GroupArena::with_capacity(groups.len());
    let mut seen = FnvHashSet::default();
    let mut originals = Vec::with_capacity(groups.len());
    for GroupInput { id, instances } in groups {
        if !seen.insert(group_key(&id)) {
            return Err(HierarchyError::DuplicateGroup(id.to_string()));
        }
        if let Some(stray) = instances.iter().find(|instance| !instance.node_id.same_group(&id)) {
            return Err(HierarchyError::MismatchedInstance {
                group: id.to_string(),
                instance: stray.node_id.to_string(),
            });
        }
        originals.push(arena.insert(Group::new(id, instances)));
    }

    let mut synthesized = Vec::new();
    let root = match originals
        .iter()
        .copied()
        .find(|&index| arena[index].id() == &root_id)
    {
        Some(root) => root,
        None if options.synthesize_missing_root => {
            log::warn!("input has no {} group, synthesizing an empty root", root_id);
            let root = arena.insert(Group::artificial(root_id, None));
            synthesized.push(root);
            root
        }
        None => return Err(HierarchyError::MissingRoot(root_id.to_string())),
    };

    let links = link::link_parents(&mut arena, &originals);
    log::debug!("linked {} of {} groups to their parents", links, originals.len());

    depth::fill_depth_gaps(
        &mut arena,
        root,
        &originals,
        options.ancestor_scope,
        &mut synthesized,
    )?;
    log::debug!(
        "depth repair ({} scope) synthesized {} groups",
        options.ancestor_scope.as_str(),
        synthesized.len()
    );

    if options.fix_breadth_gaps {
        let before = synthesized.len();
        breadth::fill_breadth_gaps(&mut arena, root, &mut synthesized)?;
        log::debug!(
            "breadth repair synthesized {} groups",
            synthesized.len() - before
        );
    }

    let synthesized_count = synthesized.len();
    let mut order = synthesized;
    order.extend(originals);

    Ok(FilledTree {
        arena,
        root,
        order,
        synthesized: synthesized_count,
    })
}

/// Key under which two spellings of one group id collide. Segments are
/// canonical after parsing, so only the tag needs folding.
pub(crate) fn group_key(id: &NodeId) -> String {
    id.as_str().to_ascii_lowercase()
}

/// Builds a hierarchy, tallying classes from the instances' `true_class`.
pub fn build_hierarchy(groups: Vec<GroupInput>, options: &BuildOptions) -> Result<Hierarchy> {
    let mut class_counts: FnvHashMap<String, usize> = FnvHashMap::default();
    for class in groups
        .iter()
        .flat_map(|group| &group.instances)
        .filter_map(|instance| instance.true_class.as_ref())
    {
        *class_counts.entry(class.clone()).or_insert(0) += 1;
    }
    build_hierarchy_with_classes(groups, class_counts, options)
}

/// Builds a hierarchy with caller-supplied per-class instance counts.
pub fn build_hierarchy_with_classes<I>(
    groups: Vec<GroupInput>,
    class_counts: I,
    options: &BuildOptions,
) -> Result<Hierarchy>
where
    I: IntoIterator<Item = (String, usize)>,
{
    let tree = fill_hierarchy(groups, options)?;
    let hierarchy = Hierarchy::new(tree, class_counts)?;
    log::info!(
        "built hierarchy: {} groups ({} synthesized), {} instances, {} classes",
        hierarchy.group_count(),
        hierarchy.synthesized_count(),
        hierarchy.instance_count(),
        hierarchy.number_of_classes()
    );
    Ok(hierarchy)
}
