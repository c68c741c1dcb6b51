//! Accumulates loose instances into groups.

use fnv::FnvHashMap;

use super::{build_hierarchy_with_classes, group_key};
use crate::config::BuildOptions;
use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::id::NodeId;
use crate::types::{GroupInput, Instance};

/// Collects instances into groups keyed by their node id.
///
/// Groups keep the order in which their id was first seen, which is the
/// input order the depth-gap repair relies on. Ids that differ only in the
/// case of their tag (`GEN.0.1`, `gen.0.1`) land in one group, named by the
/// first spelling seen. Ground-truth classes are tallied on the way in.
#[derive(Debug, Default)]
pub struct GroupCollector {
    groups: Vec<GroupInput>,
    positions: FnvHashMap<String, usize>,
    class_counts: FnvHashMap<String, usize>,
}

impl GroupCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an instance to the group named by its `node_id`, creating the
    /// group on first sight.
    pub fn push_instance(&mut self, instance: Instance) {
        if let Some(class) = &instance.true_class {
            *self.class_counts.entry(class.clone()).or_insert(0) += 1;
        }
        let position = self.position_for(&instance.node_id);
        self.groups[position].instances.push(instance);
    }

    /// Registers a group with no instances of its own.
    pub fn push_group(&mut self, id: NodeId) {
        self.position_for(&id);
    }

    fn position_for(&mut self, id: &NodeId) -> usize {
        let key = group_key(id);
        if let Some(&position) = self.positions.get(&key) {
            return position;
        }
        let position = self.groups.len();
        self.groups.push(GroupInput {
            id: id.clone(),
            instances: Vec::new(),
        });
        self.positions.insert(key, position);
        position
    }

    /// Number of distinct groups seen so far.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Per-class instance tallies.
    pub fn class_counts(&self) -> &FnvHashMap<String, usize> {
        &self.class_counts
    }

    /// Splits the collector into its groups and class tallies.
    pub fn into_parts(self) -> (Vec<GroupInput>, FnvHashMap<String, usize>) {
        (self.groups, self.class_counts)
    }

    /// Repairs the collected groups into a hierarchy.
    pub fn build(self, options: &BuildOptions) -> Result<Hierarchy> {
        let (groups, class_counts) = self.into_parts();
        build_hierarchy_with_classes(groups, class_counts, options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(node: &str, class: Option<&str>) -> Instance {
        let instance = Instance::new(NodeId::parse(node).unwrap(), vec![0.5, 1.5]);
        match class {
            Some(class) => instance.with_true_class(class),
            None => instance,
        }
    }

    #[test]
    fn groups_in_first_seen_order() {
        let mut collector = GroupCollector::new();
        collector.push_instance(instance("gen.0", None));
        collector.push_instance(instance("gen.0.1", None));
        collector.push_instance(instance("gen.0", None));
        collector.push_group(NodeId::parse("gen.0.2").unwrap());
        collector.push_group(NodeId::parse("gen.0.1").unwrap());

        assert_eq!(collector.len(), 3);
        let (groups, _) = collector.into_parts();
        let ids: Vec<_> = groups.iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["gen.0", "gen.0.1", "gen.0.2"]);
        assert_eq!(groups[0].instances.len(), 2);
        assert_eq!(groups[1].instances.len(), 1);
        assert!(groups[2].instances.is_empty());
    }

    #[test]
    fn tag_case_does_not_split_groups() {
        let mut collector = GroupCollector::new();
        collector.push_instance(instance("gen.0.1", None));
        collector.push_instance(instance("GEN.0.1", None));
        collector.push_group(NodeId::parse("Gen.0.1").unwrap());

        assert_eq!(collector.len(), 1);
        let (groups, _) = collector.into_parts();
        assert_eq!(groups[0].id.as_str(), "gen.0.1");
        assert_eq!(groups[0].instances.len(), 2);
    }

    #[test]
    fn tallies_classes() {
        let mut collector = GroupCollector::new();
        collector.push_instance(instance("gen.0", Some("gen.0")));
        collector.push_instance(instance("gen.0.1", Some("gen.0.1")));
        collector.push_instance(instance("gen.0.1", Some("gen.0.1")));
        collector.push_instance(instance("gen.0.1", None));

        let counts = collector.class_counts();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts["gen.0"], 1);
        assert_eq!(counts["gen.0.1"], 2);
    }

    #[test]
    fn build_runs_full_pipeline() {
        let mut collector = GroupCollector::new();
        collector.push_instance(instance("gen.0", Some("gen.0")));
        collector.push_instance(instance("gen.0.0.1", Some("gen.0.0")));
        collector.push_instance(instance("gen.0.0.1", Some("gen.0.0.1")));

        let hierarchy = collector
            .build(&BuildOptions::default().with_breadth_gaps(true))
            .unwrap();

        // gen.0.0 (depth gap) and gen.0.0.0 (breadth gap) were synthesized.
        assert_eq!(hierarchy.group_count(), 4);
        assert_eq!(hierarchy.instance_count(), 3);
        assert_eq!(hierarchy.class_count("gen.0.0", true), Some(2));
    }
}
