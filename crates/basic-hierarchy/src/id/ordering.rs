//! Numeric ordering over identifiers.

use std::cmp::Ordering;

use super::NodeId;
use crate::error::Result;

/// Compares two identifiers segment by segment as integers.
///
/// The tag is ignored. When every shared segment is equal the shorter id
/// sorts first, so an ancestor always precedes its descendants and siblings
/// follow their numeric index (`gen.0.2` < `gen.0.10`).
///
/// Note: this ordering is inconsistent with equality; `gen.0.1` and
/// `cls.0.1` compare equal.
#[inline]
pub fn compare(a: &NodeId, b: &NodeId) -> Ordering {
    // Slice ordering is lexicographic with the shorter prefix first.
    a.segments().cmp(b.segments())
}

/// Parses and compares two raw identifiers.
pub fn compare_ids(a: &str, b: &str) -> Result<Ordering> {
    Ok(compare(&NodeId::parse(a)?, &NodeId::parse(b)?))
}

/// Sort key for class labels.
///
/// Refines [`compare`] with the tag and then the raw text, which turns it
/// into a total order consistent with equality. Labels that differ only in
/// their tag (`A` vs `B`) stay distinct, while descendants still sort after
/// their ancestor.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassKey(NodeId);

impl ClassKey {
    pub fn new(id: NodeId) -> Self {
        Self(id)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        NodeId::parse(raw).map(Self)
    }

    #[inline]
    pub fn id(&self) -> &NodeId {
        &self.0
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Ord for ClassKey {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&self.0, &other.0)
            .then_with(|| self.0.tag().cmp(other.0.tag()))
            .then_with(|| self.0.as_str().cmp(other.0.as_str()))
    }
}

impl PartialOrd for ClassKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(raw: &str) -> NodeId {
        NodeId::parse(raw).unwrap()
    }

    #[test]
    fn numeric_not_lexical() {
        assert_eq!(compare(&id("gen.0.2"), &id("gen.0.10")), Ordering::Less);
        assert_eq!(compare(&id("gen.0.10"), &id("gen.0.2")), Ordering::Greater);
    }

    #[test]
    fn ancestor_sorts_first() {
        assert_eq!(compare(&id("gen.0"), &id("gen.0.0")), Ordering::Less);
        assert_eq!(compare(&id("gen.0.5.1"), &id("gen.0.5")), Ordering::Greater);
        // The first differing segment wins over length.
        assert_eq!(compare(&id("gen.0.1.9.9"), &id("gen.0.2")), Ordering::Less);
    }

    #[test]
    fn tag_is_ignored() {
        assert_eq!(compare(&id("gen.0.1"), &id("cls.0.1")), Ordering::Equal);
        assert_eq!(compare_ids("gen.0.1", "x.0.1").unwrap(), Ordering::Equal);
    }

    #[test]
    fn compare_ids_reports_malformed() {
        assert!(compare_ids("gen.0", "gen.zero").is_err());
    }

    #[test]
    fn class_key_breaks_ties() {
        let a = ClassKey::parse("A").unwrap();
        let b = ClassKey::parse("B").unwrap();
        let a1 = ClassKey::parse("A.1").unwrap();
        assert!(a < b);
        assert!(a < a1);
        assert_eq!(a.cmp(&a.clone()), Ordering::Equal);

        let mut keys = vec![a1.clone(), b.clone(), a.clone()];
        keys.sort();
        assert_eq!(keys, vec![a, b, a1]);
    }

    proptest! {
        #[test]
        fn orders_by_differing_segment(
            prefix in proptest::collection::vec(0u32..50, 0..4),
            x in 0u32..1000,
            y in 0u32..1000,
            suffix in proptest::collection::vec(0u32..50, 0..3),
        ) {
            let build = |v: u32| {
                let mut segments = prefix.clone();
                segments.push(v);
                segments.extend(&suffix);
                let text: Vec<String> = segments.iter().map(u32::to_string).collect();
                id(&format!("gen.{}", text.join(".")))
            };
            prop_assert_eq!(compare(&build(x), &build(y)), x.cmp(&y));
        }

        #[test]
        fn strict_prefix_sorts_first(
            prefix in proptest::collection::vec(0u32..50, 1..5),
            extra in proptest::collection::vec(0u32..50, 1..4),
        ) {
            let short: Vec<String> = prefix.iter().map(u32::to_string).collect();
            let long: Vec<String> = prefix.iter().chain(&extra).map(u32::to_string).collect();
            let a = id(&format!("gen.{}", short.join(".")));
            let b = id(&format!("gen.{}", long.join(".")));
            prop_assert_eq!(compare(&a, &b), Ordering::Less);
        }
    }
}
