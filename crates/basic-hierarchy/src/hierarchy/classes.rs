//! Ground-truth class index.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::id::{is_strict_ancestor, ClassKey};

/// Class labels sorted under the identifier ordering, with a parallel array
/// of per-class instance counts.
///
/// Because an ancestor label always sorts before its descendants, the
/// inheritance-aware count only has to scan forward from the matched entry.
#[derive(Debug, Clone, Default)]
pub struct ClassIndex {
    keys: Vec<ClassKey>,
    classes: Vec<String>,
    counts: Vec<usize>,
}

impl ClassIndex {
    /// Sorts the given label → count pairs. Repeated labels are summed.
    pub fn new<I>(class_counts: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, usize)>,
    {
        let mut sorted: BTreeMap<ClassKey, usize> = BTreeMap::new();
        for (label, count) in class_counts {
            *sorted.entry(ClassKey::parse(&label)?).or_insert(0) += count;
        }

        let mut index = Self {
            keys: Vec::with_capacity(sorted.len()),
            classes: Vec::with_capacity(sorted.len()),
            counts: Vec::with_capacity(sorted.len()),
        };
        for (key, count) in sorted {
            index.classes.push(key.as_str().to_string());
            index.keys.push(key);
            index.counts.push(count);
        }
        Ok(index)
    }

    /// Number of distinct classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Labels in index order.
    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// Per-class counts, parallel to [`classes`](Self::classes).
    #[inline]
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Binary-searches for `label`.
    ///
    /// `Ok(position)` when present, otherwise `Err(insertion_point)`. A label
    /// that is not a well-formed identifier can never be present and reports
    /// the end of the index.
    pub fn search(&self, label: &str) -> std::result::Result<usize, usize> {
        match ClassKey::parse(label) {
            Ok(key) => self.keys.binary_search(&key),
            Err(_) => Err(self.keys.len()),
        }
    }

    /// Instance count of `label`, optionally including every descendant
    /// class (`label.x`, `label.x.y`, ...). `None` when the label is absent.
    pub fn count(&self, label: &str, with_inheritance: bool) -> Option<usize> {
        let position = self.search(label).ok()?;
        let own = self.counts[position];
        if !with_inheritance {
            return Some(own);
        }

        let ancestor = self.keys[position].id();
        let inherited: usize = self.keys[position + 1..]
            .iter()
            .zip(&self.counts[position + 1..])
            .filter(|(key, _)| is_strict_ancestor(ancestor, key.id()))
            .map(|(_, count)| count)
            .sum();
        Some(own + inherited)
    }
}
