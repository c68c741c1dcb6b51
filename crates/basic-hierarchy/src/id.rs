//! Group identifiers.
//!
//! An identifier is a dot-separated path such as `gen.0.1.3`: a category tag
//! followed by the integer index of the group at every level below the root.
//! This module provides:
//! - `NodeId`, the parsed form used everywhere in the tree
//! - `ordering` - numeric per-segment ordering over identifiers
//! - `relation` - ancestor / direct-parent predicates

mod ordering;
mod relation;

use std::fmt;
use std::str::FromStr;

use serde::de::{Deserializer, Error as DeError};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::error::{HierarchyError, Result};

pub use ordering::{compare, compare_ids, ClassKey};
pub use relation::{
    is_ancestor, is_ancestor_id, is_direct_parent, is_direct_parent_id, is_strict_ancestor,
};

/// Separator between identifier segments.
pub const SEPARATOR: char = '.';

/// Identifier of the root group in generated hierarchies.
pub const ROOT_ID: &str = "gen.0";

/// A parsed group identifier.
///
/// Keeps the original text next to the numeric segments so that ids can be
/// printed back exactly as they were given. Equality is textual; the
/// hierarchical order lives in [`compare`] and is deliberately not exposed as
/// `Ord`, since two different ids can compare equal under it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NodeId {
    raw: String,
    tag_len: usize,
    segments: Vec<u32>,
}

impl NodeId {
    /// Parses `tag.n1.n2...nk`.
    ///
    /// The tag must be non-empty; every following segment must be a
    /// non-negative integer that fits in a `u32`.
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split(SEPARATOR);
        let tag = parts.next().unwrap_or_default();
        if tag.is_empty() {
            return Err(HierarchyError::malformed(raw, "empty tag"));
        }

        let segments = parts
            .enumerate()
            .map(|(position, part)| parse_segment(raw, position + 1, part))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            raw: raw.to_string(),
            tag_len: tag.len(),
            segments,
        })
    }

    /// Returns the identifier text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Returns the category tag (segment 0).
    #[inline]
    pub fn tag(&self) -> &str {
        &self.raw[..self.tag_len]
    }

    /// Returns the numeric segments, root-most first.
    #[inline]
    pub fn segments(&self) -> &[u32] {
        &self.segments
    }

    /// Number of numeric segments; the root `gen.0` has depth 1.
    #[inline]
    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Index of this group among its siblings.
    #[inline]
    pub fn last_segment(&self) -> Option<u32> {
        self.segments.last().copied()
    }

    /// Whether both ids name the same group position. Tags are compared
    /// without regard to ASCII case, the way loaders match group ids.
    pub fn same_group(&self, other: &NodeId) -> bool {
        self.segments == other.segments && self.tag().eq_ignore_ascii_case(other.tag())
    }

    /// Builds the identifier of the child at `index` below this one.
    pub fn child(&self, index: u32) -> Self {
        let mut segments = Vec::with_capacity(self.segments.len() + 1);
        segments.extend_from_slice(&self.segments);
        segments.push(index);
        Self {
            raw: format!("{}{}{}", self.raw, SEPARATOR, index),
            tag_len: self.tag_len,
            segments,
        }
    }
}

fn parse_segment(raw: &str, position: usize, part: &str) -> Result<u32> {
    if part.is_empty() {
        return Err(HierarchyError::malformed(
            raw,
            format!("segment {position} is empty"),
        ));
    }
    if !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(HierarchyError::malformed(
            raw,
            format!("segment {position} ({part:?}) is not a non-negative integer"),
        ));
    }
    // `01` would otherwise name the same position as `1`.
    if part.len() > 1 && part.starts_with('0') {
        return Err(HierarchyError::malformed(
            raw,
            format!("segment {position} ({part:?}) has a leading zero"),
        ));
    }
    part.parse::<u32>().map_err(|err| {
        HierarchyError::malformed(raw, format!("segment {position} ({part:?}): {err}"))
    })
}

impl FromStr for NodeId {
    type Err = HierarchyError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for NodeId {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

impl Serialize for NodeId {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}
