//! Ancestor and direct-parent predicates.
//!
//! These only look at identifier segments; no tree state is consulted.

use super::NodeId;
use crate::error::Result;

/// Checks if `parent` is `child` itself or one of its ancestors.
///
/// True when `parent` is not deeper than `child` and every segment of
/// `parent`, the tag included, matches the corresponding segment of `child`.
#[inline]
pub fn is_ancestor(parent: &NodeId, child: &NodeId) -> bool {
    parent.depth() <= child.depth()
        && parent.tag() == child.tag()
        && child.segments().starts_with(parent.segments())
}

/// Checks if `parent` is a proper ancestor of `child`.
#[inline]
pub fn is_strict_ancestor(parent: &NodeId, child: &NodeId) -> bool {
    parent.depth() < child.depth() && is_ancestor(parent, child)
}

/// Checks if `parent` is the immediate parent of `child`.
#[inline]
pub fn is_direct_parent(parent: &NodeId, child: &NodeId) -> bool {
    child.depth() == parent.depth() + 1 && is_ancestor(parent, child)
}

/// Parses both ids and applies [`is_ancestor`].
pub fn is_ancestor_id(parent: &str, child: &str) -> Result<bool> {
    Ok(is_ancestor(&NodeId::parse(parent)?, &NodeId::parse(child)?))
}

/// Parses both ids and applies [`is_direct_parent`].
pub fn is_direct_parent_id(parent: &str, child: &str) -> Result<bool> {
    Ok(is_direct_parent(
        &NodeId::parse(parent)?,
        &NodeId::parse(child)?,
    ))
}
