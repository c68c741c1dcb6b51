//! Hierarchy reconstruction library.
//!
//! This crate turns flat, dot-separated group identifiers into one
//! contiguous tree:
//! - Identifier parsing, numeric ordering and ancestry predicates
//! - Parent linking with depth-gap and optional breadth-gap repair
//! - An immutable hierarchy with class counts and read-only views

pub mod builder;
pub mod config;
pub mod error;
pub mod hierarchy;
pub mod id;
pub mod storage;
pub mod types;

// Re-export main types
pub use builder::{build_hierarchy, build_hierarchy_with_classes, GroupCollector};
pub use config::{AncestorScope, BuildOptions};
pub use error::{HierarchyError, Result};
pub use hierarchy::{ClassIndex, GroupView, Hierarchy, TreeDisplay};
pub use id::NodeId;
pub use storage::{Group, GroupIndex};
pub use types::{GroupInput, Instance};
