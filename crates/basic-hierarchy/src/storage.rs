//! Storage layer for the group tree.
//!
//! - `index_types` - Compact index types (`GroupIndex`, `OptionGroupIndex`)
//! - `node` - The `Group` node with parent/children links
//! - `arena` - Append-only arena addressed by `GroupIndex`

mod arena;
mod index_types;
mod node;

pub use arena::GroupArena;
pub use index_types::{GroupIndex, OptionGroupIndex};
pub use node::Group;
