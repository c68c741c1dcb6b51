//! Arena handles.

use std::fmt;

/// Position of a group in the arena.
///
/// Stored as `u32` to keep child lists small; `u32::MAX` is never handed
/// out because `OptionGroupIndex` uses it to mean "no group".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct GroupIndex(u32);

impl GroupIndex {
    /// # Panics
    /// If `position` does not fit below `u32::MAX`. An arena holding that
    /// many groups is not supported.
    #[inline]
    pub fn new(position: usize) -> Self {
        match u32::try_from(position) {
            Ok(raw) if raw != u32::MAX => Self(raw),
            _ => panic!("group arena overflow at position {position}"),
        }
    }

    #[inline]
    pub fn get(&self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for GroupIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A parent link packed into four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct OptionGroupIndex(u32);

impl OptionGroupIndex {
    const NONE: u32 = u32::MAX;

    #[inline]
    pub fn none() -> Self {
        Self(Self::NONE)
    }

    #[inline]
    pub fn is_none(self) -> bool {
        self.0 == Self::NONE
    }

    #[inline]
    pub fn get(self) -> Option<GroupIndex> {
        (!self.is_none()).then_some(GroupIndex(self.0))
    }
}

impl Default for OptionGroupIndex {
    fn default() -> Self {
        Self::none()
    }
}

impl From<GroupIndex> for OptionGroupIndex {
    fn from(index: GroupIndex) -> Self {
        Self(index.0)
    }
}

impl From<Option<GroupIndex>> for OptionGroupIndex {
    fn from(index: Option<GroupIndex>) -> Self {
        index.map_or_else(Self::none, Self::from)
    }
}
