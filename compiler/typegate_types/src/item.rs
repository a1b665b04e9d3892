//! Compact type item storage.
//!
//! Each type in the pool is stored as an `Item` with a tag and data field.
//! The interpretation of `data` depends on the tag (see [`Tag`]).

use crate::{BasicKind, Idx, Tag};

/// A single type item in the pool.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(C)]
pub struct Item {
    /// Type kind discriminant.
    pub tag: Tag,
    /// Tag-dependent data field.
    pub data: u32,
}

impl Item {
    /// The item every unknown handle decodes as.
    pub const INVALID: Item = Item::basic(BasicKind::Invalid);

    #[inline]
    pub const fn new(tag: Tag, data: u32) -> Self {
        Self { tag, data }
    }

    #[inline]
    pub const fn basic(kind: BasicKind) -> Self {
        Self {
            tag: Tag::Basic,
            data: kind as u32,
        }
    }

    /// Create a simple container item (pointer, slice, chan).
    #[inline]
    pub const fn simple_container(tag: Tag, child: Idx) -> Self {
        Self {
            tag,
            data: child.raw(),
        }
    }

    /// Get the child index for simple container types.
    #[inline]
    pub const fn child(self) -> Idx {
        Idx::from_raw(self.data)
    }

    /// Get the extra array index for types that use it.
    #[inline]
    pub const fn extra_index(self) -> usize {
        self.data as usize
    }
}
