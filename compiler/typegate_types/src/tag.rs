//! Type kind tag for tag-driven dispatch.
//!
//! Each type in the pool has a `Tag` that identifies its kind.
//! The tag determines how to interpret the associated `data` field.
//!
//! # Tag Categories
//!
//! - 0-15: Basic (data = `BasicKind`)
//! - 16-31: Simple containers (data = child Idx)
//! - 32-47: Fixed-size containers (data = extra index, no length prefix)
//! - 48-79: Complex types (data = extra index with length prefix)
//! - 80-95: Named types (data = index into the named table)
//! - 96-111: Type parameters (data = name)

use std::fmt;

/// Type kind discriminant.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Tag {
    // === Basic (0-15) ===
    /// Predeclared type; data holds its `BasicKind`.
    Basic = 0,

    // === Simple Containers (16-31) ===
    /// Pointer `*T`.
    Pointer = 16,
    /// Slice `[]T`.
    Slice = 17,
    /// Channel `chan T`.
    Chan = 18,

    // === Fixed-Size Containers (32-47) ===
    /// Array `[N]T`. Extra layout: `[elem, len_lo, len_hi]`.
    Array = 32,
    /// Map `map[K]V`. Extra layout: `[key, value]`.
    Map = 33,

    // === Complex Types (48-79) ===
    /// Struct. Extra layout: `[count, (name, ty, flags) * count]`.
    Struct = 48,
    /// Interface. Extra layout: `[count, method_name * count]`.
    Interface = 49,
    /// Function signature. Extra layout: `[n, params * n, m, results * m]`.
    Func = 50,

    // === Named Types (80-95) ===
    /// Declared type with its own identity.
    Named = 80,

    // === Type Parameters (96-111) ===
    /// Generic type parameter.
    TypeParam = 96,
}

impl Tag {
    /// Check if this tag uses the extra array for data.
    #[inline]
    pub const fn uses_extra(self) -> bool {
        matches!(
            self,
            Self::Array | Self::Map | Self::Struct | Self::Interface | Self::Func
        )
    }

    /// Check if this tag represents a container of one or two other types.
    #[inline]
    pub const fn is_container(self) -> bool {
        let v = self as u8;
        v >= 16 && v < 48
    }

    /// Check if values of this tag are hash-consed: building the same
    /// structure twice yields the same `Idx`.
    #[inline]
    pub const fn is_interned(self) -> bool {
        self.is_container() || matches!(self, Self::Basic)
    }

    /// Get the name of this tag as a static string.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Pointer => "pointer",
            Self::Slice => "slice",
            Self::Chan => "chan",
            Self::Array => "array",
            Self::Map => "map",
            Self::Struct => "struct",
            Self::Interface => "interface",
            Self::Func => "func",
            Self::Named => "named",
            Self::TypeParam => "type_param",
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag::{}", self.name())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

const _: () = assert!(std::mem::size_of::<Tag>() == 1);

#[cfg(test)]
mod tests;
