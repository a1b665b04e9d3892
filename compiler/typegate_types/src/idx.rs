//! Type index handle.
//!
//! `Idx` is the canonical type representation.
//! All types are stored in the [`Pool`](crate::Pool) and referenced by their
//! 32-bit index.
//!
//! - Basic types have fixed indices (0-18) for O(1) lookup
//! - Type equality is O(1) index comparison
//! - Copy, lightweight passing

use std::fmt;

use crate::BasicKind;

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality, never structurally.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    // === Basic Types (indices 0-18) ===
    // Pre-interned at pool creation.

    /// A type that failed to resolve.
    pub const INVALID: Self = Self::of_basic(BasicKind::Invalid);
    pub const BOOL: Self = Self::of_basic(BasicKind::Bool);
    pub const INT: Self = Self::of_basic(BasicKind::Int);
    pub const INT8: Self = Self::of_basic(BasicKind::Int8);
    pub const INT16: Self = Self::of_basic(BasicKind::Int16);
    pub const INT32: Self = Self::of_basic(BasicKind::Int32);
    pub const INT64: Self = Self::of_basic(BasicKind::Int64);
    pub const UINT: Self = Self::of_basic(BasicKind::Uint);
    pub const UINT8: Self = Self::of_basic(BasicKind::Uint8);
    pub const UINT16: Self = Self::of_basic(BasicKind::Uint16);
    pub const UINT32: Self = Self::of_basic(BasicKind::Uint32);
    pub const UINT64: Self = Self::of_basic(BasicKind::Uint64);
    pub const UINTPTR: Self = Self::of_basic(BasicKind::Uintptr);
    pub const FLOAT32: Self = Self::of_basic(BasicKind::Float32);
    pub const FLOAT64: Self = Self::of_basic(BasicKind::Float64);
    pub const COMPLEX64: Self = Self::of_basic(BasicKind::Complex64);
    pub const COMPLEX128: Self = Self::of_basic(BasicKind::Complex128);
    pub const STRING: Self = Self::of_basic(BasicKind::String);
    pub const UNSAFE_POINTER: Self = Self::of_basic(BasicKind::UnsafePointer);

    // === Reserved Range (19-31) ===

    /// First index for dynamically allocated types.
    pub const FIRST_DYNAMIC: u32 = 32;

    /// Sentinel value indicating no type.
    pub const NONE: Self = Self(u32::MAX);

    /// Handle of the pre-interned basic type of `kind`.
    #[inline]
    pub const fn of_basic(kind: BasicKind) -> Self {
        Self(kind as u32)
    }

    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index is valid in the pool it is used with.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if this is a pre-interned basic type (or a reserved slot).
    #[inline]
    pub const fn is_basic(self) -> bool {
        self.0 < Self::FIRST_DYNAMIC
    }

    #[inline]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        self.0 == Self::INVALID.0
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            return write!(f, "Idx::NONE");
        }
        if self.0 < BasicKind::ALL.len() as u32 {
            return write!(f, "Idx({})", BasicKind::from_raw(self.0));
        }
        write!(f, "Idx({})", self.0)
    }
}
