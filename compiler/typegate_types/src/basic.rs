//! Basic (predeclared) type kinds.

use std::fmt;

/// Kind of a basic type.
///
/// The discriminant equals the raw index of the pre-interned pool entry, so
/// `Idx::from_raw(kind as u32)` is the handle of that basic type.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum BasicKind {
    /// A type that failed to resolve during loading.
    Invalid = 0,
    Bool = 1,
    Int = 2,
    Int8 = 3,
    Int16 = 4,
    Int32 = 5,
    Int64 = 6,
    Uint = 7,
    Uint8 = 8,
    Uint16 = 9,
    Uint32 = 10,
    Uint64 = 11,
    Uintptr = 12,
    Float32 = 13,
    Float64 = 14,
    Complex64 = 15,
    Complex128 = 16,
    String = 17,
    UnsafePointer = 18,
}

impl BasicKind {
    /// Every basic kind, in discriminant order.
    pub const ALL: [BasicKind; 19] = [
        BasicKind::Invalid,
        BasicKind::Bool,
        BasicKind::Int,
        BasicKind::Int8,
        BasicKind::Int16,
        BasicKind::Int32,
        BasicKind::Int64,
        BasicKind::Uint,
        BasicKind::Uint8,
        BasicKind::Uint16,
        BasicKind::Uint32,
        BasicKind::Uint64,
        BasicKind::Uintptr,
        BasicKind::Float32,
        BasicKind::Float64,
        BasicKind::Complex64,
        BasicKind::Complex128,
        BasicKind::String,
        BasicKind::UnsafePointer,
    ];

    /// Decode from an item's data field. Unknown values decode as `Invalid`.
    #[inline]
    pub fn from_raw(raw: u32) -> Self {
        usize::try_from(raw)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or(BasicKind::Invalid)
    }

    #[inline]
    pub const fn is_invalid(self) -> bool {
        matches!(self, BasicKind::Invalid)
    }

    /// Whether this kind is textual. Only these kinds are valid map keys.
    #[inline]
    pub const fn is_string(self) -> bool {
        matches!(self, BasicKind::String)
    }

    #[inline]
    pub const fn is_numeric(self) -> bool {
        (self as u8) >= (BasicKind::Int as u8) && (self as u8) <= (BasicKind::Complex128 as u8)
    }

    /// Source-level spelling of this kind.
    pub const fn name(self) -> &'static str {
        match self {
            BasicKind::Invalid => "invalid type",
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
            BasicKind::UnsafePointer => "unsafe.Pointer",
        }
    }

    /// Look up a predeclared kind by its spelling.
    ///
    /// `byte` and `rune` are accepted as the aliases of `uint8` and `int32`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "byte" => return Some(BasicKind::Uint8),
            "rune" => return Some(BasicKind::Int32),
            "invalid type" => return None,
            _ => {}
        }
        Self::ALL.iter().copied().find(|kind| kind.name() == name)
    }
}

impl fmt::Display for BasicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
