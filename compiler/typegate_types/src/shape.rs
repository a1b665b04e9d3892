//! Decoded view of a pool item.
//!
//! [`Shape`] is the closed set of structural kinds a type can have. Every
//! consumer dispatches on it with an exhaustive `match`, so adding a variant
//! is a compile error at each dispatch site until it is handled.

use std::fmt;

use typegate_ir::Name;

use crate::field::FieldDef;
use crate::{BasicKind, Idx};

/// Structural kind of a type, borrowed from the pool.
#[derive(Copy, Clone, Debug)]
pub enum Shape<'p> {
    Basic(BasicKind),
    /// A declared type. `definition` is the type it was declared as.
    Named { name: Name, definition: Idx },
    Pointer(Idx),
    Slice(Idx),
    Array { elem: Idx, len: u64 },
    Map { key: Idx, value: Idx },
    Chan(Idx),
    Struct(Fields<'p>),
    Interface(NameList<'p>),
    Func {
        params: TypeList<'p>,
        results: TypeList<'p>,
    },
    TypeParam(Name),
}

/// Fields of a struct, in declaration order.
#[derive(Copy, Clone)]
pub struct Fields<'p> {
    raw: &'p [u32],
}

impl<'p> Fields<'p> {
    /// Words per packed field: name, type, flags.
    pub(crate) const STRIDE: usize = 3;

    pub(crate) fn new(raw: &'p [u32]) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len() / Self::STRIDE
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn get(&self, i: usize) -> Option<FieldDef> {
        let start = i.checked_mul(Self::STRIDE)?;
        match self.raw.get(start..start + Self::STRIDE)? {
            &[name, ty, flags] => Some(FieldDef::decode(name, ty, flags)),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = FieldDef> + 'p {
        self.raw
            .chunks_exact(Self::STRIDE)
            .map(|chunk| FieldDef::decode(chunk[0], chunk[1], chunk[2]))
    }
}

impl fmt::Debug for Fields<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A list of type handles (function parameters or results).
#[derive(Copy, Clone)]
pub struct TypeList<'p> {
    raw: &'p [u32],
}

impl<'p> TypeList<'p> {
    pub(crate) fn new(raw: &'p [u32]) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Idx> + 'p {
        self.raw.iter().map(|&raw| Idx::from_raw(raw))
    }
}

impl fmt::Debug for TypeList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// A list of names (interface methods).
#[derive(Copy, Clone)]
pub struct NameList<'p> {
    raw: &'p [u32],
}

impl<'p> NameList<'p> {
    pub(crate) fn new(raw: &'p [u32]) -> Self {
        Self { raw }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Name> + 'p {
        self.raw.iter().map(|&raw| Name::from_raw(raw))
    }
}

impl fmt::Debug for NameList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
