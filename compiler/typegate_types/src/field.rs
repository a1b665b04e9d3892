//! Struct field definitions.

use bitflags::bitflags;
use typegate_ir::Name;

use crate::Idx;

/// Visibility of a field.
///
/// Only `Public` (exported) fields are part of a type's external contract and
/// take part in schema translation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Public,
    Private,
}

bitflags! {
    /// Field flags as packed into the pool's extra array.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub(crate) struct FieldFlags: u32 {
        const PRIVATE = 1 << 0;
        const EMBEDDED = 1 << 1;
    }
}

/// Definition of a struct field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldDef {
    /// Field name. For an embedded field, the name of the embedded type.
    pub name: Name,
    /// Declared field type.
    pub ty: Idx,
    pub visibility: Visibility,
    /// Declared by type only.
    pub embedded: bool,
}

impl FieldDef {
    /// An exported field.
    pub fn public(name: Name, ty: Idx) -> Self {
        Self {
            name,
            ty,
            visibility: Visibility::Public,
            embedded: false,
        }
    }

    /// A non-exported field.
    pub fn private(name: Name, ty: Idx) -> Self {
        Self {
            name,
            ty,
            visibility: Visibility::Private,
            embedded: false,
        }
    }

    /// Mark this field as embedded.
    #[must_use]
    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    /// Whether the field is externally visible.
    #[inline]
    pub fn is_exported(&self) -> bool {
        self.visibility == Visibility::Public
    }

    pub(crate) fn flags(&self) -> FieldFlags {
        let mut flags = FieldFlags::empty();
        flags.set(FieldFlags::PRIVATE, self.visibility == Visibility::Private);
        flags.set(FieldFlags::EMBEDDED, self.embedded);
        flags
    }

    pub(crate) fn decode(name: u32, ty: u32, flags: u32) -> Self {
        let flags = FieldFlags::from_bits_truncate(flags);
        Self {
            name: Name::from_raw(name),
            ty: Idx::from_raw(ty),
            visibility: if flags.contains(FieldFlags::PRIVATE) {
                Visibility::Private
            } else {
                Visibility::Public
            },
            embedded: flags.contains(FieldFlags::EMBEDDED),
        }
    }
}
