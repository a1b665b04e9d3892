//! The type pool.
//!
//! Every type is an [`Item`] in `items`, addressed by its [`Idx`]. Basic types
//! are pre-interned at fixed indices. Containers are hash-consed so the same
//! structure always yields the same handle; structs, interfaces, signatures,
//! type parameters and named types are fresh on every construction, the way
//! each source-level literal is its own type.
//!
//! Once a loader has finished building it, the pool is read-only and `Sync`:
//! any number of classification calls may share it.

mod construct;
mod format;

use rustc_hash::FxHashMap;
use typegate_ir::Name;

use crate::shape::{Fields, NameList, Shape, TypeList};
use crate::{BasicKind, Idx, Item, Tag};

/// Name and definition of a named type.
#[derive(Copy, Clone, Debug)]
struct NamedEntry {
    name: Name,
    definition: Idx,
    defined: bool,
}

/// Unified storage for all types of one generation run.
#[derive(Clone, Debug)]
pub struct Pool {
    items: Vec<Item>,
    extra: Vec<u32>,
    named: Vec<NamedEntry>,
    /// Hash-consing for simple containers: `(tag, child)`.
    simple: FxHashMap<(Tag, u32), Idx>,
    /// Hash-consing for extra-backed containers: `(tag, payload)`.
    complex: FxHashMap<(Tag, Vec<u32>), Idx>,
}

impl Pool {
    /// Create a pool with every basic type pre-interned.
    pub fn new() -> Self {
        let mut items = Vec::with_capacity(Idx::FIRST_DYNAMIC as usize * 2);
        items.extend(BasicKind::ALL.iter().map(|&kind| Item::basic(kind)));
        // Reserved slots decode as invalid.
        items.resize(Idx::FIRST_DYNAMIC as usize, Item::INVALID);

        Self {
            items,
            extra: Vec::new(),
            named: Vec::new(),
            simple: FxHashMap::default(),
            complex: FxHashMap::default(),
        }
    }

    /// Number of items, including the pre-interned range.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false: basic types are pre-interned.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether `idx` was allocated by this pool.
    #[inline]
    pub fn contains(&self, idx: Idx) -> bool {
        (idx.raw() as usize) < self.items.len()
    }

    /// Raw item of `idx`. Handles this pool never produced decode as invalid.
    #[inline]
    pub fn item(&self, idx: Idx) -> Item {
        self.items
            .get(idx.raw() as usize)
            .copied()
            .unwrap_or(Item::INVALID)
    }

    #[inline]
    pub fn tag(&self, idx: Idx) -> Tag {
        self.item(idx).tag
    }

    /// Decode the structural kind of `idx`.
    pub fn shape(&self, idx: Idx) -> Shape<'_> {
        let item = self.item(idx);
        match item.tag {
            Tag::Basic => Shape::Basic(BasicKind::from_raw(item.data)),
            Tag::Pointer => Shape::Pointer(item.child()),
            Tag::Slice => Shape::Slice(item.child()),
            Tag::Chan => Shape::Chan(item.child()),
            Tag::Array => {
                let start = item.extra_index();
                let len = u64::from(self.extra[start + 1]) | (u64::from(self.extra[start + 2]) << 32);
                Shape::Array {
                    elem: Idx::from_raw(self.extra[start]),
                    len,
                }
            }
            Tag::Map => {
                let start = item.extra_index();
                Shape::Map {
                    key: Idx::from_raw(self.extra[start]),
                    value: Idx::from_raw(self.extra[start + 1]),
                }
            }
            Tag::Struct => {
                let (start, count) = self.length_prefixed(item);
                Shape::Struct(Fields::new(
                    &self.extra[start..start + count * Fields::STRIDE],
                ))
            }
            Tag::Interface => {
                let (start, count) = self.length_prefixed(item);
                Shape::Interface(NameList::new(&self.extra[start..start + count]))
            }
            Tag::Func => {
                let (params_start, params_len) = self.length_prefixed(item);
                let results_at = params_start + params_len;
                let results_len = self.extra[results_at] as usize;
                Shape::Func {
                    params: TypeList::new(&self.extra[params_start..results_at]),
                    results: TypeList::new(
                        &self.extra[results_at + 1..results_at + 1 + results_len],
                    ),
                }
            }
            Tag::Named => {
                let entry = self.named[item.data as usize];
                Shape::Named {
                    name: entry.name,
                    definition: entry.definition,
                }
            }
            Tag::TypeParam => Shape::TypeParam(Name::from_raw(item.data)),
        }
    }

    /// The underlying type of `idx`: a named type's definition, any other
    /// type itself.
    ///
    /// Exactly one named layer is stripped. A named type declared in terms of
    /// another named type therefore has a named underlying type.
    pub fn underlying(&self, idx: Idx) -> Idx {
        match self.shape(idx) {
            Shape::Named { definition, .. } => definition,
            _ => idx,
        }
    }

    /// Strip every named layer of `idx`.
    ///
    /// A chain longer than the number of named types can only be a cycle of
    /// definitions, which resolves to [`Idx::INVALID`].
    pub fn resolve(&self, idx: Idx) -> Idx {
        let mut current = idx;
        for _ in 0..=self.named.len() {
            match self.shape(current) {
                Shape::Named { definition, .. } => current = definition,
                _ => return current,
            }
        }
        Idx::INVALID
    }

    /// Start of the payload and its length for a length-prefixed item.
    fn length_prefixed(&self, item: Item) -> (usize, usize) {
        let at = item.extra_index();
        (at + 1, self.extra[at] as usize)
    }
}

impl Default for Pool {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
