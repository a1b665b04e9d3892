//! Type construction for loaders.

use typegate_ir::Name;

use super::{NamedEntry, Pool};
use crate::field::FieldDef;
use crate::{Idx, Item, PoolError, Tag};

impl Pool {
    fn push(&mut self, item: Item) -> Idx {
        #[allow(clippy::cast_possible_truncation)]
        let idx = Idx::from_raw(self.items.len() as u32);
        self.items.push(item);
        idx
    }

    #[allow(clippy::cast_possible_truncation)]
    fn push_extra(&mut self, tag: Tag, payload: &[u32]) -> Idx {
        let start = self.extra.len() as u32;
        self.extra.extend_from_slice(payload);
        self.push(Item::new(tag, start))
    }

    fn intern_simple(&mut self, tag: Tag, child: Idx) -> Idx {
        if let Some(&idx) = self.simple.get(&(tag, child.raw())) {
            return idx;
        }
        let idx = self.push(Item::simple_container(tag, child));
        self.simple.insert((tag, child.raw()), idx);
        idx
    }

    fn intern_complex(&mut self, tag: Tag, payload: Vec<u32>) -> Idx {
        if let Some(&idx) = self.complex.get(&(tag, payload.clone())) {
            return idx;
        }
        let idx = self.push_extra(tag, &payload);
        self.complex.insert((tag, payload), idx);
        idx
    }

    // === Simple Container Constructors ===

    /// Create a pointer type `*elem`.
    pub fn pointer(&mut self, elem: Idx) -> Idx {
        self.intern_simple(Tag::Pointer, elem)
    }

    /// Create a slice type `[]elem`.
    pub fn slice(&mut self, elem: Idx) -> Idx {
        self.intern_simple(Tag::Slice, elem)
    }

    /// Create a channel type `chan elem`.
    pub fn chan(&mut self, elem: Idx) -> Idx {
        self.intern_simple(Tag::Chan, elem)
    }

    // === Fixed-Size Container Constructors ===

    /// Create an array type `[len]elem`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn array(&mut self, elem: Idx, len: u64) -> Idx {
        self.intern_complex(Tag::Array, vec![elem.raw(), len as u32, (len >> 32) as u32])
    }

    /// Create a map type `map[key]value`.
    pub fn map(&mut self, key: Idx, value: Idx) -> Idx {
        self.intern_complex(Tag::Map, vec![key.raw(), value.raw()])
    }

    // === Fresh Constructors ===

    /// Create a struct type with `fields` in declaration order.
    #[allow(clippy::cast_possible_truncation)]
    pub fn record(&mut self, fields: &[FieldDef]) -> Idx {
        let mut payload = Vec::with_capacity(1 + fields.len() * 3);
        payload.push(fields.len() as u32);
        for field in fields {
            payload.extend([field.name.raw(), field.ty.raw(), field.flags().bits()]);
        }
        self.push_extra(Tag::Struct, &payload)
    }

    /// Create an interface type with the given method names.
    #[allow(clippy::cast_possible_truncation)]
    pub fn interface(&mut self, methods: &[Name]) -> Idx {
        let mut payload = Vec::with_capacity(1 + methods.len());
        payload.push(methods.len() as u32);
        payload.extend(methods.iter().map(|m| m.raw()));
        self.push_extra(Tag::Interface, &payload)
    }

    /// Create a function signature `func(params) (results)`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn func(&mut self, params: &[Idx], results: &[Idx]) -> Idx {
        let mut payload = Vec::with_capacity(2 + params.len() + results.len());
        payload.push(params.len() as u32);
        payload.extend(params.iter().map(|p| p.raw()));
        payload.push(results.len() as u32);
        payload.extend(results.iter().map(|r| r.raw()));
        self.push_extra(Tag::Func, &payload)
    }

    /// Create a generic type parameter.
    pub fn type_param(&mut self, name: Name) -> Idx {
        self.push(Item::new(Tag::TypeParam, name.raw()))
    }

    // === Named Types ===

    /// Declare a named type whose definition is not known yet.
    ///
    /// Until [`define_named`](Self::define_named) is called its definition is
    /// [`Idx::INVALID`]. Declaring first lets a definition refer to the type
    /// being defined.
    #[allow(clippy::cast_possible_truncation)]
    pub fn declare_named(&mut self, name: Name) -> Idx {
        let slot = self.named.len() as u32;
        self.named.push(NamedEntry {
            name,
            definition: Idx::INVALID,
            defined: false,
        });
        self.push(Item::new(Tag::Named, slot))
    }

    /// Set the definition of a declared named type.
    pub fn define_named(&mut self, idx: Idx, definition: Idx) -> Result<(), PoolError> {
        let item = self.item(idx);
        if item.tag != Tag::Named {
            return Err(PoolError::NotNamed(idx));
        }
        let entry = &mut self.named[item.data as usize];
        if entry.defined {
            return Err(PoolError::AlreadyDefined(idx));
        }
        entry.definition = definition;
        entry.defined = true;
        Ok(())
    }

    /// Declare and define a named type in one step.
    pub fn named(&mut self, name: Name, definition: Idx) -> Idx {
        let slot = self.named.len();
        let idx = self.declare_named(name);
        self.named[slot].definition = definition;
        self.named[slot].defined = true;
        idx
    }
}
