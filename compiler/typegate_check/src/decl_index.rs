//! Declaration index: struct type → its source declaration.
//!
//! The emitter needs the syntax of every struct it expands (field order,
//! tags, doc comments); the pool only has the structure. The index is built
//! once per package by visiting every syntax node and recording each struct
//! literal under the type the loader resolved it to.

use rustc_hash::FxHashMap;
use typegate_ir::visitor::{walk_struct_type, Visitor};
use typegate_ir::{NodeId, Package, StructType};
use typegate_types::{Idx, Pool, TypeTable};

/// Map from struct types to their declarations, borrowed from the trees.
#[derive(Clone, Debug, Default)]
pub struct DeclIndex<'ast> {
    decls: FxHashMap<Idx, &'ast StructType>,
}

impl<'ast> DeclIndex<'ast> {
    /// Index every struct literal of `package`.
    ///
    /// Literals the table has no type for are skipped. Never fails.
    #[tracing::instrument(level = "debug", skip_all, fields(files = package.files.len()))]
    pub fn build(package: &'ast Package, table: &TypeTable) -> Self {
        let mut builder = IndexBuilder {
            table,
            decls: FxHashMap::default(),
            unresolved: 0,
        };
        builder.visit_package(package);

        tracing::debug!(
            structs = builder.decls.len(),
            unresolved = builder.unresolved,
            "declaration index built"
        );
        Self {
            decls: builder.decls,
        }
    }

    /// Declaration of the struct type `idx`.
    #[inline]
    pub fn get(&self, idx: Idx) -> Option<&'ast StructType> {
        self.decls.get(&idx).copied()
    }

    /// Declaration of `idx` or, for a named type, of its definition.
    pub fn declaration_for(&self, pool: &Pool, idx: Idx) -> Option<&'ast StructType> {
        self.get(idx).or_else(|| self.get(pool.underlying(idx)))
    }

    #[inline]
    pub fn contains(&self, idx: Idx) -> bool {
        self.decls.contains_key(&idx)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// All entries, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (Idx, &'ast StructType)> + '_ {
        self.decls.iter().map(|(&idx, &decl)| (idx, decl))
    }
}

struct IndexBuilder<'t, 'ast> {
    table: &'t TypeTable,
    decls: FxHashMap<Idx, &'ast StructType>,
    unresolved: usize,
}

impl<'ast> Visitor<'ast> for IndexBuilder<'_, 'ast> {
    fn visit_struct_type(&mut self, id: NodeId, strukt: &'ast StructType) {
        match self.table.type_of(id) {
            Some(idx) => {
                self.decls.insert(idx, strukt);
            }
            None => {
                tracing::trace!(?id, "struct literal has no resolved type");
                self.unresolved += 1;
            }
        }
        walk_struct_type(self, strukt);
    }
}
