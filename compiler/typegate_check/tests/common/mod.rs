//! Shared test utilities: a small loader that turns type descriptions into
//! the syntax trees, resolution table and pool a real loader would produce.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use rustc_hash::FxHashMap;
use typegate_ir::{
    FieldDecl, FuncType, InterfaceMethod, InterfaceType, Name, NodeId, Package, SourceFile,
    Span, StringInterner, StructType, TypeDecl, TypeExpr, TypeExprKind,
};
use typegate_types::{BasicKind, FieldDef, Idx, Pool, TypeTable};

/// A type expression as written in source.
#[derive(Clone, Debug)]
pub enum Src {
    Ident(&'static str),
    Pointer(Box<Src>),
    Slice(Box<Src>),
    Array(u64, Box<Src>),
    Map(Box<Src>, Box<Src>),
    Chan(Box<Src>),
    Func(Vec<Src>, Vec<Src>),
    Interface(Vec<&'static str>),
    /// Fields as `(name, type)`; an empty name declares an embedded field.
    Struct(Vec<(&'static str, Src)>),
}

pub fn ident(name: &'static str) -> Src {
    Src::Ident(name)
}

pub fn ptr(elem: Src) -> Src {
    Src::Pointer(Box::new(elem))
}

pub fn slice(elem: Src) -> Src {
    Src::Slice(Box::new(elem))
}

pub fn array(len: u64, elem: Src) -> Src {
    Src::Array(len, Box::new(elem))
}

pub fn map(key: Src, value: Src) -> Src {
    Src::Map(Box::new(key), Box::new(value))
}

pub fn chan(elem: Src) -> Src {
    Src::Chan(Box::new(elem))
}

pub fn func(params: Vec<Src>, results: Vec<Src>) -> Src {
    Src::Func(params, results)
}

pub fn interface(methods: &[&'static str]) -> Src {
    Src::Interface(methods.to_vec())
}

pub fn strukt(fields: &[(&'static str, Src)]) -> Src {
    Src::Struct(fields.to_vec())
}

/// Everything the checker consumes for one package.
pub struct Loaded {
    pub names: StringInterner,
    pub pool: Pool,
    pub table: TypeTable,
    pub package: Package,
    decls: FxHashMap<&'static str, Idx>,
}

impl Loaded {
    /// The named type declared as `name`.
    pub fn decl(&self, name: &str) -> Idx {
        self.decls[name]
    }

    /// The definition of the declaration `name`.
    pub fn definition(&self, name: &str) -> Idx {
        self.pool.underlying(self.decl(name))
    }
}

/// Builder for a package of type declarations.
#[derive(Default)]
pub struct Loader {
    files: Vec<(&'static str, Vec<(&'static str, Src)>)>,
    unresolved: Vec<&'static str>,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn file(mut self, path: &'static str, decls: Vec<(&'static str, Src)>) -> Self {
        self.files.push((path, decls));
        self
    }

    /// Leave the declaration `name` out of the resolution table.
    pub fn unresolved(mut self, name: &'static str) -> Self {
        self.unresolved.push(name);
        self
    }

    pub fn load(self) -> Loaded {
        let mut lower = Lower {
            names: StringInterner::new(),
            pool: Pool::new(),
            table: TypeTable::new(),
            scope: FxHashMap::default(),
            next_id: 0,
            offset: 0,
        };

        // Declare first so declarations may refer to each other in any order.
        let mut decls = FxHashMap::default();
        for (_, file_decls) in &self.files {
            for (name, _) in file_decls {
                let interned = lower.names.intern(name);
                let idx = lower.pool.declare_named(interned);
                lower.scope.insert(interned, idx);
                decls.insert(*name, idx);
            }
        }

        let mut files = Vec::new();
        for (path, file_decls) in &self.files {
            let mut out = Vec::new();
            for (name, src) in file_decls {
                let idx = decls[name];
                let id = lower.node_id();
                let start = lower.offset;
                let (ty, definition) = lower.lower(src);
                if let Err(err) = lower.pool.define_named(idx, definition) {
                    panic!("defining {name}: {err}");
                }
                if !self.unresolved.contains(name) {
                    lower.table.record(id, idx);
                }
                out.push(TypeDecl {
                    id,
                    name: lower.names.intern(name),
                    ty,
                    doc: Some(format!("{name} is declared for tests.")),
                    span: Span::new(start, lower.bump(1)),
                });
            }
            files.push(SourceFile {
                path: (*path).to_string(),
                decls: out,
            });
        }

        let package = Package {
            name: lower.names.intern("fixture"),
            files,
        };
        Loaded {
            names: lower.names,
            pool: lower.pool,
            table: lower.table,
            package,
            decls,
        }
    }
}

struct Lower {
    names: StringInterner,
    pool: Pool,
    table: TypeTable,
    scope: FxHashMap<Name, Idx>,
    next_id: u32,
    offset: u32,
}

impl Lower {
    fn node_id(&mut self) -> NodeId {
        self.next_id += 1;
        NodeId::new(self.next_id)
    }

    fn bump(&mut self, len: u32) -> u32 {
        self.offset += len;
        self.offset
    }

    fn lower(&mut self, src: &Src) -> (TypeExpr, Idx) {
        let id = self.node_id();
        let start = self.offset;
        let (kind, idx) = match src {
            Src::Ident(name) => {
                let interned = self.names.intern(name);
                let idx = self.scope.get(&interned).copied().unwrap_or_else(|| {
                    BasicKind::from_name(name).map_or(Idx::INVALID, Idx::of_basic)
                });
                (TypeExprKind::Ident(interned), idx)
            }
            Src::Pointer(elem) => {
                let (elem, e) = self.lower(elem);
                (TypeExprKind::Pointer(Box::new(elem)), self.pool.pointer(e))
            }
            Src::Slice(elem) => {
                let (elem, e) = self.lower(elem);
                (TypeExprKind::Slice(Box::new(elem)), self.pool.slice(e))
            }
            Src::Array(len, elem) => {
                let (elem, e) = self.lower(elem);
                let kind = TypeExprKind::Array {
                    len: *len,
                    elem: Box::new(elem),
                };
                (kind, self.pool.array(e, *len))
            }
            Src::Map(key, value) => {
                let (key, k) = self.lower(key);
                let (value, v) = self.lower(value);
                let kind = TypeExprKind::Map {
                    key: Box::new(key),
                    value: Box::new(value),
                };
                (kind, self.pool.map(k, v))
            }
            Src::Chan(elem) => {
                let (elem, e) = self.lower(elem);
                (TypeExprKind::Chan(Box::new(elem)), self.pool.chan(e))
            }
            Src::Func(params, results) => {
                let (sig, idx) = self.lower_func(params, results);
                (TypeExprKind::Func(sig), idx)
            }
            Src::Interface(methods) => {
                let mut decls = Vec::new();
                let mut names = Vec::new();
                for method in methods {
                    let name = self.names.intern(method);
                    names.push(name);
                    let (sig, _) = self.lower_func(&[], &[]);
                    decls.push(InterfaceMethod {
                        name,
                        sig,
                        span: Span::new(self.offset, self.bump(1)),
                    });
                }
                let kind = TypeExprKind::Interface(InterfaceType { methods: decls });
                (kind, self.pool.interface(&names))
            }
            Src::Struct(fields) => {
                let mut decls = Vec::new();
                let mut defs = Vec::new();
                for (name, ty) in fields {
                    let field_start = self.offset;
                    let (expr, idx) = self.lower(ty);
                    let (names, field_name) = if name.is_empty() {
                        (Vec::new(), embedded_name(ty))
                    } else {
                        (vec![self.names.intern(name)], *name)
                    };
                    let interned = self.names.intern(field_name);
                    let def = if is_exported(field_name) {
                        FieldDef::public(interned, idx)
                    } else {
                        FieldDef::private(interned, idx)
                    };
                    defs.push(if name.is_empty() { def.embedded() } else { def });
                    decls.push(FieldDecl {
                        names,
                        ty: expr,
                        tag: Some(format!("json:\"{field_name}\"")),
                        doc: None,
                        span: Span::new(field_start, self.bump(1)),
                    });
                }
                let kind = TypeExprKind::Struct(StructType {
                    fields: decls,
                    span: Span::new(start, self.offset + 1),
                });
                (kind, self.pool.record(&defs))
            }
        };
        self.table.record(id, idx);
        let span = Span::new(start, self.bump(1));
        (TypeExpr { id, kind, span }, idx)
    }

    fn lower_func(&mut self, params: &[Src], results: &[Src]) -> (FuncType, Idx) {
        let (params, param_tys): (Vec<_>, Vec<_>) = params.iter().map(|p| self.lower(p)).unzip();
        let (results, result_tys): (Vec<_>, Vec<_>) =
            results.iter().map(|r| self.lower(r)).unzip();
        let idx = self.pool.func(&param_tys, &result_tys);
        (FuncType { params, results }, idx)
    }
}

/// Name an embedded field takes: its type's name, through one pointer.
fn embedded_name(src: &Src) -> &'static str {
    match src {
        Src::Ident(name) => *name,
        Src::Pointer(elem) => embedded_name(elem),
        other => panic!("cannot embed {other:?}"),
    }
}

fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}
