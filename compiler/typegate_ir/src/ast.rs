//! Syntax-tree model of type declarations.
//!
//! The loader builds one [`Package`] per source package. Only the parts of a
//! source file that describe types are modelled: top-level type declarations
//! and the type expressions nested inside them. Every [`TypeExpr`] and every
//! [`TypeDecl`] carries a [`NodeId`] that the loader's resolution table maps
//! to a canonical type handle.
//!
//! # Ownership
//!
//! Trees are plain owned data (`Box` for nested expressions). Consumers such
//! as the declaration index borrow into them for the duration of a run.

use std::fmt;

use crate::{Name, Span};

/// Identity of a syntax node within one package.
///
/// Assigned by the loader; unique per node, never reused.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    #[inline]
    pub const fn new(raw: u32) -> Self {
        NodeId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// All syntax trees of one source package.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Package {
    /// Package name as declared in its files.
    pub name: Name,
    /// Files in the order the loader produced them.
    pub files: Vec<SourceFile>,
}

impl Package {
    /// Iterate every top-level type declaration, file by file.
    pub fn type_decls(&self) -> impl Iterator<Item = &TypeDecl> {
        self.files.iter().flat_map(|file| file.decls.iter())
    }
}

/// One source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Path as reported by the loader, used only for display.
    pub path: String,
    /// Top-level type declarations in source order.
    pub decls: Vec<TypeDecl>,
}

/// A top-level type declaration: `type Name <expr>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeDecl {
    pub id: NodeId,
    pub name: Name,
    /// The declared definition.
    pub ty: TypeExpr,
    /// Doc comment text, passed through to the emitter untouched.
    pub doc: Option<String>,
    pub span: Span,
}

/// A type expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeExpr {
    pub id: NodeId,
    pub kind: TypeExprKind,
    pub span: Span,
}

/// The kind of a type expression.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TypeExprKind {
    /// Reference to a declared or predeclared type: `Spec`, `string`.
    Ident(Name),
    /// Reference to a type of another package: `pkg.Name`.
    Selector { package: Name, name: Name },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `[]T`
    Slice(Box<TypeExpr>),
    /// `[N]T`
    Array { len: u64, elem: Box<TypeExpr> },
    /// `map[K]V`
    Map {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// `chan T`
    Chan(Box<TypeExpr>),
    /// `func(...) (...)`
    Func(FuncType),
    /// `interface { ... }`
    Interface(InterfaceType),
    /// `struct { ... }`
    Struct(StructType),
}

/// A record type literal: the source-level declaration of a struct shape.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StructType {
    /// Fields in declaration order.
    pub fields: Vec<FieldDecl>,
    pub span: Span,
}

/// One field line of a struct literal.
///
/// `names` is empty for an embedded field and holds several names for a
/// grouped declaration such as `X, Y int`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldDecl {
    pub names: Vec<Name>,
    pub ty: TypeExpr,
    /// Raw tag text, opaque to the validator.
    pub tag: Option<String>,
    pub doc: Option<String>,
    pub span: Span,
}

impl FieldDecl {
    /// Whether this field is embedded (declared by type only).
    #[inline]
    pub fn is_embedded(&self) -> bool {
        self.names.is_empty()
    }
}

/// A function signature literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FuncType {
    pub params: Vec<TypeExpr>,
    pub results: Vec<TypeExpr>,
}

/// An interface literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceType {
    pub methods: Vec<InterfaceMethod>,
}

/// A method in an interface literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceMethod {
    pub name: Name,
    pub sig: FuncType,
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ident(id: u32, name: u32) -> TypeExpr {
        TypeExpr {
            id: NodeId::new(id),
            kind: TypeExprKind::Ident(Name::from_raw(name)),
            span: Span::DUMMY,
        }
    }

    fn decl(id: u32, name: u32) -> TypeDecl {
        TypeDecl {
            id: NodeId::new(id),
            name: Name::from_raw(name),
            ty: ident(id + 100, 1),
            doc: None,
            span: Span::DUMMY,
        }
    }

    #[test]
    fn type_decls_walk_files_in_order() {
        let package = Package {
            name: Name::from_raw(1),
            files: vec![
                SourceFile {
                    path: "a.src".to_string(),
                    decls: vec![decl(1, 10), decl(2, 11)],
                },
                SourceFile {
                    path: "b.src".to_string(),
                    decls: vec![decl(3, 12)],
                },
            ],
        };

        let ids: Vec<u32> = package.type_decls().map(|d| d.id.raw()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn embedded_field_has_no_names() {
        let field = FieldDecl {
            names: vec![],
            ty: ident(1, 2),
            tag: None,
            doc: None,
            span: Span::DUMMY,
        };
        assert!(field.is_embedded());
    }
}
