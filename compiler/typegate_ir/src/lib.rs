//! typegate IR - names, spans and syntax trees.
//!
//! This crate holds the data the source loader hands to the validator:
//! - Spans for source locations
//! - Names for interned identifiers
//! - The syntax-tree model of type declarations (`Package`, `TypeDecl`, `TypeExpr`)
//! - A visitor over those trees
//!
//! # Design Philosophy
//!
//! - **Intern Everything**: identifiers are `Name(u32)`, compared in O(1)
//! - **Identify Every Node**: each type expression carries a `NodeId` so the
//!   loader's resolution table can map it to a type handle
//! - **Read-only after loading**: nothing in this crate mutates a tree

pub mod ast;
mod interner;
mod name;
mod span;
pub mod visitor;

pub use ast::{
    FieldDecl, FuncType, InterfaceMethod, InterfaceType, NodeId, Package, SourceFile,
    StructType, TypeDecl, TypeExpr, TypeExprKind,
};
pub use interner::{InternError, StringInterner};
pub use name::Name;
pub use span::Span;
