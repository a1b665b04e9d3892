//! Syntax-tree visitor.
//!
//! A single `Visitor` trait is provided for traversal. The visitor can mutate
//! its own state during traversal, but the tree remains immutable.
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes, and call the
//! matching `walk_*` function to keep descending.
//!
//! # Example
//!
//! ```text
//! struct CountStructs {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountStructs {
//!     fn visit_type_expr(&mut self, expr: &'ast TypeExpr) {
//!         if let TypeExprKind::Struct(_) = &expr.kind {
//!             self.count += 1;
//!         }
//!         walk_type_expr(self, expr);
//!     }
//! }
//! ```

use crate::ast::{
    FieldDecl, FuncType, Package, SourceFile, StructType, TypeDecl, TypeExpr, TypeExprKind,
};
use crate::NodeId;

/// Syntax-tree visitor trait.
pub trait Visitor<'ast> {
    fn visit_package(&mut self, package: &'ast Package) {
        walk_package(self, package);
    }

    fn visit_file(&mut self, file: &'ast SourceFile) {
        walk_file(self, file);
    }

    fn visit_type_decl(&mut self, decl: &'ast TypeDecl) {
        walk_type_decl(self, decl);
    }

    fn visit_type_expr(&mut self, expr: &'ast TypeExpr) {
        walk_type_expr(self, expr);
    }

    /// Visit a struct literal. `id` is the node id of the enclosing
    /// [`TypeExpr`], which is what the resolution table is keyed by.
    fn visit_struct_type(&mut self, id: NodeId, strukt: &'ast StructType) {
        let _ = id;
        walk_struct_type(self, strukt);
    }

    fn visit_field(&mut self, field: &'ast FieldDecl) {
        walk_field(self, field);
    }
}

pub fn walk_package<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, package: &'ast Package) {
    for file in &package.files {
        visitor.visit_file(file);
    }
}

pub fn walk_file<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, file: &'ast SourceFile) {
    for decl in &file.decls {
        visitor.visit_type_decl(decl);
    }
}

pub fn walk_type_decl<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, decl: &'ast TypeDecl) {
    visitor.visit_type_expr(&decl.ty);
}

/// Walk a type expression's children.
pub fn walk_type_expr<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, expr: &'ast TypeExpr) {
    match &expr.kind {
        TypeExprKind::Ident(_) | TypeExprKind::Selector { .. } => {}
        TypeExprKind::Pointer(elem)
        | TypeExprKind::Slice(elem)
        | TypeExprKind::Array { elem, .. }
        | TypeExprKind::Chan(elem) => visitor.visit_type_expr(elem),
        TypeExprKind::Map { key, value } => {
            visitor.visit_type_expr(key);
            visitor.visit_type_expr(value);
        }
        TypeExprKind::Func(sig) => walk_func_type(visitor, sig),
        TypeExprKind::Interface(iface) => {
            for method in &iface.methods {
                walk_func_type(visitor, &method.sig);
            }
        }
        TypeExprKind::Struct(strukt) => visitor.visit_struct_type(expr.id, strukt),
    }
}

pub fn walk_struct_type<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    strukt: &'ast StructType,
) {
    for field in &strukt.fields {
        visitor.visit_field(field);
    }
}

pub fn walk_field<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, field: &'ast FieldDecl) {
    visitor.visit_type_expr(&field.ty);
}

fn walk_func_type<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, sig: &'ast FuncType) {
    for param in &sig.params {
        visitor.visit_type_expr(param);
    }
    for result in &sig.results {
        visitor.visit_type_expr(result);
    }
}
