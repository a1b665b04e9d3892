//! Type formatting for diagnostics.

use std::fmt::Write as _;

use typegate_ir::StringInterner;

use crate::{Idx, Pool, Shape};

impl Pool {
    /// Format a type as a human-readable string.
    ///
    /// Named types render by name and are never expanded, so formatting
    /// terminates on recursive declarations.
    pub fn format_type(&self, idx: Idx, interner: &StringInterner) -> String {
        let mut buf = String::new();
        self.format_type_into(idx, interner, &mut buf);
        buf
    }

    /// Format a type into an existing string buffer.
    pub fn format_type_into(&self, idx: Idx, interner: &StringInterner, buf: &mut String) {
        match self.shape(idx) {
            Shape::Basic(kind) => buf.push_str(kind.name()),
            Shape::Named { name, .. } | Shape::TypeParam(name) => {
                buf.push_str(interner.lookup(name));
            }
            Shape::Pointer(elem) => {
                buf.push('*');
                self.format_type_into(elem, interner, buf);
            }
            Shape::Slice(elem) => {
                buf.push_str("[]");
                self.format_type_into(elem, interner, buf);
            }
            Shape::Array { elem, len } => {
                let _ = write!(buf, "[{len}]");
                self.format_type_into(elem, interner, buf);
            }
            Shape::Map { key, value } => {
                buf.push_str("map[");
                self.format_type_into(key, interner, buf);
                buf.push(']');
                self.format_type_into(value, interner, buf);
            }
            Shape::Chan(elem) => {
                buf.push_str("chan ");
                self.format_type_into(elem, interner, buf);
            }
            Shape::Struct(fields) => {
                buf.push_str("struct{");
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        buf.push_str("; ");
                    }
                    if !field.embedded {
                        buf.push_str(interner.lookup(field.name));
                        buf.push(' ');
                    }
                    self.format_type_into(field.ty, interner, buf);
                }
                buf.push('}');
            }
            Shape::Interface(methods) => {
                buf.push_str("interface{");
                for (i, method) in methods.iter().enumerate() {
                    if i > 0 {
                        buf.push_str("; ");
                    }
                    buf.push_str(interner.lookup(method));
                }
                buf.push('}');
            }
            Shape::Func { params, results } => {
                buf.push_str("func(");
                for (i, param) in params.iter().enumerate() {
                    if i > 0 {
                        buf.push_str(", ");
                    }
                    self.format_type_into(param, interner, buf);
                }
                buf.push(')');
                match results.len() {
                    0 => {}
                    1 => {
                        buf.push(' ');
                        for result in results.iter() {
                            self.format_type_into(result, interner, buf);
                        }
                    }
                    _ => {
                        buf.push_str(" (");
                        for (i, result) in results.iter().enumerate() {
                            if i > 0 {
                                buf.push_str(", ");
                            }
                            self.format_type_into(result, interner, buf);
                        }
                        buf.push(')');
                    }
                }
            }
        }
    }
}
