//! The support classifier.
//!
//! Answers "can the emitter translate this type?" by walking the type graph
//! from a root. The emitter expands structures inline and has no notion of a
//! named back-reference, so any type that contains itself is rejected.
//!
//! # Cycle detection
//!
//! Each call receives the path of enclosing types and copies it before
//! pushing its own type, so sibling branches never see each other's pushes.
//! A type already on the path is a cycle. Every recursive call therefore
//! runs on a strictly longer path of distinct handles, which bounds the
//! recursion by the size of the pool.
//!
//! Results are not cached: a type reachable along two paths is checked twice.

use smallvec::SmallVec;
use typegate_ir::StringInterner;
use typegate_stack::ensure_sufficient_stack;
use typegate_types::{Idx, Pool, Shape};

use crate::SupportError;

/// Enclosing types of the current classification call, outermost first.
pub type TypePath = SmallVec<[Idx; 8]>;

/// Classifier over one pool.
///
/// Holds only shared references, so one checker can serve any number of
/// concurrent calls.
#[derive(Copy, Clone)]
pub struct SupportChecker<'a> {
    pool: &'a Pool,
    interner: &'a StringInterner,
}

impl<'a> SupportChecker<'a> {
    pub fn new(pool: &'a Pool, interner: &'a StringInterner) -> Self {
        Self { pool, interner }
    }

    /// Classify `idx` as a top-level type, with an empty path.
    pub fn check(&self, idx: Idx) -> Result<(), SupportError> {
        self.supported_type(&[], idx)
    }

    /// Classify `idx` reached through `stack`.
    ///
    /// Returns the first failure in field declaration order.
    pub fn supported_type(&self, stack: &[Idx], idx: Idx) -> Result<(), SupportError> {
        ensure_sufficient_stack(|| self.classify(stack, idx))
    }

    fn classify(&self, stack: &[Idx], idx: Idx) -> Result<(), SupportError> {
        if stack.contains(&idx) {
            tracing::trace!(?idx, depth = stack.len(), "type reached through itself");
            return Err(self.recursive(idx));
        }
        let mut path = TypePath::from_slice(stack);
        path.push(idx);

        let underlying = self.pool.underlying(idx);
        match self.pool.shape(underlying) {
            Shape::Basic(kind) => {
                if kind.is_invalid() {
                    return Err(self.unsupported(underlying));
                }
                Ok(())
            }
            // A declaration written as another named type. The target is
            // checked when it is classified on its own, and the emitter must
            // refer to it by name rather than expand it. A definition chain
            // that never reaches a real type (`type A A`, or one ending in an
            // undefined name) has no underlying type at all.
            Shape::Named { .. } => {
                if self.pool.resolve(underlying).is_invalid() {
                    tracing::trace!(?idx, "named definition chain does not resolve");
                    return Err(self.unsupported(Idx::INVALID));
                }
                Ok(())
            }
            Shape::Pointer(elem) | Shape::Slice(elem) | Shape::Array { elem, .. } => {
                self.supported_type(&path, elem)
            }
            Shape::Map { key, value } => {
                if !self.is_string_key(key) {
                    return Err(self.unsupported_map_key(key, underlying));
                }
                self.supported_type(&path, value)
            }
            Shape::Struct(fields) => {
                if fields.is_empty() {
                    return Ok(());
                }
                for field in fields.iter().filter(|field| field.is_exported()) {
                    self.supported_type(&path, field.ty)?;
                }
                Ok(())
            }
            Shape::Interface(_) => Ok(()),
            Shape::Chan(_) | Shape::Func { .. } | Shape::TypeParam(_) => {
                Err(self.unsupported(underlying))
            }
        }
    }

    /// Keys are checked in place, not classified: only the resolved shape matters.
    fn is_string_key(&self, key: Idx) -> bool {
        matches!(self.pool.shape(self.pool.resolve(key)), Shape::Basic(kind) if kind.is_string())
    }

    fn name(&self, idx: Idx) -> String {
        self.pool.format_type(idx, self.interner)
    }

    fn recursive(&self, ty: Idx) -> SupportError {
        SupportError::RecursiveType {
            ty,
            name: self.name(ty),
        }
    }

    fn unsupported(&self, ty: Idx) -> SupportError {
        tracing::trace!(?ty, "unsupported shape");
        SupportError::UnsupportedType {
            ty,
            name: self.name(ty),
        }
    }

    fn unsupported_map_key(&self, key: Idx, map: Idx) -> SupportError {
        tracing::trace!(?key, ?map, "map key is not a string");
        SupportError::UnsupportedMapKey {
            key,
            key_name: self.name(key),
            map,
            map_name: self.name(map),
        }
    }
}
