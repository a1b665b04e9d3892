//! Rejection reasons.

use thiserror::Error;
use typegate_diagnostic::{Diagnostic, ErrorCode};
use typegate_ir::Span;
use typegate_types::Idx;

/// Why a type cannot be translated.
///
/// Each variant carries the offending handles and their rendered names, so
/// the message can be shown without access to the pool.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SupportError {
    /// The type contains itself, directly or through other types.
    #[error("recursive type {name}")]
    RecursiveType { ty: Idx, name: String },

    /// The type's shape has no schema representation, or it failed to resolve.
    #[error("unsupported type {name}")]
    UnsupportedType { ty: Idx, name: String },

    /// A map whose key is not string-like.
    #[error("unsupported map key type {key_name} of {map_name}")]
    UnsupportedMapKey {
        key: Idx,
        key_name: String,
        map: Idx,
        map_name: String,
    },
}

/// Fieldless discriminant of [`SupportError`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SupportErrorKind {
    RecursiveType,
    UnsupportedType,
    UnsupportedMapKey,
}

impl SupportError {
    pub fn kind(&self) -> SupportErrorKind {
        match self {
            SupportError::RecursiveType { .. } => SupportErrorKind::RecursiveType,
            SupportError::UnsupportedType { .. } => SupportErrorKind::UnsupportedType,
            SupportError::UnsupportedMapKey { .. } => SupportErrorKind::UnsupportedMapKey,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind() {
            SupportErrorKind::RecursiveType => ErrorCode::E1001,
            SupportErrorKind::UnsupportedType => ErrorCode::E1002,
            SupportErrorKind::UnsupportedMapKey => ErrorCode::E1003,
        }
    }

    /// The type the error is about. For a map key error, the key type.
    pub fn ty(&self) -> Idx {
        match self {
            SupportError::RecursiveType { ty, .. } | SupportError::UnsupportedType { ty, .. } => {
                *ty
            }
            SupportError::UnsupportedMapKey { key, .. } => *key,
        }
    }

    /// Render as a diagnostic pointing at the rejected declaration.
    pub fn to_diagnostic(&self, span: Span) -> Diagnostic {
        let diag = Diagnostic::error(self.code())
            .with_message(self.to_string())
            .with_label(span, "this declaration cannot be translated");

        match self {
            SupportError::RecursiveType { name, .. } => diag
                .with_note("structures are expanded inline, so a type cannot contain itself")
                .with_suggestion(format!("remove the reference back to `{name}`")),
            SupportError::UnsupportedType { name, .. } => diag
                .with_note(format!("`{name}` has no schema representation"))
                .with_suggestion("unexport the field or change its type"),
            SupportError::UnsupportedMapKey { key_name, .. } => diag
                .with_note("map keys must be strings")
                .with_suggestion(format!("use a string key instead of `{key_name}`")),
        }
    }
}
