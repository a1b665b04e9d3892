use std::fmt;

/// Error codes for all typegate diagnostics.
///
/// Format: E#### where the first digit indicates the phase:
/// - E1xxx: Support classification
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Type contains itself
    E1001,
    /// Type shape has no schema representation
    E1002,
    /// Map key is not string-like
    E1003,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
        }
    }

    /// One-line summary of what the code means.
    pub fn summary(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "recursive type",
            ErrorCode::E1002 => "unsupported type",
            ErrorCode::E1003 => "unsupported map key type",
        }
    }

    /// Check if this code comes from support classification (E1xxx).
    pub fn is_support_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
