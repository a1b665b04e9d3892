//! Support classification for schema generation.
//!
//! Given the syntax trees, the resolution table and the type pool of one
//! source package, this crate decides which declared types the schema
//! emitter can translate, and why the others are rejected.
//!
//! # Pipeline
//!
//! ```text
//! Package + TypeTable ──> DeclIndex        (Idx -> struct declaration)
//! Pool ─────────────────> SupportChecker   (per top-level declaration)
//!                         └─> PackageReport (verdicts, diagnostics)
//! ```
//!
//! The index is handed to the emitter so it can recover field order, tags
//! and comments of accepted types; the classifier itself only consults the
//! pool.

mod check;
mod config;
mod decl_index;
mod error;
mod support;

use std::sync::Once;

pub use check::{check_package, Checked, PackageReport, Verdict};
pub use config::CheckConfig;
pub use decl_index::DeclIndex;
pub use error::{SupportError, SupportErrorKind};
pub use support::{SupportChecker, TypePath};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=typegate_check=debug` or `RUST_LOG=typegate_check=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}
