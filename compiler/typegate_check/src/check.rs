//! Package driver: classify every top-level declaration of a package.

use rayon::prelude::*;
use typegate_diagnostic::Diagnostic;
use typegate_ir::{NodeId, Package, Span, StringInterner, TypeDecl};
use typegate_types::{Idx, Pool, TypeTable};

use crate::{CheckConfig, DeclIndex, SupportChecker, SupportError};

/// Outcome for one top-level declaration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Verdict {
    pub name: String,
    pub decl: NodeId,
    /// The declared type, or [`Idx::INVALID`] if the loader did not resolve it.
    pub ty: Idx,
    pub span: Span,
    pub result: Result<(), SupportError>,
}

impl Verdict {
    #[inline]
    pub fn is_supported(&self) -> bool {
        self.result.is_ok()
    }

    /// Diagnostic for a rejected declaration.
    pub fn diagnostic(&self) -> Option<Diagnostic> {
        self.result
            .as_ref()
            .err()
            .map(|err| err.to_diagnostic(self.span))
    }
}

/// Verdicts of one package, in file order then declaration order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackageReport {
    verdicts: Vec<Verdict>,
}

impl PackageReport {
    pub fn verdicts(&self) -> &[Verdict] {
        &self.verdicts
    }

    /// Declarations the emitter may translate.
    pub fn accepted(&self) -> impl Iterator<Item = &Verdict> {
        self.verdicts.iter().filter(|v| v.is_supported())
    }

    /// Rejected declarations with their reasons.
    pub fn rejected(&self) -> impl Iterator<Item = (&Verdict, &SupportError)> {
        self.verdicts
            .iter()
            .filter_map(|v| v.result.as_ref().err().map(|err| (v, err)))
    }

    pub fn is_clean(&self) -> bool {
        self.verdicts.iter().all(Verdict::is_supported)
    }

    /// The first rejection in declaration order.
    pub fn first_error(&self) -> Option<&SupportError> {
        self.rejected().next().map(|(_, err)| err)
    }

    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.verdicts.iter().filter_map(Verdict::diagnostic).collect()
    }

    pub fn len(&self) -> usize {
        self.verdicts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verdicts.is_empty()
    }
}

/// Result of [`check_package`]: the index for the emitter and the verdicts.
#[derive(Debug)]
pub struct Checked<'ast> {
    pub index: DeclIndex<'ast>,
    pub report: PackageReport,
}

/// Build the declaration index of `package` and classify each top-level
/// declaration that passes `config`'s filter, each from an empty path.
///
/// Rejections are per declaration; the whole package is always checked.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(package = interner.lookup(package.name), parallel = config.parallel())
)]
pub fn check_package<'ast>(
    package: &'ast Package,
    table: &TypeTable,
    pool: &Pool,
    interner: &StringInterner,
    config: &CheckConfig,
) -> Checked<'ast> {
    let index = DeclIndex::build(package, table);
    let checker = SupportChecker::new(pool, interner);

    let decls: Vec<&TypeDecl> = package
        .type_decls()
        .filter(|decl| config.includes(interner.lookup(decl.name)))
        .collect();

    let classify = |decl: &&TypeDecl| check_decl(checker, table, interner, decl);
    let verdicts: Vec<Verdict> = if config.parallel() {
        decls.par_iter().map(classify).collect()
    } else {
        decls.iter().map(classify).collect()
    };

    let report = PackageReport { verdicts };
    tracing::debug!(
        checked = report.len(),
        accepted = report.accepted().count(),
        rejected = report.rejected().count(),
        "package checked"
    );
    Checked { index, report }
}

fn check_decl(
    checker: SupportChecker<'_>,
    table: &TypeTable,
    interner: &StringInterner,
    decl: &TypeDecl,
) -> Verdict {
    let name = interner.lookup(decl.name);
    let ty = table.type_of(decl.id).unwrap_or_else(|| {
        tracing::debug!(name, "declaration has no resolved type");
        Idx::INVALID
    });

    let result = checker.check(ty);
    if let Err(err) = &result {
        tracing::trace!(name, %err, "declaration rejected");
    }

    Verdict {
        name: name.to_owned(),
        decl: decl.id,
        ty,
        span: decl.span,
        result,
    }
}
