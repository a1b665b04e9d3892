//! Driver configuration.

use rustc_hash::FxHashSet;

/// Environment variable enabling parallel classification (`1` or `true`).
pub const PARALLEL_VAR: &str = "TYPEGATE_PARALLEL";

/// Environment variable listing declarations to skip, comma separated.
pub const SKIP_VAR: &str = "TYPEGATE_SKIP";

/// Options for [`check_package`](crate::check_package).
///
/// The default checks every declaration sequentially.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckConfig {
    parallel: bool,
    skip: FxHashSet<String>,
    only: Option<FxHashSet<String>>,
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `TYPEGATE_PARALLEL` and `TYPEGATE_SKIP` from the process environment.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`CheckConfig::from_env`], with a custom variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(value) = lookup(PARALLEL_VAR) {
            config.parallel = parse_flag(&value);
        }
        if let Some(value) = lookup(SKIP_VAR) {
            config.skip.extend(
                value
                    .split(',')
                    .map(str::trim)
                    .filter(|name| !name.is_empty())
                    .map(str::to_owned),
            );
        }
        config
    }

    #[must_use]
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Never check the declaration called `name`.
    #[must_use]
    pub fn skip_type(mut self, name: impl Into<String>) -> Self {
        self.skip.insert(name.into());
        self
    }

    /// Check only the named declarations. Skips still apply.
    #[must_use]
    pub fn only_types<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.only
            .get_or_insert_with(FxHashSet::default)
            .extend(names.into_iter().map(Into::into));
        self
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Whether the declaration called `name` passes the filter.
    pub fn includes(&self, name: &str) -> bool {
        if self.skip.contains(name) {
            return false;
        }
        self.only.as_ref().map_or(true, |only| only.contains(name))
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
