use thiserror::Error;

use crate::Idx;

/// Misuse of the pool's construction API by a loader.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("type {0:?} is not a named type")]
    NotNamed(Idx),
    #[error("named type {0:?} is already defined")]
    AlreadyDefined(Idx),
}
