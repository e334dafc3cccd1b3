//! ForestError: unified error type for forest-join public APIs.
//!
//! Validation failures are returned synchronously from the validating call,
//! never deferred into a lazy traversal.

use thiserror::Error;

/// Unified error type for forest-join operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForestError {
    /// The parent/child key relation loops back on itself; expected a forest.
    /// Carries a rendering of one key on the cycle.
    #[error("cycle detected in parent/child relation through key `{0}`")]
    CycleDetected(String),
}
