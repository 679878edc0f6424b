//! Error types for Herald.
//!
//! Missing capabilities and connections between types without a `Derives`
//! impl are compile errors. What remains are setup errors:
//!
//! - [`HeraldError`] - Top-level error type for all Herald operations
//! - [`HierarchyError`] - A participating hierarchy that cannot be built

use crate::event::Kind;
use thiserror::Error;

/// Top-level error type for all Herald operations.
#[derive(Error, Debug)]
pub enum HeraldError {
    /// The participating hierarchy is malformed.
    #[error("hierarchy error: {0}")]
    Hierarchy(#[from] HierarchyError),

    /// The process-wide dispatcher already exists and cannot be reconfigured.
    #[error("the global dispatcher is already initialized")]
    AlreadyInitialized,

    /// A connection names a base that is not a participating ancestor of
    /// the derived kind.
    #[error("`{derived}` does not derive from `{base}` in this hierarchy")]
    NotADerivation {
        /// The posted kind.
        derived: Kind,
        /// The requested ancestor.
        base: Kind,
    },
}

/// Errors that can occur while building a participating hierarchy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HierarchyError {
    /// The same kind was listed more than once.
    #[error("event kind `{kind}` is listed more than once")]
    DuplicateKind {
        /// The repeated kind.
        kind: Kind,
    },

    /// A kind reaches itself through its declared ancestors.
    #[error("event kind `{kind}` derives from itself through its ancestors")]
    Cycle {
        /// A kind on the cycle.
        kind: Kind,
    },
}
