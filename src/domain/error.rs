//! Domain-level errors (no external dependencies)

use thiserror::Error;

use crate::domain::tree::MAX_TREE_DEPTH;

/// Domain errors are caller-correctable input mistakes.
/// None of them is transient, so none is ever retried.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SternBrocotError {
    #[error("unrecognized signature symbol {symbol:?} at position {position} in {signature:?}")]
    UnrecognizedSymbol {
        symbol: char,
        position: usize,
        signature: String,
    },

    #[error("fraction has no ancestor matrix: {0}")]
    MissingProvenance(String),

    #[error("division by zero: {0} has no normalized rational form")]
    DivisionByZero(String),

    #[error("invalid tree depth: {0} (must be within 0..={max})", max = MAX_TREE_DEPTH)]
    InvalidDepth(i64),

    #[error("invalid fraction: {0:?}")]
    InvalidFraction(String),

    #[error("not a node of the Stern-Brocot tree: {0}")]
    NotInTree(String),
}

/// Result type for domain operations.
pub type SbResult<T> = Result<T, SternBrocotError>;
