//! Error types for the nazca engine.

use thiserror::Error;

use crate::limits::{MAX_BATCH_VALUES, MAX_SYMBOLS, MAX_WINDOW_EXPONENT, MIN_WINDOW_EXPONENT};

/// Result type alias for engine operations.
pub type Result<T> = std::result::Result<T, NazcaError>;

/// Errors reported by the statistics engine.
///
/// Every error is synchronous and local to the call that triggered it:
/// a failed append leaves the pending buffer unchanged, a failed query
/// leaves the tree and cache unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NazcaError {
    /// An append batch contained no values.
    #[error("batch is empty")]
    EmptyBatch,

    /// An append batch exceeded the per-call value limit.
    #[error("batch of {len} values exceeds the maximum of {MAX_BATCH_VALUES}")]
    BatchTooLarge {
        /// Number of values in the rejected batch.
        len: usize,
    },

    /// An append batch contained a NaN or infinite value.
    #[error("non-finite value at batch index {index}")]
    InvalidValue {
        /// Position of the first non-finite value within the batch.
        index: usize,
    },

    /// A new symbol would exceed the registry capacity.
    #[error("maximum number of symbols ({MAX_SYMBOLS}) reached")]
    SymbolLimitExceeded,

    /// The queried symbol has never received data.
    #[error("unknown symbol: {0}")]
    UnknownSymbol(String),

    /// The window exponent was outside the accepted range.
    #[error(
        "k must be between {MIN_WINDOW_EXPONENT} and {MAX_WINDOW_EXPONENT}, got {0}"
    )]
    InvalidK(u32),

    /// The queried series holds no values.
    #[error("no data recorded for symbol")]
    NoData,
}
