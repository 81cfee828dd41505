//! Trailing-window statistics engine for append-only trading series.
//!
//! This is a facade crate that re-exports functionality from the nazca
//! workspace crates for convenient access.
//!
//! # Quick Start
//!
//! ```
//! use nazca_lib::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let registry = SymbolRegistry::new();
//!     registry.append("AAPL", &[101.2, 101.5, 101.3])?;
//!
//!     // Trailing 10^2 = 100 values, clamped to the 3 that exist.
//!     let stats = registry.query("AAPL", 2)?;
//!     assert_eq!(stats.last, 101.3);
//!     assert_eq!(stats.max, 101.5);
//!
//!     Ok(())
//! }
//! ```

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nazca/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Re-export core types
pub use nazca_types::*;

// Re-export the aggregate tree
pub use nazca_tree::{Aggregate, AggregateTree};

// Re-export the engine
pub use nazca_engine::{SeriesStore, SymbolRegistry};

/// Prelude module for convenient imports.
///
/// ```
/// use nazca_lib::prelude::*;
/// ```
pub mod prelude {
    pub use nazca_engine::{SeriesStore, SymbolRegistry};
    pub use nazca_types::{NazcaError, Result, Stats, limits};
}
