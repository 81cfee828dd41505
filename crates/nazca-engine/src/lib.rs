//! Per-symbol series store and symbol registry for the nazca trading
//! statistics engine.
//!
//! This crate provides the stateful layer between the transport and the
//! aggregate tree:
//!
//! - [`SeriesStore`] - Append buffer, lazy fold, and per-window result cache
//! - [`SymbolRegistry`] - Bounded symbol-to-store mapping

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nazca/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod registry;
mod series;

pub use registry::SymbolRegistry;
pub use series::SeriesStore;
