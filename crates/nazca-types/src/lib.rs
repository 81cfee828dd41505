//! Core types for the nazca trading statistics engine.
//!
//! This crate provides the fundamental types shared across the workspace:
//!
//! - [`Stats`] - Summary statistics over a trailing window of a series
//! - [`NazcaError`] - Errors reported by the engine
//! - [`limits`] - Service limits (batch size, symbol count, window range)

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nazca/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod limits;
mod stats;

pub use error::{NazcaError, Result};
pub use stats::Stats;
