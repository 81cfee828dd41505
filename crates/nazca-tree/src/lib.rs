//! Range-aggregate segment tree for the nazca trading statistics engine.
//!
//! This crate provides the indexed aggregate store behind window queries:
//!
//! - [`Aggregate`] - Reducible min/max/sum/sum-of-squares aggregate
//! - [`AggregateTree`] - Growable array-backed segment tree over aggregates

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/factordynamics/nazca/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod aggregate;
mod tree;

pub use aggregate::Aggregate;
pub use tree::AggregateTree;
