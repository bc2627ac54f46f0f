//!
//! # Decision tree learning
//! `sylva-trees` provides a pure Rust implementation of decision trees over nominal attributes,
//! grown by gain ratio and pruned with a pessimistic error bound.
//!
//! # The big picture
//!
//! `sylva-trees` is a crate in the `sylva` workspace, a toolkit of classifiers learned from
//! tabular data sets with nominal and numeric attributes.
//!
//! Decision Trees (DTs) are a non-parametric supervised learning method for classification. The
//! tree partitions the examples by the values of one nominal attribute at a time, always choosing
//! the attribute with the greatest gain ratio, until the examples of a node share one class or
//! are too few to split. Numeric attributes are never split on.
//!
//! # Current state
//!
//! `sylva-trees` currently provides an [implementation](DecisionTree) of single-tree fitting for
//! classification, with optional pruning and export of the fitted tree to TikZ.
//!

mod decision_trees;
mod error;

pub use decision_trees::*;
pub use error::{DecisionTreeError, Result};
