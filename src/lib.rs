//! `sylva` provides the shared foundation of a toolkit of classifiers learned from tabular data
//! with nominal and numeric attributes.
//!
//! ## The big picture
//!
//! The base crate describes data and the interfaces of learners, the algorithms live in their own
//! crates under `algorithms/`:
//!
//! * an [`AttributeCatalog`] names every column of a data set and tells nominal attributes, which
//!   take values from an enumerated domain, apart from numeric ones. The last attribute is the
//!   class label.
//! * an [`ExampleTable`] stores rows in catalog order, nominal values encoded as domain indices,
//!   and keeps the number of rows per class up to date.
//! * learners are configured by hyperparameters implementing [`ParamGuard`] and trained with
//!   [`Fit`](traits::Fit); trained models predict with [`Predict`](traits::Predict).
//!
//! `sylva-trees` grows decision trees on nominal attributes by gain ratio and prunes them with a
//! pessimistic error bound.
//!

pub mod dataset;
pub mod error;
mod param_guard;
pub mod prelude;
pub mod traits;

pub use dataset::{Attribute, AttributeCatalog, AttributeKind, ExampleTable, Float};
pub use error::Error;
pub use param_guard::ParamGuard;
