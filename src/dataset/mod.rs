//! Datasets
//!
//! This module implements the attribute catalog and the example table. A catalog describes the
//! columns of a data set, either nominal with an enumerated domain or numeric, with the class
//! attribute always declared last. An example table stores rows in catalog order and keeps the
//! number of rows per class label up to date while rows are added.
use ndarray::ScalarOperand;
use num_traits::FromPrimitive;

use std::fmt;

mod attribute;
mod table;

pub use attribute::{Attribute, AttributeCatalog, AttributeKind};
pub use table::ExampleTable;

/// Floating point numbers
///
/// This trait bound multiplexes to the most common assumption of floating point number and
/// implement them for 32bit and 64bit floating points. Every value of an example is stored with
/// this type, nominal values as the index of the value in the attribute domain.
pub trait Float:
    FromPrimitive
    + num_traits::Float
    + PartialOrd
    + Sync
    + Send
    + Default
    + fmt::Display
    + fmt::Debug
    + ScalarOperand
    + approx::AbsDiffEq
{
}

impl Float for f32 {}

impl Float for f64 {}

/// Interprets `value` as a domain index of a nominal attribute with `domain_size` values
///
/// Returns `None` for non-integral, negative, non-finite or out-of-range values instead of
/// clamping them to the domain.
pub fn domain_index<F: Float>(value: F, domain_size: usize) -> Option<usize> {
    if !value.is_finite() || value.fract() != F::zero() || value < F::zero() {
        return None;
    }

    value.to_usize().filter(|idx| *idx < domain_size)
}

#[cfg(test)]
mod tests {
    use super::domain_index;

    #[test]
    fn domain_index_rejects_non_indices() {
        assert_eq!(domain_index(2.0f64, 3), Some(2));
        assert_eq!(domain_index(0.0f32, 1), Some(0));
        assert_eq!(domain_index(3.0f64, 3), None);
        assert_eq!(domain_index(1.5f64, 3), None);
        assert_eq!(domain_index(-1.0f64, 3), None);
        assert_eq!(domain_index(f64::NAN, 3), None);
        assert_eq!(domain_index(f64::INFINITY, 3), None);
    }
}
