use sylva::ParamGuard;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::pruning::DEFAULT_Z;
use crate::error::{DecisionTreeError, Result};
use crate::DecisionTree;

/// The set of hyperparameters that can be specified for fitting a
/// [decision tree](struct.DecisionTree.html).
///
/// ### Example
///
/// ```rust
/// use std::sync::Arc;
/// use ndarray::array;
/// use sylva::prelude::*;
/// use sylva_trees::DecisionTree;
///
/// let catalog = AttributeCatalog::new(vec![
///     Attribute::nominal("windy", vec!["false", "true"]),
///     Attribute::nominal("play", vec!["yes", "no"]),
/// ])
/// .unwrap();
/// let table = ExampleTable::from_rows(
///     Arc::new(catalog),
///     &array![[0., 0.], [0., 0.], [1., 1.], [1., 1.]],
/// )
/// .unwrap();
///
/// // Initialize the default set of parameters and keep the tree unpruned
/// let params = DecisionTree::params().prune(false);
/// // Fit the decision tree on the training data
/// let tree = params.fit(&table).unwrap();
///
/// assert_eq!(tree.predicted_label(&array![1., 0.]).unwrap(), 1);
/// ```
///
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionTreeValidParams {
    prune: bool,
    leaf_size_threshold: usize,
    confidence_z: f64,
}

impl DecisionTreeValidParams {
    pub fn prune(&self) -> bool {
        self.prune
    }

    pub fn leaf_size_threshold(&self) -> usize {
        self.leaf_size_threshold
    }

    pub fn confidence_z(&self) -> f64 {
        self.confidence_z
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DecisionTreeParams(DecisionTreeValidParams);

impl DecisionTreeParams {
    pub fn new() -> Self {
        Self(DecisionTreeValidParams {
            prune: true,
            leaf_size_threshold: 3,
            confidence_z: DEFAULT_Z,
        })
    }

    /// Sets whether the tree is pruned right after it was grown
    pub fn prune(mut self, prune: bool) -> Self {
        self.0.prune = prune;
        self
    }

    /// Sets the number of examples at or below which a node becomes a leaf
    pub fn leaf_size_threshold(mut self, leaf_size_threshold: usize) -> Self {
        self.0.leaf_size_threshold = leaf_size_threshold;
        self
    }

    /// Sets the z value of the confidence level used to estimate errors while pruning
    pub fn confidence_z(mut self, confidence_z: f64) -> Self {
        self.0.confidence_z = confidence_z;
        self
    }
}

impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self::new()
    }
}

impl DecisionTree {
    /// Defaults are provided if the optional parameters are not specified:
    /// * `prune = true`
    /// * `leaf_size_threshold = 3`
    /// * `confidence_z = 0.6925`
    // Violates the convention that new should return a value of type `Self`
    #[allow(clippy::new_ret_no_self)]
    pub fn params() -> DecisionTreeParams {
        DecisionTreeParams::new()
    }
}

impl ParamGuard for DecisionTreeParams {
    type Checked = DecisionTreeValidParams;
    type Error = DecisionTreeError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        if !self.0.confidence_z.is_finite() || self.0.confidence_z <= 0.0 {
            Err(DecisionTreeError::Parameters(format!(
                "confidence z should be a positive number, but was {}",
                self.0.confidence_z
            )))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let params = DecisionTree::params().check_unwrap();

        assert!(params.prune());
        assert_eq!(params.leaf_size_threshold(), 3);
        assert_eq!(params.confidence_z(), DEFAULT_Z);
    }

    #[test]
    fn builder_sets_values() -> Result<()> {
        let params = DecisionTree::params()
            .prune(false)
            .leaf_size_threshold(0)
            .confidence_z(1.15)
            .check()?;

        assert!(!params.prune());
        assert_eq!(params.leaf_size_threshold(), 0);
        assert_eq!(params.confidence_z(), 1.15);

        Ok(())
    }

    #[test]
    fn invalid_confidence_z() {
        for z in &[0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                DecisionTree::params().confidence_z(*z).check(),
                Err(DecisionTreeError::Parameters(_))
            ));
        }
    }

    #[test]
    #[should_panic]
    fn panic_on_check_unwrap() {
        DecisionTree::params().confidence_z(0.0).check_unwrap();
    }
}
