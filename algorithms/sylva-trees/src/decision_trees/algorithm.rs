//! Nominal decision trees
//!
use std::collections::BTreeSet;
use std::sync::Arc;

use log::{debug, trace};
use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use super::splitting::best_splitting_attribute;
use super::{DecisionTreeValidParams, NodeIter, Tikz, TreeNode};
use crate::error::{DecisionTreeError, Result};
use sylva::{dataset::AttributeCatalog, traits::*, ExampleTable, Float};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

impl TreeNode {
    /// Recursively grows a tree from the examples of `table`
    ///
    /// A node becomes a leaf labeled with the majority class when all examples share one class
    /// or there are no more of them than the leaf size threshold. Otherwise it splits on the
    /// nominal attribute with the greatest gain ratio and grows one child per domain value. A
    /// domain value without examples gets a leaf with zero class counts and the majority class
    /// of this node.
    pub fn grow<F: Float>(
        table: &ExampleTable<F>,
        hyperparameters: &DecisionTreeValidParams,
    ) -> Result<Self> {
        TreeNode::grow_at(table, hyperparameters, 0)
    }

    fn grow_at<F: Float>(
        table: &ExampleTable<F>,
        hyperparameters: &DecisionTreeValidParams,
        depth: usize,
    ) -> Result<Self> {
        if table.is_empty() {
            return Err(DecisionTreeError::InvalidInput(
                "cannot grow a tree from a table without examples".to_string(),
            ));
        }

        let class_counts = table.class_counts().to_vec();
        // set our prediction for this subset to the majority class
        let label = table.majority_class();

        if table.is_homogeneous() || table.len() <= hyperparameters.leaf_size_threshold() {
            return Ok(TreeNode::leaf(label, class_counts, depth));
        }

        let attribute = best_splitting_attribute(table)?;
        let subsets = table.partition_by_attribute(attribute)?;

        // a split keeping every example together would recurse forever
        if subsets.iter().any(|subset| subset.len() == table.len()) {
            return Err(DecisionTreeError::NoSplittableAttribute);
        }

        trace!(
            "splitting {} examples at depth {} on `{}`",
            table.len(),
            depth,
            table.catalog().attribute(attribute)?.name()
        );

        let children = subsets
            .iter()
            .map(|subset| {
                if subset.is_empty() {
                    Ok(TreeNode::leaf(label, vec![0; table.n_classes()], depth + 1))
                } else {
                    TreeNode::grow_at(subset, hyperparameters, depth + 1)
                }
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TreeNode::internal(
            attribute,
            label,
            class_counts,
            children,
            depth,
        ))
    }
}

/// A fitted decision tree model for classification.
///
/// ### Structure
/// A decision tree over nominal attributes is a tree where:
/// * Each internal node splits on a nominal attribute and has one child per value of the
/// attribute's domain.
///
/// * leaf nodes hold the class counts of the training examples which reached them and predict
/// their distribution
///
/// ### Algorithm
///
/// Starting with a single root node, decision trees are trained recursively by applying the following rule to every
/// node considered:
///
/// * If all examples share the same class, or there are at most `leaf_size_threshold` of them, the node
///   becomes a leaf;
/// * Otherwise the nominal attribute with the greatest gain ratio is selected and the examples are partitioned
///   by its values, growing one child per value.
///
/// After growing, the tree is pruned bottom-up: a subtree is replaced by a leaf when the pessimistic error
/// estimates of its children add up to more than the estimate of the node itself. Pruning can be
/// disabled in the [parameters](struct.DecisionTreeParams.html).
///
/// ### Predictions
///
/// To predict the label of a sample, the tree is traversed from the root to a leaf, choosing at each node the
/// child whose domain index equals the value of the sample at the splitting attribute. The class counts of the
/// reached leaf give the class distribution, and its most probable class is the prediction.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root_node: TreeNode,
    catalog: Arc<AttributeCatalog>,
    confidence_z: f64,
}

impl<F: Float> Fit<ExampleTable<F>, DecisionTreeError> for DecisionTreeValidParams {
    type Object = DecisionTree;

    /// Grow a decision tree using `hyperparameters` on the example table and prune it if
    /// requested.
    fn fit(&self, table: &ExampleTable<F>) -> Result<Self::Object> {
        debug!(
            "growing decision tree on {} examples with {} attributes",
            table.len(),
            table.catalog().len()
        );

        let root_node = TreeNode::grow(table, self)?;
        let mut tree = DecisionTree {
            root_node,
            catalog: Arc::clone(table.catalog()),
            confidence_z: self.confidence_z(),
        };

        if self.prune() {
            let nodes = tree.num_nodes();
            tree.prune();
            debug!("pruned decision tree from {} to {} nodes", nodes, tree.num_nodes());
        }

        debug!(
            "fitted decision tree with {} leaves and depth {}",
            tree.num_leaves(),
            tree.max_depth()
        );

        Ok(tree)
    }
}

impl DecisionTree {
    /// Class distribution of `example`
    pub fn distribution<F: Float, D: Data<Elem = F>>(
        &self,
        example: &ArrayBase<D, Ix1>,
    ) -> Result<Array1<f64>> {
        self.root_node.distribution(example)
    }

    /// Most probable class of `example`, the lowest label on ties
    pub fn predicted_label<F: Float, D: Data<Elem = F>>(
        &self,
        example: &ArrayBase<D, Ix1>,
    ) -> Result<usize> {
        self.root_node.predicted_label(example)
    }

    /// Prunes the tree in place and returns the estimated error of the root
    ///
    /// The error is NaN when the root is pure or has no examples.
    ///
    /// Fitting already prunes unless disabled; pruning a pruned tree leaves it unchanged.
    pub fn prune(&mut self) -> f64 {
        self.root_node.prune(self.confidence_z)
    }

    /// Create a node iterator in level-order (BFT)
    pub fn iter_nodes(&self) -> NodeIter<'_> {
        // queue of nodes yet to explore
        let queue = vec![&self.root_node];

        NodeIter::new(queue)
    }

    /// Return the indices of the attributes this tree splits on, in ascending order
    pub fn features(&self) -> Vec<usize> {
        self.iter_nodes()
            .filter_map(|node| node.attribute())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Return root node of the tree
    pub fn root_node(&self) -> &TreeNode {
        &self.root_node
    }

    /// Return the catalog of the examples this tree was grown from
    pub fn catalog(&self) -> &AttributeCatalog {
        &self.catalog
    }

    /// Return the z value used to estimate errors while pruning
    pub fn confidence_z(&self) -> f64 {
        self.confidence_z
    }

    /// Return max depth of the tree
    pub fn max_depth(&self) -> usize {
        self.iter_nodes()
            .fold(0, |max, node| usize::max(max, node.depth()))
    }

    /// Return the number of leaves in this tree
    pub fn num_leaves(&self) -> usize {
        self.iter_nodes().filter(|node| node.is_leaf()).count()
    }

    /// Return the number of nodes in this tree
    pub fn num_nodes(&self) -> usize {
        self.iter_nodes().count()
    }

    /// Generates a [`Tikz`](struct.Tikz.html) structure to print the
    /// fitted tree in Tex using tikz and forest, with the following default parameters:
    ///
    /// * `complete=true`
    /// * `max_classes=4`
    ///
    pub fn export_to_tikz(&self) -> Tikz<'_> {
        Tikz::new(self)
    }

    fn check_rows(&self, n_rows: usize, n_targets: usize) -> Result<()> {
        if n_rows != n_targets {
            return Err(DecisionTreeError::InvalidInput(format!(
                "{} examples but {} targets",
                n_rows, n_targets
            )));
        }

        Ok(())
    }
}

impl<F: Float> PredictInplace<ExampleTable<F>, Array1<usize>> for DecisionTree {
    type Error = DecisionTreeError;

    /// Predict the label of every example of the table.
    fn predict_inplace(&self, table: &ExampleTable<F>, y: &mut Array1<usize>) -> Result<()> {
        self.predict_inplace(table.records(), y)
    }

    fn default_target(&self, table: &ExampleTable<F>) -> Array1<usize> {
        Array1::zeros(table.len())
    }
}

impl<F: Float, D: Data<Elem = F>> PredictInplace<ArrayBase<D, Ix2>, Array1<usize>>
    for DecisionTree
{
    type Error = DecisionTreeError;

    /// Make predictions for each row of a matrix of examples `x`.
    fn predict_inplace(&self, x: &ArrayBase<D, Ix2>, y: &mut Array1<usize>) -> Result<()> {
        self.check_rows(x.nrows(), y.len())?;

        for (row, target) in x.rows().into_iter().zip(y.iter_mut()) {
            *target = self.predicted_label(&row)?;
        }

        Ok(())
    }

    fn default_target(&self, x: &ArrayBase<D, Ix2>) -> Array1<usize> {
        Array1::zeros(x.nrows())
    }
}
