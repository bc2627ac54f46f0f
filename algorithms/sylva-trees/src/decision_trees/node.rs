use ndarray::{Array1, ArrayBase, Data, Ix1};
use sylva::dataset::domain_index;
use sylva::Float;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::{DecisionTreeError, Result};

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Debug, Clone, PartialEq)]
/// A node in the decision tree
///
/// Internal nodes split on a nominal attribute and own one child per value of its domain, in
/// domain order. Leaves have no children. Every node keeps the class counts of the examples it
/// was grown from and the majority label of those examples; a leaf grown for a domain value
/// without examples carries zero counts and the majority label of its parent instead.
pub struct TreeNode {
    attribute: Option<usize>,
    label: usize,
    class_counts: Vec<usize>,
    children: Vec<TreeNode>,
    depth: usize,
}

impl TreeNode {
    pub(crate) fn leaf(label: usize, class_counts: Vec<usize>, depth: usize) -> Self {
        TreeNode {
            attribute: None,
            label,
            class_counts,
            children: Vec::new(),
            depth,
        }
    }

    pub(crate) fn internal(
        attribute: usize,
        label: usize,
        class_counts: Vec<usize>,
        children: Vec<TreeNode>,
        depth: usize,
    ) -> Self {
        TreeNode {
            attribute: Some(attribute),
            label,
            class_counts,
            children,
            depth,
        }
    }

    /// Returns true if the node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns true if no example reached this node
    pub fn is_empty(&self) -> bool {
        self.class_counts.iter().all(|count| *count == 0)
    }

    /// Returns the splitting attribute of internal nodes and `None` for leaves
    pub fn attribute(&self) -> Option<usize> {
        self.attribute
    }

    /// Returns the label predicted when this node is a leaf
    pub fn label(&self) -> usize {
        self.label
    }

    /// Returns `Some(label)` for leaf nodes and `None` for internal nodes.
    pub fn prediction(&self) -> Option<usize> {
        if self.is_leaf() {
            Some(self.label)
        } else {
            None
        }
    }

    pub fn class_counts(&self) -> &[usize] {
        &self.class_counts
    }

    /// Number of training examples which reached this node
    pub fn total_count(&self) -> usize {
        self.class_counts.iter().sum()
    }

    /// Returns the children in the order of the splitting attribute's domain
    pub fn children(&self) -> &[TreeNode] {
        &self.children
    }

    /// Returns the depth of the node in the decision tree
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) fn children_mut(&mut self) -> &mut [TreeNode] {
        &mut self.children
    }

    /// Turns the node into a leaf, keeping its label and class counts
    pub(crate) fn collapse(&mut self) {
        self.children.clear();
        self.attribute = None;
    }

    /// Follows `example` down to the leaf it falls into
    ///
    /// At every internal node the value of the example at the splitting attribute selects the
    /// child with that domain index.
    pub fn leaf_for<F: Float, D: Data<Elem = F>>(
        &self,
        example: &ArrayBase<D, Ix1>,
    ) -> Result<&TreeNode> {
        if example.is_empty() {
            return Err(DecisionTreeError::InvalidInput(
                "cannot classify an empty example".to_string(),
            ));
        }

        let mut node = self;
        while let Some(attribute) = node.attribute.filter(|_| !node.is_leaf()) {
            let value = example.get(attribute).ok_or_else(|| {
                DecisionTreeError::InvalidInput(format!(
                    "example with {} values has no value for attribute {}",
                    example.len(),
                    attribute
                ))
            })?;
            let child_idx = domain_index(*value, node.children.len()).ok_or_else(|| {
                DecisionTreeError::OutOfRangeDomainValue {
                    attribute,
                    value: value.to_f64().unwrap_or(f64::NAN),
                    n_children: node.children.len(),
                }
            })?;

            node = &node.children[child_idx];
        }

        Ok(node)
    }

    /// Class distribution of the leaf `example` falls into
    ///
    /// The distribution is the class counts of the leaf normalized by their sum. Leaves without
    /// training examples have no distribution and yield
    /// [`DivideByZero`](DecisionTreeError::DivideByZero).
    pub fn distribution<F: Float, D: Data<Elem = F>>(
        &self,
        example: &ArrayBase<D, Ix1>,
    ) -> Result<Array1<f64>> {
        let leaf = self.leaf_for(example)?;
        let total = leaf.total_count();
        if total == 0 {
            return Err(DecisionTreeError::DivideByZero);
        }

        Ok(leaf
            .class_counts
            .iter()
            .map(|count| *count as f64 / total as f64)
            .collect())
    }

    /// Most probable class of `example`, the lowest label on ties
    pub fn predicted_label<F: Float, D: Data<Elem = F>>(
        &self,
        example: &ArrayBase<D, Ix1>,
    ) -> Result<usize> {
        let distribution = self.distribution(example)?;

        Ok(max_index(distribution.iter().copied()))
    }
}

/// Index of the first maximum
pub(crate) fn max_index(values: impl Iterator<Item = f64>) -> usize {
    values
        .enumerate()
        .fold(None, |acc, (idx, value)| match acc {
            Some((_, best)) if best >= value => acc,
            _ => Some((idx, value)),
        })
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    /// Splits on attribute 1 with three values, the middle value never seen during training
    fn stump() -> TreeNode {
        TreeNode::internal(
            1,
            0,
            vec![3, 2],
            vec![
                TreeNode::leaf(0, vec![3, 1], 1),
                TreeNode::leaf(0, vec![0, 0], 1),
                TreeNode::leaf(1, vec![0, 1], 1),
            ],
            0,
        )
    }

    #[test]
    fn first_maximum_wins() {
        assert_eq!(max_index(vec![0.2, 0.5, 0.3].into_iter()), 1);
        assert_eq!(max_index(vec![0.5, 0.5].into_iter()), 0);
        assert_eq!(max_index(vec![0.0, 0.0, 0.0].into_iter()), 0);
    }

    #[test]
    fn leaf_and_empty_predicates() {
        let node = stump();

        assert!(!node.is_leaf());
        assert_eq!(node.prediction(), None);
        assert_eq!(node.attribute(), Some(1));
        assert_eq!(node.total_count(), 5);

        assert!(node.children()[0].is_leaf());
        assert_eq!(node.children()[0].prediction(), Some(0));
        assert!(node.children()[1].is_empty());
        assert!(!node.children()[2].is_empty());
    }

    #[test]
    fn distribution_of_reached_leaf() -> Result<()> {
        let node = stump();

        let dist = node.distribution(&array![7.0, 0.0, 1.0])?;
        assert_abs_diff_eq!(dist, array![0.75, 0.25], epsilon = 1e-12);
        assert_eq!(node.predicted_label(&array![7.0, 0.0, 1.0])?, 0);

        let dist = node.distribution(&array![7.0, 2.0])?;
        assert_abs_diff_eq!(dist, array![0.0, 1.0], epsilon = 1e-12);
        assert_eq!(node.predicted_label(&array![7.0, 2.0])?, 1);

        Ok(())
    }

    #[test]
    fn traversal_errors() {
        let node = stump();

        assert_eq!(
            node.distribution(&array![7.0, 1.0]),
            Err(DecisionTreeError::DivideByZero)
        );
        assert_eq!(
            node.distribution(&array![7.0, 3.0]),
            Err(DecisionTreeError::OutOfRangeDomainValue {
                attribute: 1,
                value: 3.0,
                n_children: 3
            })
        );
        assert!(matches!(
            node.distribution(&array![7.0, 0.5]),
            Err(DecisionTreeError::OutOfRangeDomainValue { .. })
        ));
        assert!(matches!(
            node.distribution(&array![7.0]),
            Err(DecisionTreeError::InvalidInput(_))
        ));
        assert!(matches!(
            node.distribution(&Array1::<f64>::zeros(0)),
            Err(DecisionTreeError::InvalidInput(_))
        ));
    }

    #[test]
    fn collapse_keeps_label_and_counts() {
        let mut node = stump();
        node.collapse();

        assert!(node.is_leaf());
        assert_eq!(node.attribute(), None);
        assert_eq!(node.prediction(), Some(0));
        assert_eq!(node.class_counts(), &[3, 2]);
    }
}
