//! Pessimistic error pruning
//!
//! The error of a node is estimated with the upper bound of a continuity-corrected confidence
//! interval for a binomial proportion (the U25% bound). A subtree is replaced by a leaf when the
//! estimated errors of its children add up to more than the estimated error of the node itself.
use log::trace;

use super::TreeNode;

/// The z value of the confidence level used by the U25% bound
pub const DEFAULT_Z: f64 = 0.6925;

/// Upper confidence bound of the proportion `x / n` with continuity correction
///
/// The bound is undefined, i.e. NaN, whenever its radicand is negative, which is the case for
/// `x = n`, and for `n = 0`.
pub fn u25(n: usize, x: usize, z: f64) -> f64 {
    let (n, x) = (n as f64, x as f64 + 0.5);
    let z2 = z * z;
    let a = z2 * (x * (1.0 - x / n) + z2 / 4.0);

    (x + z2 / 2.0 + a.sqrt()) / (n + z2)
}

impl TreeNode {
    /// Estimated error of the node as a leaf
    ///
    /// Sums `n * U25(n, count)` over the counts of all classes, where `n` is the number of
    /// examples of the node. The error of a pure node, where one class holds every example, and
    /// of a node without examples is NaN.
    pub fn error(&self, z: f64) -> f64 {
        let total = self.total_count();

        self.class_counts()
            .iter()
            .map(|count| total as f64 * u25(total, *count, z))
            .sum()
    }

    /// Prunes the subtree in place, bottom-up
    ///
    /// Children are pruned first. When the sum of the errors they report exceeds the error of
    /// this node, the children are discarded and the node becomes a leaf. A NaN error on either
    /// side fails the comparison, so a node with a pure or empty child is never collapsed. The
    /// returned value is always the error of this node as a leaf, whether or not it was
    /// collapsed.
    pub fn prune(&mut self, z: f64) -> f64 {
        let error = self.error(z);
        if self.is_leaf() || self.is_empty() {
            return error;
        }

        let child_error: f64 = self.children_mut().iter_mut().map(|c| c.prune(z)).sum();
        if child_error > error {
            trace!(
                "collapsing node at depth {} on attribute {:?}: children error {:.4} > {:.4}",
                self.depth(),
                self.attribute(),
                child_error,
                error
            );
            self.collapse();
        }

        error
    }
}
