use std::collections::VecDeque;
use std::iter::Iterator;

use super::TreeNode;

/// Level-order (BFT) iterator of nodes in a decision tree
pub struct NodeIter<'a> {
    queue: VecDeque<&'a TreeNode>,
}

impl<'a> NodeIter<'a> {
    pub fn new(queue: Vec<&'a TreeNode>) -> Self {
        NodeIter {
            queue: queue.into(),
        }
    }
}

impl<'a> Iterator for NodeIter<'a> {
    type Item = &'a TreeNode;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_front().map(|node| {
            node.children()
                .iter()
                .for_each(|child| self.queue.push_back(child));

            node
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visits_levels_in_order() {
        let tree = TreeNode::internal(
            0,
            0,
            vec![4, 2],
            vec![
                TreeNode::internal(
                    1,
                    0,
                    vec![3, 1],
                    vec![TreeNode::leaf(0, vec![3, 0], 2), TreeNode::leaf(1, vec![0, 1], 2)],
                    1,
                ),
                TreeNode::leaf(1, vec![1, 1], 1),
            ],
            0,
        );

        let depths = NodeIter::new(vec![&tree])
            .map(TreeNode::depth)
            .collect::<Vec<_>>();

        assert_eq!(depths, vec![0, 1, 1, 2, 2]);
    }
}
