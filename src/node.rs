use std::fmt::{self, Debug};

/// A node waiting on the grower to be turned into a leaf or a split.
///
/// `start_idx..stop_idx` is the node's window into the shared row index,
/// which is partitioned in place as the tree grows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplittableNode {
    pub num: usize,
    pub depth: usize,
    pub start_idx: usize,
    pub stop_idx: usize,
}

impl SplittableNode {
    pub fn new(num: usize, depth: usize, start_idx: usize, stop_idx: usize) -> Self {
        SplittableNode {
            num,
            depth,
            start_idx,
            stop_idx,
        }
    }

    /// Number of rows that reached this node.
    pub fn counts_sum(&self) -> usize {
        self.stop_idx - self.start_idx
    }
}

/// A finished node of a fitted tree.
///
/// Children of a split are referenced by their node number in the owning tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Node<L> {
    Leaf {
        label: L,
    },
    Split {
        split_feature: usize,
        split_value: f64,
        left_child: usize,
        right_child: usize,
    },
}

impl<L> Node<L> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }
}

impl<L: Debug> fmt::Display for Node<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Node::Leaf { label } => write!(f, "leaf={:?}", label),
            Node::Split {
                split_feature,
                split_value,
                left_child,
                right_child,
            } => write!(
                f,
                "[{} <= {}] yes={},no={}",
                split_feature, split_value, left_child, right_child
            ),
        }
    }
}
