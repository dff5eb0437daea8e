use serde::Deserialize;
use serde::Serialize;

use crate::node::SplittableNode;
use std::collections::VecDeque;

/// Trait for handling the growth of the tree.
pub trait Grower {
    /// Add a node to the grower.
    fn add_node(&mut self, node: SplittableNode);
    /// Get the next node to split, `None` once the tree is fully grown.
    fn get_next_node(&mut self) -> Option<SplittableNode>;
    /// Check if the grower is empty.
    fn is_empty(&self) -> bool;
}

impl Grower for Vec<SplittableNode> {
    fn add_node(&mut self, node: SplittableNode) {
        self.push(node);
    }

    fn get_next_node(&mut self) -> Option<SplittableNode> {
        self.pop()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

impl Grower for VecDeque<SplittableNode> {
    fn add_node(&mut self, node: SplittableNode) {
        self.push_front(node);
    }

    fn get_next_node(&mut self) -> Option<SplittableNode> {
        self.pop_back()
    }

    fn is_empty(&self) -> bool {
        self.is_empty()
    }
}

/// Policy for growing the tree.
///
/// Only the numbering of the nodes depends on the policy, the fitted
/// decision function does not.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Debug, Default)]
pub enum GrowPolicy {
    /// Depth first growth, the grower is a stack.
    #[default]
    DepthFirst,
    /// Breadth first (level-wise) growth, the grower is a queue.
    BreadthFirst,
}
