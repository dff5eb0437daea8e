use crate::config::ClassifierConfig;
use crate::data::{Dataset, Label};
use crate::errors::SaplingError;
use crate::grower::{GrowPolicy, Grower};
use crate::node::{Node, SplittableNode};
use crate::splitter::{LabelCounts, Splitter};
use crate::utils::pivot_on_split;
use hashbrown::HashMap;
use log::debug;
use std::cmp::max;
use std::collections::VecDeque;
use std::fmt::{self, Display};

/// A fitted binary decision tree.
///
/// Nodes are stored by number, the root is node `0`.
#[derive(Clone, Debug)]
pub struct Tree<L> {
    pub nodes: HashMap<usize, Node<L>>,
    pub depth: usize,
    pub n_leaves: usize,
}

impl<L: Label> Default for Tree<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Label> Tree<L> {
    pub fn new() -> Self {
        Tree {
            nodes: HashMap::new(),
            depth: 0,
            n_leaves: 0,
        }
    }

    /// Grow the tree on the dataset.
    ///
    /// Any nodes from a previous fit are discarded. Growth is driven by a
    /// work queue rather than recursion, so deep trees can not overflow
    /// the stack.
    pub fn fit<T: Splitter>(&mut self, data: &Dataset<L>, splitter: &T, cfg: &ClassifierConfig) {
        self.nodes.clear();
        self.depth = 0;
        self.n_leaves = 0;
        match cfg.grow_policy {
            GrowPolicy::DepthFirst => self.grow(data, splitter, cfg, Vec::new()),
            GrowPolicy::BreadthFirst => self.grow(data, splitter, cfg, VecDeque::new()),
        }
    }

    fn grow<T: Splitter, G: Grower>(
        &mut self,
        data: &Dataset<L>,
        splitter: &T,
        cfg: &ClassifierConfig,
        mut growable: G,
    ) {
        let mut index: Vec<usize> = (0..data.n_rows()).collect();
        let mut n_nodes = 1;
        growable.add_node(SplittableNode::new(0, 0, 0, index.len()));

        while let Some(node) = growable.get_next_node() {
            let node_index = &mut index[node.start_idx..node.stop_idx];

            let counts = LabelCounts::from_labels(node_index.iter().map(|&i| &data.labels[i]));
            // The dataset is non-empty and both children of a split have rows.
            let Some(majority) = counts.majority() else {
                unreachable!("node {} has no rows", node.num);
            };

            // Pure node, or no features to split on.
            if counts.n_distinct() == 1 || data.cols == 0 {
                self.add_leaf(&node, majority);
                continue;
            }
            if cfg.max_depth.is_some_and(|max_depth| node.depth >= max_depth) {
                debug!("Node {} reached the maximum depth of {}.", node.num, node.depth);
                self.add_leaf(&node, majority);
                continue;
            }
            if node.counts_sum() < cfg.min_samples_split {
                debug!("Node {} has {} rows, too few to split.", node.num, node.counts_sum());
                self.add_leaf(&node, majority);
                continue;
            }

            let split_info = match splitter.best_split(data, node_index) {
                Some(split_info) => split_info,
                None => {
                    self.add_leaf(&node, majority);
                    continue;
                }
            };

            let n_left = pivot_on_split(node_index, |i| {
                data.get(i, split_info.split_feature) <= split_info.split_value
            });
            // Thresholds are observed values, so the left side always has rows.
            debug_assert!(n_left > 0);
            if n_left == node.counts_sum() {
                // Re-splitting the same rows would never terminate.
                debug!(
                    "Best split of node {} on feature {} at {} leaves the right side empty, making it a leaf.",
                    node.num, split_info.split_feature, split_info.split_value
                );
                self.add_leaf(&node, majority);
                continue;
            }

            let left_child = n_nodes;
            let right_child = n_nodes + 1;
            n_nodes += 2;
            self.nodes.insert(
                node.num,
                Node::Split {
                    split_feature: split_info.split_feature,
                    split_value: split_info.split_value,
                    left_child,
                    right_child,
                },
            );
            let split_idx = node.start_idx + n_left;
            growable.add_node(SplittableNode::new(right_child, node.depth + 1, split_idx, node.stop_idx));
            growable.add_node(SplittableNode::new(left_child, node.depth + 1, node.start_idx, split_idx));
        }
    }

    fn add_leaf(&mut self, node: &SplittableNode, label: &L) {
        self.nodes.insert(node.num, Node::Leaf { label: label.clone() });
        self.n_leaves += 1;
        self.depth = max(self.depth, node.depth);
    }

    /// Predict the label of a single row.
    ///
    /// Returns `NotFitted` if the tree has no nodes.
    ///
    /// * `row_num` - Position of the row, used in the error.
    /// * `row` - The feature values of the row.
    pub fn predict_row(&self, row_num: usize, row: &[f64]) -> Result<&L, SaplingError> {
        let mut node_idx = 0;
        loop {
            match self.nodes.get(&node_idx).ok_or(SaplingError::NotFitted)? {
                Node::Leaf { label } => return Ok(label),
                Node::Split {
                    split_feature,
                    split_value,
                    left_child,
                    right_child,
                } => {
                    let v = row
                        .get(*split_feature)
                        .ok_or(SaplingError::FeatureIndexOutOfRange(row_num, row.len(), *split_feature))?;
                    node_idx = if v <= split_value { *left_child } else { *right_child };
                }
            }
        }
    }

    /// Predict the label of every row.
    pub fn predict<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vec<L>, SaplingError> {
        rows.iter()
            .enumerate()
            .map(|(i, row)| self.predict_row(i, row.as_ref()).cloned())
            .collect()
    }

    /// Number of split nodes using each feature.
    pub fn calculate_importance_weight(&self, stats: &mut HashMap<usize, f32>) {
        for node in self.nodes.values() {
            if let Node::Split { split_feature, .. } = node {
                *stats.entry(*split_feature).or_insert(0.) += 1.;
            }
        }
    }
}

impl<L: Label> Display for Tree<L> {
    // This trait requires `fmt` with this exact signature.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut print_buffer: Vec<usize> = vec![0];
        let mut r = String::new();
        while let Some(idx) = print_buffer.pop() {
            let Some(node) = self.nodes.get(&idx) else {
                continue;
            };
            if let Node::Split {
                left_child,
                right_child,
                ..
            } = node
            {
                print_buffer.push(*right_child);
                print_buffer.push(*left_child);
            }
            r += format!("{}:{}\n", idx, node).as_str();
        }
        write!(f, "{}", r)
    }
}
