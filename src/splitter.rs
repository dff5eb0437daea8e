//! Splitter
//!
//! Exhaustive split search. Every distinct observed value of every feature is
//! tried as a threshold, and the candidate with the lowest sum of the left and
//! right Gini impurities wins.
use crate::data::{Dataset, Label};
use hashbrown::HashMap;

/// Occurrence counts of labels, kept in first-occurrence order.
///
/// The hash map only locates a label's slot, iteration always goes through
/// `counts`, so every result derived from it is deterministic.
#[derive(Debug)]
pub struct LabelCounts<'a, L> {
    slots: HashMap<&'a L, usize>,
    counts: Vec<(&'a L, usize)>,
    total: usize,
}

impl<'a, L: Label> LabelCounts<'a, L> {
    pub fn new() -> Self {
        LabelCounts {
            slots: HashMap::new(),
            counts: Vec::new(),
            total: 0,
        }
    }

    pub fn from_labels<I>(labels: I) -> Self
    where
        I: IntoIterator<Item = &'a L>,
    {
        let mut counts = LabelCounts::new();
        for label in labels {
            counts.add(label);
        }
        counts
    }

    pub fn add(&mut self, label: &'a L) {
        match self.slots.get(label) {
            Some(&slot) => self.counts[slot].1 += 1,
            None => {
                self.slots.insert(label, self.counts.len());
                self.counts.push((label, 1));
            }
        }
        self.total += 1;
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.counts.clear();
        self.total = 0;
    }

    /// Number of labels counted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels counted.
    pub fn n_distinct(&self) -> usize {
        self.counts.len()
    }

    /// Gini impurity, `1 - sum(p_i^2)`. An empty set has an impurity of 0.
    pub fn gini(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let n = self.total as f64;
        let sum_sq: f64 = self
            .counts
            .iter()
            .map(|&(_, c)| {
                let p = c as f64 / n;
                p * p
            })
            .sum();
        1.0 - sum_sq
    }

    /// The most frequent label. Ties go to the label seen first.
    pub fn majority(&self) -> Option<&'a L> {
        let mut best: Option<(&'a L, usize)> = None;
        for &(label, count) in self.counts.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((label, count)),
            }
        }
        best.map(|(label, _)| label)
    }
}

impl<'a, L: Label> Default for LabelCounts<'a, L> {
    fn default() -> Self {
        Self::new()
    }
}

/// Gini impurity of a sequence of labels, 0 for an empty sequence.
pub fn gini<'a, L, I>(labels: I) -> f64
where
    L: Label + 'a,
    I: IntoIterator<Item = &'a L>,
{
    LabelCounts::from_labels(labels).gini()
}

/// Most frequent label of a sequence, ties broken by first occurrence.
/// `None` for an empty sequence.
pub fn majority_label<'a, L, I>(labels: I) -> Option<&'a L>
where
    L: Label + 'a,
    I: IntoIterator<Item = &'a L>,
{
    LabelCounts::from_labels(labels).majority()
}

/// The best split found for a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitInfo {
    pub split_feature: usize,
    pub split_value: f64,
    pub impurity: f64,
}

/// Trait for finding the split of a node.
pub trait Splitter {
    /// Find the best split of the rows in `index`.
    /// Returns `None` when there is nothing to split on.
    fn best_split<L: Label>(&self, data: &Dataset<L>, index: &[usize]) -> Option<SplitInfo>;
}

/// Splitter minimizing the unweighted sum of the left and right Gini impurities.
///
/// Features are visited in ascending order, and thresholds in ascending
/// order of the distinct values of the feature in the node. Only a strictly
/// lower impurity replaces the current best, so the first candidate wins ties.
#[derive(Debug, Default, Clone, Copy)]
pub struct GiniSplitter;

impl Splitter for GiniSplitter {
    fn best_split<L: Label>(&self, data: &Dataset<L>, index: &[usize]) -> Option<SplitInfo> {
        let labels = data.labels;
        let mut best: Option<SplitInfo> = None;
        let mut best_impurity = f64::INFINITY;

        let mut thresholds: Vec<f64> = Vec::with_capacity(index.len());
        let mut left = LabelCounts::new();
        let mut right = LabelCounts::new();

        for feature in 0..data.cols {
            thresholds.clear();
            thresholds.extend(index.iter().map(|&i| data.get(i, feature)));
            thresholds.sort_by(f64::total_cmp);
            thresholds.dedup();

            for &threshold in thresholds.iter() {
                left.clear();
                right.clear();
                for &i in index {
                    if data.get(i, feature) <= threshold {
                        left.add(&labels[i]);
                    } else {
                        right.add(&labels[i]);
                    }
                }
                let impurity = left.gini() + right.gini();
                if impurity < best_impurity {
                    best_impurity = impurity;
                    best = Some(SplitInfo {
                        split_feature: feature,
                        split_value: threshold,
                        impurity,
                    });
                }
            }
        }
        best
    }
}
