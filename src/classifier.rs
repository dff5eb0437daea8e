//! Decision Tree Classifier
//!
//! The user facing classifier. It owns a configuration and at most one
//! fitted tree, and exposes fit, predict and score.
use crate::config::ClassifierConfig;
use crate::data::{Dataset, Label};
use crate::errors::SaplingError;
use crate::grower::GrowPolicy;
use crate::metric::accuracy;
use crate::splitter::GiniSplitter;
use crate::tree::Tree;
use hashbrown::HashMap;
use log::info;

/// Decision tree classifier.
///
/// The tree is grown greedily, each node taking the split over all
/// feature/threshold pairs with the lowest sum of the left and right Gini
/// impurities.
///
/// ```
/// use sapling::DecisionTreeClassifier;
///
/// let mut model = DecisionTreeClassifier::default();
/// model.fit(&[[1.], [2.], [8.], [9.]], &["low", "low", "high", "high"]).unwrap();
/// assert_eq!(model.predict(&[[0.], [10.]]).unwrap(), vec!["low", "high"]);
/// ```
#[derive(Clone, Debug)]
pub struct DecisionTreeClassifier<L> {
    pub cfg: ClassifierConfig,
    tree: Option<Tree<L>>,
}

impl<L: Label> Default for DecisionTreeClassifier<L> {
    fn default() -> Self {
        Self::new(ClassifierConfig::default())
    }
}

impl<L: Label> DecisionTreeClassifier<L> {
    /// Create an unfitted classifier.
    pub fn new(cfg: ClassifierConfig) -> Self {
        DecisionTreeClassifier { cfg, tree: None }
    }

    /// Fit the classifier on the training data.
    ///
    /// The new tree only replaces the current one once it is fully grown,
    /// a failed fit leaves the classifier as it was.
    ///
    /// * `rows` - Feature rows, all of the same length, without NaN values.
    /// * `labels` - The label of each row.
    pub fn fit<R: AsRef<[f64]>>(&mut self, rows: &[R], labels: &[L]) -> Result<(), SaplingError> {
        self.cfg.validate_parameters()?;
        let data = Dataset::new(rows, labels)?;

        let mut tree = Tree::new();
        tree.fit(&data, &GiniSplitter, &self.cfg);
        info!(
            "Fitted tree on {} rows and {} features, with {} nodes, {} leaves and depth {}.",
            data.n_rows(),
            data.cols,
            tree.nodes.len(),
            tree.n_leaves,
            tree.depth
        );
        self.tree = Some(tree);
        Ok(())
    }

    /// Predict the label of every row.
    pub fn predict<R: AsRef<[f64]>>(&self, rows: &[R]) -> Result<Vec<L>, SaplingError> {
        self.get_tree()?.predict(rows)
    }

    /// Accuracy of the predictions on `rows` against `labels`.
    pub fn score<R: AsRef<[f64]>>(&self, rows: &[R], labels: &[L]) -> Result<f64, SaplingError> {
        if rows.len() != labels.len() {
            return Err(SaplingError::LengthMismatch(rows.len(), labels.len()));
        }
        if rows.is_empty() {
            return Err(SaplingError::EmptyDataset);
        }
        let preds = self.predict(rows)?;
        Ok(accuracy(labels, &preds))
    }

    /// The fitted tree.
    pub fn get_tree(&self) -> Result<&Tree<L>, SaplingError> {
        self.tree.as_ref().ok_or(SaplingError::NotFitted)
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    /// Number of split nodes using each feature, features that are never
    /// split on are left out.
    ///
    /// * `normalize` - Scale the values so they sum to 1.
    pub fn calculate_feature_importance(&self, normalize: bool) -> Result<HashMap<usize, f32>, SaplingError> {
        let tree = self.get_tree()?;
        let mut stats = HashMap::new();
        tree.calculate_importance_weight(&mut stats);
        if normalize {
            let total: f32 = stats.values().sum();
            if total > 0. {
                stats.values_mut().for_each(|v| *v /= total);
            }
        }
        Ok(stats)
    }

    // Set methods for parameters

    /// Set the maximum depth of the tree.
    /// * `max_depth` - `None` for no limit.
    pub fn set_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the minimum number of rows a node needs to be split.
    /// * `min_samples_split` - At least 2.
    pub fn set_min_samples_split(mut self, min_samples_split: usize) -> Self {
        self.cfg.min_samples_split = min_samples_split;
        self
    }

    /// Set the order in which nodes are grown.
    pub fn set_grow_policy(mut self, grow_policy: GrowPolicy) -> Self {
        self.cfg.grow_policy = grow_policy;
        self
    }
}
