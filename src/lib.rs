//! Sapling
//!
//! A deterministic decision tree classifier. Trees are grown greedily with an
//! exhaustive search over every observed value of every feature, choosing the
//! split with the lowest sum of Gini impurities.

// Modules
pub mod classifier;
pub mod config;
pub mod data;
pub mod errors;
pub mod grower;
pub mod metric;
pub mod node;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use classifier::DecisionTreeClassifier;
pub use config::ClassifierConfig;
pub use data::Dataset;
pub use errors::SaplingError;
