//! Errors
//!
//! Custom error types used throughout the `sapling` crate.
use thiserror::Error;

/// Errors that can occur while fitting or using a decision tree.
#[derive(Debug, Error, PartialEq)]
pub enum SaplingError {
    /// First value is the number of rows, second is the number of labels.
    #[error("Found {0} rows but {1} labels, every row needs exactly one label.")]
    LengthMismatch(usize, usize),
    /// No rows were passed to fit.
    #[error("Unable to fit on an empty dataset.")]
    EmptyDataset,
    /// First value is the row, second the number of features found, third the number expected.
    #[error("Row {0} has {1} features, expected {2}.")]
    RaggedRows(usize, usize, usize),
    /// First value is the row, second is the feature.
    #[error("NaN value found in row {0} at feature {1}, missing values are not supported.")]
    NanValueFound(usize, usize),
    /// Predict was called before a successful fit.
    #[error("The classifier has not been fitted, call `fit` before using it.")]
    NotFitted,
    /// First value is the row, second the number of features it has, third the feature the tree splits on.
    #[error("Row {0} has {1} features, but the tree splits on feature number {2}.")]
    FeatureIndexOutOfRange(usize, usize, usize),
    /// First value is the name of the parameter, second is expected, third is what was passed.
    #[error("Invalid parameter value passed for {0}, expected {1} but {2} provided.")]
    InvalidParameter(String, String, String),
    /// Unable to parse a configuration.
    #[error("Unable to parse configuration: {0}")]
    UnableToParse(String),
}
