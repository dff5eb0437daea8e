//! Data
//!
//! The validated, borrowed view of the training rows and labels.
use crate::errors::SaplingError;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait used throughout the package for the values a tree can predict.
///
/// Equality is the only operation the algorithm relies on. Hashing is used to
/// find the slot of a label in an insertion ordered count table, it never
/// decides an iteration order.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T> Label for T where T: Clone + Eq + Hash + Debug {}

/// Row major view of a labeled dataset.
///
/// Construction checks every invariant the tree builder relies on, so the
/// builder itself never has to deal with malformed input.
#[derive(Debug)]
pub struct Dataset<'a, L> {
    /// One slice of feature values per row.
    pub rows: Vec<&'a [f64]>,
    /// One label per row.
    pub labels: &'a [L],
    /// Number of features in every row.
    pub cols: usize,
}

impl<'a, L> Dataset<'a, L> {
    /// Create a new Dataset.
    ///
    /// * `rows` - The feature rows, all of the same length.
    /// * `labels` - The label of each row.
    pub fn new<R: AsRef<[f64]>>(rows: &'a [R], labels: &'a [L]) -> Result<Self, SaplingError> {
        if rows.len() != labels.len() {
            return Err(SaplingError::LengthMismatch(rows.len(), labels.len()));
        }
        let first = rows.first().ok_or(SaplingError::EmptyDataset)?;
        let cols = first.as_ref().len();
        let mut data = Vec::with_capacity(rows.len());
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(SaplingError::RaggedRows(i, row.len(), cols));
            }
            if let Some(j) = row.iter().position(|v| v.is_nan()) {
                return Err(SaplingError::NanValueFound(i, j));
            }
            data.push(row);
        }
        Ok(Dataset {
            rows: data,
            labels,
            cols,
        })
    }

    /// Number of rows in the dataset.
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Get a single feature value.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - the jth column of the data to get.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.rows[i][j]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_get() {
        let rows = vec![vec![1., 2., 3.], vec![5., 6., 7.]];
        let labels = vec![0, 1];
        let d = Dataset::new(&rows, &labels).unwrap();
        assert_eq!(d.cols, 3);
        assert_eq!(d.n_rows(), 2);
        assert_eq!(d.get(0, 0), 1.);
        assert_eq!(d.get(1, 2), 7.);
    }

    #[test]
    fn test_dataset_zero_features() {
        let rows: [[f64; 0]; 3] = [[], [], []];
        let labels = ["a", "b", "a"];
        let d = Dataset::new(&rows, &labels).unwrap();
        assert_eq!(d.cols, 0);
        assert_eq!(d.n_rows(), 3);
    }

    #[test]
    fn test_dataset_length_mismatch() {
        let rows = vec![vec![1.], vec![2.]];
        let labels = vec![0];
        let err = Dataset::new(&rows, &labels).unwrap_err();
        assert_eq!(err, SaplingError::LengthMismatch(2, 1));
    }

    #[test]
    fn test_dataset_empty() {
        let rows: Vec<Vec<f64>> = Vec::new();
        let labels: Vec<u8> = Vec::new();
        let err = Dataset::new(&rows, &labels).unwrap_err();
        assert_eq!(err, SaplingError::EmptyDataset);
    }

    #[test]
    fn test_dataset_ragged() {
        let rows = vec![vec![1., 2.], vec![3.], vec![4., 5.]];
        let labels = vec![0, 1, 0];
        let err = Dataset::new(&rows, &labels).unwrap_err();
        assert_eq!(err, SaplingError::RaggedRows(1, 1, 2));
    }

    #[test]
    fn test_dataset_nan() {
        let rows = vec![vec![1., 2.], vec![3., f64::NAN]];
        let labels = vec![0, 1];
        let err = Dataset::new(&rows, &labels).unwrap_err();
        assert_eq!(err, SaplingError::NanValueFound(1, 1));
    }
}
