use crate::errors::SaplingError;

// Validation
pub fn validate_min_usize_parameter(value: usize, min: usize, parameter: &str) -> Result<(), SaplingError> {
    if value < min {
        Err(SaplingError::InvalidParameter(
            parameter.to_string(),
            format!("integer value of at least {}", min),
            value.to_string(),
        ))
    } else {
        Ok(())
    }
}

/// Partition the index so every row for which `goes_left` holds comes first.
///
/// The partition is stable: rows keep their relative order on both sides,
/// which the majority label tie-break of the child nodes depends on.
/// Returns the number of rows on the left.
pub fn pivot_on_split<F>(index: &mut [usize], goes_left: F) -> usize
where
    F: Fn(usize) -> bool,
{
    let (left, right): (Vec<usize>, Vec<usize>) = index.iter().copied().partition(|&i| goes_left(i));
    let n_left = left.len();
    index[..n_left].copy_from_slice(&left);
    index[n_left..].copy_from_slice(&right);
    n_left
}

/// Round a value to a given number of decimal places.
pub fn precision_round(n: f64, precision: i32) -> f64 {
    let p = (10.0_f64).powi(precision);
    (n * p).round() / p
}
