/// Fraction of predictions equal to the true labels.
///
/// `y` and `yhat` must be the same length, this is asserted in debug builds.
/// In release builds the longer input is cut to the length of the shorter one,
/// while the denominator stays `y.len()`. An empty input gives NaN.
pub fn accuracy<L: PartialEq>(y: &[L], yhat: &[L]) -> f64 {
    debug_assert_eq!(y.len(), yhat.len(), "y and yhat differ in length");
    let correct = y.iter().zip(yhat).filter(|(a, b)| a == b).count();
    correct as f64 / y.len() as f64
}
