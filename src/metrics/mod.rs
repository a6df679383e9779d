#[cfg(test)]
mod tests;

use ndarray::ArrayView1;

use crate::error::{RegressionError, Result};
use crate::Float;

/// This function computes the mean squared error between a sequence of true
/// target values and a sequence of predictions, paired positionally.
///
/// The result is always finite and non-negative for finite inputs, and zero
/// exactly when the two sequences agree at every index.
pub fn mean_squared_error<F: Float>(y_true: ArrayView1<F>, y_pred: ArrayView1<F>) -> Result<F> {
    if y_true.is_empty() || y_pred.is_empty() {
        return Err(RegressionError::InvalidArgument(
            "empty target sequence".to_string(),
        ));
    }
    if y_true.len() != y_pred.len() {
        return Err(RegressionError::InvalidArgument(format!(
            "{} true values paired with {} predictions",
            y_true.len(),
            y_pred.len()
        )));
    }
    let sum_sq = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(&t, &p)| (t - p) * (t - p))
        .sum::<F>();
    Ok(sum_sq / F::cast(y_true.len()))
}
