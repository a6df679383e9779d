use approx::assert_abs_diff_eq;
use ndarray::array;

use super::mean_squared_error;
use crate::error::RegressionError;

#[test]
fn perfect_prediction_has_zero_error() {
    let y = array![1., 2., 3., 4.];
    assert_abs_diff_eq!(mean_squared_error(y.view(), y.view()).unwrap(), 0.);
}

#[test]
fn known_value() {
    let y_true = array![1., 2., 3.];
    let y_pred = array![2., 2., 2.];
    // residuals 1, 0, 1
    assert_abs_diff_eq!(
        mean_squared_error(y_true.view(), y_pred.view()).unwrap(),
        2. / 3.,
        epsilon = 1e-12
    );
}

#[test]
fn error_is_symmetric() {
    let a = array![1., 5., -3.];
    let b = array![0., 7., 2.];
    assert_abs_diff_eq!(
        mean_squared_error(a.view(), b.view()).unwrap(),
        mean_squared_error(b.view(), a.view()).unwrap()
    );
}

#[test]
fn mismatched_lengths_are_rejected() {
    let a = array![1., 2., 3.];
    let b = array![1., 2.];
    let res = mean_squared_error(a.view(), b.view());
    assert!(matches!(res, Err(RegressionError::InvalidArgument(_))));
}

#[test]
fn empty_sequences_are_rejected() {
    let a = ndarray::Array1::<f64>::zeros(0);
    let res = mean_squared_error(a.view(), a.view());
    assert!(matches!(res, Err(RegressionError::InvalidArgument(_))));
}
