use approx::assert_abs_diff_eq;
use ndarray::array;

use super::linear_regression::LinearRegression;
use super::traits::Fit;
use crate::datasets::Dataset;
use crate::error::RegressionError;
use crate::metrics::mean_squared_error;
use crate::utils::test_helpers::generate_linear_data;

#[test]
fn collinear_data_is_recovered_exactly() {
    let data = Dataset::from_samples(&[(1., 2.), (2., 4.), (3., 6.)]).unwrap();
    let model = LinearRegression::params().fit(&data).unwrap();

    assert_abs_diff_eq!(model.slope(), 2.);
    assert_abs_diff_eq!(model.intercept(), 0.);

    let fitted = model.predict(data.xs());
    assert_abs_diff_eq!(fitted, data.ys().to_owned(), epsilon = 1e-12);
}

#[test]
fn two_point_line_end_to_end() {
    let train = Dataset::from_samples(&[(0., 0.), (10., 100.)]).unwrap();
    let model = LinearRegression::params().fit(&train).unwrap();

    assert_abs_diff_eq!(model.slope(), 10.);
    assert_abs_diff_eq!(model.intercept(), 0.);

    let prediction = model.predict(array![5.].view());
    assert_abs_diff_eq!(prediction[0], 50.);

    let mse = mean_squared_error(prediction.view(), array![50.].view()).unwrap();
    assert_abs_diff_eq!(mse, 0.);
}

#[test]
fn zero_variance_predictor_fails() {
    let data = Dataset::from_samples(&[(5., 1.), (5., 2.), (5., 3.)]).unwrap();
    let res: Result<LinearRegression<f64>, _> = LinearRegression::params().fit(&data);
    assert!(matches!(res, Err(RegressionError::DegenerateInput(_))));
}

#[test]
fn single_sample_fails() {
    let data = Dataset::from_samples(&[(3., 7.)]).unwrap();
    let res: Result<LinearRegression<f64>, _> = LinearRegression::params().fit(&data);
    assert!(matches!(res, Err(RegressionError::DegenerateInput(_))));
}

#[test]
fn float_type_is_inferred_from_the_dataset() {
    // No turbofish anywhere: the params chain picks up `F` from the dataset
    // handed to `fit`, here f32.
    let data = Dataset::from_samples(&[(1.0f32, 2.), (2., 4.), (3., 6.)]).unwrap();
    let model = LinearRegression::params().fit(&data).unwrap();

    assert_abs_diff_eq!(model.slope(), 2.0f32);
    assert_abs_diff_eq!(model.intercept(), 0.0f32);
}

#[test]
fn fit_without_intercept_goes_through_origin() {
    let data = Dataset::from_samples(&[(1., 3.), (2., 6.), (3., 9.)]).unwrap();
    let model = LinearRegression::params()
        .fit_intercept(false)
        .fit(&data)
        .unwrap();

    assert_abs_diff_eq!(model.slope(), 3.);
    assert_abs_diff_eq!(model.intercept(), 0.);
}

#[test]
fn fit_without_intercept_rejects_all_zero_predictor() {
    let data = Dataset::from_samples(&[(0., 1.), (0., 2.)]).unwrap();
    let res: Result<LinearRegression<f64>, _> =
        LinearRegression::params().fit_intercept(false).fit(&data);
    assert!(matches!(res, Err(RegressionError::DegenerateInput(_))));
}

#[test]
fn noisy_fit_recovers_generating_line() {
    let (xs, ys) = generate_linear_data(1000, 2.5, -1., 0.01, 7);
    let data = Dataset::new(xs, ys).unwrap();
    let model = LinearRegression::params().fit(&data).unwrap();

    assert_abs_diff_eq!(model.slope(), 2.5, epsilon = 0.05);
    assert_abs_diff_eq!(model.intercept(), -1., epsilon = 0.05);
}

#[test]
fn prediction_preserves_length_and_order() {
    let train = Dataset::from_samples(&[(0., 1.), (1., 3.), (2., 5.)]).unwrap();
    let model = LinearRegression::params().fit(&train).unwrap();

    let xs = array![2., 0., 1.];
    let preds = model.predict(xs.view());
    assert_eq!(preds.len(), 3);
    assert_abs_diff_eq!(preds, array![5., 1., 3.], epsilon = 1e-12);
}
