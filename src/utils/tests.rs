use approx::assert_abs_diff_eq;
use ndarray::array;

use super::helpers::{covariance, mean, variance};
use super::test_helpers::generate_linear_data;

#[test]
fn mean_of_constant_sequence() {
    let x = array![4., 4., 4.];
    assert_abs_diff_eq!(mean(x.view()), 4.);
}

#[test]
fn variance_known_value() {
    // mean 2, squared deviations 1, 0, 1
    let x = array![1., 2., 3.];
    assert_abs_diff_eq!(variance(x.view()), 2. / 3., epsilon = 1e-12);
}

#[test]
fn covariance_of_identical_sequences_is_variance() {
    let x = array![1., 3., 5., 9.];
    assert_abs_diff_eq!(
        covariance(x.view(), x.view()),
        variance(x.view()),
        epsilon = 1e-12
    );
}

#[test]
fn covariance_sign_follows_association() {
    let x = array![1., 2., 3.];
    let y_up = array![10., 20., 30.];
    let y_down = array![30., 20., 10.];
    assert!(covariance(x.view(), y_up.view()) > 0.);
    assert!(covariance(x.view(), y_down.view()) < 0.);
}

#[test]
fn generated_data_is_reproducible_per_seed() {
    let (x1, y1) = generate_linear_data(50, 2., 1., 0.1, 42);
    let (x2, y2) = generate_linear_data(50, 2., 1., 0.1, 42);
    assert_eq!(x1, x2);
    assert_eq!(y1, y2);
    assert_eq!(x1.len(), 50);

    let (_, y3) = generate_linear_data(50, 2., 1., 0.1, 43);
    assert_ne!(y1, y3);
}
