use ndarray::{Array1, ArrayView1};

use super::hyperparams::{LinearRegressionParams, LinearRegressionValidParams};
use super::traits::Fit;
use crate::datasets::Dataset;
use crate::error::{RegressionError, Result};
use crate::utils::helpers::{covariance, mean, variance};
use crate::Float;

/// The ordinary least-squares estimator
///
/// The fitted model holds the line `y = slope * x + intercept` minimizing the
/// sum of squared residuals over the training samples, obtained from the
/// closed-form solution for a single predictor.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegression<F> {
    slope: F,
    intercept: F,
}

impl<F: Float> LinearRegression<F> {
    /// This method instantiates a linear regression estimator with default
    /// hyperparameters for the closed-form solver.
    pub fn params() -> LinearRegressionParams<F> {
        LinearRegressionParams::new()
    }

    /// This method is a getter for the fitted slope.
    pub fn slope(&self) -> F {
        self.slope
    }

    /// This method is a getter for the fitted intercept.
    pub fn intercept(&self) -> F {
        self.intercept
    }

    /// Evaluates the fitted line at every value of `xs`. The output has the
    /// same length and order as the input.
    pub fn predict(&self, xs: ArrayView1<F>) -> Array1<F> {
        xs.map(|&x| self.slope * x + self.intercept)
    }
}

/// This implements the closed-form least-squares solution for a single
/// predictor variable.
impl<F: Float> Fit<F, RegressionError> for LinearRegressionValidParams<F> {
    /// If successful, the output is a [`LinearRegression`] instance holding
    /// the fitted slope and intercept.
    type Object = LinearRegression<F>;

    /// This method fits a [`LinearRegression`] instance to a dataset.
    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object> {
        let xs = dataset.xs();
        let ys = dataset.ys();

        if self.fit_intercept() {
            let var_x = variance(xs);
            if var_x == F::zero() {
                return Err(RegressionError::DegenerateInput(
                    "predictor has zero variance, slope is undefined".to_string(),
                ));
            }
            let slope = covariance(xs, ys) / var_x;
            let intercept = mean(ys) - slope * mean(xs);
            Ok(LinearRegression { slope, intercept })
        } else {
            let sxx = xs.iter().map(|&x| x * x).sum::<F>();
            if sxx == F::zero() {
                return Err(RegressionError::DegenerateInput(
                    "every predictor value is zero, slope is undefined".to_string(),
                ));
            }
            let sxy = xs.iter().zip(ys.iter()).map(|(&x, &y)| x * y).sum::<F>();
            Ok(LinearRegression {
                slope: sxy / sxx,
                intercept: F::zero(),
            })
        }
    }
}
