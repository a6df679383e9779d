use std::marker::PhantomData;

use crate::error::{RegressionError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for the fitting of a least-squares
/// regression model
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionValidParams<F> {
    fit_intercept: bool,
    marker: PhantomData<F>,
}

impl<F: Float> LinearRegressionValidParams<F> {
    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }
}

/// A hyperparameter set during construction
///
/// Configures and minimizes the following objective function over the
/// training samples:
/// ```ignore
/// sum((y - slope * x - intercept)^2)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearRegressionParams<F>(LinearRegressionValidParams<F>);

impl<F: Float> Default for LinearRegressionParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure and fit a linear regression model
impl<F: Float> LinearRegressionParams<F> {
    /// Create default linear regression hyperparameters
    pub fn new() -> LinearRegressionParams<F> {
        Self(LinearRegressionValidParams {
            fit_intercept: true,
            marker: PhantomData,
        })
    }

    /// Set whether an intercept term is estimated alongside the slope. When
    /// disabled, the fitted line is forced through the origin.
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }
}

impl<F: Float> ParamGuard for LinearRegressionParams<F> {
    type Checked = LinearRegressionValidParams<F>;
    type Error = RegressionError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
