
use ndarray::{Array1, ArrayView1};

use crate::error::{RegressionError, Result};
use crate::Float;

/// A dataset of paired single-predictor observations
///
/// The dataset owns two sequences of equal length: predictor values `xs` and
/// target values `ys`, paired positionally. Construction verifies that the
/// sequences are non-empty, of equal length and contain only finite values.
/// Once built, a dataset is never mutated; consumers borrow views.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset<F> {
    xs: Array1<F>,
    ys: Array1<F>,
}

impl<F: Float> Dataset<F> {
    /// This method instantiates a new dataset from predictor and target
    /// arrays, validating the dataset invariants.
    pub fn new(xs: Array1<F>, ys: Array1<F>) -> Result<Dataset<F>> {
        if xs.is_empty() || ys.is_empty() {
            return Err(RegressionError::InvalidArgument(
                "dataset is empty".to_string(),
            ));
        }
        if xs.len() != ys.len() {
            return Err(RegressionError::InvalidArgument(format!(
                "{} predictor values paired with {} target values",
                xs.len(),
                ys.len()
            )));
        }
        if xs.iter().chain(ys.iter()).any(|v| !v.is_finite()) {
            return Err(RegressionError::InvalidArgument(
                "dataset contains non-finite values".to_string(),
            ));
        }
        Ok(Dataset { xs, ys })
    }

    /// This method instantiates a new dataset from `(x, y)` sample pairs.
    pub fn from_samples(samples: &[(F, F)]) -> Result<Dataset<F>> {
        let xs = samples.iter().map(|&(x, _)| x).collect::<Array1<F>>();
        let ys = samples.iter().map(|&(_, y)| y).collect::<Array1<F>>();
        Dataset::new(xs, ys)
    }

    /// This method is a getter for the predictor values.
    pub fn xs(&self) -> ArrayView1<'_, F> {
        self.xs.view()
    }

    /// This method is a getter for the target values.
    pub fn ys(&self) -> ArrayView1<'_, F> {
        self.ys.view()
    }

    /// Number of samples in the dataset.
    pub fn n_samples(&self) -> usize {
        self.xs.len()
    }
}
