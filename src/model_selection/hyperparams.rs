use crate::error::{RegressionError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

/// A verified hyperparameter set ready for partitioning a dataset into
/// training and test subsets
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplitValidParams<F> {
    test_fraction: F,
    seed: Option<u64>,
}

impl<F: Float> TrainTestSplitValidParams<F> {
    pub fn test_fraction(&self) -> F {
        self.test_fraction
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

/// A hyperparameter set during construction
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplitParams<F>(TrainTestSplitValidParams<F>);

impl<F: Float> Default for TrainTestSplitParams<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// Configure a train/test split
impl<F: Float> TrainTestSplitParams<F> {
    /// Create default split hyperparameters
    pub fn new() -> TrainTestSplitParams<F> {
        Self(TrainTestSplitValidParams {
            test_fraction: F::cast(0.25),
            seed: None,
        })
    }

    /// Set the fraction of samples assigned to the test subset. Must lie
    /// strictly between 0 and 1.
    /// Defaults to `0.25` if not set.
    pub fn test_fraction(mut self, test_fraction: F) -> Self {
        self.0.test_fraction = test_fraction;
        self
    }

    /// Seed the random selection so the partition is reproducible. Unseeded
    /// splits draw fresh entropy on every run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.0.seed = Some(seed);
        self
    }
}

impl<F: Float> ParamGuard for TrainTestSplitParams<F> {
    type Checked = TrainTestSplitValidParams<F>;
    type Error = RegressionError;

    fn check_ref(&self) -> Result<&Self::Checked> {
        let fraction = self.0.test_fraction;
        // NaN fails both comparisons and is rejected here as well.
        if !(fraction > F::zero() && fraction < F::one()) {
            return Err(RegressionError::InvalidArgument(format!(
                "test fraction {} is outside (0, 1)",
                fraction
            )));
        }
        Ok(&self.0)
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
