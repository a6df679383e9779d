
pub mod hyperparams;

use rand::rngs::SmallRng;
use rand::seq::index;
use rand::SeedableRng;

use crate::datasets::Dataset;
use crate::error::{RegressionError, Result};
use crate::param_guard::ParamGuard;
use crate::Float;

pub use hyperparams::{TrainTestSplitParams, TrainTestSplitValidParams};

/// A randomized partition of a dataset into training and test subsets
///
/// The two subsets are disjoint, jointly exhaust the input dataset and keep
/// the input's sample order within each subset. Test membership is drawn
/// uniformly without replacement; a seeded split is reproducible.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainTestSplit<F> {
    train: Dataset<F>,
    test: Dataset<F>,
}

impl<F: Float> TrainTestSplit<F> {
    /// This method instantiates default hyperparameters for the splitter.
    pub fn params() -> TrainTestSplitParams<F> {
        TrainTestSplitParams::new()
    }

    /// This method is a getter for the training subset.
    pub fn train(&self) -> &Dataset<F> {
        &self.train
    }

    /// This method is a getter for the test subset.
    pub fn test(&self) -> &Dataset<F> {
        &self.test
    }

    /// Consumes the split and returns the `(train, test)` pair.
    pub fn into_parts(self) -> (Dataset<F>, Dataset<F>) {
        (self.train, self.test)
    }
}

/// This implements the partitioning procedure for checked hyperparameters.
impl<F: Float> TrainTestSplitValidParams<F> {
    /// This method partitions `dataset` into a [`TrainTestSplit`]. The test
    /// subset holds `round(test_fraction * n)` samples selected uniformly at
    /// random without replacement; the remaining samples form the training
    /// subset.
    pub fn split(&self, dataset: &Dataset<F>) -> Result<TrainTestSplit<F>> {
        let n = dataset.n_samples();
        let n_test: usize = (self.test_fraction() * F::cast(n)).round().as_();
        if n_test == 0 || n_test == n {
            return Err(RegressionError::InvalidArgument(format!(
                "test fraction {} leaves an empty subset for {} samples",
                self.test_fraction(),
                n
            )));
        }

        let mut rng = match self.seed() {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        let mut in_test = vec![false; n];
        for idx in index::sample(&mut rng, n, n_test) {
            in_test[idx] = true;
        }

        let xs = dataset.xs();
        let ys = dataset.ys();
        let mut train_samples = Vec::with_capacity(n - n_test);
        let mut test_samples = Vec::with_capacity(n_test);
        for i in 0..n {
            if in_test[i] {
                test_samples.push((xs[i], ys[i]));
            } else {
                train_samples.push((xs[i], ys[i]));
            }
        }

        Ok(TrainTestSplit {
            train: Dataset::from_samples(&train_samples)?,
            test: Dataset::from_samples(&test_samples)?,
        })
    }
}

/// Convenience entry point performing the checking step before partitioning.
impl<F: Float> TrainTestSplitParams<F> {
    /// Checks the hyperparameters and partitions `dataset` if they are valid.
    pub fn split(&self, dataset: &Dataset<F>) -> Result<TrainTestSplit<F>> {
        self.check_ref()?.split(dataset)
    }
}
