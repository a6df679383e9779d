use crate::datasets::Dataset;
use crate::Float;

/// Fit trait
///
/// The fittable trait allows an estimator to be fitted to a dataset. More
/// formally, the model estimates coefficients that minimize an empirical risk
/// (loss function) over the dataset.
pub trait Fit<F: Float, E: std::error::Error> {
    type Object;

    fn fit(&self, dataset: &Dataset<F>) -> Result<Self::Object, E>;
}
