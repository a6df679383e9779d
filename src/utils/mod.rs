#[cfg(test)]
mod tests;

/// This module contains the summary statistics backing the closed-form
/// least-squares solution.
pub mod helpers {
    use crate::Float;
    use ndarray::ArrayView1;

    /// Arithmetic mean of a non-empty sequence.
    pub fn mean<F: Float>(x: ArrayView1<F>) -> F {
        x.sum() / F::cast(x.len())
    }

    /// Population variance (divides by `n`).
    pub fn variance<F: Float>(x: ArrayView1<F>) -> F {
        let mx = mean(x);
        x.map(|&xi| (xi - mx) * (xi - mx)).sum() / F::cast(x.len())
    }

    /// Population covariance between positionally paired sequences.
    pub fn covariance<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>) -> F {
        let mx = mean(x);
        let my = mean(y);
        x.iter()
            .zip(y.iter())
            .map(|(&xi, &yi)| (xi - mx) * (yi - my))
            .sum::<F>()
            / F::cast(x.len())
    }
}

/// This module contains helper functions to generate reproducible synthetic
/// datasets for tests and benchmarks.
pub mod test_helpers {
    use ndarray::Array1;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    /// Generates `n_samples` noisy observations of `y = slope * x + intercept`
    /// with the predictor evenly spread over `[0, 10)` and Gaussian noise of
    /// standard deviation `noise_std` added to the targets.
    pub fn generate_linear_data(
        n_samples: usize,
        slope: f64,
        intercept: f64,
        noise_std: f64,
        seed: u64,
    ) -> (Array1<f64>, Array1<f64>) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let noise = Normal::new(0., noise_std).unwrap();

        let xs = Array1::from_shape_fn(n_samples, |i| 10. * i as f64 / n_samples as f64);
        let ys = xs.map(|&x| slope * x + intercept + noise.sample(&mut rng));
        (xs, ys)
    }
}
