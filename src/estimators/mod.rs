#[cfg(test)]
mod tests;

pub mod hyperparams;
pub mod linear_regression;
pub mod traits;

pub use linear_regression::LinearRegression;
