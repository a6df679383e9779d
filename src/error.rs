use thiserror::Error;

/// Simplified `Result` using [`RegressionError`] as error type
pub type Result<T> = std::result::Result<T, RegressionError>;

/// Error variants from hyperparameter construction, dataset validation or
/// model estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegressionError {
    /// A caller-supplied value violates the contract of the operation
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// The input is well-formed but makes the requested computation
    /// mathematically ill-defined
    #[error("degenerate input: {0}")]
    DegenerateInput(String),
}
