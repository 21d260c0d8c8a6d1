//! Error types in gaussian-modes
//!

use thiserror::Error;

use ndarray::ShapeError;
pub type Result<T> = std::result::Result<T, Error>;

/// An invalid argument passed to one of the dataset generators
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParamsError {
    #[error("rows must be greater than 1, but is {0}")]
    Rows(usize),
    #[error("cols must be greater than 1, but is {0}")]
    Cols(usize),
    #[error("variance should be a single scalar or a sequence of length 2, but has length {0}")]
    VarianceLength(usize),
    #[error("variance must be non-negative and finite")]
    NegativeVariance,
    #[error("expected {expected} sample weights (one per mode), but got {found}")]
    WeightsLength { expected: usize, found: usize },
    #[error("sample weights must be non-negative and finite")]
    NegativeWeight,
    #[error("sample weights must not all be zero")]
    ZeroWeights,
    #[error("number of modes cannot be 0")]
    Modes,
}

#[derive(Error, Debug, Clone)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] ParamsError),
    #[error("invalid ndarray shape {0}")]
    NdShape(#[from] ShapeError),
}
