//! Axis-aligned covariance of the Gaussian modes
//!
use std::convert::TryFrom;

use ndarray::{arr1, Array2};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::error::ParamsError;

/// Variance of every Gaussian mode
///
/// Either the same variance along both axes or a separate variance for the x and y axis. The
/// resulting covariance is always diagonal.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Variance {
    Scalar(f64),
    PerAxis(f64, f64),
}

impl Variance {
    /// Variance along the x and y axis
    pub fn per_axis(&self) -> (f64, f64) {
        match *self {
            Variance::Scalar(v) => (v, v),
            Variance::PerAxis(vx, vy) => (vx, vy),
        }
    }

    /// Checks that both variances are non-negative and finite
    pub fn verify(&self) -> Result<(), ParamsError> {
        let (vx, vy) = self.per_axis();
        if [vx, vy].iter().all(|v| v.is_finite() && *v >= 0.0) {
            Ok(())
        } else {
            Err(ParamsError::NegativeVariance)
        }
    }

    /// Builds the `2x2` diagonal covariance matrix `diag(σx², σy²)`
    pub fn covariance(&self) -> Array2<f64> {
        let (vx, vy) = self.per_axis();
        Array2::from_diag(&arr1(&[vx, vy]))
    }
}

impl Default for Variance {
    fn default() -> Self {
        Variance::Scalar(0.0025)
    }
}

impl From<f64> for Variance {
    fn from(variance: f64) -> Self {
        Variance::Scalar(variance)
    }
}

impl From<[f64; 2]> for Variance {
    fn from([vx, vy]: [f64; 2]) -> Self {
        Variance::PerAxis(vx, vy)
    }
}

impl From<(f64, f64)> for Variance {
    fn from((vx, vy): (f64, f64)) -> Self {
        Variance::PerAxis(vx, vy)
    }
}

/// A variance given as a sequence must have exactly two entries
impl TryFrom<&[f64]> for Variance {
    type Error = ParamsError;

    fn try_from(variance: &[f64]) -> Result<Self, Self::Error> {
        match *variance {
            [vx, vy] => Ok(Variance::PerAxis(vx, vy)),
            _ => Err(ParamsError::VarianceLength(variance.len())),
        }
    }
}

impl TryFrom<Vec<f64>> for Variance {
    type Error = ParamsError;

    fn try_from(variance: Vec<f64>) -> Result<Self, Self::Error> {
        Variance::try_from(variance.as_slice())
    }
}
