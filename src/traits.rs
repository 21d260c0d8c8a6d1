//! Provide traits shared by the dataset generators
//!

use ndarray::Array2;

use crate::error::{Error, Result};
use crate::param_guard::ParamGuard;

/// Geometric arrangement of the Gaussian modes
///
/// The order of the rows returned by `means` is significant: sample weights are matched to
/// modes by position.
pub trait ModePlacement {
    /// Number of modes this placement produces
    fn n_modes(&self) -> usize;

    /// Means of the modes with shape `(n_modes, 2)`
    fn means(&self) -> Array2<f64>;
}

/// Generate a dataset of 2D points with shape `(samples, 2)`
pub trait Generate {
    fn generate(&self) -> Result<Array2<f64>>;
}

/// Performs the checking step and calls `generate` on the checked parameters. If checking
/// failed, the checking error is converted to [`Error`] and returned.
impl<P> Generate for P
where
    P: ParamGuard,
    P::Checked: Generate,
    Error: From<P::Error>,
{
    fn generate(&self) -> Result<Array2<f64>> {
        let checked = self.check_ref()?;
        checked.generate()
    }
}
