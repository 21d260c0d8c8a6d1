use ndarray::{Array1, Array2};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::generate_with;
use crate::allocation::normalize_weights;
use crate::covariance::Variance;
use crate::error::{ParamsError, Result};
use crate::param_guard::ParamGuard;
use crate::traits::{Generate, ModePlacement};

/// A `rows x cols` lattice of modes spanning `[-width/2, width/2] x [-height/2, height/2]`
///
/// Modes are ordered column by column from the left, each column from top to bottom, i.e. by
/// ascending x and then descending y.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct GridPlacement {
    pub rows: usize,
    pub cols: usize,
    pub grid_width: f64,
    pub grid_height: f64,
}

impl ModePlacement for GridPlacement {
    fn n_modes(&self) -> usize {
        self.rows * self.cols
    }

    fn means(&self) -> Array2<f64> {
        let xs = Array1::linspace(-self.grid_width / 2., self.grid_width / 2., self.cols);
        let ys = Array1::linspace(-self.grid_height / 2., self.grid_height / 2., self.rows);

        let rows = self.rows;
        Array2::from_shape_fn((self.n_modes(), 2), |(mode, axis)| {
            let (col, row) = (mode / rows, mode % rows);
            if axis == 0 {
                xs[col]
            } else {
                ys[rows - 1 - row]
            }
        })
    }
}

/// The validated parameters of a [grid dataset](GridDataset)
#[derive(Clone, Debug, PartialEq)]
pub struct GridValidParams<R: Rng + Clone> {
    placement: GridPlacement,
    variance: Variance,
    samples: usize,
    sample_weights: Option<Vec<f64>>,
    rng: R,
}

impl<R: Rng + Clone> GridValidParams<R> {
    pub fn placement(&self) -> &GridPlacement {
        &self.placement
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Proportion of samples drawn at each mode, in mode order
    pub fn sample_weights(&self) -> Option<&[f64]> {
        self.sample_weights.as_deref()
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

/// A helper struct to build the parameters of a [grid dataset](GridDataset)
#[derive(Clone, Debug, PartialEq)]
pub struct GridParams<R: Rng + Clone>(GridValidParams<R>);

impl<R: Rng + Clone> GridParams<R> {
    /// Defaults to a `5 x 5` grid over `[-5, 5] x [-5, 5]` with variance `0.0025`,
    /// `10000` samples and equally weighted modes.
    pub fn new_with_rng(rng: R) -> Self {
        Self(GridValidParams {
            placement: GridPlacement {
                rows: 5,
                cols: 5,
                grid_width: 10.,
                grid_height: 10.,
            },
            variance: Variance::default(),
            samples: 10000,
            sample_weights: None,
            rng,
        })
    }

    /// Set the number of rows, must be greater than 1
    pub fn rows(mut self, rows: usize) -> Self {
        self.0.placement.rows = rows;
        self
    }

    /// Set the number of columns, must be greater than 1
    pub fn cols(mut self, cols: usize) -> Self {
        self.0.placement.cols = cols;
        self
    }

    /// Set the width of the domain centred around the origin
    pub fn grid_width(mut self, grid_width: f64) -> Self {
        self.0.placement.grid_width = grid_width;
        self
    }

    /// Set the height of the domain centred around the origin
    pub fn grid_height(mut self, grid_height: f64) -> Self {
        self.0.placement.grid_height = grid_height;
        self
    }

    pub fn variance(mut self, variance: impl Into<Variance>) -> Self {
        self.0.variance = variance.into();
        self
    }

    /// Set the total number of samples
    pub fn samples(mut self, samples: usize) -> Self {
        self.0.samples = samples;
        self
    }

    /// Set the proportion of samples drawn at each mode, starting with the top-left mode and
    /// walking down each column. Must have `rows * cols` non-negative entries.
    pub fn sample_weights(mut self, sample_weights: Vec<f64>) -> Self {
        self.0.sample_weights = Some(sample_weights);
        self
    }

    /// Change the random number generator
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> GridParams<R2> {
        GridParams(GridValidParams {
            placement: self.0.placement,
            variance: self.0.variance,
            samples: self.0.samples,
            sample_weights: self.0.sample_weights,
            rng,
        })
    }
}

impl<R: Rng + SeedableRng + Clone> GridParams<R> {
    /// Reseed the random number generator for reproducible datasets
    pub fn random_state(mut self, seed: u64) -> Self {
        self.0.rng = R::seed_from_u64(seed);
        self
    }
}

impl<R: Rng + Clone> ParamGuard for GridParams<R> {
    type Checked = GridValidParams<R>;
    type Error = ParamsError;

    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error> {
        let placement = &self.0.placement;
        if placement.rows < 2 {
            Err(ParamsError::Rows(placement.rows))
        } else if placement.cols < 2 {
            Err(ParamsError::Cols(placement.cols))
        } else {
            self.0.variance.verify()?;
            normalize_weights(placement.n_modes(), self.0.sample_weights())?;
            Ok(&self.0)
        }
    }

    fn check(self) -> std::result::Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<R: Rng + Clone> Generate for GridValidParams<R> {
    fn generate(&self) -> Result<Array2<f64>> {
        let mut rng = self.rng.clone();
        generate_with(
            &self.placement,
            &self.variance,
            self.samples,
            self.sample_weights(),
            &mut rng,
        )
    }
}

/// Gaussian modes on an evenly spaced rectangular grid
///
/// ```
/// use gaussian_modes::prelude::*;
///
/// let data = GridDataset::params()
///     .rows(3)
///     .cols(4)
///     .samples(1200)
///     .random_state(42)
///     .generate()
///     .unwrap();
///
/// assert_eq!(data.dim(), (1200, 2));
/// ```
pub struct GridDataset;

impl GridDataset {
    /// Default parameters with a generator seeded from system entropy
    pub fn params() -> GridParams<Xoshiro256Plus> {
        GridParams::new_with_rng(Xoshiro256Plus::from_entropy())
    }

    pub fn params_with_rng<R: Rng + Clone>(rng: R) -> GridParams<R> {
        GridParams::new_with_rng(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_abs_diff_eq;
    use ndarray::array;

    #[test]
    fn autotraits() {
        fn has_autotraits<T: Send + Sync + Sized + Unpin>() {}
        has_autotraits::<GridParams<Xoshiro256Plus>>();
        has_autotraits::<GridValidParams<Xoshiro256Plus>>();
    }

    #[test]
    fn corners_of_a_two_by_two_grid() {
        let placement = GridPlacement {
            rows: 2,
            cols: 2,
            grid_width: 10.,
            grid_height: 10.,
        };

        assert_abs_diff_eq!(
            placement.means(),
            array![[-5., 5.], [-5., -5.], [5., 5.], [5., -5.]]
        );
    }

    #[test]
    fn modes_are_sorted_by_x_then_descending_y() {
        let placement = GridPlacement {
            rows: 3,
            cols: 2,
            grid_width: 2.,
            grid_height: 4.,
        };

        assert_abs_diff_eq!(
            placement.means(),
            array![
                [-1., 2.],
                [-1., 0.],
                [-1., -2.],
                [1., 2.],
                [1., 0.],
                [1., -2.]
            ]
        );
    }

    #[test]
    fn rows_and_cols_must_exceed_one() {
        let res = GridDataset::params().rows(1).check();
        assert!(matches!(res, Err(ParamsError::Rows(1))));

        let res = GridDataset::params().cols(0).check();
        assert!(matches!(res, Err(ParamsError::Cols(0))));

        let res = GridDataset::params().rows(1).generate();
        assert!(matches!(
            res,
            Err(Error::InvalidArgument(ParamsError::Rows(1)))
        ));
    }

    #[test]
    fn weights_must_match_grid() {
        let res = GridDataset::params()
            .rows(2)
            .cols(2)
            .sample_weights(vec![1., 1., 2.])
            .check();
        assert!(matches!(
            res,
            Err(ParamsError::WeightsLength {
                expected: 4,
                found: 3
            })
        ));
    }

    #[test]
    fn weighted_grid_returns_all_samples() {
        let data = GridDataset::params()
            .rows(2)
            .cols(2)
            .sample_weights(vec![1., 1., 2., 1.])
            .samples(5)
            .random_state(1)
            .generate()
            .unwrap();

        assert_eq!(data.dim(), (5, 2));
    }

    #[test]
    fn repeated_generation_is_identical() {
        let params = GridDataset::params().rows(3).cols(3).samples(500);
        assert_eq!(params.generate().unwrap(), params.generate().unwrap());
    }
}
