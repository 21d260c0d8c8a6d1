use std::f64::consts::PI;

use ndarray::Array2;
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

/// `modes` equally spaced modes on a circle of the given radius centred at the origin
///
/// The first mode sits one angular step `2π / modes` counter-clockwise from the positive x-axis,
/// the last one on the positive x-axis.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct CircularPlacement {
    pub modes: usize,
    pub radius: f64,
}

impl ModePlacement for CircularPlacement {
    fn n_modes(&self) -> usize {
        self.modes
    }

    fn means(&self) -> Array2<f64> {
        let step = 2. * PI / self.modes as f64;
        Array2::from_shape_fn((self.modes, 2), |(mode, axis)| {
            let angle = step * (mode + 1) as f64;
            if axis == 0 {
                self.radius * angle.cos()
            } else {
                self.radius * angle.sin()
            }
        })
    }
}

/// The validated parameters of a [circular dataset](CircularDataset)
#[derive(Clone, Debug, PartialEq)]
pub struct CircularValidParams<R: Rng + Clone> {
    placement: CircularPlacement,
    variance: Variance,
    samples: usize,
    sample_weights: Option<Vec<f64>>,
    rng: R,
}

impl<R: Rng + Clone> CircularValidParams<R> {
    pub fn placement(&self) -> &CircularPlacement {
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

/// A helper struct to build the parameters of a [circular dataset](CircularDataset)
#[derive(Clone, Debug, PartialEq)]
pub struct CircularParams<R: Rng + Clone>(CircularValidParams<R>);

impl<R: Rng + Clone> CircularParams<R> {
    /// Defaults to 8 modes on a circle of radius 5 with variance `0.0025`, `10000` samples and
    /// equally weighted modes.
    pub fn new_with_rng(rng: R) -> Self {
        Self(CircularValidParams {
            placement: CircularPlacement {
                modes: 8,
                radius: 5.,
            },
            variance: Variance::default(),
            samples: 10000,
            sample_weights: None,
            rng,
        })
    }

    /// Set the number of modes
    pub fn modes(mut self, modes: usize) -> Self {
        self.0.placement.modes = modes;
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.0.placement.radius = radius;
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

    /// Set the proportion of samples drawn at each mode in counter-clockwise order. Must have
    /// `modes` non-negative entries.
    pub fn sample_weights(mut self, sample_weights: Vec<f64>) -> Self {
        self.0.sample_weights = Some(sample_weights);
        self
    }

    /// Change the random number generator
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> CircularParams<R2> {
        CircularParams(CircularValidParams {
            placement: self.0.placement,
            variance: self.0.variance,
            samples: self.0.samples,
            sample_weights: self.0.sample_weights,
            rng,
        })
    }
}

impl<R: Rng + SeedableRng + Clone> CircularParams<R> {
    /// Reseed the random number generator for reproducible datasets
    pub fn random_state(mut self, seed: u64) -> Self {
        self.0.rng = R::seed_from_u64(seed);
        self
    }
}

impl<R: Rng + Clone> ParamGuard for CircularParams<R> {
    type Checked = CircularValidParams<R>;
    type Error = ParamsError;

    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error> {
        if self.0.placement.modes == 0 {
            return Err(ParamsError::Modes);
        }
        self.0.variance.verify()?;
        normalize_weights(self.0.placement.modes, self.0.sample_weights())?;
        Ok(&self.0)
    }

    fn check(self) -> std::result::Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<R: Rng + Clone> Generate for CircularValidParams<R> {
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

/// Gaussian modes evenly spaced on a circle
///
/// ```
/// use gaussian_modes::prelude::*;
///
/// let data = CircularDataset::params()
///     .modes(7)
///     .sample_weights(vec![1., 2., 1., 1., 1., 1., 1.])
///     .samples(8)
///     .generate()
///     .unwrap();
///
/// assert_eq!(data.dim(), (8, 2));
/// ```
pub struct CircularDataset;

impl CircularDataset {
    /// Default parameters with a generator seeded from system entropy
    pub fn params() -> CircularParams<Xoshiro256Plus> {
        CircularParams::new_with_rng(Xoshiro256Plus::from_entropy())
    }

    pub fn params_with_rng<R: Rng + Clone>(rng: R) -> CircularParams<R> {
        CircularParams::new_with_rng(rng)
    }
}
