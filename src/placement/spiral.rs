use std::f64::consts::PI;

use ndarray::Array2;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256Plus;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use super::generate_with;
use crate::covariance::Variance;
use crate::error::{ParamsError, Result};
use crate::param_guard::ParamGuard;
use crate::traits::{Generate, ModePlacement};

/// Number of modes along the spiral, independent of the number of samples
pub const SPIRAL_MODES: usize = 2000;

/// Modes along an Archimedean spiral `r(θ) = scale / 2 * θ`
///
/// The `i`-th mode, `i = 1..=2000`, sits at `θ = 2π * revolutions * sqrt(i / 2000)`. The
/// square root packs modes closer together near the core of the spiral.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralPlacement {
    pub revolutions: f64,
    pub scale: f64,
}

impl ModePlacement for SpiralPlacement {
    fn n_modes(&self) -> usize {
        SPIRAL_MODES
    }

    fn means(&self) -> Array2<f64> {
        let mut means: Array2<f64> = Array2::zeros((SPIRAL_MODES, 2));
        for (i, mut mean) in means.rows_mut().into_iter().enumerate() {
            let t = (i + 1) as f64 / SPIRAL_MODES as f64;
            let theta = 2. * self.revolutions * PI * t.sqrt();
            let r = self.scale / 2. * theta;

            mean[0] = r * theta.cos();
            mean[1] = r * theta.sin();
        }
        means
    }
}

/// The validated parameters of a [spiral dataset](SpiralDataset)
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralValidParams<R: Rng + Clone> {
    placement: SpiralPlacement,
    variance: Variance,
    samples: usize,
    rng: R,
}

impl<R: Rng + Clone> SpiralValidParams<R> {
    pub fn placement(&self) -> &SpiralPlacement {
        &self.placement
    }

    pub fn variance(&self) -> Variance {
        self.variance
    }

    pub fn samples(&self) -> usize {
        self.samples
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }
}

/// A helper struct to build the parameters of a [spiral dataset](SpiralDataset)
#[derive(Clone, Debug, PartialEq)]
pub struct SpiralParams<R: Rng + Clone>(SpiralValidParams<R>);

impl<R: Rng + Clone> SpiralParams<R> {
    /// Defaults to 2 revolutions with scale 1, variance `0.0025` and `10000` samples.
    pub fn new_with_rng(rng: R) -> Self {
        Self(SpiralValidParams {
            placement: SpiralPlacement {
                revolutions: 2.,
                scale: 1.,
            },
            variance: Variance::default(),
            samples: 10000,
            rng,
        })
    }

    /// Set the number of turns of the spiral
    pub fn revolutions(mut self, revolutions: f64) -> Self {
        self.0.placement.revolutions = revolutions;
        self
    }

    /// Set the growth of the radius per radian, doubled
    pub fn scale(mut self, scale: f64) -> Self {
        self.0.placement.scale = scale;
        self
    }

    pub fn variance(mut self, variance: impl Into<Variance>) -> Self {
        self.0.variance = variance.into();
        self
    }

    /// Set the total number of samples, spread uniformly along the spiral
    pub fn samples(mut self, samples: usize) -> Self {
        self.0.samples = samples;
        self
    }

    /// Change the random number generator
    pub fn with_rng<R2: Rng + Clone>(self, rng: R2) -> SpiralParams<R2> {
        SpiralParams(SpiralValidParams {
            placement: self.0.placement,
            variance: self.0.variance,
            samples: self.0.samples,
            rng,
        })
    }
}

impl<R: Rng + SeedableRng + Clone> SpiralParams<R> {
    /// Reseed the random number generator for reproducible datasets
    pub fn random_state(mut self, seed: u64) -> Self {
        self.0.rng = R::seed_from_u64(seed);
        self
    }
}

impl<R: Rng + Clone> ParamGuard for SpiralParams<R> {
    type Checked = SpiralValidParams<R>;
    type Error = ParamsError;

    fn check_ref(&self) -> std::result::Result<&Self::Checked, Self::Error> {
        self.0.variance.verify()?;
        Ok(&self.0)
    }

    fn check(self) -> std::result::Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

impl<R: Rng + Clone> Generate for SpiralValidParams<R> {
    fn generate(&self) -> Result<Array2<f64>> {
        let mut rng = self.rng.clone();
        generate_with(
            &self.placement,
            &self.variance,
            self.samples,
            None,
            &mut rng,
        )
    }
}

/// Gaussian modes along an Archimedean spiral
pub struct SpiralDataset;

impl SpiralDataset {
    /// Default parameters with a generator seeded from system entropy
    pub fn params() -> SpiralParams<Xoshiro256Plus> {
        SpiralParams::new_with_rng(Xoshiro256Plus::from_entropy())
    }

    pub fn params_with_rng<R: Rng + Clone>(rng: R) -> SpiralParams<R> {
        SpiralParams::new_with_rng(rng)
    }
}
