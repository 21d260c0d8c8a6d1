//! `gaussian-modes` synthesizes 2D point clouds by sampling Gaussian modes laid out on a
//! rectangular grid, a circle or an Archimedean spiral.
//!
//! The datasets are meant for visualizing and benchmarking clustering algorithms: the modes are
//! known in advance and their spread is controlled by a shared, axis-aligned covariance.
//!
//! ## Building a dataset
//!
//! Every geometry has a parameter builder which is checked before any sampling happens:
//!
//! ```
//! use gaussian_modes::prelude::*;
//!
//! let data = CircularDataset::params()
//!     .modes(8)
//!     .radius(5.)
//!     .variance([0.01, 0.04])
//!     .samples(1000)
//!     .random_state(42)
//!     .generate()?;
//!
//! assert_eq!(data.dim(), (1000, 2));
//! # Ok::<(), gaussian_modes::Error>(())
//! ```
//!
//! The free functions [`grid_dataset`], [`circular_dataset`] and [`spiral_dataset`] take all
//! arguments at once and seed the generator from `random_state`.
//!
//! ## Reproducibility
//!
//! Randomness is taken from the generator stored in the parameters. It is cloned at the start
//! of every call, so generating twice from the same parameters gives identical datasets and
//! independent parameter sets can be used from different threads.

pub mod allocation;
pub mod covariance;
pub mod error;
mod param_guard;
pub mod placement;
pub mod prelude;
pub mod sampler;
pub mod traits;

#[cfg(feature = "benchmarks")]
pub mod benchmarks;

pub use covariance::Variance;
pub use error::{Error, ParamsError, Result};
pub use param_guard::ParamGuard;
pub use placement::{CircularDataset, GridDataset, SpiralDataset};

use ndarray::Array2;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256Plus;

use crate::traits::Generate;

fn seeded_rng(random_state: Option<u64>) -> Xoshiro256Plus {
    match random_state {
        Some(seed) => Xoshiro256Plus::seed_from_u64(seed),
        None => Xoshiro256Plus::from_entropy(),
    }
}

/// Samples a `rows x cols` grid of Gaussian modes over `[-grid_width/2, grid_width/2] x
/// [-grid_height/2, grid_height/2]`
///
/// `sample_weights` are given per mode starting with the top-left one and walking down each
/// column. Returns an array of shape `(samples, 2)`.
#[allow(clippy::too_many_arguments)]
pub fn grid_dataset(
    rows: usize,
    cols: usize,
    grid_width: f64,
    grid_height: f64,
    variance: impl Into<Variance>,
    samples: usize,
    sample_weights: Option<&[f64]>,
    random_state: Option<u64>,
) -> Result<Array2<f64>> {
    let mut params = GridDataset::params_with_rng(seeded_rng(random_state))
        .rows(rows)
        .cols(cols)
        .grid_width(grid_width)
        .grid_height(grid_height)
        .variance(variance)
        .samples(samples);
    if let Some(weights) = sample_weights {
        params = params.sample_weights(weights.to_vec());
    }

    params.generate()
}

/// Samples `modes` Gaussian modes evenly spaced on a circle of the given radius
///
/// `sample_weights` are given per mode in counter-clockwise order. Returns an array of shape
/// `(samples, 2)`.
pub fn circular_dataset(
    modes: usize,
    radius: f64,
    variance: impl Into<Variance>,
    samples: usize,
    sample_weights: Option<&[f64]>,
    random_state: Option<u64>,
) -> Result<Array2<f64>> {
    let mut params = CircularDataset::params_with_rng(seeded_rng(random_state))
        .modes(modes)
        .radius(radius)
        .variance(variance)
        .samples(samples);
    if let Some(weights) = sample_weights {
        params = params.sample_weights(weights.to_vec());
    }

    params.generate()
}

/// Samples Gaussian modes along an Archimedean spiral with `revolutions` turns
///
/// The samples are spread uniformly over the 2000 modes of the spiral. Returns an array of
/// shape `(samples, 2)`.
pub fn spiral_dataset(
    revolutions: f64,
    scale: f64,
    variance: impl Into<Variance>,
    samples: usize,
    random_state: Option<u64>,
) -> Result<Array2<f64>> {
    SpiralDataset::params_with_rng(seeded_rng(random_state))
        .revolutions(revolutions)
        .scale(scale)
        .variance(variance)
        .samples(samples)
        .generate()
}
