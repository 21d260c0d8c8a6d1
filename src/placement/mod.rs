//! Mode placements and the generation pipeline they share
//!
//! Every geometry only decides where its modes go. Allocating samples to the modes, building
//! the covariance and sampling is done once in [`generate_with`].

mod circular;
mod grid;
mod spiral;

pub use circular::{CircularDataset, CircularParams, CircularPlacement, CircularValidParams};
pub use grid::{GridDataset, GridParams, GridPlacement, GridValidParams};
pub use spiral::{SpiralDataset, SpiralParams, SpiralPlacement, SpiralValidParams, SPIRAL_MODES};

use ndarray::Array2;
use rand::Rng;

use crate::allocation::{distribute_shortfall, samples_per_mode};
use crate::covariance::Variance;
use crate::error::Result;
use crate::sampler::sample_modes;
use crate::traits::ModePlacement;

/// Samples `samples` points around the modes of `placement`
///
/// Weighted allocations which fall short of `samples` are topped up, so the returned dataset
/// always has shape `(samples, 2)`.
pub fn generate_with(
    placement: &impl ModePlacement,
    variance: &Variance,
    samples: usize,
    sample_weights: Option<&[f64]>,
    rng: &mut impl Rng,
) -> Result<Array2<f64>> {
    variance.verify()?;

    let means = placement.means();
    let mut counts = samples_per_mode(samples, means.nrows(), sample_weights)?;
    distribute_shortfall(samples, &mut counts, sample_weights)?;

    log::debug!(
        "sampling {} points around {} modes with variance {:?}",
        samples,
        means.nrows(),
        variance
    );

    let cov = variance.covariance();
    sample_modes(samples, &means, &cov, &counts, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256Plus;

    struct TwoModes;

    impl ModePlacement for TwoModes {
        fn n_modes(&self) -> usize {
            2
        }

        fn means(&self) -> Array2<f64> {
            array![[-1., 0.], [1., 0.]]
        }
    }

    #[test]
    fn weighted_shortfall_is_topped_up() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let data = generate_with(
            &TwoModes,
            &Variance::from(0.),
            7,
            Some(&[1., 1.]),
            &mut rng,
        )
        .unwrap();

        assert_eq!(data.nrows(), 7);
        let left = data.column(0).iter().filter(|x| **x < 0.).count();
        assert_eq!(left, 4);
    }

    #[test]
    fn uniform_surplus_is_trimmed() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let data = generate_with(&TwoModes, &Variance::from(0.1), 7, None, &mut rng).unwrap();
        assert_eq!(data.dim(), (7, 2));
    }

    #[test]
    fn invalid_variance_fails_before_sampling() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let res = generate_with(&TwoModes, &Variance::from(-1.), 7, None, &mut rng);
        assert!(res.is_err());
    }
}
