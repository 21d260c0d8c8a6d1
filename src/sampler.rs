//! Draw Gaussian samples around a list of modes
//!

use ndarray::{s, Array, Array2, ArrayBase, Axis, Data, ErrorKind, Ix2, ShapeError};
use ndarray_rand::{rand_distr::StandardNormal, RandomExt};
use rand::{seq::index, Rng};

use crate::error::Result;

/// Draws `samples_per_mode[i]` points around the `i`-th row of `means`, using the diagonal
/// covariance `cov` for every mode.
///
/// The draws are concatenated in mode order. If more than `samples` points were drawn, a
/// uniformly random subset of `samples` points is kept, preserving their relative order. If
/// fewer points were drawn, they are all returned and the dataset is shorter than `samples`.
///
/// All randomness comes from `rng`, so a generator in the same state yields the same dataset.
pub fn sample_modes(
    samples: usize,
    means: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    cov: &ArrayBase<impl Data<Elem = f64>, Ix2>,
    samples_per_mode: &[usize],
    rng: &mut impl Rng,
) -> Result<Array2<f64>> {
    let n_features = means.ncols();
    if means.nrows() != samples_per_mode.len() || cov.dim() != (n_features, n_features) {
        return Err(ShapeError::from_kind(ErrorKind::IncompatibleShape).into());
    }

    // only the diagonal is used, off-diagonal entries are zero for axis-aligned modes
    let std_dev = cov.diag().mapv(f64::sqrt);

    let n_drawn: usize = samples_per_mode.iter().sum();
    let mut data: Array2<f64> = Array2::zeros((n_drawn, n_features));

    let mut offset = 0;
    for (mean, &count) in means.rows().into_iter().zip(samples_per_mode) {
        let noise: Array2<f64> = Array::random_using((count, n_features), StandardNormal, rng);
        let blob = noise * &std_dev + &mean;

        data.slice_mut(s![offset..offset + count, ..]).assign(&blob);
        offset += count;

        log::trace!("drew {} samples around mode {}", count, mean);
    }

    if n_drawn > samples {
        Ok(keep_random_subset(data, samples, rng))
    } else {
        if n_drawn < samples {
            log::warn!(
                "only {} samples were allocated to the modes, {} were requested",
                n_drawn,
                samples
            );
        }
        Ok(data)
    }
}

/// Keeps `amount` uniformly chosen rows of `data` in their original order
fn keep_random_subset(data: Array2<f64>, amount: usize, rng: &mut impl Rng) -> Array2<f64> {
    let mut keep = index::sample(rng, data.nrows(), amount).into_vec();
    keep.sort_unstable();

    log::debug!("dropped {} surplus samples", data.nrows() - amount);

    data.select(Axis(0), &keep)
}
