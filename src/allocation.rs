//! Split the requested number of samples between the modes
//!
//! Weighted splits truncate `samples * weight` towards zero and may therefore fall short of
//! `samples`, uniform splits round `samples / modes` up and may overshoot it. The surplus is
//! removed by the [sampler](crate::sampler::sample_modes), the shortfall is handed out by
//! [`distribute_shortfall`].

use std::cmp::Ordering;

use crate::error::ParamsError;

/// Checks the sample weights against the number of modes and normalizes them to sum to one
///
/// Returns `None` when no weights (or an empty sequence) are given, meaning a uniform split.
pub fn normalize_weights(
    modes: usize,
    weights: Option<&[f64]>,
) -> Result<Option<Vec<f64>>, ParamsError> {
    let weights = match weights {
        Some(weights) if !weights.is_empty() => weights,
        _ => return Ok(None),
    };

    if weights.len() != modes {
        return Err(ParamsError::WeightsLength {
            expected: modes,
            found: weights.len(),
        });
    }
    if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
        return Err(ParamsError::NegativeWeight);
    }

    let total: f64 = weights.iter().sum();
    if total <= 0.0 {
        return Err(ParamsError::ZeroWeights);
    }

    Ok(Some(weights.iter().map(|w| w / total).collect()))
}

/// Number of samples drawn at each mode
///
/// With weights every mode receives `floor(samples * w)` samples where `w` is its normalized
/// weight, so the total may be smaller than `samples`. Without weights every mode receives
/// `ceil(samples / modes)` samples, so the total may be larger than `samples`.
pub fn samples_per_mode(
    samples: usize,
    modes: usize,
    weights: Option<&[f64]>,
) -> Result<Vec<usize>, ParamsError> {
    if modes == 0 {
        return Err(ParamsError::Modes);
    }

    let counts = match normalize_weights(modes, weights)? {
        Some(weights) => weights
            .iter()
            .map(|w| (samples as f64 * w).trunc() as usize)
            .collect(),
        None => vec![(samples + modes - 1) / modes; modes],
    };

    log::debug!(
        "allocated {} samples to {} modes (requested {})",
        counts.iter().sum::<usize>(),
        modes,
        samples
    );

    Ok(counts)
}

/// Tops up a weighted allocation until it sums to `samples`
///
/// The missing samples are handed out one at a time to the modes with the largest truncated
/// fraction `samples * w - floor(samples * w)`, ties going to the earlier mode. Allocations
/// which already reach `samples` are left untouched.
pub fn distribute_shortfall(
    samples: usize,
    samples_per_mode: &mut [usize],
    weights: Option<&[f64]>,
) -> Result<(), ParamsError> {
    let allocated: usize = samples_per_mode.iter().sum();
    if allocated >= samples || samples_per_mode.is_empty() {
        return Ok(());
    }
    let shortfall = samples - allocated;

    let remainders: Vec<f64> = match normalize_weights(samples_per_mode.len(), weights)? {
        Some(weights) => weights
            .iter()
            .zip(samples_per_mode.iter())
            .map(|(w, &count)| samples as f64 * w - count as f64)
            .collect(),
        None => vec![0.0; samples_per_mode.len()],
    };

    let mut order: Vec<usize> = (0..samples_per_mode.len()).collect();
    // stable sort, so equal remainders keep the mode order
    order.sort_by(|&a, &b| {
        remainders[b]
            .partial_cmp(&remainders[a])
            .unwrap_or(Ordering::Equal)
    });

    for &idx in order.iter().cycle().take(shortfall) {
        samples_per_mode[idx] += 1;
    }

    log::debug!("distributed a shortfall of {} samples", shortfall);

    Ok(())
}
