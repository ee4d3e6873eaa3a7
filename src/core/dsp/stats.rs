//! Statistical and spectral measurement functions

/// Denominator guard shared by every ratio in the pipeline, so silence
/// and all-zero spectra stay finite instead of erroring.
pub const EPS: f64 = 1e-12;

/// Compute RMS (Root Mean Square)
pub fn rms(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return 0.0;
    }

    let sum_sq: f64 = samples.iter().map(|s| s * s).sum();
    (sum_sq / samples.len() as f64).sqrt()
}

/// Spectral flatness (Wiener entropy): geometric mean over arithmetic
/// mean of the magnitudes, clamped to `[0, 1]`.
///
/// Each magnitude is floor-clamped to [`EPS`] before the log so the
/// geometric mean stays finite on zero bins. Near 1 means noise-like,
/// near 0 means tonal.
pub fn spectral_flatness(mags: &[f64]) -> f64 {
    if mags.is_empty() {
        return 0.0;
    }

    let n = mags.len() as f64;

    let log_sum: f64 = mags.iter().map(|&m| m.max(EPS).ln()).sum();
    let geometric_mean = (log_sum / n).exp();

    let arithmetic_mean = mags.iter().map(|&m| m.max(EPS)).sum::<f64>() / n;

    (geometric_mean / (arithmetic_mean + EPS)).clamp(0.0, 1.0)
}
