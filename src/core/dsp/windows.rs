//! Window function implementations

use std::f64::consts::PI;

/// Create a symmetric Hann window of the given length.
///
/// Symmetric form: zero at both endpoints, peak at the center. A
/// length-1 window is `[1.0]` so degenerate frames pass through
/// unchanged.
pub fn hann_window(size: usize) -> Vec<f64> {
    if size <= 1 {
        return vec![1.0; size];
    }
    let denom = (size - 1) as f64;
    (0..size)
        .map(|i| 0.5 * (1.0 - (2.0 * PI * i as f64 / denom).cos()))
        .collect()
}

/// Multiply samples by a window in place.
pub fn apply_window(samples: &mut [f64], window: &[f64]) {
    for (s, w) in samples.iter_mut().zip(window.iter()) {
        *s *= w;
    }
}
