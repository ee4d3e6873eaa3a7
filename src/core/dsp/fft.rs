//! Real-input FFT magnitude spectra

use realfft::RealFftPlanner;

/// Real-to-complex FFT wrapper producing magnitude spectra.
///
/// Output covers the non-negative frequencies only: `n/2 + 1` bins for a
/// transform of length `n`, DC through Nyquist.
pub struct FftProcessor {
    planner: RealFftPlanner<f64>,
}

impl FftProcessor {
    pub fn new() -> Self {
        Self {
            planner: RealFftPlanner::new(),
        }
    }

    /// Compute the magnitude spectrum of a real signal.
    ///
    /// The transform length is `signal.len()`; callers zero-pad to the
    /// size they want before calling.
    pub fn magnitude_spectrum(&mut self, signal: &[f64]) -> Vec<f64> {
        let fft = self.planner.plan_fft_forward(signal.len());

        let mut input = fft.make_input_vec();
        input.copy_from_slice(signal);
        let mut spectrum = fft.make_output_vec();

        fft.process(&mut input, &mut spectrum)
            .expect("planner-sized FFT buffers");

        spectrum.iter().map(|c| c.norm()).collect()
    }
}

impl Default for FftProcessor {
    fn default() -> Self {
        Self::new()
    }
}

/// Frequency grid for a real FFT of length `fft_size` at `sample_rate` Hz:
/// bin `k` sits at `k * sample_rate / fft_size`.
pub fn bin_frequencies(fft_size: usize, sample_rate: u32) -> Vec<f64> {
    let step = sample_rate as f64 / fft_size as f64;
    (0..fft_size / 2 + 1).map(|k| k as f64 * step).collect()
}
