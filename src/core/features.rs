//! Spectral feature extraction from raw hydrophone waveforms.
//!
//! This is the first stage of the scoring pipeline: a deterministic,
//! stateless transform from a decoded clip into the fixed set of
//! measurements the environmental scorer keys on. Analysis is bounded to
//! the opening [`SAMPLE_COUNT`] samples so cost and frequency resolution
//! are independent of clip length.

use log::debug;
use serde::Serialize;

use super::dsp::{apply_window, bin_frequencies, hann_window, rms, spectral_flatness, FftProcessor, EPS};
use super::error::AnalysisError;

/// Number of leading samples analyzed per clip.
pub const SAMPLE_COUNT: usize = 16384;

/// Low band covers frequencies below this (Hz).
pub const LOW_BAND_HZ: f64 = 300.0;

/// High band covers frequencies at or above this (Hz); mid sits between.
pub const HIGH_BAND_HZ: f64 = 3000.0;

/// Fixed set of spectral measurements for one clip.
///
/// Field names serialize in camelCase; downstream consumers key on the
/// exact names, so they are part of the output contract.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeatureVector {
    /// Root-mean-square level of the un-windowed signal.
    pub rms: f64,
    /// Share of spectral energy below 300 Hz.
    pub low_ratio: f64,
    /// Share of spectral energy in 300–3000 Hz.
    pub mid_ratio: f64,
    /// Share of spectral energy at or above 3000 Hz.
    pub high_ratio: f64,
    /// Magnitude-weighted mean frequency (Hz).
    pub centroid: f64,
    /// Wiener entropy of the magnitude spectrum, in `[0, 1]`.
    pub flatness: f64,
    /// Peak-to-mean magnitude ratio within the low band.
    pub low_peakiness: f64,
}

/// Extract the feature vector from an interleaved waveform.
///
/// Multi-channel input is mixed to mono by averaging across channels per
/// frame. The first [`SAMPLE_COUNT`] mono samples are Hann-windowed,
/// zero-padded to the next power of two, and transformed with a
/// real-input FFT; all features derive from that single spectrum.
///
/// Fails only on an empty waveform or a zero sample rate. Silence is a
/// valid input and yields finite, all-defined features.
pub fn extract_features(
    samples: &[f32],
    channels: usize,
    sample_rate: u32,
) -> Result<FeatureVector, AnalysisError> {
    if samples.is_empty() {
        return Err(AnalysisError::EmptyWaveform);
    }
    if sample_rate == 0 {
        return Err(AnalysisError::InvalidSampleRate);
    }

    let mono = mixdown_mono(samples, channels.max(1));
    if mono.is_empty() {
        // fewer samples than one interleaved frame
        return Err(AnalysisError::EmptyWaveform);
    }
    let frame = &mono[..mono.len().min(SAMPLE_COUNT)];

    let rms = rms(frame);

    let window = hann_window(frame.len());
    let mut padded = vec![0.0f64; frame.len().next_power_of_two()];
    padded[..frame.len()].copy_from_slice(frame);
    apply_window(&mut padded[..frame.len()], &window);

    let fft_size = padded.len();
    let mut fft = FftProcessor::new();
    let mags = fft.magnitude_spectrum(&padded);
    let freqs = bin_frequencies(fft_size, sample_rate);

    debug!(
        "analyzing {} samples ({} ch) at {} Hz, fft size {}",
        frame.len(),
        channels,
        sample_rate,
        fft_size
    );

    let (low_ratio, mid_ratio, high_ratio) = band_energy_ratios(&mags, &freqs);
    let centroid = spectral_centroid(&mags, &freqs);
    let flatness = spectral_flatness(&mags);
    let low_peakiness = low_band_peakiness(&mags, &freqs);

    Ok(FeatureVector {
        rms,
        low_ratio,
        mid_ratio,
        high_ratio,
        centroid,
        flatness,
        low_peakiness,
    })
}

/// Average interleaved channels down to a mono f64 signal.
fn mixdown_mono(samples: &[f32], channels: usize) -> Vec<f64> {
    if channels == 1 {
        return samples.iter().map(|&s| s as f64).collect();
    }

    let frames = samples.len() / channels;
    let mut mono = Vec::with_capacity(frames);
    for i in 0..frames {
        let sum: f64 = samples[i * channels..(i + 1) * channels]
            .iter()
            .map(|&s| s as f64)
            .sum();
        mono.push(sum / channels as f64);
    }
    mono
}

/// Split spectral energy (magnitude squared) into the three band ratios.
fn band_energy_ratios(mags: &[f64], freqs: &[f64]) -> (f64, f64, f64) {
    let mut low = 0.0;
    let mut mid = 0.0;
    let mut high = 0.0;

    for (&mag, &freq) in mags.iter().zip(freqs.iter()) {
        let energy = mag * mag;
        if freq < LOW_BAND_HZ {
            low += energy;
        } else if freq < HIGH_BAND_HZ {
            mid += energy;
        } else {
            high += energy;
        }
    }

    let total = low + mid + high + EPS;
    (low / total, mid / total, high / total)
}

/// Magnitude-weighted mean frequency.
fn spectral_centroid(mags: &[f64], freqs: &[f64]) -> f64 {
    let weighted: f64 = freqs.iter().zip(mags.iter()).map(|(f, m)| f * m).sum();
    let total: f64 = mags.iter().sum();
    weighted / (total + EPS)
}

/// Peak-to-mean magnitude ratio inside the low band.
///
/// A narrow tonal call lights up one bin far above the band mean; a
/// broadband rumble keeps the ratio near 1. An empty low band (very
/// short transforms) reports exactly 1.0 by convention.
fn low_band_peakiness(mags: &[f64], freqs: &[f64]) -> f64 {
    let low_mags: Vec<f64> = mags
        .iter()
        .zip(freqs.iter())
        .filter(|(_, &f)| f < LOW_BAND_HZ)
        .map(|(&m, _)| m)
        .collect();

    if low_mags.is_empty() {
        return 1.0;
    }

    let max = low_mags.iter().cloned().fold(f64::MIN, f64::max);
    let mean = low_mags.iter().sum::<f64>() / low_mags.len() as f64;
    max / (mean + EPS)
}
