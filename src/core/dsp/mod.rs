//! Digital Signal Processing utilities

pub mod fft;
pub mod stats;
pub mod windows;

pub use fft::{bin_frequencies, FftProcessor};
pub use stats::{rms, spectral_flatness, EPS};
pub use windows::{apply_window, hann_window};
