//! Core analysis error types

use thiserror::Error;

/// Invalid-input errors raised by feature extraction.
///
/// These are the only failures that originate in the core; everything
/// downstream of a valid waveform is total (silence included), because
/// every denominator in the pipeline carries an epsilon guard.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("waveform contains no samples")]
    EmptyWaveform,

    #[error("sample rate must be positive")]
    InvalidSampleRate,
}
