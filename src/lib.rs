//! OceanScore - Environmental health scoring for hydrophone clips
//!
//! Analyzes short underwater recordings and produces a 0–100
//! environmental health score that distinguishes marine mammal
//! vocalizations (humpback whale, orca) from anthropogenic boat and
//! engine noise, along with the spectral measurements behind the score.
//!
//! ## Pipeline
//!
//! Two pure, stateless stages run in sequence:
//!
//! 1. **Feature extraction** ([`crate::core::features`]): windowed
//!    real-FFT analysis of the first 16384 samples producing band energy
//!    ratios, spectral centroid, spectral flatness, low-band peakiness,
//!    and RMS.
//! 2. **Scoring** ([`crate::core::scorer`]): a fixed, explainable rule table
//!    matching humpback and orca call patterns, penalizing boat noise,
//!    and clamping to the final score with a human-readable note.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oceanscore::core::ClipAnalyzer;
//!
//! let analyzer = ClipAnalyzer::new("hydrophone_clip.wav")?;
//! let report = analyzer.analyze()?;
//!
//! println!("Environmental score: {}/100", report.result.score);
//! println!("{}", report.result.note);
//! ```
//!
//! Already-decoded waveforms can skip the file layer via
//! [`analyze_clip`] or the individual stage functions
//! [`extract_features`] and [`score_environment`].

// Core analysis functionality
pub mod core;

// Command-line interface
pub mod cli;

// Re-export commonly used types at crate root for convenience
pub use crate::core::{
    analyze_clip, extract_features, score_environment, AnalysisError, AnalysisReport,
    ClipAnalyzer, FeatureVector, ScoreResult,
};
