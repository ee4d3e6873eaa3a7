//! Core analysis pipeline: decode → extract features → score

pub mod analyzer;
pub mod decoder;
pub mod dsp;
pub mod error;
pub mod features;
pub mod scorer;

pub use analyzer::{analyze_clip, AnalysisReport, ClipAnalyzer};
pub use decoder::{decode_audio, AudioData};
pub use error::AnalysisError;
pub use features::{extract_features, FeatureVector, SAMPLE_COUNT};
pub use scorer::{score_environment, ScoreResult};
