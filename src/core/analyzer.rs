//! High-level clip analysis API.

use anyhow::Result;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::decoder::{decode_audio, AudioData};
use super::features::{extract_features, FeatureVector};
use super::scorer::{score_environment, ScoreResult};

/// Combined scoring outcome and the measurements that justify it.
///
/// Serializes as a single flat JSON object: the score fields and the
/// feature fields side by side, the shape downstream consumers expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub result: ScoreResult,
    #[serde(flatten)]
    pub features: FeatureVector,
}

/// Run the full pipeline on an already-decoded waveform.
pub fn analyze_clip(samples: &[f32], channels: usize, sample_rate: u32) -> Result<AnalysisReport> {
    let features = extract_features(samples, channels, sample_rate)?;
    let result = score_environment(&features);
    Ok(AnalysisReport { result, features })
}

/// File-based analyzer: decodes once, scores on demand.
pub struct ClipAnalyzer {
    path: PathBuf,
    audio: AudioData,
}

impl ClipAnalyzer {
    /// Decode the clip at `path`.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let audio = decode_audio(path.as_ref())?;
        Ok(Self {
            path: path.as_ref().to_path_buf(),
            audio,
        })
    }

    /// Extract features and score the decoded clip.
    pub fn analyze(&self) -> Result<AnalysisReport> {
        analyze_clip(&self.audio.samples, self.audio.channels, self.audio.sample_rate)
    }

    /// Get raw audio data
    pub fn audio_data(&self) -> &AudioData {
        &self.audio
    }

    /// Get file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_report_serializes_flat() {
        let samples: Vec<f32> = (0..8192)
            .map(|i| (0.05 * (2.0 * PI * 250.0 * i as f64 / 16000.0).sin()) as f32)
            .collect();
        let report = analyze_clip(&samples, 1, 16000).unwrap();
        let json = serde_json::to_value(&report).unwrap();

        // score and feature fields merged into one object
        assert!(json.get("score").is_some());
        assert!(json.get("isBoat").is_some());
        assert!(json.get("lowRatio").is_some());
        assert!(json.get("result").is_none());
        assert!(json.get("features").is_none());
    }

    #[test]
    fn test_empty_clip_is_an_error() {
        assert!(analyze_clip(&[], 1, 16000).is_err());
    }
}
