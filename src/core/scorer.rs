//! Rule-based environmental health scoring.
//!
//! Deliberately an explainable rule table rather than a trained model:
//! every threshold and point value below is part of the behavioral
//! contract. Three tables are evaluated against the same feature vector
//! (humpback pattern, orca pattern, boat penalty) and combined under a
//! fixed precedence policy with hard caps.

use serde::Serialize;

use super::features::FeatureVector;

/// Every clip starts from this neutral baseline.
pub const NEUTRAL_SCORE: i32 = 50;

/// A detected boat can never report above this, regardless of how
/// strongly an animal pattern also matched.
pub const BOAT_SCORE_CEILING: i32 = 30;

/// Pure biological signal never reaches 100; headroom is reserved for
/// classifier uncertainty.
pub const ANIMAL_SCORE_CEILING: i32 = 95;

const NOTE_HIGH: &str =
    "High: Strong marine mammal vocalizations detected (healthy environment).";
const NOTE_MEDIUM: &str =
    "Medium: Moderate marine activity or mixed signals with some noise.";
const NOTE_LOW: &str =
    "Low: Significant pollution (boat/engine noise) or minimal biological activity.";

/// Scoring outcome for one clip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    /// Final environmental health score, 0–100.
    pub score: i32,
    /// Human-readable summary for the final score band.
    pub note: String,
    /// Points matched against the humpback call pattern.
    pub humpback_score: i32,
    /// Points matched against the orca call pattern.
    pub orca_score: i32,
    /// Accumulated penalty when boat noise was detected (≤ 0).
    pub boat_penalty: i32,
    /// Whether the boat/engine signature fired.
    pub is_boat: bool,
}

/// Score a feature vector against the marine sound patterns.
///
/// Total function: any finite feature vector, including one derived from
/// silence, produces a valid result. Calling twice on the same vector
/// yields an identical result; there is no hidden state.
pub fn score_environment(features: &FeatureVector) -> ScoreResult {
    let humpback = humpback_score(features);
    let orca = orca_score(features);

    let is_boat = detect_boat(features);
    let boat_penalty = if is_boat { boat_penalty(features) } else { 0 };

    let animal = humpback.max(orca);
    let mut score = NEUTRAL_SCORE + animal + boat_penalty;

    if is_boat && score > BOAT_SCORE_CEILING {
        score = BOAT_SCORE_CEILING;
    }
    if !is_boat && score > ANIMAL_SCORE_CEILING {
        score = ANIMAL_SCORE_CEILING;
    }
    let score = score.clamp(0, 100);

    ScoreResult {
        score,
        note: note_for_score(score).to_string(),
        humpback_score: humpback,
        orca_score: orca,
        boat_penalty,
        is_boat,
    }
}

/// Humpback call pattern: strong low-band dominance, tonal spectrum,
/// peaked low band, dark centroid.
///
/// The two lowRatio checks are intentionally independent and both fire
/// above 0.6; the flatness, lowPeakiness and centroid pairs are tiered
/// and mutually exclusive. Collapsing either style into the other
/// changes scores.
pub(crate) fn humpback_score(f: &FeatureVector) -> i32 {
    let mut points = 0;

    if f.low_ratio > 0.6 {
        points += 10;
    }
    if f.low_ratio > 0.5 {
        points += 6;
    }

    if f.flatness < 0.2 {
        points += 12;
    } else if f.flatness < 0.3 {
        points += 8;
    }

    if f.low_peakiness > 3.5 {
        points += 10;
    } else if f.low_peakiness > 2.5 {
        points += 6;
    }

    if f.centroid < 1000.0 {
        points += 8;
    } else if f.centroid < 1500.0 {
        points += 5;
    }

    if f.mid_ratio < 0.3 {
        points += 5;
    }

    points
}

/// Orca call pattern: mid/high-band activity in moderate bands, all
/// checks independent open intervals.
pub(crate) fn orca_score(f: &FeatureVector) -> i32 {
    let mut points = 0;

    if f.high_ratio > 0.15 && f.high_ratio < 0.4 {
        points += 10;
    }
    if f.flatness > 0.25 && f.flatness < 0.55 {
        points += 8;
    }
    if f.mid_ratio > 0.25 && f.mid_ratio < 0.5 {
        points += 8;
    }
    if f.low_ratio > 0.2 && f.low_ratio < 0.6 {
        points += 7;
    }
    if f.centroid > 1000.0 && f.centroid < 3000.0 {
        points += 8;
    }
    if f.low_peakiness > 1.5 && f.low_peakiness < 4.0 {
        points += 5;
    }
    if f.rms > 0.01 && f.rms < 0.08 {
        points += 5;
    }

    points
}

/// Boat/engine signature: noise-like spectrum, bright centroid without a
/// peaked low band, mid-heavy broadband content, or simply loud.
pub(crate) fn detect_boat(f: &FeatureVector) -> bool {
    f.flatness > 0.5
        || (f.centroid > 2000.0 && f.low_peakiness < 2.5)
        || (f.mid_ratio > 0.4 && f.flatness > 0.45)
        || f.rms > 0.08
}

/// Tiered penalties once the boat signature fires. At most one tier per
/// feature applies, but penalties from different features stack.
pub(crate) fn boat_penalty(f: &FeatureVector) -> i32 {
    let mut penalty = 0;

    if f.flatness > 0.7 {
        penalty -= 60;
    } else if f.flatness > 0.6 {
        penalty -= 50;
    } else if f.flatness > 0.5 {
        penalty -= 40;
    } else if f.flatness > 0.4 {
        penalty -= 30;
    }

    if f.centroid > 4000.0 {
        penalty -= 40;
    } else if f.centroid > 3000.0 {
        penalty -= 35;
    } else if f.centroid > 2500.0 {
        penalty -= 30;
    } else if f.centroid > 2000.0 {
        penalty -= 20;
    }

    if f.low_peakiness < 1.5 {
        penalty -= 30;
    } else if f.low_peakiness < 2.0 {
        penalty -= 25;
    } else if f.low_peakiness < 2.5 {
        penalty -= 15;
    }

    if f.mid_ratio > 0.5 {
        penalty -= 30;
    } else if f.mid_ratio > 0.4 {
        penalty -= 20;
    }

    if f.high_ratio > 0.35 {
        penalty -= 25;
    }

    if f.rms > 0.15 {
        penalty -= 30;
    } else if f.rms > 0.1 {
        penalty -= 20;
    } else if f.rms > 0.08 {
        penalty -= 10;
    }

    penalty
}

/// Note text for a final (post-cap) score.
pub(crate) fn note_for_score(score: i32) -> &'static str {
    if score >= 80 {
        NOTE_HIGH
    } else if score >= 40 {
        NOTE_MEDIUM
    } else {
        NOTE_LOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Baseline on which no humpback rule fires; individual tests
    /// override the one feature they exercise.
    fn neutral_features() -> FeatureVector {
        FeatureVector {
            rms: 0.005,
            low_ratio: 0.1,
            mid_ratio: 0.85,
            high_ratio: 0.05,
            centroid: 1800.0,
            flatness: 0.95,
            low_peakiness: 1.2,
        }
    }

    #[test]
    fn test_low_ratio_thresholds_stack() {
        // both lowRatio checks fire above 0.6
        let mut f = neutral_features();
        f.mid_ratio = 0.9; // keep the midRatio bonus off

        f.low_ratio = 0.7;
        assert_eq!(humpback_score(&f), 16);

        f.low_ratio = 0.55;
        assert_eq!(humpback_score(&f), 6);

        f.low_ratio = 0.4;
        assert_eq!(humpback_score(&f), 0);
    }

    #[test]
    fn test_flatness_tiers_exclusive() {
        let mut f = neutral_features();
        f.flatness = 0.25;
        assert_eq!(humpback_score(&f), 8);

        f.flatness = 0.1;
        assert_eq!(humpback_score(&f), 12);
    }

    #[test]
    fn test_orca_rules_independent() {
        let f = FeatureVector {
            rms: 0.05,
            low_ratio: 0.35,
            mid_ratio: 0.4,
            high_ratio: 0.25,
            centroid: 1800.0,
            flatness: 0.4,
            low_peakiness: 2.5,
        };
        // all seven orca rules fire
        assert_eq!(orca_score(&f), 51);
    }

    #[test]
    fn test_boat_detection_clauses() {
        let mut f = neutral_features();
        f.flatness = 0.51;
        assert!(detect_boat(&f));

        let mut f = neutral_features();
        f.flatness = 0.3;
        f.centroid = 2100.0;
        f.low_peakiness = 2.0;
        assert!(detect_boat(&f));

        let mut f = neutral_features();
        f.flatness = 0.46;
        f.mid_ratio = 0.45;
        assert!(detect_boat(&f));

        let mut f = neutral_features();
        f.flatness = 0.3;
        f.rms = 0.09;
        assert!(detect_boat(&f));

        let mut f = neutral_features();
        f.flatness = 0.3;
        assert!(!detect_boat(&f));
    }

    #[test]
    fn test_boat_penalty_tiers() {
        let f = FeatureVector {
            rms: 0.2,
            low_ratio: 0.05,
            mid_ratio: 0.55,
            high_ratio: 0.4,
            centroid: 4500.0,
            flatness: 0.8,
            low_peakiness: 1.0,
        };
        // worst tier of every table: -60 -40 -30 -30 -25 -30
        assert_eq!(boat_penalty(&f), -215);
    }

    #[test]
    fn test_boat_ceiling_applies() {
        // strong humpback pattern but loud enough to trip the rms clause
        let f = FeatureVector {
            rms: 0.09,
            low_ratio: 0.7,
            mid_ratio: 0.2,
            high_ratio: 0.1,
            centroid: 800.0,
            flatness: 0.15,
            low_peakiness: 4.0,
        };
        let result = score_environment(&f);
        assert!(result.is_boat);
        assert_eq!(result.humpback_score, 51);
        assert_eq!(result.boat_penalty, -10);
        // 50 + 51 - 10 = 91, capped at the boat ceiling
        assert_eq!(result.score, BOAT_SCORE_CEILING);
    }

    #[test]
    fn test_animal_ceiling_applies() {
        let f = FeatureVector {
            rms: 0.05,
            low_ratio: 0.7,
            mid_ratio: 0.2,
            high_ratio: 0.1,
            centroid: 800.0,
            flatness: 0.15,
            low_peakiness: 4.0,
        };
        let result = score_environment(&f);
        assert!(!result.is_boat);
        // 50 + 51 = 101 pre-cap; never a perfect 100
        assert_eq!(result.score, ANIMAL_SCORE_CEILING);
        assert_eq!(result.note, NOTE_HIGH);
    }

    #[test]
    fn test_score_floor_clamped() {
        let f = FeatureVector {
            rms: 0.2,
            low_ratio: 0.05,
            mid_ratio: 0.55,
            high_ratio: 0.4,
            centroid: 4500.0,
            flatness: 0.8,
            low_peakiness: 1.0,
        };
        let result = score_environment(&f);
        assert!(result.is_boat);
        assert_eq!(result.score, 0);
        assert_eq!(result.note, NOTE_LOW);
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let f = neutral_features();
        let a = score_environment(&f);
        let b = score_environment(&f);
        assert_eq!(a, b);
    }

    #[test]
    fn test_note_bands() {
        assert_eq!(note_for_score(80), NOTE_HIGH);
        assert_eq!(note_for_score(79), NOTE_MEDIUM);
        assert_eq!(note_for_score(40), NOTE_MEDIUM);
        assert_eq!(note_for_score(39), NOTE_LOW);
        assert_eq!(note_for_score(0), NOTE_LOW);
    }

    #[test]
    fn test_all_zero_features_score_in_range() {
        let f = FeatureVector {
            rms: 0.0,
            low_ratio: 0.0,
            mid_ratio: 0.0,
            high_ratio: 0.0,
            centroid: 0.0,
            flatness: 0.5,
            low_peakiness: 0.0,
        };
        let result = score_environment(&f);
        assert!((0..=100).contains(&result.score));
        assert!(!result.is_boat);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = score_environment(&neutral_features());
        let json = serde_json::to_value(&result).unwrap();
        for key in [
            "score",
            "note",
            "humpbackScore",
            "orcaScore",
            "boatPenalty",
            "isBoat",
        ] {
            assert!(json.get(key).is_some(), "missing field {key}");
        }
    }
}
