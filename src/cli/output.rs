//! Output formatting for CLI results

use anyhow::Result;
use colorful::Colorful;
use std::path::Path;

use crate::core::AnalysisReport;

/// Format one clip's report for terminal output.
pub fn format_report(path: &Path, report: &AnalysisReport, verbose: bool) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        path.display().to_string().cyan()
    ));

    let score_line = format!("  Score: {}/100", report.result.score);
    let colored = if report.result.score >= 80 {
        score_line.green()
    } else if report.result.score >= 40 {
        score_line.yellow()
    } else {
        score_line.red()
    };
    output.push_str(&format!("{}\n", colored));
    output.push_str(&format!("  {}\n", report.result.note));

    output.push_str(&format!(
        "  Humpback: {}  Orca: {}  Boat penalty: {}  Boat detected: {}\n",
        report.result.humpback_score,
        report.result.orca_score,
        report.result.boat_penalty,
        if report.result.is_boat { "yes" } else { "no" },
    ));

    if verbose {
        let f = &report.features;
        output.push_str("  Measurements:\n");
        output.push_str(&format!("    RMS: {:.4}\n", f.rms));
        output.push_str(&format!(
            "    Band energy: low {:.3} / mid {:.3} / high {:.3}\n",
            f.low_ratio, f.mid_ratio, f.high_ratio
        ));
        output.push_str(&format!("    Centroid: {:.0} Hz\n", f.centroid));
        output.push_str(&format!("    Flatness: {:.3}\n", f.flatness));
        output.push_str(&format!("    Low-band peakiness: {:.2}\n", f.low_peakiness));
    }

    output
}

/// Format one clip's report as JSON.
pub fn format_json(report: &AnalysisReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Format a summary for multiple clips.
pub fn format_summary(reports: &[(&Path, AnalysisReport)]) -> String {
    let high = reports.iter().filter(|(_, r)| r.result.score >= 80).count();
    let medium = reports
        .iter()
        .filter(|(_, r)| (40..80).contains(&r.result.score))
        .count();
    let low = reports.iter().filter(|(_, r)| r.result.score < 40).count();

    let mut output = String::new();
    output.push_str(&format!("\nSummary: {} clip(s) analyzed\n", reports.len()));
    if high > 0 {
        output.push_str(&format!("{}\n", format!("  {} healthy (high)", high).green()));
    }
    if medium > 0 {
        output.push_str(&format!("{}\n", format!("  {} mixed (medium)", medium).yellow()));
    }
    if low > 0 {
        output.push_str(&format!("{}\n", format!("  {} noisy (low)", low).red()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analyze_clip;
    use std::f64::consts::PI;
    use std::path::PathBuf;

    fn sample_report() -> AnalysisReport {
        let samples: Vec<f32> = (0..16384)
            .map(|i| (0.05 * (2.0 * PI * 200.0 * i as f64 / 16000.0).sin()) as f32)
            .collect();
        analyze_clip(&samples, 1, 16000).unwrap()
    }

    #[test]
    fn test_format_report_contains_score() {
        let report = sample_report();
        let text = format_report(&PathBuf::from("clip.wav"), &report, false);
        assert!(text.contains("clip.wav"));
        assert!(text.contains("Score: 95/100"));
    }

    #[test]
    fn test_verbose_includes_measurements() {
        let report = sample_report();
        let text = format_report(&PathBuf::from("clip.wav"), &report, true);
        assert!(text.contains("Centroid"));
        assert!(text.contains("Flatness"));
    }

    #[test]
    fn test_json_has_merged_fields() {
        let report = sample_report();
        let json = format_json(&report).unwrap();
        assert!(json.contains("\"score\""));
        assert!(json.contains("\"lowRatio\""));
        assert!(json.contains("\"isBoat\""));
    }
}
