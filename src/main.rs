// src/main.rs
use anyhow::Result;
use clap::Parser;
use colorful::Colorful;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use oceanscore::cli::{format_json, format_report, format_summary, Args};
use oceanscore::core::{AnalysisReport, ClipAnalyzer};

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let audio_files = collect_audio_files(&args.input)?;

    if audio_files.is_empty() {
        println!("{}", "No audio files found!".red());
        return Ok(());
    }

    // Every analysis is an independent pure call; clips score in parallel
    let outcomes: Vec<(PathBuf, Result<AnalysisReport>)> = audio_files
        .par_iter()
        .map(|path| {
            let report = ClipAnalyzer::new(path).and_then(|a| a.analyze());
            (path.clone(), report)
        })
        .collect();

    let mut reports: Vec<(&Path, AnalysisReport)> = Vec::new();
    let mut failures = 0;

    for (path, outcome) in &outcomes {
        match outcome {
            Ok(report) => {
                if args.json {
                    println!("{}", format_json(report)?);
                } else {
                    println!("{}", format_report(path, report, args.verbose));
                }
                reports.push((path.as_path(), report.clone()));
            }
            Err(e) => {
                failures += 1;
                eprintln!("{} {:#}", format!("✗ {}:", path.display()).red(), e);
            }
        }
    }

    if !args.json && reports.len() > 1 {
        println!("{}", format_summary(&reports));
    }

    if failures > 0 {
        anyhow::bail!("{} clip(s) could not be analyzed", failures);
    }

    Ok(())
}

fn collect_audio_files(path: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let audio_extensions = ["flac", "wav", "mp3", "ogg", "m4a", "aac"];

    if path.is_file() {
        files.push(path.to_path_buf());
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if let Some(ext) = path.extension() {
                if audio_extensions.contains(&ext.to_str().unwrap_or("").to_lowercase().as_str()) {
                    files.push(path.to_path_buf());
                }
            }
        }
        files.sort();
    }

    Ok(files)
}
