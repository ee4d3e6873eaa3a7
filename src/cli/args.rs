//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "oceanscore")]
#[command(about = "Score hydrophone clips: marine mammal calls vs. boat/engine noise")]
pub struct Args {
    /// Input audio file or directory of clips
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output results as JSON (one object per clip)
    #[arg(short, long)]
    pub json: bool,

    /// Show the underlying spectral measurements per clip
    #[arg(short, long)]
    pub verbose: bool,
}
