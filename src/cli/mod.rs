//! Command-line interface

pub mod args;
pub mod output;

pub use args::Args;
pub use output::{format_json, format_report, format_summary};
