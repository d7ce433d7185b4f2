use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "logweave",
    about = "Merge two timestamp-ordered JSONL logs into one chronological stream",
    version,
)]
pub struct Cli {
    /// Path to the first input log file
    #[arg(value_name = "path/to/log1")]
    pub log1: PathBuf,

    /// Path to the second input log file
    #[arg(value_name = "path/to/log2")]
    pub log2: PathBuf,

    /// Path to the output directory (must not already exist)
    #[arg(short, value_name = "path/to/merged/log")]
    pub output: PathBuf,

    /// Enable debug-level diagnostics
    #[arg(short, long)]
    pub verbose: bool,
}
