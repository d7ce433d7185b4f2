use std::time::Instant;

use colored::Colorize;
use tracing::debug;

use logweave_sink::SinkWriter;
use logweave_stream::{JsonlReader, MergeStream, StreamError};

use crate::cli::Cli;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let started = Instant::now();

    // Both inputs are checked before the merge begins.
    for path in [&cli.log1, &cli.log2] {
        if !path.is_file() {
            return Err(StreamError::InputNotFound(path.clone()).into());
        }
    }

    let left = JsonlReader::open(&cli.log1)?;
    let right = JsonlReader::open(&cli.log2)?;
    let mut writer = SinkWriter::create(&cli.output)?;
    let mut merged = MergeStream::new(left, right)?;

    // Demand-driven: each append pulls exactly one record through the
    // merge, which pulls at most one record from one reader.
    while let Some(record) = merged.next_merged()? {
        writer.append(&record)?;
    }
    let log = writer.finish()?;

    let elapsed = started.elapsed();
    debug!(records = log.records, ?elapsed, "merge finished");
    println!(
        "{} Merged {} records into {}",
        "✓".green().bold(),
        log.records.to_string().bold(),
        log.path.display().to_string().cyan(),
    );
    println!("  Took {:.4} seconds", elapsed.as_secs_f64());
    Ok(())
}
