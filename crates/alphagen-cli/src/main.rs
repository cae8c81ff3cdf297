//! `alphagen` command-line tool.
//!
//! Reads text from files or standard input and prints the distinct
//! characters it uses, sorted by code value.
//!
//! # Usage
//!
//! ```bash
//! echo "Zz Aa" | alphagen            # " AZaz"
//! alphagen chapter1.txt chapter2.txt  # alphabet of both files together
//! alphagen --format json notes.txt
//! ```

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = cli
        .runtime_builder()
        .build()
        .context("failed to load configuration")?;

    let mut sources = cli.sources();
    let mut sink = cli.sink();

    let report = runtime
        .run(&mut sources, &mut sink)
        .context("failed to extract alphabet")?;

    debug!(
        sources = report.sources,
        alphabet_len = report.alphabet_len(),
        "Done"
    );

    Ok(())
}
