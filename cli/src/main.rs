//! `script-split`: split a long text into parts of a bounded size, measured
//! in characters or words, without breaking any sentence.

mod cli;
mod input;
mod report;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::{
    cli::{Cli, OutputFormat},
    report::Report,
};

fn main() -> Result<()> {
    // stdout carries the report, so logs go to stderr
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "script_splitter=warn,script_split=info".into()),
        )
        .init();

    let cli = Cli::parse();
    let capacity = cli.chunk_capacity()?;
    let text = input::read_input(cli.input.as_deref(), cli.max_input_bytes)?;

    let report = Report::new(&text, cli.unit, capacity);
    tracing::info!(
        bytes = text.len(),
        unit = %cli.unit,
        limit = report.limit,
        parts = report.parts.len(),
        "split input"
    );

    let mut out = io::stdout().lock();
    match cli.format {
        OutputFormat::Text => report.render_text(&mut out)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}
