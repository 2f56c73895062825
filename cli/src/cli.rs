use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use script_splitter::{ChunkCapacity, PartCount, Unit};

/// Limit used when neither `--limit` nor `--parts` is given.
pub const DEFAULT_LIMIT: usize = 2000;
/// 10 MiB
pub const DEFAULT_MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Parser)]
#[command(name = "script-split", version)]
#[command(about = "Split long scripts into parts without breaking sentences")]
pub struct Cli {
    /// Text file to split. Reads standard input when omitted or `-`.
    pub input: Option<PathBuf>,

    /// How to measure the size of each part: characters or words.
    #[arg(short, long, env = "SCRIPT_SPLIT_UNIT", default_value_t = Unit::Characters)]
    pub unit: Unit,

    /// Maximum size of each part. Defaults to 2000.
    #[arg(short, long, env = "SCRIPT_SPLIT_LIMIT", conflicts_with = "parts")]
    pub limit: Option<usize>,

    /// Number of parts to aim for. The limit becomes the size of the whole
    /// text divided by this number, so the actual count is approximate.
    #[arg(short, long, env = "SCRIPT_SPLIT_PARTS")]
    pub parts: Option<usize>,

    /// Fraction of the whole text added to the limit derived from `--parts`.
    #[arg(long, env = "SCRIPT_SPLIT_LIMIT_BUFFER", requires = "parts")]
    pub limit_buffer: Option<f64>,

    /// Output format.
    #[arg(short, long, env = "SCRIPT_SPLIT_FORMAT", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Refuse input larger than this many bytes.
    #[arg(long, env = "SCRIPT_SPLIT_MAX_INPUT_BYTES", default_value_t = DEFAULT_MAX_INPUT_BYTES)]
    pub max_input_bytes: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Totals followed by every part with its counts
    Text,
    /// The same report as pretty-printed JSON
    Json,
}

impl Cli {
    /// Capacity to split with, from `--parts` or `--limit`.
    pub fn chunk_capacity(&self) -> Result<ChunkCapacity> {
        match self.parts {
            Some(parts) => {
                let parts = PartCount::new(parts)
                    .and_then(|p| p.with_limit_buffer(self.limit_buffer.unwrap_or_default()))
                    .context("invalid equal-split settings")?;
                Ok(parts.into())
            }
            None => Ok(self.limit.unwrap_or(DEFAULT_LIMIT).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_fixed_limit_in_characters() {
        let cli = Cli::try_parse_from(["script-split"]).unwrap();
        assert_eq!(cli.unit, Unit::Characters);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.chunk_capacity().unwrap(), ChunkCapacity::Limit(DEFAULT_LIMIT));
    }

    #[test]
    fn parses_unit_and_limit() {
        let cli =
            Cli::try_parse_from(["script-split", "script.txt", "--unit", "Words", "-l", "300"])
                .unwrap();
        assert_eq!(cli.input, Some(PathBuf::from("script.txt")));
        assert_eq!(cli.unit, Unit::Words);
        assert_eq!(cli.chunk_capacity().unwrap(), ChunkCapacity::Limit(300));
    }

    #[test]
    fn parts_with_buffer() {
        let cli = Cli::try_parse_from(["script-split", "--parts", "4", "--limit-buffer", "0.05"])
            .unwrap();
        let expected = PartCount::new(4).unwrap().with_limit_buffer(0.05).unwrap();
        assert_eq!(cli.chunk_capacity().unwrap(), ChunkCapacity::Parts(expected));
    }

    #[test]
    fn limit_conflicts_with_parts() {
        assert!(Cli::try_parse_from(["script-split", "--limit", "10", "--parts", "3"]).is_err());
    }

    #[test]
    fn buffer_requires_parts() {
        assert!(Cli::try_parse_from(["script-split", "--limit-buffer", "0.05"]).is_err());
    }

    #[test]
    fn rejects_single_part() {
        let cli = Cli::try_parse_from(["script-split", "--parts", "1"]).unwrap();
        assert!(cli.chunk_capacity().is_err());
    }

    #[test]
    fn rejects_unknown_unit() {
        assert!(Cli::try_parse_from(["script-split", "--unit", "tokens"]).is_err());
    }
}
