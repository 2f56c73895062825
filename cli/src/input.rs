use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use anyhow::{bail, Context, Result};

/// Read the text to split from a file, or from standard input when no path
/// (or `-`) is given.
pub fn read_input(path: Option<&Path>, max_bytes: u64) -> Result<String> {
    let bytes = match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            read_capped(file, max_bytes)
                .with_context(|| format!("failed to read {}", path.display()))?
        }
        _ => read_capped(io::stdin().lock(), max_bytes).context("failed to read standard input")?,
    };
    decode(bytes)
}

/// Read at most `max_bytes`, failing if there is more.
fn read_capped(reader: impl Read, max_bytes: u64) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    if bytes.len() as u64 > max_bytes {
        bail!("input is larger than {max_bytes} bytes");
    }
    Ok(bytes)
}

/// Input must be UTF-8 and contain more than whitespace.
fn decode(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).context("input is not valid UTF-8")?;
    if text.trim().is_empty() {
        bail!("no input text: pass a file or pipe text on standard input");
    }
    Ok(text)
}
