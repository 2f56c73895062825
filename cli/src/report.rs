use std::io::{self, Write};

use script_splitter::{ChunkCapacity, ChunkConfig, SentenceSplitter, TextStats, Unit};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Counts {
    pub characters: usize,
    pub words: usize,
}

impl From<TextStats> for Counts {
    fn from(stats: TextStats) -> Self {
        Self {
            characters: stats.characters,
            words: stats.words,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Part {
    pub number: usize,
    /// Byte offset of the part in the input
    pub offset: usize,
    #[serde(flatten)]
    pub counts: Counts,
    pub text: String,
}

/// Everything shown to the user after a split.
#[derive(Debug, Serialize)]
pub struct Report {
    pub unit: String,
    pub limit: usize,
    pub totals: Counts,
    pub parts: Vec<Part>,
}

impl Report {
    pub fn new(text: &str, unit: Unit, capacity: ChunkCapacity) -> Self {
        let totals = TextStats::new(text);
        let limit = capacity.limit(|| match unit {
            Unit::Characters => totals.characters,
            Unit::Words => totals.words,
        });

        let splitter = SentenceSplitter::new(ChunkConfig::new(limit).with_sizer(unit));
        let parts = splitter
            .chunk_indices(text)
            .enumerate()
            .map(|(i, (offset, text))| Part {
                number: i + 1,
                offset,
                counts: TextStats::new(&text).into(),
                text,
            })
            .collect();

        Self {
            unit: unit.to_string(),
            limit,
            totals: totals.into(),
            parts,
        }
    }

    pub fn render_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "Total characters: {}", self.totals.characters)?;
        writeln!(out, "Total words: {}", self.totals.words)?;
        writeln!(out, "Limit: {} {} per part", self.limit, self.unit)?;
        writeln!(out, "Result: {} parts", self.parts.len())?;

        for part in &self.parts {
            writeln!(out)?;
            writeln!(
                out,
                "--- Part {} ({} Words / {} Chars) ---",
                part.number, part.counts.words, part.counts.characters
            )?;
            writeln!(out, "{}", part.text)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use script_splitter::PartCount;

    use super::*;

    const SCRIPT: &str = "Hello world. This is a test! Are we done?";

    #[test]
    fn fixed_limit_report() {
        let report = Report::new(SCRIPT, Unit::Words, ChunkCapacity::Limit(5));
        assert_eq!(report.limit, 5);
        assert_eq!(report.totals, Counts { characters: 41, words: 9 });
        assert_eq!(report.parts.len(), 3);
        assert_eq!(report.parts[1].text, "This is a test!");
        assert_eq!(report.parts[1].offset, 13);
        assert_eq!(report.parts[1].counts, Counts { characters: 15, words: 4 });
    }

    #[test]
    fn equal_split_report() {
        let parts = PartCount::new(3).unwrap();
        let report = Report::new(SCRIPT, Unit::Words, ChunkCapacity::Parts(parts));
        assert_eq!(report.limit, 3);
        assert_eq!(
            report.parts.iter().map(|p| p.text.as_str()).collect::<Vec<_>>(),
            vec!["Hello world.", "This is a test!", "Are we done?"]
        );
    }

    #[test]
    fn renders_text() {
        let report = Report::new("A. B. C.", Unit::Characters, ChunkCapacity::Limit(10));
        let mut out = Vec::new();
        report.render_text(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Total characters: 8\n\
             Total words: 3\n\
             Limit: 10 characters per part\n\
             Result: 1 parts\n\
             \n\
             --- Part 1 (3 Words / 8 Chars) ---\n\
             A. B. C.\n"
        );
    }

    #[test]
    fn serializes_json() {
        let report = Report::new("A. B.", Unit::Characters, ChunkCapacity::Limit(2));
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["unit"], "characters");
        assert_eq!(json["parts"][1]["text"], "B.");
        assert_eq!(json["parts"][1]["offset"], 3);
        assert_eq!(json["parts"][1]["characters"], 2);
        assert_eq!(json["parts"][1]["words"], 1);
    }
}
