use crate::{Characters, ChunkSizer, Words};

/// Character and word counts of a piece of text, measured the same way the
/// splitter measures chunks.
///
/// ```
/// use script_splitter::TextStats;
///
/// let stats = TextStats::new("Hello world. This is a test!");
/// assert_eq!(stats.characters, 28);
/// assert_eq!(stats.words, 6);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct TextStats {
    /// Number of characters, whitespace included.
    pub characters: usize,
    /// Number of whitespace-delimited words.
    pub words: usize,
}

impl TextStats {
    /// Measure the given text.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            characters: Characters.size(text),
            words: Words.size(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text() {
        assert_eq!(TextStats::new(""), TextStats::default());
    }

    #[test]
    fn multibyte_text() {
        let stats = TextStats::new("Ça va?  Très bien.");
        assert_eq!(stats.characters, 18);
        assert_eq!(stats.words, 4);
    }
}
