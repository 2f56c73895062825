use crate::ChunkSizer;

/// Used for splitting a piece of text into chunks based on the number of
/// characters in each chunk.
///
/// Counts Unicode scalar values, so a multi-byte character counts once and
/// whitespace counts like any other character.
///
/// ```
/// use script_splitter::{Characters, ChunkConfig, SentenceSplitter};
///
/// let splitter = SentenceSplitter::new(ChunkConfig::new(100).with_sizer(Characters));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Characters;

impl ChunkSizer for Characters {
    /// Determine the size of a given chunk to use for validation.
    fn size(&self, chunk: &str) -> usize {
        chunk.chars().count()
    }
}
