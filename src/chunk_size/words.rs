use crate::ChunkSizer;

/// Used for splitting a piece of text into chunks based on the number of
/// whitespace-delimited words in each chunk.
///
/// Punctuation is part of whichever word it touches, so `"test!"` is one
/// word and a lone `"-"` is another.
#[derive(Clone, Copy, Debug, Default)]
pub struct Words;

impl ChunkSizer for Words {
    fn size(&self, chunk: &str) -> usize {
        chunk.split_whitespace().count()
    }
}
