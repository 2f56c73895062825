/*!
# [`SentenceSplitter`]
Greedy packing of whole sentences into chunks.
*/

use crate::{
    sentences::{sentence_indices, SentenceIndices},
    ChunkConfig, ChunkSizer,
};

/// Splits text into chunks made of whole sentences. Sentences are added to
/// the current chunk for as long as it stays within the limit, then the
/// chunk is closed and a new one is started.
#[derive(Debug)]
#[allow(clippy::module_name_repetitions)]
pub struct SentenceSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Method of determining chunk sizes.
    chunk_config: ChunkConfig<Sizer>,
}

impl<Sizer> SentenceSplitter<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Creates a new [`SentenceSplitter`].
    ///
    /// ```
    /// use script_splitter::{ChunkConfig, PartCount, SentenceSplitter, Unit};
    ///
    /// // By default, the chunk sizer is based on characters.
    /// let splitter = SentenceSplitter::new(ChunkConfig::new(512));
    /// // Or aim for four parts, measured in words
    /// let splitter = SentenceSplitter::new(
    ///     ChunkConfig::new(PartCount::new(4).unwrap()).with_sizer(Unit::Words),
    /// );
    /// ```
    #[must_use]
    pub fn new(chunk_config: impl Into<ChunkConfig<Sizer>>) -> Self {
        Self {
            chunk_config: chunk_config.into(),
        }
    }

    /// Retrieve the chunk configuration of this splitter.
    pub fn chunk_config(&self) -> &ChunkConfig<Sizer> {
        &self.chunk_config
    }

    /// Generate a list of chunks from a given text.
    ///
    /// ## Method
    ///
    /// 1. Split the text into sentences at every `.`, `!` or `?` followed by
    ///    whitespace.
    /// 2. Add the size of the next sentence to the size of the current chunk.
    ///    If the sum is within the limit, the sentence joins the chunk.
    /// 3. Otherwise the current chunk is finished and the sentence starts the
    ///    next one. A sentence that is larger than the limit on its own still
    ///    becomes a chunk; sentences are never broken up.
    ///
    /// Sentences within a chunk are joined by a single space, and chunks are
    /// trimmed. The size of the current chunk counts each of its sentences
    /// plus one separating space after each.
    ///
    /// ```
    /// use script_splitter::{ChunkConfig, SentenceSplitter, Unit};
    ///
    /// let splitter = SentenceSplitter::new(ChunkConfig::new(5).with_sizer(Unit::Words));
    /// let text = "Hello world. This is a test! Are we done?";
    /// let chunks = splitter.chunks(text).collect::<Vec<_>>();
    ///
    /// assert_eq!(vec!["Hello world.", "This is a test!", "Are we done?"], chunks);
    /// ```
    pub fn chunks<'splitter, 'text: 'splitter>(
        &'splitter self,
        text: &'text str,
    ) -> impl Iterator<Item = String> + 'splitter {
        self.chunk_indices(text).map(|(_, c)| c)
    }

    /// Returns an iterator over chunks of the text and the byte offset where
    /// each chunk starts in the text.
    ///
    /// See [`SentenceSplitter::chunks`] for more information.
    ///
    /// ```
    /// use script_splitter::{ChunkConfig, SentenceSplitter};
    ///
    /// let splitter = SentenceSplitter::new(ChunkConfig::new(10));
    /// let text = "  Some text.\n\nFrom a document.";
    /// let chunks = splitter.chunk_indices(text).collect::<Vec<_>>();
    ///
    /// assert_eq!(
    ///     vec![(2, "Some text.".to_string()), (14, "From a document.".to_string())],
    ///     chunks
    /// );
    /// ```
    pub fn chunk_indices<'splitter, 'text: 'splitter>(
        &'splitter self,
        text: &'text str,
    ) -> impl Iterator<Item = (usize, String)> + 'splitter {
        SentenceChunks::new(&self.chunk_config, text)
    }
}

/// Chunk that is still accepting sentences.
#[derive(Debug)]
struct PendingChunk {
    /// Byte offset of the first sentence in the text
    offset: usize,
    /// Sentences joined by single spaces
    text: String,
    /// Running size, including one separator after every sentence
    size: usize,
}

impl PendingChunk {
    fn new(offset: usize, sentence: &str, size: usize) -> Self {
        Self {
            offset,
            text: sentence.to_owned(),
            size,
        }
    }

    fn push(&mut self, sentence: &str, size: usize) {
        self.text.push(' ');
        self.text.push_str(sentence);
        self.size += size;
    }

    /// Trim the chunk and adjust the offset. Returns `None` if nothing but
    /// whitespace is left.
    fn finish(self) -> Option<(usize, String)> {
        let trimmed = self.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        // Figure out how many bytes we lose trimming the beginning
        let diff = self.text.len() - self.text.trim_start().len();
        tracing::trace!(offset = self.offset + diff, size = self.size, "closing chunk");
        Some((self.offset + diff, trimmed.to_owned()))
    }
}

/// Returns chunks of text with their byte offsets as an iterator.
#[derive(Debug)]
struct SentenceChunks<'sizer, 'text, Sizer>
where
    Sizer: ChunkSizer,
{
    /// How to measure sentences
    sizer: &'sizer Sizer,
    /// Largest size a chunk of several sentences may reach
    limit: usize,
    /// Size of the space that joins two sentences
    separator_size: usize,
    /// Remaining sentences of the text
    sentences: SentenceIndices<'text>,
    /// Chunk currently being filled
    pending: Option<PendingChunk>,
}

impl<'sizer, 'text, Sizer> SentenceChunks<'sizer, 'text, Sizer>
where
    Sizer: ChunkSizer,
{
    /// Generate new [`SentenceChunks`] iterator for a given text.
    /// Resolves the limit up front, so equal-split mode measures the text once.
    fn new(chunk_config: &'sizer ChunkConfig<Sizer>, text: &'text str) -> Self {
        let sizer = chunk_config.sizer();
        Self {
            sizer,
            limit: chunk_config.limit_for(text),
            separator_size: sizer.size(" "),
            sentences: sentence_indices(text),
            pending: None,
        }
    }
}

impl<'sizer, 'text, Sizer> Iterator for SentenceChunks<'sizer, 'text, Sizer>
where
    Sizer: ChunkSizer,
{
    type Item = (usize, String);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some((offset, sentence)) = self.sentences.next() else {
                return self.pending.take().and_then(PendingChunk::finish);
            };
            let size = self.sizer.size(sentence);

            match self.pending.as_mut() {
                Some(pending) if pending.size + size <= self.limit => {
                    pending.push(sentence, size + self.separator_size);
                }
                _ => {
                    if size > self.limit {
                        tracing::debug!(
                            offset,
                            size,
                            limit = self.limit,
                            "sentence exceeds the chunk limit on its own"
                        );
                    }
                    let next = PendingChunk::new(offset, sentence, size + self.separator_size);
                    // Make sure we don't return an empty chunk. Only happens
                    // for whitespace-only text.
                    if let Some(chunk) = self.pending.replace(next).and_then(PendingChunk::finish)
                    {
                        return Some(chunk);
                    }
                }
            }
        }
    }
}
