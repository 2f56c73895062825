/*!
Sentence segmentation based on terminal punctuation.

A sentence ends at a `.`, `!` or `?` that is followed by whitespace, or at
the end of the text. There is no handling of abbreviations, decimal numbers
or quotes: `"Mr. Fox"` is two sentences.
*/

use once_cell::sync::Lazy;
use regex::{Matches, Regex};

// Lazy so that we don't have to compile it more than once
static SENTENCE_BREAKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

/// Splits text into sentences. Whitespace between sentences is dropped, the
/// punctuation stays with the sentence it ends.
///
/// ```
/// use script_splitter::sentences;
///
/// let text = "Hello world. This is a test! Are we done?";
/// assert_eq!(
///     vec!["Hello world.", "This is a test!", "Are we done?"],
///     sentences(text).collect::<Vec<_>>()
/// );
/// ```
pub fn sentences(text: &str) -> impl Iterator<Item = &str> + '_ {
    sentence_indices(text).map(|(_, s)| s)
}

/// Returns an iterator over the sentences of the text and their byte offsets.
///
/// See [`sentences`] for more information.
///
/// ```
/// use script_splitter::sentence_indices;
///
/// let text = "Stop!  Go?";
/// assert_eq!(
///     vec![(0, "Stop!"), (7, "Go?")],
///     sentence_indices(text).collect::<Vec<_>>()
/// );
/// ```
#[must_use]
pub fn sentence_indices(text: &str) -> SentenceIndices<'_> {
    SentenceIndices {
        breaks: SENTENCE_BREAKS.find_iter(text),
        cursor: 0,
        finished: false,
        text,
    }
}

/// Iterator over the sentences of a text and their byte offsets.
/// Created by [`sentence_indices`].
#[derive(Debug)]
pub struct SentenceIndices<'text> {
    /// Matches of a terminal mark plus the whitespace after it
    breaks: Matches<'static, 'text>,
    /// Byte offset where the next sentence starts
    cursor: usize,
    /// Whether the tail of the text after the last break was returned
    finished: bool,
    /// Original text to iterate over
    text: &'text str,
}

impl<'text> Iterator for SentenceIndices<'text> {
    type Item = (usize, &'text str);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            let start = self.cursor;
            let end = match self.breaks.next() {
                Some(m) => {
                    self.cursor = m.end();
                    // Terminal marks are single bytes and stay with the sentence
                    m.start() + 1
                }
                None => {
                    self.finished = true;
                    self.text.len()
                }
            };

            let sentence = self
                .text
                .get(start..end)
                .expect("invalid character sequence");

            // Only possible when the text ends right after a break
            if !sentence.is_empty() {
                return Some((start, sentence));
            }
        }
    }
}
