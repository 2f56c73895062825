/*!
# script-splitter

Long scripts, transcripts and articles often have to be cut into parts of a
bounded size before they can be read aloud, pasted into a form, or fed to a
tool with an input limit. Cutting at a fixed offset breaks sentences in
half. This crate splits text into parts that stay within a size measured in
characters or words, and only ever cuts between sentences.

## Get Started

### By Number of Characters

```rust
use script_splitter::{split, Unit};

// Maximum number of characters in a part
let max_characters = 2000;
let parts = split("your document text", max_characters, Unit::Characters);
```

### By Number of Words

```rust
use script_splitter::{ChunkConfig, SentenceSplitter, Unit};

let splitter = SentenceSplitter::new(ChunkConfig::new(300).with_sizer(Unit::Words));
let parts = splitter.chunks("your document text").collect::<Vec<_>>();
```

### Into a Number of Parts

The limit can also be derived from the size of the whole document: with
`PartCount::new(4)` every part may hold about a quarter of the text. The
result is approximate, since parts can only end between sentences.

```rust
use script_splitter::{ChunkConfig, PartCount, SentenceSplitter, Unit};

let parts = PartCount::new(4).unwrap();
let splitter = SentenceSplitter::new(ChunkConfig::new(parts).with_sizer(Unit::Words));
let chunks = splitter.chunks("your document text").collect::<Vec<_>>();
```

## Method

1. The text is cut into sentences after every `.`, `!` or `?` that is
   followed by whitespace. The whitespace itself is dropped.
2. Sentences are added to the current part while the size of the part plus
   the size of the next sentence stays within the limit.
3. When the next sentence doesn't fit, the part is closed and the sentence
   starts a new one. A sentence that is larger than the limit by itself
   becomes its own part.

Sentences in a part are joined by a single space and every part is
trimmed, so the whitespace of the original text is not preserved.

_Note on sentences:_ there is no handling of abbreviations, decimal numbers
or quotations. `"Mr. Smith"` ends a sentence after `Mr.`, while `3.14` does
not, because no whitespace follows the mark.
*/

mod chunk_size;
mod sentences;
mod splitter;
mod stats;

pub use chunk_size::{
    Characters, ChunkCapacity, ChunkCapacityError, ChunkConfig, ChunkSizer, PartCount, Unit, Words,
};
pub use sentences::{sentence_indices, sentences, SentenceIndices};
pub use splitter::SentenceSplitter;
pub use stats::TextStats;

/// Split text into chunks of whole sentences, each up to `limit` in the
/// given unit. Only a sentence that is larger than `limit` on its own
/// produces a larger chunk.
///
/// ```
/// use script_splitter::{split, Unit};
///
/// let chunks = split("A. B. C.", 10, Unit::Characters);
/// assert_eq!(vec!["A. B. C."], chunks);
/// ```
#[must_use]
pub fn split(text: &str, limit: usize, unit: Unit) -> Vec<String> {
    SentenceSplitter::new(ChunkConfig::new(limit).with_sizer(unit))
        .chunks(text)
        .collect()
}

/// Size of the text in the given unit.
///
/// ```
/// use script_splitter::{measure, Unit};
///
/// assert_eq!(measure("This is a test!", Unit::Words), 4);
/// assert_eq!(measure("This is a test!", Unit::Characters), 15);
/// ```
#[must_use]
pub fn measure(text: &str, unit: Unit) -> usize {
    unit.size(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_by_words() {
        let chunks = split("Hello world. This is a test! Are we done?", 5, Unit::Words);
        assert_eq!(vec!["Hello world.", "This is a test!", "Are we done?"], chunks);
    }

    #[test]
    fn split_by_characters() {
        assert_eq!(vec!["A. B. C."], split("A. B. C.", 10, Unit::Characters));
    }

    #[test]
    fn split_empty_text() {
        assert!(split("", 10, Unit::Words).is_empty());
    }

    #[test]
    fn measure_matches_stats() {
        let text = "Hello world.\nThis is a test!";
        let stats = TextStats::new(text);
        assert_eq!(measure(text, Unit::Characters), stats.characters);
        assert_eq!(measure(text, Unit::Words), stats.words);
    }
}
