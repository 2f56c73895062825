use strum::{AsRefStr, Display, EnumIter, EnumString};
use thiserror::Error;

mod characters;
mod words;

pub use characters::Characters;
pub use words::Words;

/// Indicates there was an error with the chunk capacity configuration.
/// The `Display` implementation will provide a human-readable error message to
/// help debug the issue that caused the error.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct ChunkCapacityError(#[from] ChunkCapacityErrorRepr);

/// Private error and free to change across minor version of the crate.
#[derive(Error, Debug)]
enum ChunkCapacityErrorRepr {
    #[error("Part count must be at least 2, got {0}")]
    TooFewParts(usize),
    #[error("Limit buffer must be a finite, non-negative fraction, got {0}")]
    InvalidLimitBuffer(f64),
}

/// Determines the size of a given chunk.
///
/// Sizes must be additive: the size of two pieces of text joined by a space
/// is the size of each piece plus the size of the space. The splitter relies
/// on this to keep a running size instead of re-measuring a growing chunk.
pub trait ChunkSizer {
    /// Determine the size of a given chunk to use for validation
    fn size(&self, chunk: &str) -> usize;
}

/// Unit of measurement for text.
///
/// ```
/// use script_splitter::{ChunkSizer, Unit};
///
/// assert_eq!(Unit::Characters.size("Hello world."), 12);
/// assert_eq!(Unit::Words.size("Hello world."), 2);
/// assert_eq!("words".parse::<Unit>().unwrap(), Unit::Words);
/// ```
#[derive(
    AsRefStr, Clone, Copy, Debug, Default, Display, EnumIter, EnumString, Eq, Hash, PartialEq,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Unit {
    /// Count characters (Unicode scalar values), see [`Characters`].
    #[default]
    Characters,
    /// Count whitespace-delimited words, see [`Words`].
    Words,
}

impl ChunkSizer for Unit {
    fn size(&self, chunk: &str) -> usize {
        match self {
            Self::Characters => Characters.size(chunk),
            Self::Words => Words.size(chunk),
        }
    }
}

/// Equal-split target: the document should end up in roughly `parts` chunks.
///
/// The limit handed to the splitter is the average size per part, optionally
/// widened by a buffer expressed as a fraction of the whole document. Since
/// chunks can only end on sentence boundaries, the actual number of chunks
/// is approximate and is usually at least `parts`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PartCount {
    parts: usize,
    limit_buffer: f64,
}

impl PartCount {
    /// Target the given number of parts, with no limit buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if `parts` is less than 2.
    pub fn new(parts: usize) -> Result<Self, ChunkCapacityError> {
        if parts < 2 {
            Err(ChunkCapacityError(ChunkCapacityErrorRepr::TooFewParts(
                parts,
            )))
        } else {
            Ok(Self {
                parts,
                limit_buffer: 0.0,
            })
        }
    }

    /// Number of parts requested.
    #[must_use]
    pub fn parts(&self) -> usize {
        self.parts
    }

    /// Fraction of the total document size added on top of the average part
    /// size.
    #[must_use]
    pub fn limit_buffer(&self) -> f64 {
        self.limit_buffer
    }

    /// Add a fraction of the total document size to the derived limit. This
    /// reduces the tendency of the splitter to produce more parts than were
    /// asked for.
    ///
    /// ```
    /// use script_splitter::PartCount;
    ///
    /// let parts = PartCount::new(4).unwrap().with_limit_buffer(0.05).unwrap();
    /// assert_eq!(parts.limit(100), 30);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the fraction is negative, infinite, or NaN.
    pub fn with_limit_buffer(mut self, fraction: f64) -> Result<Self, ChunkCapacityError> {
        if fraction.is_finite() && fraction >= 0.0 {
            self.limit_buffer = fraction;
            Ok(self)
        } else {
            Err(ChunkCapacityError(
                ChunkCapacityErrorRepr::InvalidLimitBuffer(fraction),
            ))
        }
    }

    /// Derive the per-chunk limit for a document of the given total size.
    ///
    /// ```
    /// use script_splitter::PartCount;
    ///
    /// assert_eq!(PartCount::new(4).unwrap().limit(100), 25);
    /// assert_eq!(PartCount::new(3).unwrap().limit(100), 33);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn limit(&self, total_size: usize) -> usize {
        let buffer = (total_size as f64 * self.limit_buffer).floor() as usize;
        (total_size / self.parts).saturating_add(buffer)
    }
}

/// Describes how large chunks are allowed to grow.
///
/// A chunk accepts another sentence as long as its size stays within the
/// limit. A single sentence larger than the limit still becomes its own
/// chunk, since sentences are never broken up.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ChunkCapacity {
    /// Fixed maximum size per chunk.
    Limit(usize),
    /// Limit derived from the size of the whole document and a part count.
    Parts(PartCount),
}

impl ChunkCapacity {
    /// Resolve the limit for a document of the given size. The total is only
    /// computed when needed.
    #[must_use]
    pub fn limit(&self, total_size: impl FnOnce() -> usize) -> usize {
        match self {
            Self::Limit(limit) => *limit,
            Self::Parts(parts) => {
                let total_size = total_size();
                let limit = parts.limit(total_size);
                tracing::debug!(
                    total_size,
                    parts = parts.parts(),
                    limit_buffer = parts.limit_buffer(),
                    limit,
                    "derived chunk limit from part count"
                );
                limit
            }
        }
    }
}

impl From<usize> for ChunkCapacity {
    fn from(limit: usize) -> Self {
        Self::Limit(limit)
    }
}

impl From<PartCount> for ChunkCapacity {
    fn from(parts: PartCount) -> Self {
        Self::Parts(parts)
    }
}

/// Configuration for how chunks should be created
#[derive(Debug)]
pub struct ChunkConfig<Sizer>
where
    Sizer: ChunkSizer,
{
    /// The chunk capacity to use for filling chunks
    capacity: ChunkCapacity,
    /// The chunk sizer to use for determining the size of each chunk
    sizer: Sizer,
}

impl ChunkConfig<Characters> {
    /// Create a basic configuration for chunking with only the required value, a chunk capacity.
    ///
    /// By default, chunk sizes will be calculated based on the number of characters in each chunk.
    /// You can set a custom chunk sizer by calling [`Self::with_sizer`].
    #[must_use]
    pub fn new(capacity: impl Into<ChunkCapacity>) -> Self {
        Self {
            capacity: capacity.into(),
            sizer: Characters,
        }
    }
}

impl<Sizer> ChunkConfig<Sizer>
where
    Sizer: ChunkSizer,
{
    /// Retrieve a reference to the chunk capacity for this configuration.
    pub fn capacity(&self) -> &ChunkCapacity {
        &self.capacity
    }

    /// Retrieve a reference to the chunk sizer for this configuration.
    pub fn sizer(&self) -> &Sizer {
        &self.sizer
    }

    /// Set a custom chunk sizer to use for determining the size of each chunk
    ///
    /// ```
    /// use script_splitter::{ChunkConfig, Unit};
    ///
    /// let config = ChunkConfig::new(512).with_sizer(Unit::Words);
    /// ```
    #[must_use]
    pub fn with_sizer<S: ChunkSizer>(self, sizer: S) -> ChunkConfig<S> {
        ChunkConfig {
            capacity: self.capacity,
            sizer,
        }
    }

    /// The limit to use when splitting the given text. In equal-split mode
    /// this measures the whole text with the configured sizer.
    ///
    /// ```
    /// use script_splitter::{ChunkConfig, PartCount, Unit};
    ///
    /// let config = ChunkConfig::new(PartCount::new(2).unwrap()).with_sizer(Unit::Words);
    /// assert_eq!(config.limit_for("one two three four five"), 2);
    /// ```
    pub fn limit_for(&self, text: &str) -> usize {
        self.capacity.limit(|| self.sizer.size(text))
    }
}

impl<T> From<T> for ChunkConfig<Characters>
where
    T: Into<ChunkCapacity>,
{
    fn from(capacity: T) -> Self {
        Self::new(capacity)
    }
}
