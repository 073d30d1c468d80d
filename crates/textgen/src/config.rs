use crate::{CharacterClass, Error, LineSeparator, Result, WORD_LEN_MAX};

/// Smallest usable buffer: the longest word plus the widest separator.
pub const MIN_BUFFER_SIZE: usize = WORD_LEN_MAX + 2;

/// Buffer size used when none is configured (8 MiB).
pub const DEFAULT_BUFFER_SIZE: usize = 8 * 1024 * 1024;

/// Whether output is structured text or unstructured bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Layout {
    /// Words separated by spaces and line breaks.
    #[default]
    Words,
    /// Uniformly distributed bytes over `0..=255`.
    Raw,
}

/// How every buffer of a run is filled. Fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Line terminator. Ignored by [`Layout::Raw`].
    pub separator: LineSeparator,
    /// Alphabet of word bytes. Ignored by [`Layout::Raw`].
    pub class: CharacterClass,
    /// Words or raw bytes.
    pub layout: Layout,
}

/// Everything the pipeline needs to know about a run.
///
/// Parsing and validating user input into these values is the caller's job;
/// [`Config::validate`] only rejects values the pipeline cannot execute.
#[derive(Debug, Clone)]
pub struct Config {
    /// Exact number of bytes to produce.
    pub total_size: u64,
    /// Per-worker buffer capacity. Raised to [`MIN_BUFFER_SIZE`] if smaller.
    pub buffer_size: usize,
    /// Maximum number of generators alive at once. Must be at least 1.
    pub threads: usize,
    /// Layout, alphabet and line terminator shared by every buffer.
    pub style: Style,
    /// Base seed for the per-generator random sources. When unset, the run
    /// start time in nanoseconds is used.
    pub seed: Option<u64>,
}

impl Config {
    /// Returns a single-threaded configuration for `total_size` bytes with the
    /// default buffer size and style.
    pub fn new(total_size: u64) -> Self {
        Self {
            total_size,
            buffer_size: DEFAULT_BUFFER_SIZE,
            threads: 1,
            style: Style::default(),
            seed: None,
        }
    }

    /// Returns the buffer capacity each generator allocates.
    pub fn buffer_capacity(&self) -> usize {
        self.buffer_size.max(MIN_BUFFER_SIZE)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `threads` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(Error::InvalidConfig {
                reason: "thread count must be greater than 0".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_is_clamped_to_one_word() {
        let mut config = Config::new(10);
        config.buffer_size = 1;
        assert_eq!(config.buffer_capacity(), 32);
        config.buffer_size = 4096;
        assert_eq!(config.buffer_capacity(), 4096);
    }

    #[test]
    fn zero_threads_is_rejected() {
        let mut config = Config::new(10);
        assert!(config.validate().is_ok());
        config.threads = 0;
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }
}
