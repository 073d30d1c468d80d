//! Reusable buffer generators.
//!
//! A [`Generator`] pairs one byte buffer with one pseudo-random source. The
//! pipeline hands a generator to exactly one task at a time; between fills the
//! buffer is reused as is, since every fill overwrites all of it.

use crate::{Layout, Style, compose, compose_raw};
use rand::{SeedableRng, rngs::SmallRng};
use std::time::{SystemTime, UNIX_EPOCH};
#[cfg(feature = "tracing")]
use tracing::instrument;


/// One reusable (buffer, random source) pair.
#[derive(Debug, Clone)]
pub struct Generator {
    buffer: Vec<u8>,
    capacity: usize,
    rng: SmallRng,
    style: Style,
}

impl Generator {
    /// Allocates a generator with a `capacity`-byte buffer and a random source
    /// seeded from `seed`.
    pub fn new(capacity: usize, seed: u64, style: Style) -> Self {
        Self {
            buffer: vec![0; capacity],
            capacity,
            rng: SmallRng::seed_from_u64(seed),
            style,
        }
    }

    /// Sets the logical buffer length for the next fill and returns it.
    ///
    /// The length is `remaining` when that is smaller than the capacity and
    /// the full capacity otherwise. Shrinking keeps the allocation, so a later
    /// call with a larger budget grows back without reallocating.
    pub fn prepare(&mut self, remaining: u64) -> usize {
        let len = usize::try_from(remaining).map_or(self.capacity, |r| r.min(self.capacity));
        self.buffer.resize(len, 0);
        len
    }

    /// Overwrites the whole current buffer with fresh content.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self), fields(len = self.buffer.len())))]
    pub fn fill(&mut self) {
        match self.style.layout {
            Layout::Words => compose(
                &mut self.buffer,
                self.style.separator,
                self.style.class,
                &mut self.rng,
            ),
            Layout::Raw => compose_raw(&mut self.buffer, &mut self.rng),
        }
    }

    /// Prepares for `remaining` bytes and fills. Returns the number of bytes
    /// produced, which never exceeds `remaining`.
    pub fn produce(&mut self, remaining: u64) -> usize {
        let len = self.prepare(remaining);
        self.fill();
        len
    }

    /// The content of the last fill.
    pub fn bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Logical length set by the last [`Generator::prepare`].
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Returns `true` if the last fill produced no bytes.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Size of the underlying allocation.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Returns the seed of the `index`-th generator of a run.
///
/// Offsetting the base seed by the creation index keeps the streams of
/// generators created within one clock tick apart.
pub const fn generator_seed(base: u64, index: usize) -> u64 {
    base.wrapping_add(index as u64)
}

/// Returns the current wall-clock time in nanoseconds, for use as a base
/// seed.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_nanos() as u64)
}
