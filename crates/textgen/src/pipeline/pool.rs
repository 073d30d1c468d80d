//! Bounded pool of generators for concurrent fills.
//!
//! This module defines the [`Pool`] struct, which owns every generator of a
//! concurrent run that is not currently filling, plus the single bounded
//! completion queue that filling generators come back through.
//!
//! The queue holds as many slots as the pool may create generators, so a
//! finished worker never waits to hand its buffer back. Generators return in
//! the order they finish, not the order they started.

use crate::{Error, Generator, Result, Style, generator_seed};
use tokio::sync::mpsc;

/// Generators that are idle or filling, capped at `max_generators`.
pub struct Pool {
    tx: mpsc::Sender<Result<Generator>>,
    rx: mpsc::Receiver<Result<Generator>>,
    idle: Vec<Generator>,
    max_generators: usize,
    created: usize,
    in_flight: usize,
    peak_in_flight: usize,
    capacity: usize,
    style: Style,
    base_seed: u64,
}

impl Pool {
    /// Creates an empty pool. No generator is allocated until
    /// [`Pool::checkout`] needs one.
    pub fn new(max_generators: usize, capacity: usize, style: Style, base_seed: u64) -> Self {
        let (tx, rx) = mpsc::channel(max_generators);
        Self {
            tx,
            rx,
            idle: Vec::with_capacity(max_generators),
            max_generators,
            created: 0,
            in_flight: 0,
            peak_in_flight: 0,
            capacity,
            style,
            base_seed,
        }
    }

    /// Returns an idle generator, or a new one if fewer than
    /// `max_generators` exist. Returns `None` when every generator is filling.
    pub fn checkout(&mut self) -> Option<Generator> {
        if let Some(generator) = self.idle.pop() {
            return Some(generator);
        }
        if self.created == self.max_generators {
            return None;
        }
        let seed = generator_seed(self.base_seed, self.created);
        self.created += 1;

        #[cfg(feature = "tracing")]
        tracing::debug!("Creating generator {} of {}", self.created, self.max_generators);

        Some(Generator::new(self.capacity, seed, self.style))
    }

    /// Starts filling `generator` on the blocking thread pool.
    ///
    /// The finished generator is sent back through the completion queue. If
    /// the pool has been dropped by then, the buffer is discarded.
    pub fn start(&mut self, generator: Generator) {
        self.start_with(generator, Generator::fill);
    }

    /// Runs `fill` on `generator` as one blocking task. A panic inside `fill`
    /// comes back through the completion queue as [`Error::Worker`].
    fn start_with<F>(&mut self, mut generator: Generator, fill: F)
    where
        F: FnOnce(&mut Generator) + Send + 'static,
    {
        self.in_flight += 1;
        self.peak_in_flight = self.peak_in_flight.max(self.in_flight);

        let tx = self.tx.clone();
        tokio::spawn(async move {
            let filled = tokio::task::spawn_blocking(move || {
                fill(&mut generator);
                generator
            })
            .await
            .map_err(|e| Error::Worker {
                context: format!("fill task failed: {e}"),
            });

            if let Err(_e) = tx.send(filled).await {
                #[cfg(feature = "tracing")]
                tracing::trace!("Discarding buffer of abandoned run");
            }
        });
    }

    /// Returns a finished generator if one is ready, without waiting.
    pub fn try_complete(&mut self) -> Option<Result<Generator>> {
        let done = self.rx.try_recv().ok()?;
        self.in_flight -= 1;
        Some(done)
    }

    /// Waits for whichever filling generator finishes first.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Worker`] if the fill task failed, or if nothing is
    /// filling.
    pub async fn complete(&mut self) -> Result<Generator> {
        if self.in_flight == 0 {
            return Err(Error::Worker {
                context: "no fill in flight".to_owned(),
            });
        }
        let done = self.rx.recv().await.ok_or_else(|| Error::Worker {
            context: "completion queue closed".to_owned(),
        })?;
        self.in_flight -= 1;
        done
    }

    /// Returns a written generator to the pool for reuse.
    pub fn recycle(&mut self, generator: Generator) {
        self.idle.push(generator);
    }

    /// Fills started and not yet completed.
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Generators allocated so far.
    pub const fn created(&self) -> usize {
        self.created
    }

    /// Highest [`Pool::in_flight`] seen so far.
    pub const fn peak_in_flight(&self) -> usize {
        self.peak_in_flight
    }
}
