//! Scheduling generators against a single sink.
//!
//! [`run`] produces exactly `total_size` bytes. With one thread it generates
//! and writes in a plain loop. With more, it keeps up to `threads` generators
//! filling on the blocking thread pool while the calling task writes whichever
//! buffer finishes first.
//!
//! ## Budget
//!
//! Bytes are reserved for a generator when its fill starts, so the sum of all
//! started fills never exceeds the requested total. Once nothing is left to
//! reserve, the fills still running are drained and written.
//!
//! ## Failure
//!
//! A failed write ends the run immediately. Nothing is scheduled or written
//! afterwards; fills still running complete on their own and their buffers
//! are dropped together with the completion queue.

mod pool;


pub use pool::Pool;

use crate::{Config, Generator, Result, RunReport, Sink, clock_seed, generator_seed};
use std::time::Instant;

/// Generates `config.total_size` bytes into `sink`.
///
/// Must be called from within a Tokio runtime when `config.threads > 1`.
///
/// # Errors
///
/// - [`Error::InvalidConfig`] if `config.threads` is zero.
/// - [`Error::Sink`] for the first failed write. Bytes written before it stay
///   in the sink.
/// - [`Error::Worker`] if a fill task dies.
///
/// [`Error::InvalidConfig`]: crate::Error::InvalidConfig
/// [`Error::Sink`]: crate::Error::Sink
/// [`Error::Worker`]: crate::Error::Worker
pub async fn run<S: Sink>(config: &Config, sink: &mut S) -> Result<RunReport> {
    config.validate()?;
    let started = Instant::now();
    let base_seed = config.seed.unwrap_or_else(clock_seed);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Generating {} bytes with {} thread(s), {} byte buffers",
        config.total_size,
        config.threads,
        config.buffer_capacity()
    );

    let mut report = if config.threads == 1 {
        run_sequential(config, base_seed, sink).await?
    } else {
        run_concurrent(config, base_seed, sink).await?
    };
    report.elapsed = started.elapsed();

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Wrote {} bytes in {} writes using {} generator(s)",
        report.bytes_written,
        report.writes,
        report.workers_used
    );

    Ok(report)
}

async fn run_sequential<S: Sink>(
    config: &Config,
    base_seed: u64,
    sink: &mut S,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    if config.total_size == 0 {
        return Ok(report);
    }

    let mut generator = Generator::new(
        config.buffer_capacity(),
        generator_seed(base_seed, 0),
        config.style,
    );
    report.workers_used = 1;
    report.peak_in_flight = 1;

    let mut remaining = config.total_size;
    while remaining > 0 {
        let len = generator.produce(remaining);
        sink.write(generator.bytes()).await?;
        remaining -= len as u64;
        report.record_write(len);
    }

    Ok(report)
}

async fn run_concurrent<S: Sink>(
    config: &Config,
    base_seed: u64,
    sink: &mut S,
) -> Result<RunReport> {
    let mut report = RunReport::default();
    let mut pool = Pool::new(
        config.threads,
        config.buffer_capacity(),
        config.style,
        base_seed,
    );
    let mut unreserved = config.total_size;

    while unreserved > 0 {
        if let Some(done) = pool.try_complete() {
            write_back(&mut pool, sink, done?, &mut report).await?;
            continue;
        }

        match pool.checkout() {
            Some(mut generator) => {
                let len = generator.prepare(unreserved);
                unreserved -= len as u64;
                pool.start(generator);
            }
            None => {
                let generator = pool.complete().await?;
                write_back(&mut pool, sink, generator, &mut report).await?;
            }
        }
    }

    while pool.in_flight() > 0 {
        let generator = pool.complete().await?;
        write_back(&mut pool, sink, generator, &mut report).await?;
    }

    report.workers_used = pool.created();
    report.peak_in_flight = pool.peak_in_flight();
    Ok(report)
}

async fn write_back<S: Sink>(
    pool: &mut Pool,
    sink: &mut S,
    generator: Generator,
    report: &mut RunReport,
) -> Result<()> {
    sink.write(generator.bytes()).await?;
    report.record_write(generator.len());
    pool.recycle(generator);
    Ok(())
}
