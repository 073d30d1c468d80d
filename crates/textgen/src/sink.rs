//! Sequential destinations for finished buffers.

use core::future::Future;
use std::io;
use tokio::io::{AsyncWrite, AsyncWriteExt};

/// A sequential consumer of finished buffers.
///
/// The pipeline calls [`Sink::write`] from a single task, one buffer at a
/// time, and never inspects what the destination is. A write either stores
/// all of `bytes` or fails.
///
/// # Example
/// ```
/// use textgen::Sink;
///
/// struct Counter(usize);
/// impl Sink for Counter {
///     async fn write(&mut self, bytes: &[u8]) -> std::io::Result<()> {
///         self.0 += bytes.len();
///         Ok(())
///     }
/// }
/// ```
pub trait Sink {
    /// Writes all of `bytes`.
    fn write(&mut self, bytes: &[u8]) -> impl Future<Output = io::Result<()>> + Send;
}

impl Sink for Vec<u8> {
    async fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

/// Adapts any [`AsyncWrite`] (a file, standard output, a socket) into a
/// [`Sink`].
#[derive(Debug)]
pub struct WriterSink<W> {
    inner: W,
}

impl<W: AsyncWrite + Unpin> WriterSink<W> {
    pub const fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Flushes buffered output and returns the underlying writer.
    ///
    /// # Errors
    ///
    /// Returns the writer's flush error.
    pub async fn finish(mut self) -> io::Result<W> {
        self.inner.flush().await?;
        Ok(self.inner)
    }
}

impl<W: AsyncWrite + Unpin + Send> Sink for WriterSink<W> {
    async fn write(&mut self, bytes: &[u8]) -> io::Result<()> {
        self.inner.write_all(bytes).await
    }
}
