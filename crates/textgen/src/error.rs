//! Error types for text generation runs.
//!
//! Composing text cannot fail. A run fails only when the sink rejects a write,
//! when a worker task dies before handing its buffer back, or when the run is
//! configured with values the pipeline cannot honor.
//!
//! ## Error Cases
//! - `Sink`: the destination reported an I/O error. The write is not retried
//!   and bytes already written are left in place.
//! - `Worker`: a generation task panicked or was aborted.
//! - `InvalidConfig`: the configuration was rejected before any work started.

pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for a generation run.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Writing a finished buffer to the sink failed.
    #[error("write failed: {0}")]
    Sink(#[from] std::io::Error),

    /// A generation task did not hand its buffer back.
    #[error("worker error: {context}")]
    Worker { context: String },

    /// The configuration cannot be run.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },
}
