use core::time::Duration;

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunReport {
    /// Total bytes handed to the sink. Always equals the configured size.
    pub bytes_written: u64,
    /// Number of sink writes.
    pub writes: usize,
    /// Generators actually created. Less than the thread count when the
    /// total fits in fewer buffers.
    pub workers_used: usize,
    /// Highest number of fills running at the same time.
    pub peak_in_flight: usize,
    /// Wall time from the start of the run to the last write.
    pub elapsed: Duration,
}

impl RunReport {
    pub(crate) fn record_write(&mut self, len: usize) {
        self.bytes_written += len as u64;
        self.writes += 1;
    }
}
