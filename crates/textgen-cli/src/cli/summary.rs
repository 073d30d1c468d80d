use std::io::{self, Write};
use textgen::RunReport;

/// Writes the `threads:` and `seconds:` lines for a finished run.
///
/// `threads` is the number of generators the run actually used, which is
/// below the configured count when the total fits in fewer buffers.
pub fn write_summary<W: Write + ?Sized>(out: &mut W, report: &RunReport) -> io::Result<()> {
    writeln!(out, "threads: {}", report.workers_used)?;
    writeln!(out, "seconds: {:.3}", report.elapsed.as_secs_f64())
}
