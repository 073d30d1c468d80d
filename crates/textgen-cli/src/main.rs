#![doc = include_str!("../README.md")]

mod cli;

use anyhow::Context;
use clap::Parser;
use cli::config::{CliArgs, RunSettings};
use cli::output::{Output, create_new};
use cli::summary::write_summary;
use cli::telemetry::init_telemetry;
use std::io::{self, Write};
use textgen::{Config, RunReport, WriterSink, run};
use tokio::io::AsyncWrite;

// Buffers are allocated on blocking-pool threads, so use mimalloc, which
// holds up better under contention.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let settings = RunSettings::try_from(args)?;

    init_telemetry()?;
    log_startup_info(&settings);

    let report = match &settings.output {
        Output::Stdout => generate(&settings.config, WriterSink::new(tokio::io::stdout())).await?,
        Output::File(path) => generate(&settings.config, create_new(path).await?).await?,
    };

    print_summary(&settings, &report)
}

async fn generate<W>(config: &Config, mut sink: WriterSink<W>) -> anyhow::Result<RunReport>
where
    W: AsyncWrite + Unpin + Send,
{
    let report = run(config, &mut sink)
        .await
        .context("generating text failed")?;
    sink.finish().await.context("flushing output failed")?;
    Ok(report)
}

fn log_startup_info(settings: &RunSettings) {
    if cfg!(debug_assertions) {
        tracing::info!("Starting textgen with full settings: {:#?}", settings);
    } else {
        tracing::info!(
            "Writing {} bytes to {:?} with {} thread(s)",
            settings.config.total_size,
            settings.output,
            settings.config.threads
        );
    }
}

/// Prints the summary to stderr when the generated text itself is on stdout.
fn print_summary(settings: &RunSettings, report: &RunReport) -> anyhow::Result<()> {
    let mut out: Box<dyn Write> = if settings.output.is_stdout() {
        Box::new(io::stderr().lock())
    } else {
        Box::new(io::stdout().lock())
    };

    write_summary(&mut out, report)?;

    tracing::debug!(
        "Run finished: {} bytes in {} writes, {} generator(s), peak {} in flight",
        report.bytes_written,
        report.writes,
        report.workers_used,
        report.peak_in_flight
    );
    Ok(())
}
