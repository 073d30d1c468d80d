//! Command-line surface of `textgen`: argument parsing, destinations, logging
//! and the run summary.

pub mod config;
pub mod output;
pub mod size;
pub mod summary;
pub mod telemetry;
