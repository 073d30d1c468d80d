#![doc = include_str!("../README.md")]

mod charset;
mod compose;
mod config;
mod error;
mod generator;
mod pipeline;
mod rand;
mod report;
mod sink;

pub use crate::charset::*;
pub use crate::compose::*;
pub use crate::config::*;
pub use crate::error::*;
pub use crate::generator::*;
pub use crate::pipeline::*;
pub use crate::rand::*;
pub use crate::report::*;
pub use crate::sink::*;
