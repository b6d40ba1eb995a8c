//! Benchmark harness for boxpack
//!
//! This crate provides:
//! - Parsers for plain-text box lists and JSON datasets
//! - The built-in scenario sets
//! - ASCII rendering with overlap detection
//! - Benchmark runner with result recording

mod dataset;
mod parser;
mod render;
mod result;
mod runner;

pub use dataset::{Dataset, DatasetInfo, DatasetItem};
pub use parser::{DatasetParser, ParseError};
pub use render::{Conflict, Diagram};
pub use result::{BenchmarkMetadata, BenchmarkResult, PlacementInfo, RunResult};
pub use runner::{BenchmarkConfig, BenchmarkRunner, RunOutcome};
