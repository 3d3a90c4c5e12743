//! Converts google-benchmark JSON reports comparing Caffe and tiny-dnn layer
//! timings into Markdown tables.
//!
//! A report is split into its two backend groups by benchmark name, the groups
//! are paired layer by layer, and each pair becomes one table row with CPU and
//! wall-clock times in milliseconds.

pub mod cli;
pub mod config;
pub mod converter;
pub mod errors;
pub mod markdown;
pub mod report;

pub use config::ConversionConfig;
pub use converter::Converter;
pub use errors::{ConversionError, ConversionResult};
pub use report::{BenchmarkEntry, Report, ReportContext, ReportLoader};
