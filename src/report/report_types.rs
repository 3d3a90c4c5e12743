//! Data model for google-benchmark JSON reports.

use crate::errors::{ConversionError, ConversionResult};
use serde::{Deserialize, Serialize};

const NANOS_PER_MILLI: f64 = 1_000_000.0;

/// Run-level metadata attached once per report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportContext {
    pub date: String,
    pub num_cpus: f64,
    pub mhz_per_cpu: f64,
    pub library_build_type: String,
}

/// A single benchmark measurement. Times are in nanoseconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    pub name: String,
    pub cpu_time: f64,
    pub real_time: f64,
}

/// A complete benchmark report as emitted by the harness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub context: ReportContext,
    pub benchmarks: Vec<BenchmarkEntry>,
}

impl BenchmarkEntry {
    pub fn new(name: impl Into<String>, cpu_time: f64, real_time: f64) -> Self {
        Self {
            name: name.into(),
            cpu_time,
            real_time,
        }
    }

    /// The fixture label, i.e. the part of the name before the first `/`.
    pub fn group_label(&self) -> &str {
        self.name
            .split_once('/')
            .map_or(self.name.as_str(), |(label, _)| label)
    }

    /// The 1-based layer position encoded after the last `/` of the name.
    pub fn layer_index(&self) -> ConversionResult<i64> {
        let suffix = self
            .name
            .rsplit_once('/')
            .map_or(self.name.as_str(), |(_, index)| index);

        suffix
            .trim()
            .parse()
            .map_err(|_| ConversionError::MalformedBenchmarkName {
                name: self.name.clone(),
            })
    }

    pub fn cpu_time_ms(&self) -> f64 {
        self.cpu_time / NANOS_PER_MILLI
    }

    pub fn real_time_ms(&self) -> f64 {
        self.real_time / NANOS_PER_MILLI
    }
}
