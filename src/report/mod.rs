//! Benchmark report model, loading, and backend pairing.

pub mod layer_names;
pub mod partition;
pub mod report_loader;
pub mod report_types;

pub use layer_names::{LAYER_NAMES, layer_name};
pub use partition::{BenchmarkPair, PartitionedBenchmarks, partition};
pub use report_loader::ReportLoader;
pub use report_types::{BenchmarkEntry, Report, ReportContext};
