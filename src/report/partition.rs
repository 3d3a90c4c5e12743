//! Splitting a report into its Caffe and tiny-dnn groups and pairing them by layer.

use super::report_types::BenchmarkEntry;
use crate::config::ConversionConfig;
use crate::errors::{ConversionError, ConversionResult};
use log::{debug, info, warn};

/// The two backend groups of a report, each in encounter order.
#[derive(Debug, Clone, Default)]
pub struct PartitionedBenchmarks<'a> {
    pub caffe: Vec<&'a BenchmarkEntry>,
    pub tiny_dnn: Vec<&'a BenchmarkEntry>,
}

/// A Caffe measurement and the tiny-dnn measurement of the same layer.
#[derive(Debug, Clone, Copy)]
pub struct BenchmarkPair<'a> {
    pub layer_index: i64,
    pub caffe: &'a BenchmarkEntry,
    pub tiny_dnn: &'a BenchmarkEntry,
}

/// Classifies every entry by substring match on its name. The Caffe marker is
/// checked first; entries matching neither marker are skipped.
pub fn partition<'a>(
    benchmarks: &'a [BenchmarkEntry],
    config: &ConversionConfig,
) -> PartitionedBenchmarks<'a> {
    let mut groups = PartitionedBenchmarks::default();

    for benchmark in benchmarks {
        if benchmark.name.contains(&config.caffe_marker) {
            groups.caffe.push(benchmark);
        } else if benchmark.name.contains(&config.tiny_dnn_marker) {
            groups.tiny_dnn.push(benchmark);
        } else {
            warn!("Ignoring benchmark '{}': no backend marker", benchmark.name);
        }
    }

    info!(
        "Partitioned benchmarks: Caffe = {}, tiny-dnn = {}",
        groups.caffe.len(),
        groups.tiny_dnn.len()
    );
    groups
}

impl<'a> PartitionedBenchmarks<'a> {
    /// Both groups must hold the same number of entries.
    pub fn validate_counts(&self) -> ConversionResult<()> {
        if self.caffe.len() != self.tiny_dnn.len() {
            return Err(ConversionError::BenchmarkCountMismatch {
                caffe: self.caffe.len(),
                tiny_dnn: self.tiny_dnn.len(),
            });
        }
        Ok(())
    }

    /// Zips the groups position by position, requiring matching layer indices.
    pub fn into_pairs(self) -> ConversionResult<Vec<BenchmarkPair<'a>>> {
        self.validate_counts()?;

        self.caffe
            .iter()
            .zip(self.tiny_dnn.iter())
            .map(|(&caffe, &tiny_dnn)| {
                let caffe_index = caffe.layer_index()?;
                let tiny_dnn_index = tiny_dnn.layer_index()?;

                if caffe_index != tiny_dnn_index {
                    return Err(ConversionError::LayerIndexMismatch {
                        caffe: caffe_index,
                        tiny_dnn: tiny_dnn_index,
                    });
                }

                debug!(
                    "Paired layer {}: '{}' with '{}'",
                    caffe_index, caffe.name, tiny_dnn.name
                );
                Ok(BenchmarkPair {
                    layer_index: caffe_index,
                    caffe,
                    tiny_dnn,
                })
            })
            .collect()
    }
}
