//! Conversion settings.

use crate::errors::{ConversionError, ConversionResult};
use crate::report::layer_names::{self, LAYER_NAMES};
use serde::{Deserialize, Serialize};

/// Substring identifying Caffe benchmarks.
pub const CAFFE_GROUP_MARKER: &str = "CaffeLayerTest";

/// Substring identifying tiny-dnn benchmarks.
pub const TINY_DNN_GROUP_MARKER: &str = "TinyDNNLayerTest";

/// Markers used to split a report into its two backends, plus the layer
/// labels printed in the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    pub caffe_marker: String,
    pub tiny_dnn_marker: String,
    pub layer_names: Vec<String>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            caffe_marker: CAFFE_GROUP_MARKER.to_string(),
            tiny_dnn_marker: TINY_DNN_GROUP_MARKER.to_string(),
            layer_names: LAYER_NAMES.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl ConversionConfig {
    /// Validates the configuration
    pub fn validate(&self) -> ConversionResult<()> {
        if self.caffe_marker.is_empty() {
            return Err(ConversionError::InvalidConfig {
                field: "caffe_marker".to_string(),
                message: "Marker must not be empty".to_string(),
            });
        }

        if self.tiny_dnn_marker.is_empty() {
            return Err(ConversionError::InvalidConfig {
                field: "tiny_dnn_marker".to_string(),
                message: "Marker must not be empty".to_string(),
            });
        }

        if self.caffe_marker == self.tiny_dnn_marker {
            return Err(ConversionError::InvalidConfig {
                field: "tiny_dnn_marker".to_string(),
                message: "Markers of the two backends must differ".to_string(),
            });
        }

        if self.layer_names.is_empty() {
            return Err(ConversionError::InvalidConfig {
                field: "layer_names".to_string(),
                message: "At least one layer name is required".to_string(),
            });
        }

        Ok(())
    }

    /// Label of a 1-based layer index.
    pub fn layer_name(&self, index: i64) -> ConversionResult<&str> {
        layer_names::lookup(&self.layer_names, index)
    }
}
