//! Error types for report conversion.

use thiserror::Error;

/// Exit status for bad flags, missing paths and misaligned benchmark groups.
pub const USER_ERROR_EXIT_CODE: u8 = 2;

/// Exit status for every failure the tool does not anticipate.
pub const UNEXPECTED_ERROR_EXIT_CODE: u8 = 1;

/// Errors that can occur while parsing flags, loading a report, or writing the table.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("{program} -i <in_file_path> -o <out_file_path>")]
    Usage { program: String },

    #[error("Unknown option {option}\n{program} -i <in_file_path> -o <out_file_path>")]
    UnknownOption { option: String, program: String },

    #[error("Invalid arguments: {message}\n{program} -i <in_file_path> -o <out_file_path>")]
    InvalidArguments { message: String, program: String },

    #[error("Input file not found or not a regular file: {path}")]
    InputNotFound { path: String },

    #[error("Output dir not found: {dir}")]
    OutputDirNotFound { dir: String },

    #[error(
        "Error: number of Caffe and tiny-dnn benchmarks must match\nCaffe = {caffe} tiny-dnn = {tiny_dnn}"
    )]
    BenchmarkCountMismatch { caffe: usize, tiny_dnn: usize },

    #[error(
        "Error: layer index of Caffe and tiny-dnn must match\nCaffe = {caffe} tiny-dnn = {tiny_dnn}"
    )]
    LayerIndexMismatch { caffe: i64, tiny_dnn: i64 },

    #[error("Failed to read report '{path}': {source}")]
    ReportRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse report '{path}': {source}")]
    ReportParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("Benchmark name '{name}' does not end with a numeric layer index")]
    MalformedBenchmarkName { name: String },

    #[error("Report contains no Caffe or tiny-dnn benchmarks")]
    NoBenchmarks,

    #[error("Layer index {index} has no display name (expected 1..={available})")]
    LayerIndexOutOfRange { index: i64, available: usize },

    #[error("Invalid conversion config field '{field}': {message}")]
    InvalidConfig { field: String, message: String },

    #[error("Failed to write output '{path}': {source}")]
    OutputWrite {
        path: String,
        source: std::io::Error,
    },
}

impl ConversionError {
    /// Returns true for failures caused by the caller's flags or report contents
    /// that the tool reports as a plain diagnostic.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            ConversionError::Usage { .. }
                | ConversionError::UnknownOption { .. }
                | ConversionError::InvalidArguments { .. }
                | ConversionError::InputNotFound { .. }
                | ConversionError::OutputDirNotFound { .. }
                | ConversionError::BenchmarkCountMismatch { .. }
                | ConversionError::LayerIndexMismatch { .. }
        )
    }

    /// Process exit status associated with this error.
    pub fn exit_code(&self) -> u8 {
        if self.is_user_error() {
            USER_ERROR_EXIT_CODE
        } else {
            UNEXPECTED_ERROR_EXIT_CODE
        }
    }
}
