//! End-to-end conversion of a benchmark report into a Markdown comparison table.

use crate::config::ConversionConfig;
use crate::errors::{ConversionError, ConversionResult};
use crate::markdown::MarkdownWriter;
use crate::report::{Report, ReportLoader, partition};
use log::info;
use std::fs;
use std::io;
use std::path::Path;

/// Runs the load, pair, and render pipeline for one report.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    config: ConversionConfig,
}

impl Converter {
    pub fn new(config: ConversionConfig) -> ConversionResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Converts the report at `input` and writes the table to `output`.
    ///
    /// The document is rendered completely before the output file is created,
    /// so a rejected report leaves no file behind. Returns the number of rows.
    pub fn convert(&self, input: &Path, output: &Path) -> ConversionResult<usize> {
        let report = ReportLoader::load(input)?;
        let (markdown, rows) = self.render_with_rows(&report)?;

        fs::write(output, markdown).map_err(|e| ConversionError::OutputWrite {
            path: output.display().to_string(),
            source: e,
        })?;

        info!("Wrote {} layer rows to '{}'", rows, output.display());
        Ok(rows)
    }

    /// Renders the Markdown document for an already loaded report.
    pub fn render(&self, report: &Report) -> ConversionResult<String> {
        self.render_with_rows(report).map(|(markdown, _)| markdown)
    }

    fn render_with_rows(&self, report: &Report) -> ConversionResult<(String, usize)> {
        let groups = partition(&report.benchmarks, &self.config);
        groups.validate_counts()?;

        let group_label = groups
            .caffe
            .first()
            .map(|&first| first.group_label())
            .ok_or(ConversionError::NoBenchmarks)?;

        let pairs = groups.into_pairs()?;

        let mut writer = MarkdownWriter::new(Vec::new());
        writer
            .write_header(group_label, &report.context)
            .map_err(render_error)?;

        for pair in &pairs {
            let layer_name = self.config.layer_name(pair.layer_index)?;
            writer.write_row(layer_name, pair).map_err(render_error)?;
        }

        let rows = writer.rows_written();
        let bytes = writer.finish().map_err(render_error)?;
        let markdown = String::from_utf8(bytes)
            .map_err(|e| render_error(io::Error::new(io::ErrorKind::InvalidData, e)))?;

        Ok((markdown, rows))
    }
}

fn render_error(source: io::Error) -> ConversionError {
    ConversionError::OutputWrite {
        path: "<memory>".to_string(),
        source,
    }
}
