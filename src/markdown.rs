//! Markdown rendering of paired layer timings.

use crate::report::{BenchmarkPair, ReportContext};
use std::io::{self, Write};

const TABLE_HEADER: &str = "| Layer | Caffe CPU | tiny-dnn CPU | Caffe time | tiny-dnn time |";
const TABLE_ALIGNMENT: &str = ":---:| ---:| ---:| ---:| ---:";

/// Writes the report header and the layer comparison table into a sink.
pub struct MarkdownWriter<W: Write> {
    out: W,
    rows: usize,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(out: W) -> Self {
        Self { out, rows: 0 }
    }

    /// Title, run metadata, and the table header rows.
    pub fn write_header(&mut self, group_label: &str, context: &ReportContext) -> io::Result<()> {
        writeln!(self.out, "### {}:\n-", group_label)?;
        writeln!(self.out, "Date: **{}**  ", context.date)?;
        writeln!(
            self.out,
            "Threads: {:.4} @ {:.4} Mhz  ",
            context.num_cpus, context.mhz_per_cpu
        )?;
        writeln!(self.out, "Build: {}  \n", context.library_build_type)?;

        writeln!(self.out, "{}", TABLE_HEADER)?;
        writeln!(self.out, "{}", TABLE_ALIGNMENT)
    }

    /// One table row; all times are printed in milliseconds.
    pub fn write_row(&mut self, layer_name: &str, pair: &BenchmarkPair<'_>) -> io::Result<()> {
        writeln!(
            self.out,
            "{} | {:.4} ms | {:.4} ms | {:.4} ms | {:.4} ms",
            layer_name,
            pair.caffe.cpu_time_ms(),
            pair.tiny_dnn.cpu_time_ms(),
            pair.caffe.real_time_ms(),
            pair.tiny_dnn.real_time_ms()
        )?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes and hands back the underlying sink.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}
