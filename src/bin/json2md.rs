//! Converts a Caffe vs tiny-dnn benchmark report from JSON to Markdown.
//!
//! Usage: json2md -i <in_file_path> -o <out_file_path>

use layer_bench_report::cli::{self, CliCommand};
use layer_bench_report::{ConversionResult, Converter};
use log::error;
use std::env;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logger
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) if e.is_user_error() => {
            println!("{}", e);
            ExitCode::from(e.exit_code())
        }
        Err(e) => {
            error!("Conversion failed: {}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> ConversionResult<()> {
    let paths = match cli::parse_args(env::args_os())? {
        CliCommand::Help { program } => {
            println!("{}", cli::usage(&program));
            return Ok(());
        }
        CliCommand::Convert(paths) => paths,
    };

    println!(
        "Converting {} to {}",
        paths.input.display(),
        paths.output.display()
    );

    Converter::default().convert(&paths.input, &paths.output)?;
    Ok(())
}
