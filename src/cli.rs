//! Command-line parsing for the `json2md` binary.
//!
//! Accepts `-i/--ifile <path>`, `-o/--ofile <path>` and `-h`. Help output and
//! exit statuses follow the tool's own contract, so clap's generated help and
//! error reporting are bypassed.

use crate::errors::{ConversionError, ConversionResult};
use clap::error::{ContextKind, ErrorKind};
use clap::{ArgAction, CommandFactory, FromArgMatches, Parser};
use log::warn;
use std::ffi::OsString;
use std::path::{Path, PathBuf, is_separator};

const DEFAULT_PROGRAM_NAME: &str = "json2md";

#[derive(Parser, Debug)]
#[command(name = "json2md", disable_help_flag = true, args_override_self = true)]
struct RawArgs {
    /// Print usage and exit
    #[arg(short = 'h', action = ArgAction::SetTrue)]
    help: bool,

    /// google-benchmark JSON report to convert
    #[arg(short = 'i', long = "ifile", value_name = "in_file_path")]
    ifile: Option<PathBuf>,

    /// Markdown file to write
    #[arg(short = 'o', long = "ofile", value_name = "out_file_path")]
    ofile: Option<PathBuf>,

    #[arg(hide = true)]
    extra: Vec<OsString>,
}

/// Validated input and output locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// What the binary should do after parsing its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    Help { program: String },
    Convert(ConversionPaths),
}

/// The one-line usage text.
pub fn usage(program: &str) -> String {
    format!("{} -i <in_file_path> -o <out_file_path>", program)
}

/// Parses process arguments, the first being the program name.
///
/// Options are only honoured before the first positional argument, and the
/// given paths are checked in the order they appear on the command line.
pub fn parse_args<I, T>(args: I) -> ConversionResult<CliCommand>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    let program = args
        .first()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| DEFAULT_PROGRAM_NAME.to_string());

    let matches = RawArgs::command()
        .try_get_matches_from(&args)
        .map_err(|e| argument_error(e, &program))?;
    let raw = RawArgs::from_arg_matches(&matches).map_err(|e| argument_error(e, &program))?;

    if raw.help {
        return Ok(CliCommand::Help { program });
    }

    let cutoff = matches.index_of("extra").unwrap_or(usize::MAX);
    let position = |id: &str| matches.index_of(id).filter(|&index| index < cutoff);

    let (input, output, input_first) =
        match (raw.ifile, position("ifile"), raw.ofile, position("ofile")) {
            (Some(input), Some(input_at), Some(output), Some(output_at)) => {
                (input, output, input_at < output_at)
            }
            // Fewer than both options before the first positional argument.
            _ => return Err(ConversionError::Usage { program }),
        };

    if !raw.extra.is_empty() {
        warn!("Ignoring trailing arguments: {:?}", raw.extra);
    }

    if input_first {
        validate_input(&input)?;
        validate_output(&output)?;
    } else {
        validate_output(&output)?;
        validate_input(&input)?;
    }

    Ok(CliCommand::Convert(ConversionPaths { input, output }))
}

fn argument_error(error: clap::Error, program: &str) -> ConversionError {
    match error.kind() {
        ErrorKind::UnknownArgument => ConversionError::UnknownOption {
            option: error
                .get(ContextKind::InvalidArg)
                .map(|arg| arg.to_string())
                .unwrap_or_default(),
            program: program.to_string(),
        },
        kind => ConversionError::InvalidArguments {
            message: kind.as_str().unwrap_or("unparsable arguments").to_string(),
            program: program.to_string(),
        },
    }
}

fn validate_input(path: &Path) -> ConversionResult<()> {
    if !path.is_file() {
        return Err(ConversionError::InputNotFound {
            path: path.display().to_string(),
        });
    }
    Ok(())
}

fn validate_output(path: &Path) -> ConversionResult<()> {
    let dir = output_dir(path);
    if !dir.is_empty() && !Path::new(&dir).exists() {
        return Err(ConversionError::OutputDirNotFound { dir });
    }
    Ok(())
}

/// Everything up to the last separator, trailing separators removed.
/// `out/` and `out/.` both name the directory `out`.
fn output_dir(path: &Path) -> String {
    let text = path.to_string_lossy();
    let Some(split) = text.rfind(is_separator) else {
        return String::new();
    };

    let head = &text[..=split];
    match head.trim_end_matches(is_separator) {
        "" => head.to_string(),
        trimmed => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_help_wins() {
        let command = parse_args(["json2md", "-h", "-i", "missing.json"]).unwrap();
        assert_eq!(
            command,
            CliCommand::Help {
                program: "json2md".to_string()
            }
        );
    }

    #[test]
    fn test_no_options_is_usage_error() {
        let result = parse_args(["json2md"]);
        assert!(matches!(result, Err(ConversionError::Usage { .. })));
    }

    #[test]
    fn test_single_option_is_usage_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(&input, "{}").unwrap();

        let result = parse_args([
            OsString::from("json2md"),
            OsString::from("-i"),
            input.into_os_string(),
        ]);
        assert!(matches!(result, Err(ConversionError::Usage { .. })));
    }

    #[test]
    fn test_unknown_option() {
        let result = parse_args(["json2md", "-x", "-i", "a", "-o", "b"]);
        match result {
            Err(ConversionError::UnknownOption { option, .. }) => assert_eq!(option, "-x"),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_missing_option_value() {
        let result = parse_args(["json2md", "-o", "out.md", "-i"]);
        assert!(matches!(
            result,
            Err(ConversionError::InvalidArguments { .. })
        ));
    }

    #[test]
    fn test_missing_input_file() {
        let result = parse_args(["json2md", "-i", "does/not/exist.json", "-o", "out.md"]);
        assert!(matches!(result, Err(ConversionError::InputNotFound { .. })));
    }

    #[test]
    fn test_input_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let result = parse_args([
            OsString::from("json2md"),
            OsString::from("-i"),
            dir.path().as_os_str().to_owned(),
            OsString::from("-o"),
            OsString::from("out.md"),
        ]);
        assert!(matches!(result, Err(ConversionError::InputNotFound { .. })));
    }

    #[test]
    fn test_missing_output_dir() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(&input, "{}").unwrap();
        let output = dir.path().join("absent").join("out.md");

        let result = parse_args([
            OsString::from("json2md"),
            OsString::from("--ifile"),
            input.into_os_string(),
            OsString::from("--ofile"),
            output.into_os_string(),
        ]);
        match result {
            Err(ConversionError::OutputDirNotFound { dir: missing }) => {
                assert!(missing.ends_with("absent"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_valid_paths() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(&input, "{}").unwrap();
        let output = dir.path().join("report.md");

        let command = parse_args([
            OsString::from("json2md"),
            OsString::from("-i"),
            input.clone().into_os_string(),
            OsString::from("-o"),
            output.clone().into_os_string(),
        ])
        .unwrap();
        assert_eq!(command, CliCommand::Convert(ConversionPaths { input, output }));
    }

    #[test]
    fn test_output_without_directory_component() {
        assert!(validate_output(Path::new("report.md")).is_ok());
    }

    #[test]
    fn test_output_dir_splits_at_last_separator() {
        assert_eq!(output_dir(Path::new("report.md")), "");
        assert_eq!(output_dir(Path::new("out/report.md")), "out");
        assert_eq!(output_dir(Path::new("out/")), "out");
        assert_eq!(output_dir(Path::new("out/.")), "out");
        assert_eq!(output_dir(Path::new("a/b//c.md")), "a/b");
        assert_eq!(output_dir(Path::new("/report.md")), "/");
    }

    #[test]
    fn test_missing_output_dir_with_trailing_separator() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(&input, "{}").unwrap();

        for output in ["no_such_dir_xyz/", "no_such_dir_xyz/."] {
            let result = parse_args([
                OsString::from("json2md"),
                OsString::from("-i"),
                input.clone().into_os_string(),
                OsString::from("-o"),
                OsString::from(output),
            ]);
            match result {
                Err(ConversionError::OutputDirNotFound { dir: missing }) => {
                    assert_eq!(missing, "no_such_dir_xyz")
                }
                other => panic!("unexpected result for {output}: {other:?}"),
            }
        }
    }

    #[test]
    fn test_options_after_positional_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(&input, "{}").unwrap();

        let result = parse_args([
            OsString::from("json2md"),
            OsString::from("stray"),
            OsString::from("-i"),
            input.into_os_string(),
            OsString::from("-o"),
            OsString::from("out.md"),
        ]);
        assert!(matches!(result, Err(ConversionError::Usage { .. })));
    }

    #[test]
    fn test_trailing_positional_after_options_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("report.json");
        fs::write(&input, "{}").unwrap();

        let command = parse_args([
            OsString::from("json2md"),
            OsString::from("-i"),
            input.into_os_string(),
            OsString::from("-o"),
            OsString::from("out.md"),
            OsString::from("stray"),
        ])
        .unwrap();
        assert!(matches!(command, CliCommand::Convert(_)));
    }

    #[test]
    fn test_paths_checked_in_argument_order() {
        let output_first = parse_args(["json2md", "-o", "missing/x.md", "-i", "missing.json"]);
        assert!(matches!(
            output_first,
            Err(ConversionError::OutputDirNotFound { .. })
        ));

        let input_first = parse_args(["json2md", "-i", "missing.json", "-o", "missing/x.md"]);
        assert!(matches!(
            input_first,
            Err(ConversionError::InputNotFound { .. })
        ));
    }
}
