//! Pieces every command binary needs: logging setup, argument intake and
//! exit codes.

use crate::errors::CoreError;
use crate::models::RunSummary;
use std::fs::OpenOptions;
use std::io::{self, BufRead};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Directives used when neither `--debug` nor `RUST_LOG` is given. Failures
/// are already printed as status lines, so their `warn` events stay quiet.
const DEFAULT_DIRECTIVES: &str = "error";

/// `--debug` raises this crate only; dependencies stay at the default.
const DEBUG_DIRECTIVES: &str = "error,delete_cli_core=debug";

fn log_filter(debug: bool) -> EnvFilter {
    if debug {
        EnvFilter::new(DEBUG_DIRECTIVES)
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
    }
}

/// Installs the tracing subscriber. `RUST_LOG` wins unless `debug` is set;
/// without either only errors are logged. Logs go to stderr, or to
/// `log_file` (appended) when given.
pub fn init_logging(debug: bool, log_file: Option<&Path>) -> crate::Result<()> {
    let filter = log_filter(debug);
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(false);

    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = match log_file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|err| CoreError::io(path, err))?;
            builder.with_ansi(false).with_writer(Mutex::new(file)).try_init()
        }
        None => builder.with_writer(io::stderr).try_init(),
    };
    Ok(())
}

/// The given arguments, or one argument per non-empty stdin line when none
/// were given.
pub fn arguments_or_stdin(args: Vec<String>) -> crate::Result<Vec<String>> {
    if !args.is_empty() {
        return Ok(args);
    }
    read_arguments(io::stdin().lock())
}

fn read_arguments<R: BufRead>(reader: R) -> crate::Result<Vec<String>> {
    let mut args = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|err| CoreError::io("<stdin>", err))?;
        if !line.is_empty() {
            args.push(line);
        }
    }
    Ok(args)
}

pub fn exit_code(summary: &RunSummary) -> ExitCode {
    ExitCode::from(summary.exit_status().as_code())
}
