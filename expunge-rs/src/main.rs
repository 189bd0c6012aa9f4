use clap::Parser;
use delete_cli_core::prelude::{
    arguments_or_stdin, exit_code, init_logging, ExpungeExecutor, Flags, Options, RealFileSystem, RunSummary, StdinPrompter,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Permanently remove entries deleted with `delete`.
#[derive(Parser, Debug)]
#[command(name = "expunge", version)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Also expunge deleted entries nested inside the given paths.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Do not complain about paths with nothing deleted.
    #[arg(short = 'f', long)]
    force: bool,

    /// Prompt before every removal.
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Report what would be removed without removing.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Report every removal.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Only expunge entries deleted at least this many days ago.
    #[arg(short = 't', long = "older-than", value_name = "DAYS")]
    older_than_days: Option<u32>,

    /// Print how much space was freed.
    #[arg(short = 'y', long = "total-size")]
    report_size: bool,

    /// Expunge only files.
    #[arg(short = 'F', long, conflicts_with = "directories_only")]
    files_only: bool,

    /// Expunge only directories.
    #[arg(short = 'D', long)]
    directories_only: bool,

    /// Log engine decisions at debug level.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Paths to expunge; read from stdin, one per line, when omitted.
    paths: Vec<String>,
}

fn run(args: Args) -> delete_cli_core::Result<RunSummary> {
    init_logging(args.debug, args.log_file.as_deref())?;
    let options = Options::try_from(Flags {
        recursive: args.recursive,
        force: args.force,
        interactive: args.interactive,
        dry_run: args.dry_run,
        verbose: args.verbose,
        files_only: args.files_only,
        directories_only: args.directories_only,
        older_than_days: args.older_than_days,
        report_size: args.report_size,
        ..Flags::default()
    })?;
    tracing::debug!(?options, "resolved options");
    let paths = arguments_or_stdin(args.paths)?;

    let mut prompter = StdinPrompter;
    let mut stderr = io::stderr();
    ExpungeExecutor::new(&RealFileSystem, &options, &mut prompter, &mut stderr).run(&paths)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(summary) => exit_code(&summary),
        Err(err) => {
            eprintln!("expunge: {err}");
            ExitCode::FAILURE
        }
    }
}
