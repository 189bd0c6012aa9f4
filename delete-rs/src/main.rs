use clap::Parser;
use delete_cli_core::prelude::{
    arguments_or_stdin, exit_code, init_logging, DeleteExecutor, Flags, Options, RealFileSystem, RunSummary, StdinPrompter,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Delete files and directories by renaming them to `.#NAME`, so that
/// `undelete` can bring them back.
#[derive(Parser, Debug)]
#[command(name = "delete", version)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Delete directories and their contents.
    #[arg(short = 'r', short_alias = 'R', long)]
    recursive: bool,

    /// Never prompt; ignore missing files.
    #[arg(short = 'f', long)]
    force: bool,

    /// Prompt before every deletion.
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Report what would be deleted without deleting.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Report every deletion.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Refuse to delete directories.
    #[arg(short = 'F', long, conflicts_with = "directories_only")]
    files_only: bool,

    /// Refuse to delete anything but directories.
    #[arg(short = 'D', long)]
    directories_only: bool,

    /// Behave like rm(1): directories need --recursive.
    #[arg(short = 'e', long)]
    emulate_rm: bool,

    /// Log engine decisions at debug level.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Paths to delete; read from stdin, one per line, when omitted.
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
        emulate_rm: args.emulate_rm,
        ..Flags::default()
    })?;
    tracing::debug!(?options, "resolved options");
    let paths = arguments_or_stdin(args.paths)?;

    let mut prompter = StdinPrompter;
    let mut stderr = io::stderr();
    DeleteExecutor::new(&RealFileSystem, &options, &mut prompter, &mut stderr).run(&paths)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(summary) => exit_code(&summary),
        Err(err) => {
            eprintln!("delete: {err}");
            ExitCode::FAILURE
        }
    }
}
