use clap::Parser;
use delete_cli_core::prelude::{
    arguments_or_stdin, exit_code, init_logging, Flags, Options, RealFileSystem, RunSummary, StdinPrompter, UndeleteExecutor,
};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Restore entries removed with `delete`.
#[derive(Parser, Debug)]
#[command(name = "undelete", version)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Also restore deleted entries nested inside the given paths.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Overwrite existing entries without asking; ignore paths with nothing
    /// to restore.
    #[arg(short = 'f', long)]
    force: bool,

    /// Prompt before every restore.
    #[arg(short = 'i', long)]
    interactive: bool,

    /// Report what would be restored without restoring.
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Report every restore.
    #[arg(short = 'v', long)]
    verbose: bool,

    /// Restore only files.
    #[arg(short = 'F', long, conflicts_with = "directories_only")]
    files_only: bool,

    /// Restore only directories, without their contents.
    #[arg(short = 'D', long)]
    directories_only: bool,

    /// Let recursion follow symbolic links.
    #[arg(long)]
    follow_links: bool,

    /// Let recursion cross mount points.
    #[arg(long)]
    follow_mounts: bool,

    /// Log engine decisions at debug level.
    #[arg(long)]
    debug: bool,

    /// Write logs to this file instead of stderr.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Paths to restore; read from stdin, one per line, when omitted.
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
        follow_links: args.follow_links,
        follow_mounts: args.follow_mounts,
        ..Flags::default()
    })?;
    tracing::debug!(?options, "resolved options");
    let paths = arguments_or_stdin(args.paths)?;

    let mut prompter = StdinPrompter;
    let mut stderr = io::stderr();
    UndeleteExecutor::new(&RealFileSystem, &options, &mut prompter, &mut stderr).run(&paths)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(summary) => exit_code(&summary),
        Err(err) => {
            eprintln!("undelete: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::CommandFactory;

    #[test]
    fn clap_verification() {
        Args::command().debug_assert();
    }
}
