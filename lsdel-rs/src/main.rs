use clap::Parser;
use delete_cli_core::prelude::{exit_code, init_logging, Flags, ListExecutor, Options, RealFileSystem, RunSummary};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// List entries removed with `delete` that can still be restored.
#[derive(Parser, Debug)]
#[command(name = "lsdel", version)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Descend into subdirectories, live and deleted.
    #[arg(short = 'r', long)]
    recursive: bool,

    /// Only list entries deleted at least this many days ago.
    #[arg(short = 't', long = "older-than", value_name = "DAYS")]
    older_than_days: Option<u32>,

    /// Print the total size of the listed entries.
    #[arg(short = 'y', long = "total-size")]
    report_size: bool,

    /// Print age and size next to every entry.
    #[arg(short = 'l', long = "long")]
    long_listing: bool,

    /// List only deleted directories.
    #[arg(short = 'D', long)]
    directories_only: bool,

    /// Do not complain about paths with nothing deleted.
    #[arg(short = 'f', long)]
    force: bool,

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

    /// Paths to inspect; defaults to the current directory.
    paths: Vec<String>,
}

fn run(args: Args) -> delete_cli_core::Result<RunSummary> {
    init_logging(args.debug, args.log_file.as_deref())?;
    let options = Options::try_from(Flags {
        recursive: args.recursive,
        force: args.force,
        directories_only: args.directories_only,
        follow_links: args.follow_links,
        follow_mounts: args.follow_mounts,
        older_than_days: args.older_than_days,
        report_size: args.report_size,
        long_listing: args.long_listing,
        ..Flags::default()
    })?;
    tracing::debug!(?options, "resolved options");

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();
    ListExecutor::new(&RealFileSystem, &options, &mut stdout, &mut stderr).run(&args.paths)
}

fn main() -> ExitCode {
    match run(Args::parse()) {
        Ok(summary) => exit_code(&summary),
        Err(err) => {
            eprintln!("lsdel: {err}");
            ExitCode::FAILURE
        }
    }
}
