//! Undelete: find hidden entries for each argument and rename them back.

use crate::collision::clear_target;
use crate::errors::CoreError;
use crate::fs::FileSystem;
use crate::helpers::{argument_path, is_dot_or_dotdot};
use crate::locator::{find_deleted_files, LocateFlags};
use crate::models::{CommandKind, Disposition, Entry, RunSummary};
use crate::naming::{has_hidden_name, live_path, revealed_path};
use crate::options::Options;
use crate::orderer::order_for_restore;
use crate::prompt::Prompter;
use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Deleted entries for one raw argument, already filtered by kind. A hidden
/// final name (`dir/.#x`) is accepted and treated as `dir/x`.
pub(crate) fn locate_argument(
    fs: &dyn FileSystem,
    options: &Options,
    flags: &LocateFlags,
    arg: &str,
) -> crate::Result<Vec<Entry>> {
    let mut path = argument_path(arg);
    if is_dot_or_dotdot(arg) {
        return Err(CoreError::InvalidTarget(path));
    }
    if has_hidden_name(&path) {
        path = revealed_path(&path)?;
    }

    let found: Vec<Entry> = find_deleted_files(fs, &path, flags)?
        .into_iter()
        .filter(|entry| options.accepts_directory(entry.is_dir()))
        .collect();
    if found.is_empty() {
        return Err(CoreError::NotFound(path));
    }
    Ok(found)
}

/// Collects the located entries of every argument into one de-duplicated
/// batch. Per-argument failures go to `on_error`; fatal ones are returned.
pub(crate) fn collect_batch<S, F>(
    fs: &dyn FileSystem,
    options: &Options,
    flags: &LocateFlags,
    args: &[S],
    mut on_error: F,
) -> crate::Result<Vec<Entry>>
where
    S: AsRef<str>,
    F: FnMut(&str, CoreError),
{
    let mut seen = HashSet::new();
    let mut batch = Vec::new();
    for arg in args {
        let arg = arg.as_ref();
        match locate_argument(fs, options, flags, arg) {
            Ok(entries) => {
                batch.extend(entries.into_iter().filter(|entry| seen.insert(entry.path.clone())));
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => on_error(arg, err),
        }
    }
    Ok(batch)
}

pub struct UndeleteExecutor<'a> {
    fs: &'a dyn FileSystem,
    options: &'a Options,
    prompter: &'a mut dyn Prompter,
    status: &'a mut dyn Write,
}

impl<'a> UndeleteExecutor<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        options: &'a Options,
        prompter: &'a mut dyn Prompter,
        status: &'a mut dyn Write,
    ) -> Self {
        Self {
            fs,
            options,
            prompter,
            status,
        }
    }

    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> crate::Result<RunSummary> {
        let mut summary = RunSummary::new(CommandKind::Undelete);
        let flags = self.options.restore_flags();

        let report_errors = self.options.report_errors;
        let status = &mut *self.status;
        let batch = collect_batch(self.fs, self.options, &flags, args, |arg, err| {
            if err.is_not_found() && !report_errors {
                debug!(arg, "nothing to undelete");
                summary.skipped += 1;
                return;
            }
            let _ = writeln!(status, "{}: {err}", CommandKind::Undelete);
            summary.record_failure(argument_path(arg), err);
        })?;

        let mut failed: Vec<PathBuf> = Vec::new();
        for entry in order_for_restore(batch) {
            if failed.iter().any(|path| path.starts_with(&entry.path)) {
                let err = CoreError::Aborted(live_path(&entry.path));
                let _ = writeln!(self.status, "{}: {err}", CommandKind::Undelete);
                failed.push(entry.path.clone());
                summary.record_failure(entry.path, err);
                continue;
            }
            match self.restore_entry(&entry) {
                Ok(Disposition::Done) => summary.processed += 1,
                Ok(Disposition::Skipped) => summary.skipped += 1,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(path = %entry.path.display(), error = %err, "undelete failed");
                    let _ = writeln!(self.status, "{}: {err}", CommandKind::Undelete);
                    failed.push(entry.path.clone());
                    summary.record_failure(entry.path, err);
                }
            }
        }
        Ok(summary)
    }

    fn restore_entry(&mut self, entry: &Entry) -> crate::Result<Disposition> {
        let target = revealed_path(&entry.path)?;
        let shown = live_path(&entry.path);

        if self.options.interactive
            && !self.prompter.confirm(&format!(
                "undelete: undelete {} {}?",
                entry.kind.describe(),
                shown.display()
            ))
        {
            return Ok(Disposition::Skipped);
        }

        if self.fs.exists(&target) {
            if self.options.interactive
                && !self.options.force
                && !self
                    .prompter
                    .confirm(&format!("undelete: {} exists; overwrite?", shown.display()))
            {
                return Ok(Disposition::Skipped);
            }
            if self.options.dry_run {
                let _ = writeln!(self.status, "undelete: {}: would be overwritten", shown.display());
            } else {
                clear_target(self.fs, &target)?;
            }
        }

        if self.options.dry_run {
            let _ = writeln!(self.status, "undelete: {}: would be undeleted", shown.display());
            return Ok(Disposition::Done);
        }
        self.fs.rename(&entry.path, &target)?;
        info!(from = %entry.path.display(), to = %target.display(), "undeleted");
        if self.options.verbose {
            let _ = writeln!(self.status, "undelete: {}: undeleted", shown.display());
        }
        Ok(Disposition::Done)
    }
}
