//! Expunge: permanently remove deleted entries.

use crate::collision::remove_entry;
use crate::fs::FileSystem;
use crate::helpers::{argument_path, older_than_days, print_size, total_size};
use crate::list::entry_age;
use crate::models::{CommandKind, Disposition, Entry, RunSummary};
use crate::naming::live_path;
use crate::options::Options;
use crate::orderer::order_for_restore;
use crate::prompt::Prompter;
use crate::undelete::collect_batch;
use std::io::Write;
use tracing::{debug, info, warn};

pub struct ExpungeExecutor<'a> {
    fs: &'a dyn FileSystem,
    options: &'a Options,
    prompter: &'a mut dyn Prompter,
    status: &'a mut dyn Write,
}

impl<'a> ExpungeExecutor<'a> {
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
        let mut summary = RunSummary::new(CommandKind::Expunge);
        let flags = self.options.restore_flags();

        let report_errors = self.options.report_errors;
        let status = &mut *self.status;
        let batch = collect_batch(self.fs, self.options, &flags, args, |arg, err| {
            if err.is_not_found() && !report_errors {
                summary.skipped += 1;
                return;
            }
            let _ = writeln!(status, "{}: {err}", CommandKind::Expunge);
            summary.record_failure(argument_path(arg), err);
        })?;

        let mut selected = Vec::with_capacity(batch.len());
        for entry in batch {
            match self.is_old_enough(&entry) {
                Ok(true) => selected.push(entry),
                Ok(false) => debug!(path = %entry.path.display(), "too recent to expunge"),
                Err(err) => {
                    let _ = writeln!(self.status, "{}: {err}", CommandKind::Expunge);
                    summary.record_failure(entry.path, err);
                }
            }
        }

        // Removing a directory takes everything nested in it along.
        let roots: Vec<Entry> = selected
            .iter()
            .filter(|entry| {
                !selected
                    .iter()
                    .any(|other| other.path != entry.path && entry.path.starts_with(&other.path))
            })
            .cloned()
            .collect();

        let mut reclaimed = 0u64;
        for entry in order_for_restore(roots) {
            match self.expunge_entry(&entry) {
                Ok((Disposition::Done, size)) => {
                    summary.processed += 1;
                    reclaimed += size;
                }
                Ok((Disposition::Skipped, _)) => summary.skipped += 1,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => {
                    warn!(path = %entry.path.display(), error = %err, "expunge failed");
                    let _ = writeln!(self.status, "{}: {err}", CommandKind::Expunge);
                    summary.record_failure(entry.path, err);
                }
            }
        }

        if self.options.report_size {
            let verb = if self.options.dry_run { "would free" } else { "freed" };
            let _ = writeln!(self.status, "expunge: {verb} {}", print_size(reclaimed));
        }
        Ok(summary)
    }

    fn is_old_enough(&self, entry: &Entry) -> crate::Result<bool> {
        match self.options.older_than_days {
            Some(days) => Ok(older_than_days(entry_age(self.fs, entry)?, days)),
            None => Ok(true),
        }
    }

    fn expunge_entry(&mut self, entry: &Entry) -> crate::Result<(Disposition, u64)> {
        let shown = live_path(&entry.path);
        if self.options.interactive
            && !self.prompter.confirm(&format!(
                "expunge: permanently remove {} {}?",
                entry.kind.describe(),
                shown.display()
            ))
        {
            return Ok((Disposition::Skipped, 0));
        }

        let size = total_size(&entry.path);
        if self.options.dry_run {
            let _ = writeln!(self.status, "expunge: {}: would be expunged", shown.display());
            return Ok((Disposition::Done, size));
        }
        remove_entry(self.fs, entry)?;
        info!(path = %entry.path.display(), bytes = size, "expunged");
        if self.options.verbose {
            let _ = writeln!(self.status, "expunge: {}: expunged", shown.display());
        }
        Ok((Disposition::Done, size))
    }
}
