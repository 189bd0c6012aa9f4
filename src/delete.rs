//! Delete: hide live entries by renaming them in place.

use crate::collision::clear_target;
use crate::errors::CoreError;
use crate::fs::FileSystem;
use crate::helpers::{argument_path, is_dot_or_dotdot};
use crate::models::{CommandKind, Disposition, Entry, EntryKind, RunSummary};
use crate::naming::{has_hidden_name, hide, is_hidden};
use crate::options::{KindFilter, Options};
use crate::prompt::Prompter;
use crate::walker;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info, warn};

/// Runs delete over a list of arguments. Arguments are independent: one
/// failing never stops the next. Within a recursive delete the first failing
/// child stops that directory.
pub struct DeleteExecutor<'a> {
    fs: &'a dyn FileSystem,
    options: &'a Options,
    prompter: &'a mut dyn Prompter,
    status: &'a mut dyn Write,
}

impl<'a> DeleteExecutor<'a> {
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
        let mut summary = RunSummary::new(CommandKind::Delete);
        for arg in args {
            let arg = arg.as_ref();
            match self.delete_argument(arg) {
                Ok(Disposition::Done) => summary.processed += 1,
                Ok(Disposition::Skipped) => summary.skipped += 1,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) if err.is_not_found() && !self.options.report_errors => {
                    debug!(arg, "ignoring missing argument");
                    summary.skipped += 1;
                }
                Err(err) => {
                    warn!(arg, error = %err, "delete failed");
                    let _ = writeln!(self.status, "{}: {err}", CommandKind::Delete);
                    summary.record_failure(argument_path(arg), err);
                }
            }
        }
        Ok(summary)
    }

    fn delete_argument(&mut self, arg: &str) -> crate::Result<Disposition> {
        let path = argument_path(arg);
        if is_dot_or_dotdot(arg) {
            return Err(CoreError::InvalidTarget(path));
        }
        if has_hidden_name(&path) {
            return Err(CoreError::AlreadyDeleted(path));
        }
        let entry = Entry::inspect(self.fs, &path)?.ok_or_else(|| CoreError::NotFound(path.clone()))?;
        self.delete_entry(&entry)
    }

    fn delete_entry(&mut self, entry: &Entry) -> crate::Result<Disposition> {
        let shown = entry.path.display().to_string();
        if self.options.interactive
            && !self
                .prompter
                .confirm(&format!("delete: delete {} {shown}?", entry.kind.describe()))
        {
            return Ok(Disposition::Skipped);
        }
        if !self.options.force
            && entry.kind != EntryKind::Symlink
            && !self.fs.is_writable(&entry.path)
            && !self
                .prompter
                .confirm(&format!("delete: {shown}: write protected; delete anyway?"))
        {
            return Ok(Disposition::Skipped);
        }

        match entry.kind {
            EntryKind::Directory => self.delete_directory(entry),
            EntryKind::File | EntryKind::Symlink => {
                if self.options.kind_filter == KindFilter::DirectoriesOnly {
                    return Err(CoreError::NotADirectory(entry.path.clone()));
                }
                self.hide_entry(&entry.path)
            }
        }
    }

    fn delete_directory(&mut self, entry: &Entry) -> crate::Result<Disposition> {
        let files_only = self.options.kind_filter == KindFilter::FilesOnly || self.options.emulate_rm;
        if files_only && !self.options.recursive {
            return Err(CoreError::NotAFile(entry.path.clone()));
        }
        if walker::is_empty(self.fs, &entry.path)? {
            return self.hide_entry(&entry.path);
        }
        if !self.options.recursive || self.options.kind_filter == KindFilter::DirectoriesOnly {
            return Err(CoreError::DirectoryNotEmpty(entry.path.clone()));
        }

        let mut declined = false;
        for child in walker::list_live(self.fs, &entry.path)? {
            if self.delete_entry(&child)? == Disposition::Skipped {
                declined = true;
            }
        }
        if declined {
            debug!(path = %entry.path.display(), "keeping directory, some children were kept");
            return Ok(Disposition::Skipped);
        }
        self.hide_entry(&entry.path)
    }

    fn hide_entry(&mut self, path: &Path) -> crate::Result<Disposition> {
        let name = path
            .file_name()
            .ok_or_else(|| CoreError::InvalidTarget(path.to_path_buf()))?;
        if is_hidden(name) {
            return Err(CoreError::AlreadyDeleted(path.to_path_buf()));
        }
        let target = path.with_file_name(hide(name));

        if self.options.dry_run {
            let _ = writeln!(self.status, "delete: {}: would be deleted", path.display());
            return Ok(Disposition::Done);
        }
        clear_target(self.fs, &target)?;
        self.fs.rename(path, &target)?;
        info!(from = %path.display(), to = %target.display(), "deleted");
        if self.options.verbose {
            let _ = writeln!(self.status, "delete: {}: deleted", path.display());
        }
        Ok(Disposition::Done)
    }
}
