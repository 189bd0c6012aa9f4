//! lsdel: report deleted entries without touching them.

use crate::errors::CoreError;
use crate::fs::FileSystem;
use crate::helpers::{
    age_since, argument_path, changed_at, format_duration, is_dot_or_dotdot, older_than_days, print_size,
    total_size,
};
use crate::locator::{find_deleted_files, LocateFlags};
use crate::models::{CommandKind, Entry, RunSummary};
use crate::naming::{has_hidden_name, live_path, revealed_path};
use crate::options::Options;
use crate::walker;
use std::collections::HashSet;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// A deleted entry together with the facts lsdel prints about it.
#[derive(Debug, Clone)]
pub struct DeletedItem {
    pub entry: Entry,
    pub age: Duration,
    pub size: u64,
}

/// Age of `entry` (time since its last change) according to the clock of `fs`.
pub fn entry_age(fs: &dyn FileSystem, entry: &Entry) -> crate::Result<Duration> {
    let metadata = fs.symlink_metadata(&entry.path)?;
    Ok(age_since(changed_at(&metadata), fs.now()))
}

pub struct ListExecutor<'a> {
    fs: &'a dyn FileSystem,
    options: &'a Options,
    out: &'a mut dyn Write,
    status: &'a mut dyn Write,
}

impl<'a> ListExecutor<'a> {
    pub fn new(
        fs: &'a dyn FileSystem,
        options: &'a Options,
        out: &'a mut dyn Write,
        status: &'a mut dyn Write,
    ) -> Self {
        Self {
            fs,
            options,
            out,
            status,
        }
    }

    /// Lists every argument; no arguments means the current directory.
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> crate::Result<RunSummary> {
        let mut summary = RunSummary::new(CommandKind::List);
        let args: Vec<&str> = if args.is_empty() {
            vec!["."]
        } else {
            args.iter().map(AsRef::as_ref).collect()
        };

        let mut seen = HashSet::new();
        let mut total = 0u64;
        for arg in args {
            match self.collect(arg) {
                Ok(items) => {
                    for item in items.into_iter().filter(|item| seen.insert(item.entry.path.clone())) {
                        self.print_item(&item);
                        total += item.size;
                        summary.processed += 1;
                    }
                }
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) if err.is_not_found() && !self.options.report_errors => summary.skipped += 1,
                Err(err) => {
                    let _ = writeln!(self.status, "{}: {err}", CommandKind::List);
                    summary.record_failure(argument_path(arg), err);
                }
            }
        }

        if self.options.report_size {
            let _ = writeln!(self.out, "total: {}", print_size(total));
        }
        Ok(summary)
    }

    /// Deleted items for one argument, after kind and age filters.
    pub fn collect(&self, arg: &str) -> crate::Result<Vec<DeletedItem>> {
        let mut path = argument_path(arg);
        if has_hidden_name(&path) {
            path = revealed_path(&path)?;
        }

        let entries = if is_dot_or_dotdot(arg) {
            // `.` and `..` cannot be deleted themselves; list what is inside.
            self.hidden_children(&path)?
        } else {
            let mut entries = find_deleted_files(self.fs, &path, &self.locate_flags())?;
            if !self.options.recursive && Entry::inspect(self.fs, &path)?.is_some_and(|e| e.is_dir()) {
                entries.extend(self.hidden_children(&path)?);
            }
            entries
        };

        let mut items = Vec::new();
        for entry in entries {
            if !self.options.accepts_directory(entry.is_dir()) {
                continue;
            }
            let age = entry_age(self.fs, &entry)?;
            if let Some(days) = self.options.older_than_days {
                if !older_than_days(age, days) {
                    continue;
                }
            }
            let size = if self.options.long_listing || self.options.report_size {
                total_size(&entry.path)
            } else {
                0
            };
            items.push(DeletedItem { entry, age, size });
        }

        if items.is_empty() {
            return Err(CoreError::NotFound(path));
        }
        Ok(items)
    }

    fn locate_flags(&self) -> LocateFlags {
        LocateFlags {
            recurse_deleted_subdirs: self.options.recursive,
            recurse_live_subdirs: self.options.recursive,
            follow_links: self.options.follow_links,
            follow_mounts: self.options.follow_mounts,
        }
    }

    fn hidden_children(&self, dir: &Path) -> crate::Result<Vec<Entry>> {
        if !self.options.recursive {
            return walker::list_hidden(self.fs, dir);
        }
        let flags = self.locate_flags();
        let mut found = Vec::new();
        for live in walker::list_live(self.fs, dir)? {
            if live.is_dir() {
                found.extend(find_deleted_files(self.fs, &live.path, &flags)?);
            }
        }
        for hidden in walker::list_hidden(self.fs, dir)? {
            found.extend(find_deleted_files(self.fs, &revealed_path(&hidden.path)?, &flags)?);
        }
        Ok(found)
    }

    fn print_item(&mut self, item: &DeletedItem) {
        let shown = live_path(&item.entry.path);
        let line = if self.options.long_listing {
            format!(
                "{:>14}  {:>8}  {}",
                format_duration(item.age),
                print_size(item.size),
                shown.display()
            )
        } else {
            shown.display().to_string()
        };
        let _ = writeln!(self.out, "{line}");
    }
}
