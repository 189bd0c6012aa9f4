//! Per-invocation configuration.
//!
//! `Flags` is what a command line produces; `Options` is what the engine
//! accepts. The conversion is the only place flag combinations are checked.

use crate::errors::CoreError;
use crate::locator::LocateFlags;

/// Restriction on which kinds of entries a command acts on.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub enum KindFilter {
    #[default]
    Any,
    FilesOnly,
    DirectoriesOnly,
}

/// Raw, unvalidated switches as parsed from a command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    pub recursive: bool,
    pub force: bool,
    pub interactive: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub files_only: bool,
    pub directories_only: bool,
    pub emulate_rm: bool,
    pub follow_links: bool,
    pub follow_mounts: bool,
    pub older_than_days: Option<u32>,
    pub report_size: bool,
    pub long_listing: bool,
}

/// Validated options; never mutated by the engine.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub recursive: bool,
    pub force: bool,
    pub interactive: bool,
    pub dry_run: bool,
    pub verbose: bool,
    pub kind_filter: KindFilter,
    /// Report missing arguments. Cleared by `force`.
    pub report_errors: bool,
    /// Refuse directories without `recursive`, as `rm` does.
    pub emulate_rm: bool,
    pub follow_links: bool,
    pub follow_mounts: bool,
    pub older_than_days: Option<u32>,
    pub report_size: bool,
    pub long_listing: bool,
}

impl TryFrom<Flags> for Options {
    type Error = CoreError;

    fn try_from(flags: Flags) -> crate::Result<Self> {
        let kind_filter = match (flags.files_only, flags.directories_only) {
            (true, true) => {
                return Err(CoreError::invalid_input(
                    "files-only and directories-only are mutually exclusive",
                ))
            }
            (true, false) => KindFilter::FilesOnly,
            (false, true) => KindFilter::DirectoriesOnly,
            (false, false) => KindFilter::Any,
        };

        Ok(Self {
            recursive: flags.recursive,
            force: flags.force,
            interactive: flags.interactive,
            dry_run: flags.dry_run,
            verbose: flags.verbose,
            kind_filter,
            report_errors: !flags.force,
            emulate_rm: flags.emulate_rm,
            follow_links: flags.follow_links,
            follow_mounts: flags.follow_mounts,
            older_than_days: flags.older_than_days,
            report_size: flags.report_size,
            long_listing: flags.long_listing,
        })
    }
}

impl Options {
    /// Traversal used by undelete and expunge: directories-only restores a
    /// directory by itself, without its contents.
    pub fn restore_flags(&self) -> LocateFlags {
        let recurse = self.recursive && self.kind_filter != KindFilter::DirectoriesOnly;
        LocateFlags {
            recurse_deleted_subdirs: recurse,
            recurse_live_subdirs: recurse,
            follow_links: self.follow_links,
            follow_mounts: self.follow_mounts,
        }
    }

    /// Whether an entry of this kind passes the kind filter.
    pub fn accepts_directory(&self, is_dir: bool) -> bool {
        match self.kind_filter {
            KindFilter::Any => true,
            KindFilter::FilesOnly => !is_dir,
            KindFilter::DirectoriesOnly => is_dir,
        }
    }
}
