//! Finds the hidden entries that represent "the deleted version" of a path.
//!
//! A recursive delete hides every level independently, so undeleting a
//! directory has to find each nested hidden name rather than one ancestor.
//! Recursion works on *logical* names: inside a directory, a hidden child
//! `.#y` and a live child `y` both stand for the name `y`, and the locator is
//! applied to `dir/y`. That keeps `hide` from ever seeing a hidden name.

use crate::boundary::may_descend;
use crate::fs::FileSystem;
use crate::models::{Entry, EntryKind};
use crate::naming::{hidden_path, is_hidden, reveal};
use std::collections::BTreeSet;
use std::path::Path;

/// Traversal switches for [`find_deleted_files`].
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct LocateFlags {
    /// Descend into hidden directories that were found as candidates.
    pub recurse_deleted_subdirs: bool,
    /// Descend into the live directory at the requested path.
    pub recurse_live_subdirs: bool,
    /// Let implicit recursion follow symbolic links.
    pub follow_links: bool,
    /// Let implicit recursion cross mount points.
    pub follow_mounts: bool,
}

/// Deleted entries corresponding to `path`, parents before their nested
/// entries. An empty result is a normal outcome, not an error.
pub fn find_deleted_files(
    fs: &dyn FileSystem,
    path: &Path,
    flags: &LocateFlags,
) -> crate::Result<Vec<Entry>> {
    let mut found = Vec::new();
    locate(fs, path, flags, true, &mut found)?;
    tracing::debug!(path = %path.display(), count = found.len(), "located deleted entries");
    Ok(found)
}

fn locate(
    fs: &dyn FileSystem,
    path: &Path,
    flags: &LocateFlags,
    explicit: bool,
    found: &mut Vec<Entry>,
) -> crate::Result<()> {
    if let Some(hidden) = hidden_path(path) {
        if let Some(candidate) = Entry::inspect(fs, &hidden)? {
            let candidate_path = candidate.path.clone();
            let descend = flags.recurse_deleted_subdirs
                && is_traversable(fs, &candidate, flags)
                && (explicit || may_descend(fs, &candidate_path, flags.follow_links, flags.follow_mounts));
            found.push(candidate);
            if descend {
                locate_children(fs, &candidate_path, flags, found)?;
            }
        }
    }

    if flags.recurse_live_subdirs {
        if let Some(live) = Entry::inspect(fs, path)? {
            if is_traversable(fs, &live, flags)
                && (explicit || may_descend(fs, path, flags.follow_links, flags.follow_mounts))
            {
                locate_children(fs, path, flags, found)?;
            }
        }
    }
    Ok(())
}

/// Applies the locator to every logical name inside `dir`.
fn locate_children(
    fs: &dyn FileSystem,
    dir: &Path,
    flags: &LocateFlags,
    found: &mut Vec<Entry>,
) -> crate::Result<()> {
    let mut names = BTreeSet::new();
    for child in fs.list_dir(dir)? {
        let Some(name) = child.file_name() else {
            continue;
        };
        if is_hidden(name) {
            names.insert(reveal(name)?);
        } else {
            names.insert(name.to_os_string());
        }
    }

    for name in names {
        // `.#` alone reveals to an empty name; nothing can be derived from it.
        if name.is_empty() {
            continue;
        }
        locate(fs, &dir.join(name), flags, false, found)?;
    }
    Ok(())
}

/// Directories are traversable; symlinks only when links are followed and
/// they point at a directory.
fn is_traversable(fs: &dyn FileSystem, entry: &Entry, flags: &LocateFlags) -> bool {
    match entry.kind {
        EntryKind::Directory => true,
        EntryKind::Symlink => {
            flags.follow_links && fs.metadata(&entry.path).map(|m| m.is_dir()).unwrap_or(false)
        }
        EntryKind::File => false,
    }
}
