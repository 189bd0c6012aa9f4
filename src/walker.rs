//! Directory listings split into live and hidden children.

use crate::fs::FileSystem;
use crate::models::Entry;
use crate::naming::is_hidden;
use std::path::Path;

fn list_matching(fs: &dyn FileSystem, dir: &Path, hidden: bool) -> crate::Result<Vec<Entry>> {
    let mut children = fs.list_dir(dir)?;
    children.sort();

    let mut entries = Vec::with_capacity(children.len());
    for child in children {
        let Some(name) = child.file_name() else {
            continue;
        };
        if is_hidden(name) != hidden {
            continue;
        }
        // A child may vanish between the listing and the stat.
        if let Some(entry) = Entry::inspect(fs, &child)? {
            entries.push(entry);
        }
    }
    Ok(entries)
}

/// Children of `dir` whose names are not in hidden form.
pub fn list_live(fs: &dyn FileSystem, dir: &Path) -> crate::Result<Vec<Entry>> {
    list_matching(fs, dir, false)
}

/// Children of `dir` whose names are in hidden form.
pub fn list_hidden(fs: &dyn FileSystem, dir: &Path) -> crate::Result<Vec<Entry>> {
    list_matching(fs, dir, true)
}

/// True iff `dir` has no live children. Unreadable directories are an
/// error, never "empty".
pub fn is_empty(fs: &dyn FileSystem, dir: &Path) -> crate::Result<bool> {
    Ok(list_live(fs, dir)?.is_empty())
}
