//! Destructive, last-write-wins handling of rename destinations.
//!
//! Confirmation happens before these functions are called; once called, an
//! existing destination is gone.

use crate::boundary::is_mount_point;
use crate::errors::CoreError;
use crate::fs::FileSystem;
use crate::models::{Entry, EntryKind};
use std::path::Path;

/// Removes `entry` from disk. Directories go recursively, except mount
/// points, which are refused.
pub fn remove_entry(fs: &dyn FileSystem, entry: &Entry) -> crate::Result<()> {
    match entry.kind {
        EntryKind::Directory => {
            if is_mount_point(fs, &entry.path) {
                return Err(CoreError::CollisionBoundary(entry.path.clone()));
            }
            fs.remove_dir_all(&entry.path)
        }
        EntryKind::File | EntryKind::Symlink => fs.remove_file(&entry.path),
    }
}

/// Makes sure nothing exists at `target`, removing whatever is there.
///
/// If the target is still present afterwards, something else is writing to
/// this tree and the whole invocation stops.
pub fn clear_target(fs: &dyn FileSystem, target: &Path) -> crate::Result<()> {
    let Some(existing) = Entry::inspect(fs, target)? else {
        return Ok(());
    };
    tracing::info!(
        path = %target.display(),
        kind = existing.kind.describe(),
        "removing existing entry in the way"
    );
    remove_entry(fs, &existing)?;

    if fs.exists(target) {
        return Err(CoreError::InvariantViolation(format!(
            "{} still exists after removal",
            target.display()
        )));
    }
    Ok(())
}
