//! Mount point and symlink detection used to stop implicit recursion.

use crate::fs::FileSystem;
use std::path::Path;

/// True when `path` sits on a different device than its parent, or when it
/// is its own parent (the filesystem root).
///
/// Unreadable paths are reported as mount points so recursion stops there.
pub fn is_mount_point(fs: &dyn FileSystem, path: &Path) -> bool {
    let (Ok((own_dev, own_ino)), Ok((parent_dev, parent_ino))) =
        (fs.file_id(path), fs.file_id(&path.join("..")))
    else {
        return true;
    };
    own_dev != parent_dev || own_ino == parent_ino
}

/// True when the path itself is a symbolic link.
pub fn is_symlink(fs: &dyn FileSystem, path: &Path) -> bool {
    fs.symlink_metadata(path)
        .map(|metadata| metadata.file_type().is_symlink())
        .unwrap_or(false)
}

/// Whether implicit recursion may enter `dir`.
pub fn may_descend(fs: &dyn FileSystem, dir: &Path, follow_links: bool, follow_mounts: bool) -> bool {
    if !follow_links && is_symlink(fs, dir) {
        tracing::debug!(path = %dir.display(), "not following symbolic link");
        return false;
    }
    if !follow_mounts && is_mount_point(fs, dir) {
        tracing::debug!(path = %dir.display(), "not crossing mount point");
        return false;
    }
    true
}
