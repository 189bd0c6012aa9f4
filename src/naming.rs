//! Mapping between live names and their hidden ("deleted") form.
//!
//! The on-disk convention is a literal `.#` prefix on the base name, kept in
//! the same directory. Data written by earlier runs depends on it, so it must
//! never change. Names are handled as raw bytes; they need not be UTF-8.

use crate::errors::CoreError;
use std::ffi::{OsStr, OsString};
use std::os::unix::ffi::{OsStrExt, OsStringExt};
use std::path::{Component, Path, PathBuf};

/// Prefix marking a name as deleted.
pub const HIDDEN_PREFIX: &str = ".#";

/// Whether a single base name is in hidden form.
pub fn is_hidden(name: &OsStr) -> bool {
    name.as_bytes().starts_with(HIDDEN_PREFIX.as_bytes())
}

/// Hidden form of a live base name.
///
/// Callers check `is_hidden` first; hiding an already hidden name would make
/// the entry unreachable by a single `reveal`.
pub fn hide(name: &OsStr) -> OsString {
    debug_assert!(!is_hidden(name), "hide called on hidden name {name:?}");
    let mut hidden = OsString::from(HIDDEN_PREFIX);
    hidden.push(name);
    hidden
}

/// Live form of a hidden base name.
pub fn reveal(name: &OsStr) -> crate::Result<OsString> {
    name.as_bytes()
        .strip_prefix(HIDDEN_PREFIX.as_bytes())
        .map(|live| OsString::from_vec(live.to_vec()))
        .ok_or_else(|| CoreError::NotHidden(name.to_string_lossy().into_owned()))
}

/// Sibling path holding the hidden form of `path`'s final component.
pub fn hidden_path(path: &Path) -> Option<PathBuf> {
    let name = path.file_name()?;
    Some(path.with_file_name(hide(name)))
}

/// Sibling path holding the live form of `path`'s final component.
pub fn revealed_path(path: &Path) -> crate::Result<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| CoreError::NotHidden(path.display().to_string()))?;
    Ok(path.with_file_name(reveal(name)?))
}

/// Whether the final component of `path` is in hidden form.
pub fn has_hidden_name(path: &Path) -> bool {
    path.file_name().is_some_and(is_hidden)
}

/// `path` with every hidden component shown in its live form. Used for
/// messages so nested restores read as the paths the user will end up with.
pub fn live_path(path: &Path) -> PathBuf {
    path.components()
        .map(|component| match component {
            Component::Normal(name) => match reveal(name) {
                Ok(live) => PathBuf::from(live),
                Err(_) => PathBuf::from(name),
            },
            other => PathBuf::from(other.as_os_str()),
        })
        .collect()
}
