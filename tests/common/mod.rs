#![allow(dead_code)]

use delete_cli_core::{CoreError, FileSystem, Flags, Options, RealFileSystem};
use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// Real filesystem with a few knobs: one rename that always fails, a clock
/// running ahead of the wall clock, removals that silently do nothing, and
/// one path reported as living on another device.
#[derive(Debug, Default)]
pub struct ScriptedFs {
    pub fail_rename_of: Option<PathBuf>,
    pub clock_ahead: Duration,
    pub ignore_removals: bool,
    pub foreign_device: Option<PathBuf>,
}

impl ScriptedFs {
    pub fn failing_rename_of(path: impl Into<PathBuf>) -> Self {
        Self {
            fail_rename_of: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn mounted_at(path: impl Into<PathBuf>) -> Self {
        Self {
            foreign_device: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn days_ahead(days: u64) -> Self {
        Self {
            clock_ahead: Duration::from_secs(days * 24 * 60 * 60),
            ..Self::default()
        }
    }
}

impl FileSystem for ScriptedFs {
    fn now(&self) -> SystemTime {
        SystemTime::now() + self.clock_ahead
    }

    fn exists(&self, path: &Path) -> bool {
        RealFileSystem.exists(path)
    }

    fn metadata(&self, path: &Path) -> delete_cli_core::Result<Metadata> {
        RealFileSystem.metadata(path)
    }

    fn symlink_metadata(&self, path: &Path) -> delete_cli_core::Result<Metadata> {
        RealFileSystem.symlink_metadata(path)
    }

    fn file_id(&self, path: &Path) -> delete_cli_core::Result<(u64, u64)> {
        let (dev, ino) = RealFileSystem.file_id(path)?;
        if self.foreign_device.as_deref() == Some(path) {
            return Ok((dev.wrapping_add(1), ino));
        }
        Ok((dev, ino))
    }

    fn is_writable(&self, path: &Path) -> bool {
        RealFileSystem.is_writable(path)
    }

    fn rename(&self, from: &Path, to: &Path) -> delete_cli_core::Result<()> {
        if self.fail_rename_of.as_deref() == Some(from) {
            return Err(CoreError::io(from, io::Error::from(io::ErrorKind::PermissionDenied)));
        }
        RealFileSystem.rename(from, to)
    }

    fn remove_file(&self, path: &Path) -> delete_cli_core::Result<()> {
        if self.ignore_removals {
            return Ok(());
        }
        RealFileSystem.remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> delete_cli_core::Result<()> {
        if self.ignore_removals {
            return Ok(());
        }
        RealFileSystem.remove_dir_all(path)
    }

    fn list_dir(&self, path: &Path) -> delete_cli_core::Result<Vec<PathBuf>> {
        RealFileSystem.list_dir(path)
    }
}

/// Builds options from flags, panicking on invalid combinations.
pub fn options(flags: Flags) -> Options {
    Options::try_from(flags).unwrap()
}

pub fn arg(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap()
}
