use crate::errors::CoreError;
use crate::fs::FileSystem;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Command family sharing the engine.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum CommandKind {
    Delete,
    Undelete,
    List,
    Expunge,
}

impl CommandKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Undelete => "undelete",
            Self::List => "lsdel",
            Self::Expunge => "expunge",
        }
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Kind of a filesystem entry at the moment it was inspected.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
}

impl EntryKind {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Directory => "directory",
            Self::Symlink => "symbolic link",
        }
    }
}

/// A path together with its kind. Re-derived from the filesystem on each
/// query; never cached across operations.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Entry {
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        Self { path, kind }
    }

    /// Inspects `path` without following a final symlink. `Ok(None)` when
    /// nothing exists there.
    pub fn inspect(fs: &dyn FileSystem, path: &Path) -> crate::Result<Option<Self>> {
        if !fs.exists(path) {
            return Ok(None);
        }
        let metadata = fs.symlink_metadata(path)?;
        let file_type = metadata.file_type();
        let kind = if file_type.is_symlink() {
            EntryKind::Symlink
        } else if file_type.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };
        Ok(Some(Self::new(path.to_path_buf(), kind)))
    }

    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// Number of normal path components; used to order restores.
    pub fn depth(&self) -> usize {
        self.path
            .components()
            .filter(|c| matches!(c, std::path::Component::Normal(_)))
            .count()
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }
}

/// One argument or entry that could not be processed.
#[derive(Debug)]
pub struct Failure {
    pub target: PathBuf,
    pub error: CoreError,
}

/// Result of one command invocation over all of its arguments.
#[derive(Debug)]
pub struct RunSummary {
    pub command: CommandKind,
    pub processed: usize,
    pub skipped: usize,
    pub failures: Vec<Failure>,
}

impl RunSummary {
    pub fn new(command: CommandKind) -> Self {
        Self {
            command,
            processed: 0,
            skipped: 0,
            failures: Vec::new(),
        }
    }

    pub fn record_failure(&mut self, target: impl Into<PathBuf>, error: CoreError) {
        self.failures.push(Failure {
            target: target.into(),
            error,
        });
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn exit_status(&self) -> ExitStatusLike {
        if self.is_success() {
            ExitStatusLike::Ok
        } else {
            ExitStatusLike::Error
        }
    }
}

/// What happened to a single entry that did not fail.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Disposition {
    Done,
    Skipped,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ExitStatusLike {
    Ok,
    Error,
}

impl ExitStatusLike {
    pub fn as_code(self) -> u8 {
        match self {
            Self::Ok => 0,
            Self::Error => 1,
        }
    }
}
