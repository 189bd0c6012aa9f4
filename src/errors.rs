use std::{io, path::PathBuf};

/// Shared error type used by the engine and every command crate.
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
    /// The argument resolves to no live (or, for undelete, hidden) entry.
    #[error("{0}: no such file or directory")]
    NotFound(PathBuf),

    /// The argument names `.` or `..`.
    #[error("{0}: refusing to operate on `.` or `..`")]
    InvalidTarget(PathBuf),

    /// The argument is already in hidden form.
    #[error("{0}: already deleted")]
    AlreadyDeleted(PathBuf),

    #[error("{0}: directory not empty")]
    DirectoryNotEmpty(PathBuf),

    #[error("{0}: is a directory")]
    NotAFile(PathBuf),

    #[error("{0}: not a directory")]
    NotADirectory(PathBuf),

    /// File system I/O failure (permission, read error, failed rename...).
    #[error("{0}: {1}")]
    Io(PathBuf, #[source] io::Error),

    /// A collision target is a mount point and will not be removed.
    #[error("{0}: is a mount point, refusing to remove it")]
    CollisionBoundary(PathBuf),

    /// A name was expected to be in hidden form but is not.
    #[error("{0}: not a deleted name")]
    NotHidden(String),

    /// Not processed because an entry nested beneath it failed.
    #[error("{0}: not processed, a nested entry failed")]
    Aborted(PathBuf),

    /// An operation was rejected due to configuration/argument issues.
    #[error("invalid command input: {0}")]
    InvalidInput(String),

    /// The filesystem changed underneath us; the whole invocation stops.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

impl CoreError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn io(path: impl Into<PathBuf>, error: io::Error) -> Self {
        Self::Io(path.into(), error)
    }

    /// Whether this error must stop the whole invocation instead of only
    /// the current argument.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::InvariantViolation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Shared result alias for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
