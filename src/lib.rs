//! Shared Rust foundation for the delete/undelete command suite.
//!
//! Deleting renames an entry to `.#name` in the same directory; undeleting
//! renames it back. Everything here is synchronous and stateless between
//! calls: the filesystem is the only source of truth.

pub mod boundary;
pub mod cli;
pub mod collision;
pub mod delete;
pub mod errors;
pub mod expunge;
pub mod fs;
pub mod helpers;
pub mod list;
pub mod locator;
pub mod models;
pub mod naming;
pub mod options;
pub mod orderer;
pub mod prompt;
pub mod undelete;
pub mod walker;

pub use delete::DeleteExecutor;
pub use errors::{CoreError, Result};
pub use expunge::ExpungeExecutor;
pub use fs::{FileSystem, RealFileSystem};
pub use list::{DeletedItem, ListExecutor};
pub use locator::{find_deleted_files, LocateFlags};
pub use models::{CommandKind, Disposition, Entry, EntryKind, ExitStatusLike, Failure, RunSummary};
pub use naming::{hide, is_hidden, reveal, HIDDEN_PREFIX};
pub use options::{Flags, KindFilter, Options};
pub use orderer::order_for_restore;
pub use prompt::{FixedAnswer, Prompter, StdinPrompter};
pub use undelete::UndeleteExecutor;

/// Re-export a small stable API surface for command crates.
pub mod prelude {
    pub use crate::{
        cli::{arguments_or_stdin, exit_code, init_logging},
        errors::{CoreError, Result},
        fs::{FileSystem, RealFileSystem},
        models::*,
        options::{Flags, KindFilter, Options},
        prompt::{FixedAnswer, Prompter, StdinPrompter},
        DeleteExecutor, ExpungeExecutor, ListExecutor, UndeleteExecutor,
    };
}
