//! Shared utility helpers for argument handling and reporting.

use chrono::{DateTime, TimeDelta, Utc};
use std::fs::Metadata;
use std::os::unix::fs::MetadataExt;
use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime};
use walkdir::WalkDir;

/// Turns a raw argument into a path, dropping trailing separators so that
/// `dir/` names the directory itself, and leading `./` components so that
/// `d` and `./d` locate the same entries.
pub fn argument_path(arg: &str) -> PathBuf {
    let trimmed = arg.trim_end_matches('/');
    if trimmed.is_empty() && !arg.is_empty() {
        return PathBuf::from("/");
    }
    let path = Path::new(trimmed);
    let normalized: PathBuf = path
        .components()
        .skip_while(|component| matches!(component, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        path.to_path_buf()
    } else {
        normalized
    }
}

/// Whether the final component of a raw argument is `.` or `..`.
///
/// Checked on the raw string: `Path` silently drops a trailing `.`.
pub fn is_dot_or_dotdot(arg: &str) -> bool {
    matches!(arg.trim_end_matches('/').rsplit('/').next(), Some(".") | Some(".."))
}

/// When the entry last changed. Renaming updates it, so for a deleted entry
/// this is (close to) the deletion time.
pub fn changed_at(metadata: &Metadata) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(metadata.ctime(), metadata.ctime_nsec() as u32).unwrap_or_default()
}

/// Age of a change time relative to `now`, clamped at zero.
pub fn age_since(changed: DateTime<Utc>, now: SystemTime) -> Duration {
    let delta: TimeDelta = DateTime::<Utc>::from(now) - changed;
    delta.to_std().unwrap_or(Duration::ZERO)
}

/// Whether `age` is at least `days` whole days.
pub fn older_than_days(age: Duration, days: u32) -> bool {
    age >= Duration::from_secs(u64::from(days) * 24 * 60 * 60)
}

/// Bytes used by `path` and everything below it. Symlinks count as
/// themselves and are never followed.
pub fn total_size(path: &Path) -> u64 {
    WalkDir::new(path)
        .follow_links(false)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.metadata().ok())
        .map(|metadata| metadata.len())
        .sum()
}

/// Human readable size rendering shared across commands.
pub fn print_size(bytes: u64) -> String {
    const SUFFIXES: [&str; 5] = ["B", "K", "M", "G", "T"];
    let mut value = bytes as f64;
    let mut idx = 0usize;

    while value >= 1024.0 && idx < SUFFIXES.len() - 1 {
        value /= 1024.0;
        idx += 1;
    }

    if idx == 0 {
        format!("{:.0} {}", value, SUFFIXES[idx])
    } else {
        format!("{:.1} {}", value, SUFFIXES[idx])
    }
}

/// Produces a human readable age string from duration.
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    let mins = secs / 60;
    let hours = mins / 60;
    let days = hours / 24;
    let rem_secs = secs % 60;
    let rem_mins = mins % 60;
    let rem_hours = hours % 24;

    if days > 0 {
        format!("{days}d {rem_hours:02}:{rem_mins:02}:{rem_secs:02}")
    } else if hours > 0 {
        format!("{hours}h {rem_mins:02}:{rem_secs:02}")
    } else if mins > 0 {
        format!("{mins}m {rem_secs:02}s")
    } else {
        format!("{secs}s")
    }
}
