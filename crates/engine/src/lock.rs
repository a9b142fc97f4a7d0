// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-job advisory lock files
//!
//! Exclusion comes from the OS advisory lock alone. The pid written into the
//! file is diagnostic, plus an input to [`lock_age`].

use fs2::FileExt;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Errors from lock operations
#[derive(Debug, Error)]
pub enum LockError {
    /// Another live process holds the lock
    #[error("Job is still locked by pid {holder} ({})!", path.display())]
    Contended { path: PathBuf, holder: String },
    #[error("Lock NOT held - bug? Lockfile: {}", path.display())]
    NotHeld { path: PathBuf },
    #[error("lock file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LockError {
    /// Contention is routine; every other lock failure is fatal
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LockError::Contended { .. })
    }

    fn io(path: &Path, source: io::Error) -> Self {
        LockError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// An acquired lock; released explicitly with [`LockHandle::release`]
#[derive(Debug)]
pub struct LockHandle {
    path: PathBuf,
    file: File,
}

/// Take the lock at `path` without blocking, creating the file if needed,
/// and record the current pid in it
pub fn acquire(path: &Path) -> Result<LockHandle, LockError> {
    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .create(true)
        .truncate(false)
        .open(path)
        .map_err(|e| LockError::io(path, e))?;

    if let Err(e) = file.try_lock_exclusive() {
        if is_contention(&e) {
            let holder = std::fs::read_to_string(path).unwrap_or_default();
            let holder = match holder.trim() {
                "" => "unknown".to_string(),
                pid => pid.to_string(),
            };
            return Err(LockError::Contended {
                path: path.to_path_buf(),
                holder,
            });
        }
        return Err(LockError::io(path, e));
    }

    write_owner(&mut file, &std::process::id().to_string()).map_err(|e| LockError::io(path, e))?;

    Ok(LockHandle {
        path: path.to_path_buf(),
        file,
    })
}

impl LockHandle {
    /// Clear the recorded owner and drop the OS lock. The file itself stays.
    pub fn release(mut self) -> Result<(), LockError> {
        if !self.path.exists() {
            return Err(LockError::NotHeld { path: self.path });
        }
        write_owner(&mut self.file, "").map_err(|e| LockError::io(&self.path, e))?;
        FileExt::unlock(&self.file).map_err(|e| LockError::io(&self.path, e))
    }
}

/// Seconds since the lock at `path` was taken by a process that is still
/// alive.
///
/// Returns 0 when the file is missing or empty, holds something other than a
/// pid, or names a process that no longer exists.
pub fn lock_age(path: &Path, now: SystemTime) -> u64 {
    let Ok(content) = std::fs::read_to_string(path) else {
        return 0;
    };
    let Ok(pid) = content.trim().parse::<i32>() else {
        return 0;
    };
    if !process_alive(pid) {
        return 0;
    }

    std::fs::metadata(path)
        .and_then(|meta| meta.modified())
        .ok()
        .and_then(|modified| now.duration_since(modified).ok())
        .map(|age| age.as_secs())
        .unwrap_or(0)
}

fn write_owner(file: &mut File, owner: &str) -> io::Result<()> {
    file.set_len(0)?;
    file.seek(SeekFrom::Start(0))?;
    file.write_all(owner.as_bytes())?;
    file.flush()
}

fn is_contention(e: &io::Error) -> bool {
    e.kind() == io::ErrorKind::WouldBlock
        || e.raw_os_error() == fs2::lock_contended_error().raw_os_error()
}

#[cfg(unix)]
fn process_alive(pid: i32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    if pid <= 0 {
        return false;
    }
    matches!(kill(Pid::from_raw(pid), None), Ok(()) | Err(Errno::EPERM))
}

#[cfg(not(unix))]
fn process_alive(pid: i32) -> bool {
    pid > 0
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
