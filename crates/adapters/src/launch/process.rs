// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! OS process launcher

use super::{LaunchError, LaunchRequest, Launcher};
use async_trait::async_trait;
use std::fs::{self, File, OpenOptions};
use std::process::{Command, Stdio};
use tk_core::Platform;

/// How a launched process is detached from its parent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchMode {
    /// POSIX background job in its own process group
    Background,
    /// Windows process without a console, in a new process group
    Detached,
}

impl LaunchMode {
    pub fn for_platform(platform: Platform) -> Self {
        match platform {
            Platform::Unix => LaunchMode::Background,
            Platform::Windows => LaunchMode::Detached,
        }
    }
}

/// Launches requests as real OS processes
#[derive(Clone, Debug)]
pub struct ProcessLauncher {
    mode: LaunchMode,
}

impl ProcessLauncher {
    pub fn new() -> Self {
        Self::with_mode(LaunchMode::for_platform(Platform::current()))
    }

    pub fn with_mode(mode: LaunchMode) -> Self {
        Self { mode }
    }

    fn command(&self, request: &LaunchRequest) -> Result<Command, LaunchError> {
        let mut cmd = Command::new(&request.program);
        cmd.args(&request.args)
            .envs(request.env.iter().cloned())
            .stdin(Stdio::null());

        match &request.debug_log {
            Some(path) => {
                let log = open_debug_log(request, path)?;
                let err = log.try_clone().map_err(|source| LaunchError::DebugLog {
                    path: path.clone(),
                    source,
                })?;
                cmd.stdout(log).stderr(err);
            }
            None => {
                cmd.stdout(Stdio::null()).stderr(Stdio::null());
            }
        }

        detach(&mut cmd, self.mode);
        Ok(cmd)
    }
}

impl Default for ProcessLauncher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&self, request: &LaunchRequest) -> Result<u32, LaunchError> {
        let child = self
            .command(request)?
            .spawn()
            .map_err(|source| LaunchError::Spawn {
                job: request.job.clone(),
                source,
            })?;
        // Not waited on; the child outlives this process.
        Ok(child.id())
    }
}

fn open_debug_log(request: &LaunchRequest, path: &std::path::Path) -> Result<File, LaunchError> {
    let debug_err = |source| LaunchError::DebugLog {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(debug_err)?;
    }
    tracing::debug!(job = %request.job, path = %path.display(), "child output to debug log");
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(debug_err)
}

#[cfg(unix)]
fn detach(cmd: &mut Command, mode: LaunchMode) {
    use std::os::unix::process::CommandExt;
    if mode == LaunchMode::Background {
        cmd.process_group(0);
    }
}

#[cfg(windows)]
fn detach(cmd: &mut Command, mode: LaunchMode) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    if mode == LaunchMode::Detached {
        cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
    }
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command, _mode: LaunchMode) {}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
