// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shell command lines for external tasks

use tk_adapters::HostInfo;

/// `sudo -u <user>` when a target user is set, the platform can switch
/// users and we are root. Anything else gets no prefix.
pub fn privilege_prefix(run_as: Option<&str>, host: &HostInfo) -> Option<String> {
    let user = run_as.map(str::trim).filter(|u| !u.is_empty())?;
    if host.platform().supports_user_switch() && host.privileged() {
        Some(format!("sudo -u {}", user))
    } else {
        None
    }
}

/// The line handed to the platform shell
pub fn shell_line(command: &str, run_as: Option<&str>, host: &HostInfo) -> String {
    match privilege_prefix(run_as, host) {
        Some(prefix) => format!("{} {}", prefix, command),
        None => command.to_string(),
    }
}

/// Shell invocation for `command` on this host
pub fn build(command: &str, run_as: Option<&str>, host: &HostInfo) -> tokio::process::Command {
    let (shell, flag) = host.platform().shell();
    let mut cmd = tokio::process::Command::new(shell);
    cmd.arg(flag).arg(shell_line(command, run_as, host));
    cmd
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
