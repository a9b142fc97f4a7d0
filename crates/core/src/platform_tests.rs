// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn display_names() {
    assert_eq!(Platform::Unix.to_string(), "unix");
    assert_eq!(Platform::Windows.to_string(), "windows");
    assert_eq!(Platform::Windows.shell(), ("cmd", "/C"));
}

#[test]
fn only_unix_inspects_processes() {
    assert!(Platform::Unix.supports_process_inspection());
    assert!(!Platform::Windows.supports_process_inspection());
    assert!(!Platform::Windows.supports_user_switch());
}

#[cfg(unix)]
#[test]
fn current_platform_is_unix() {
    assert_eq!(Platform::current(), Platform::Unix);
    assert_eq!(Platform::current().shell(), ("sh", "-c"));
}
