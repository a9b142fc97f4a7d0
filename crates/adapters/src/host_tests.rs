// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn detect_finds_a_hostname() {
    let host = HostInfo::detect();
    assert!(!host.hostname().is_empty());
    assert_eq!(host.platform(), Platform::current());
}

#[test]
fn hostname_match_ignores_case() {
    let host = HostInfo::new("Web-1");
    assert!(host.is_named("web-1"));
    assert!(host.is_named("WEB-1"));
    assert!(!host.is_named("web-2"));
}

#[test]
fn builder_overrides_capabilities() {
    let host = HostInfo::new("db")
        .with_platform(Platform::Windows)
        .with_privileged(true)
        .with_temp_dir("/scratch");

    assert_eq!(host.platform(), Platform::Windows);
    assert!(host.privileged());
    assert_eq!(host.temp_dir(), Path::new("/scratch"));
}

#[test]
fn new_host_is_unprivileged() {
    assert!(!HostInfo::new("db").privileged());
}
