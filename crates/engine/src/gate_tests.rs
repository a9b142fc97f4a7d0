// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tempfile::tempdir;
use yare::parameterized;

fn host() -> HostInfo {
    HostInfo::new("web-1")
}

fn allowed(job: &str, config: &JobConfig) -> bool {
    rejection(job, config, &host()).is_none()
}

#[test]
fn defaults_allow_run() {
    let config = JobConfig::defaults("web-1", None);
    assert!(allowed("backup", &config));
}

#[test]
fn disabled_job_is_rejected_first() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("backup"), "").unwrap();
    let config = JobConfig {
        enabled: Some(false),
        halt_dir: Some(dir.path().to_path_buf()),
        run_on_host: Some("elsewhere".to_string()),
        ..JobConfig::default()
    };

    assert_eq!(
        rejection("backup", &config, &host()),
        Some(SkipReason::Disabled)
    );
}

#[test]
fn halt_file_stops_only_its_job() {
    let dir = tempdir().unwrap();
    let halt = dir.path().join("backup");
    std::fs::write(&halt, "").unwrap();
    let config = JobConfig {
        halt_dir: Some(dir.path().to_path_buf()),
        ..JobConfig::default()
    };

    assert_eq!(
        rejection("backup", &config, &host()),
        Some(SkipReason::Halted)
    );
    assert!(allowed("report", &config));

    std::fs::remove_file(&halt).unwrap();
    assert!(allowed("backup", &config));
}

#[test]
fn missing_halt_dir_does_not_block() {
    let config = JobConfig {
        halt_dir: Some("/nonexistent/halt".into()),
        ..JobConfig::default()
    };
    assert!(allowed("backup", &config));
}

#[parameterized(
    exact = { "web-1", true },
    upper = { "WEB-1", true },
    other = { "web-2", false },
    empty = { "", false },
)]
fn host_affinity(run_on_host: &str, expected: bool) {
    let config = JobConfig {
        run_on_host: Some(run_on_host.to_string()),
        ..JobConfig::default()
    };
    assert_eq!(allowed("backup", &config), expected);
}

#[test]
fn unset_host_runs_anywhere() {
    assert_eq!(rejection("backup", &JobConfig::default(), &host()), None);
}
