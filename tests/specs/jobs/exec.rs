//! `tk exec` specs: one job through the gate, lock and log path

use crate::prelude::*;

fn single_job(options: &str) -> Project {
    Project::with_jobfile(&format!(
        r#"
[job.backup]
schedule = "0 3 * * *"
{}
"#,
        options
    ))
}

#[test]
fn successful_command_writes_its_output() {
    let temp = single_job("command = \"echo hello\"\noutput = \"logs/backup.log\"");

    temp.tk()
        .args(&["exec", "backup"])
        .passes()
        .stdout_eq("backup: succeeded\n");

    assert_eq!(temp.read("logs/backup.log"), "hello\n");
}

#[test]
fn failing_command_exits_nonzero_and_logs_status() {
    let temp = single_job("command = \"exit 3\"\noutput = \"backup.log\"");

    temp.tk()
        .args(&["exec", "backup", "--no-notify"])
        .fails()
        .stdout_has("failed: Job exited with status '3'.");

    let log = temp.read("backup.log");
    assert!(log.contains("[backup] ERROR: Job exited with status '3'."), "{}", log);
}

#[test]
fn invalid_command_keeps_shell_error() {
    let temp = single_job(
        "command = \"tk-no-such-program-xyz\"\noutput_stdout = \"out.log\"\noutput_stderr = \"err.log\"",
    );

    temp.tk().args(&["exec", "backup", "--no-notify"]).fails();

    let errors = temp.read("err.log");
    assert!(errors.contains("not found"), "{}", errors);
    assert!(errors.contains("Job exited with status '127'."), "{}", errors);
}

#[test]
fn split_outputs_never_mix() {
    let temp = single_job(
        "command = \"echo out; echo err >&2\"\noutput_stdout = \"out.log\"\noutput_stderr = \"err.log\"",
    );

    temp.tk().args(&["exec", "backup"]).passes();

    assert_eq!(temp.read("out.log"), "out\n");
    assert_eq!(temp.read("err.log"), "err\n");
}

#[test]
fn silent_command_leaves_no_empty_log() {
    let temp = single_job("command = \"true\"\noutput_stdout = \"out.log\"");

    temp.tk().args(&["exec", "backup"]).passes();

    assert!(!temp.exists("out.log"));
}

#[test]
fn disabled_job_is_skipped() {
    let temp = single_job("command = \"echo hello > ran.txt\"\nenabled = false");

    temp.tk()
        .args(&["exec", "backup"])
        .passes()
        .stdout_eq("backup: skipped (disabled)\n");

    assert!(!temp.exists("ran.txt"));
}

#[test]
fn halt_file_stops_the_job() {
    let temp = single_job("command = \"echo hello > ran.txt\"\nhalt_dir = \"halt\"");
    temp.file("halt/backup", "");

    temp.tk()
        .args(&["exec", "backup"])
        .passes()
        .stdout_eq("backup: skipped (halted)\n");

    assert!(!temp.exists("ran.txt"));
}

#[test]
fn other_host_is_skipped() {
    let temp = single_job(
        "command = \"echo hello > ran.txt\"\nrun_on_host = \"tk-spec-host-that-does-not-exist\"",
    );

    temp.tk()
        .args(&["exec", "backup"])
        .passes()
        .stdout_eq("backup: skipped (other host)\n");

    assert!(!temp.exists("ran.txt"));
}

#[test]
fn lock_file_is_left_empty_after_run() {
    let temp = single_job("command = \"true\"");

    temp.tk().args(&["exec", "backup"]).passes();

    assert!(temp.exists("tmp/backup.lck"));
    assert_eq!(temp.read("tmp/backup.lck"), "");
}

#[test]
fn environment_prefixes_lock_file() {
    let temp = single_job("command = \"true\"");

    temp.tk()
        .env("APPLICATION_ENV", "Staging")
        .args(&["exec", "backup"])
        .passes();

    assert!(temp.exists("tmp/staging-backup.lck"));
}
