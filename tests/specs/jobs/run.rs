//! `tk run` and `tk run-job` specs

use crate::prelude::*;

const DUE_AND_NOT_DUE: &str = r#"
[job.always]
schedule = "* * * * *"
command = "echo dispatched > always.txt"

[job.never]
schedule = "2000-01-01 00:00"
command = "echo dispatched > never.txt"
"#;

#[test]
fn dry_run_lists_due_jobs_only() {
    let temp = Project::with_jobfile(DUE_AND_NOT_DUE);

    temp.tk()
        .args(&["run", "--dry-run"])
        .passes()
        .stdout_eq("always\n");

    assert!(!temp.exists("always.txt"));
}

#[test]
fn run_launches_due_jobs_in_background() {
    let temp = Project::with_jobfile(DUE_AND_NOT_DUE);

    temp.tk().args(&["run"]).passes();

    assert!(wait_for(5000, || temp.read("always.txt") == "dispatched\n"));
    assert!(!temp.exists("never.txt"));
}

#[test]
fn debug_job_writes_runner_output_to_debug_log() {
    let temp = Project::with_jobfile(
        r#"
[job.noisy]
schedule = "* * * * *"
command = "echo done > noisy.txt"
debug = true
"#,
    );

    temp.tk().args(&["run"]).passes();

    assert!(wait_for(5000, || temp.exists("noisy.txt")));
    assert!(temp.exists("debug.log"));
}

#[test]
fn run_job_executes_payload_without_jobfile() {
    let temp = Project::empty();
    let payload = r#"{"job":"direct","schedule":"* * * * *","task":{"kind":"command","command":"echo direct"},"config":{"output":"direct.log"}}"#;

    temp.tk().args(&["run-job", "direct", payload]).passes();

    assert_eq!(temp.read("direct.log"), "direct\n");
}

#[test]
fn run_job_failure_exits_nonzero() {
    let temp = Project::empty();
    let payload = r#"{"job":"broken","schedule":"* * * * *","task":{"kind":"command","command":"exit 2"},"config":{"output":"broken.log"}}"#;

    temp.tk().args(&["run-job", "broken", payload]).fails();

    assert!(temp
        .read("broken.log")
        .contains("Job exited with status '2'."));
}
