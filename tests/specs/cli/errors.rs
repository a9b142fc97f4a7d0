//! CLI error reporting specs

use crate::prelude::*;

#[test]
fn missing_jobfile_suggests_creating_one() {
    let temp = Project::empty();

    temp.tk()
        .args(&["check"])
        .fails()
        .stderr_has("Failed to load job file 'tk.toml'")
        .stderr_has("Create tk.toml");
}

#[test]
fn jobfile_flag_points_elsewhere() {
    let temp = Project::empty();
    temp.file("conf/jobs.toml", TWO_JOBS);

    temp.tk()
        .args(&["--jobfile", "conf/jobs.toml", "check"])
        .passes()
        .stdout_has("ok (2 jobs)");
}

#[test]
fn invalid_schedule_names_the_job() {
    let temp = Project::with_jobfile(
        r#"
[job.broken]
schedule = "every day"
command = "true"
"#,
    );

    temp.tk()
        .args(&["check"])
        .fails()
        .stderr_has("Job 'broken' is invalid")
        .stderr_has("invalid schedule 'every day'");
}

#[test]
fn job_without_command_is_rejected() {
    let temp = Project::with_jobfile(
        r#"
[job.empty]
schedule = "* * * * *"
"#,
    );

    temp.tk().args(&["check"]).fails().stderr_has("command");
}

#[test]
fn unknown_option_is_rejected() {
    let temp = Project::with_jobfile(
        r#"
[job.typo]
schedule = "* * * * *"
command = "true"
maxRuntime = 30
"#,
    );

    temp.tk().args(&["check"]).fails().stderr_has("maxRuntime");
}

#[test]
fn exec_unknown_job_lists_known_jobs() {
    let temp = Project::with_jobfile(TWO_JOBS);

    temp.tk()
        .args(&["exec", "backup"])
        .fails()
        .stderr_has("Job 'backup' not found")
        .stderr_has("Known jobs: cleanup, report");
}

#[test]
fn run_job_rejects_mismatched_payload() {
    let temp = Project::empty();
    let payload = r#"{"job":"other","schedule":"* * * * *","task":{"kind":"command","command":"true"},"config":{}}"#;

    temp.tk()
        .args(&["run-job", "backup", payload])
        .fails()
        .stderr_has("payload is for job 'other', not 'backup'");
}
