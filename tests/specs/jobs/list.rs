//! `tk list` specs

use crate::prelude::*;

#[test]
fn list_shows_jobs_in_name_order() {
    let temp = Project::with_jobfile(TWO_JOBS);

    let run = temp.tk().args(&["list"]).passes();
    let lines: Vec<&str> = run.stdout.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[1].starts_with("cleanup"));
    assert!(lines[1].contains("0 3 * * *"));
    assert!(lines[1].ends_with("echo cleaning"));
    assert!(lines[2].starts_with("report"));
}

#[test]
fn list_marks_disabled_jobs() {
    let temp = Project::with_jobfile(
        r#"
[job.paused]
schedule = "* * * * *"
command = "true"
enabled = false
"#,
    );

    temp.tk().args(&["list"]).passes().stdout_has("disabled");
}

#[test]
fn list_flags_due_jobs() {
    let temp = Project::with_jobfile(
        r#"
[job.always]
schedule = "* * * * *"
command = "true"
"#,
    );

    temp.tk().args(&["list"]).passes().stdout_has(" due ");
}

#[test]
fn list_json_is_machine_readable() {
    let temp = Project::with_jobfile(TWO_JOBS);

    let run = temp.tk().args(&["list", "--format", "json"]).passes();
    let rows: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();

    assert_eq!(rows[0]["name"], "cleanup");
    assert_eq!(rows[0]["command"], "echo cleaning");
    assert_eq!(rows[1]["schedule"], "*/5 * * * *");
}

#[test]
fn list_without_jobs_says_so() {
    let temp = Project::with_jobfile("");

    temp.tk().args(&["list"]).passes().stdout_eq("No jobs\n");
}
