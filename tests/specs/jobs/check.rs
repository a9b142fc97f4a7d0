//! `tk check` specs

use crate::prelude::*;

#[test]
fn check_reports_job_count() {
    let temp = Project::with_jobfile(TWO_JOBS);

    temp.tk()
        .args(&["check"])
        .passes()
        .stdout_eq("tk.toml: ok (2 jobs)\n");
}

#[test]
fn check_accepts_file_without_jobs() {
    let temp = Project::with_jobfile("[defaults]\nrecipients = \"ops@example.com\"\n");

    temp.tk()
        .args(&["check"])
        .passes()
        .stdout_eq("tk.toml: ok (0 jobs)\n");
}

#[test]
fn check_rejects_zero_max_runtime() {
    let temp = Project::with_jobfile(
        r#"
[job.forever]
schedule = "* * * * *"
command = "true"
max_runtime = 0
"#,
    );

    temp.tk()
        .args(&["check"])
        .fails()
        .stderr_has("max_runtime must be at least one second");
}
