// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use tk_core::Mailer;
use yare::parameterized;

const SAMPLE_JOBFILE: &str = r#"
[defaults]
output = "/var/log/tk/all.log"
recipients = "ops@example.com"
mailer = "mail"

[job.report]
schedule = "*/15 * * * *"
command = "php artisan report"
enabled = false

[job.backup]
schedule = "0 3 * * *"
command = "pg_dump app > /srv/backup.sql"
max_runtime = 3600
run_as = "postgres"
"#;

fn job<'a>(jobfile: &'a Jobfile, name: &str) -> Option<&'a JobEntry> {
    jobfile.jobs.iter().find(|job| job.name == name)
}

#[test]
fn parses_defaults_and_jobs() {
    let jobfile = parse_jobfile(SAMPLE_JOBFILE).unwrap();

    assert_eq!(
        jobfile.defaults.output,
        Some(PathBuf::from("/var/log/tk/all.log"))
    );
    assert_eq!(jobfile.defaults.mailer, Some(Mailer::Mail));
    assert_eq!(jobfile.jobs.len(), 2);

    let backup = job(&jobfile, "backup").unwrap();
    assert_eq!(backup.schedule, "0 3 * * *");
    assert_eq!(backup.command, "pg_dump app > /srv/backup.sql");
    assert_eq!(backup.config.max_runtime, Some(3600));
    assert_eq!(backup.config.run_as.as_deref(), Some("postgres"));
    assert_eq!(backup.config.output, None);

    assert_eq!(job(&jobfile, "report").unwrap().config.enabled, Some(false));
}

#[test]
fn jobs_are_ordered_by_name() {
    let jobfile = parse_jobfile(SAMPLE_JOBFILE).unwrap();
    let names: Vec<_> = jobfile.jobs.iter().map(|j| j.name.as_str()).collect();
    assert_eq!(names, ["backup", "report"]);
}

#[test]
fn empty_file_has_no_jobs() {
    let jobfile = parse_jobfile("").unwrap();
    assert!(jobfile.jobs.is_empty());
    assert_eq!(jobfile.defaults, JobConfig::default());
}

#[parameterized(
    schedule = { "[job.x]\ncommand = \"true\"\n", "job.x.schedule" },
    command = { "[job.x]\nschedule = \"* * * * *\"\n", "job.x.command" },
)]
fn missing_required_fields(content: &str, field: &str) {
    match parse_jobfile(content) {
        Err(ParseError::MissingField(name)) => assert_eq!(name, field),
        other => panic!("expected missing {}, got {:?}", field, other),
    }
}

#[parameterized(
    unknown_job_key = { "[job.x]\nschedule = \"* * * * *\"\ncommand = \"true\"\nmaxRuntime = 5\n" },
    unknown_default_key = { "[defaults]\ncolour = \"red\"\n" },
    unknown_section = { "[jobs.x]\nschedule = \"* * * * *\"\n" },
    non_string_command = { "[job.x]\nschedule = \"* * * * *\"\ncommand = 5\n" },
    job_not_table = { "job = 3\n" },
    bad_mailer = { "[defaults]\nmailer = \"pigeon\"\n" },
)]
fn rejects_invalid_content(content: &str) {
    assert!(
        matches!(parse_jobfile(content), Err(ParseError::InvalidFormat(_))),
        "expected invalid format for {:?}",
        content
    );
}

#[test]
fn malformed_toml_is_reported() {
    assert!(matches!(
        parse_jobfile("[job.x\n"),
        Err(ParseError::Toml(_))
    ));
}

#[test]
fn load_reads_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_JOBFILE);
    std::fs::write(&path, SAMPLE_JOBFILE).unwrap();

    assert_eq!(load_jobfile(&path).unwrap().jobs.len(), 2);
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_jobfile(&dir.path().join("missing.toml"));
    assert!(matches!(result, Err(ParseError::Io { .. })));
}
