//! Shared helpers for CLI specs

use assert_cmd::Command;
use std::path::Path;
use std::time::{Duration, Instant};

/// A temporary project directory the CLI runs in.
///
/// Lock files land in the project's own `tmp/` so parallel specs never share
/// a lock.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("tmp")).unwrap();
        Self { dir }
    }

    /// A project whose `tk.toml` holds `content`
    pub fn with_jobfile(content: &str) -> Self {
        let project = Self::empty();
        project.file("tk.toml", content);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, relative: &str, content: &str) {
        let path = self.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Contents of a project file, empty when it does not exist
    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path().join(relative)).unwrap_or_default()
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.path().join(relative).exists()
    }

    pub fn tk(&self) -> CliBuilder {
        let mut builder = cli();
        builder
            .cmd
            .current_dir(self.path())
            .env("TMPDIR", self.path().join("tmp"));
        builder
    }
}

/// The tk binary with a clean environment
pub fn cli() -> CliBuilder {
    let mut cmd = Command::cargo_bin("tk").unwrap();
    cmd.env_remove("RUST_LOG").env_remove("APPLICATION_ENV");
    CliBuilder { cmd }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output.clone());
        assert!(
            output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            output.status,
            run.stdout,
            run.stderr
        );
        run
    }

    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert::from(output.clone());
        assert!(
            !output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout,
            run.stderr
        );
        run
    }
}

pub struct RunAssert {
    pub stdout: String,
    pub stderr: String,
}

impl From<std::process::Output> for RunAssert {
    fn from(output: std::process::Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

impl RunAssert {
    pub fn stdout_has(self, expected: &str) -> Self {
        assert!(
            self.stdout.contains(expected),
            "stdout does not contain {:?}:\n{}",
            expected,
            self.stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        assert!(
            !self.stdout.contains(unexpected),
            "stdout unexpectedly contains {:?}:\n{}",
            unexpected,
            self.stdout
        );
        self
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout, expected);
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        assert!(
            self.stderr.contains(expected),
            "stderr does not contain {:?}:\n{}",
            expected,
            self.stderr
        );
        self
    }
}

/// Poll `condition` until it holds or `timeout_ms` elapses
pub fn wait_for(timeout_ms: u64, mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
    condition()
}

/// Two command jobs sharing defaults
pub const TWO_JOBS: &str = r#"
[defaults]
output = "logs/all.log"

[job.cleanup]
schedule = "0 3 * * *"
command = "echo cleaning"

[job.report]
schedule = "*/5 * * * *"
command = "echo reporting"
"#;
