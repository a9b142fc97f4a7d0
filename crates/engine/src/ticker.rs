// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job registry and process entry point
//!
//! The same binary plays two roles. Invoked plainly it dispatches one tick;
//! invoked as `run-job` it executes the single job named in its payload.
//! Callables are found again by name, so the runner process must register
//! the same jobs as the dispatching one.

use crate::dispatcher::{DispatchReport, Dispatcher};
use crate::error::EngineError;
use crate::runner::JobRunner;
use chrono::{DateTime, Local};
use std::io::Write;
use std::process::ExitCode;
use tk_adapters::{
    application_env, HostInfo, Launcher, NotifyAdapter, ProcessLauncher, SendmailNotifier,
    TracedLauncher, TracedNotifyAdapter,
};
use tk_core::{
    Callable, Clock, ConfigError, ExecutionResult, JobConfig, JobInvocation, JobSpec,
    ScheduleGate, SystemClock, Task, TaskRef, TaskResult, RUN_JOB_ARG,
};

/// Registered jobs plus the defaults merged beneath each of them
#[derive(Debug, Clone)]
pub struct Ticker {
    defaults: JobConfig,
    jobs: Vec<JobSpec>,
    host: HostInfo,
}

impl Ticker {
    /// Registry for the detected host, with `APPLICATION_ENV` as environment
    pub fn new() -> Self {
        Self::with_host(HostInfo::detect(), application_env())
    }

    pub fn with_host(host: HostInfo, environment: Option<String>) -> Self {
        Self {
            defaults: JobConfig::defaults(host.hostname(), environment),
            jobs: Vec::new(),
            host,
        }
    }

    /// Layer `overrides` onto the defaults. Jobs added earlier keep the
    /// configuration they were registered with.
    pub fn configure(&mut self, overrides: &JobConfig) -> Result<(), ConfigError> {
        let merged = self.defaults.merge(overrides);
        merged.validate()?;
        self.defaults = merged;
        Ok(())
    }

    pub fn defaults(&self) -> &JobConfig {
        &self.defaults
    }

    pub fn host(&self) -> &HostInfo {
        &self.host
    }

    pub fn jobs(&self) -> &[JobSpec] {
        &self.jobs
    }

    pub fn job(&self, name: &str) -> Option<&JobSpec> {
        self.jobs.iter().find(|job| job.name == name)
    }

    /// Register a job; `config` overrides the defaults key by key.
    ///
    /// Names that escape to the same lock file as a registered job are
    /// rejected, so no two jobs ever contend for one lock.
    pub fn add(
        &mut self,
        name: &str,
        schedule: &str,
        task: Task,
        config: &JobConfig,
    ) -> Result<(), ConfigError> {
        if self.job(name).is_some() {
            return Err(ConfigError::DuplicateJob(name.to_string()));
        }
        let spec = JobSpec::new(name, schedule, task, self.defaults.merge(config))?;
        let lock = spec.lock_file_name();
        if let Some(existing) = self.jobs.iter().find(|job| job.lock_file_name() == lock) {
            return Err(ConfigError::LockCollision {
                job: spec.name,
                existing: existing.name.clone(),
                lock,
            });
        }
        self.jobs.push(spec);
        Ok(())
    }

    pub fn add_command(
        &mut self,
        name: &str,
        schedule: &str,
        command: impl Into<String>,
        config: &JobConfig,
    ) -> Result<(), ConfigError> {
        let task = Task::from_parts(name, Some(command.into()), None)?;
        self.add(name, schedule, task, config)
    }

    pub fn add_callable<F>(
        &mut self,
        name: &str,
        schedule: &str,
        f: F,
        config: &JobConfig,
    ) -> Result<(), ConfigError>
    where
        F: Fn(&mut dyn Write) -> TaskResult + Send + Sync + 'static,
    {
        self.add(name, schedule, Task::Callable(Callable::new(f)), config)
    }

    /// Jobs whose schedule matches `now`
    pub fn due_jobs(&self, now: DateTime<Local>) -> Vec<&JobSpec> {
        let gate = ScheduleGate::new(now);
        self.jobs
            .iter()
            .filter(|job| gate.is_due(&job.schedule))
            .collect()
    }

    /// Launch a runner for every job due at `now`
    pub async fn tick<L: Launcher>(
        &self,
        dispatcher: &Dispatcher<L>,
        now: DateTime<Local>,
    ) -> DispatchReport {
        dispatcher.dispatch(&self.jobs, now).await
    }

    /// Run a registered job in this process, ignoring its schedule
    pub async fn exec<N: NotifyAdapter>(
        &self,
        name: &str,
        runner: &JobRunner<N>,
        now: DateTime<Local>,
    ) -> Result<ExecutionResult, EngineError> {
        let job = self
            .job(name)
            .ok_or_else(|| EngineError::UnknownJob(name.to_string()))?;
        Ok(runner.run(job, now).await)
    }

    /// Rebuild the job described by a run-job payload
    pub fn resolve(&self, invocation: &JobInvocation) -> Result<JobSpec, EngineError> {
        let task = match &invocation.task {
            TaskRef::Command { command } => Task::Command(command.clone()),
            TaskRef::Callable => match self.job(&invocation.job).map(|job| &job.task) {
                Some(Task::Callable(callable)) => Task::Callable(callable.clone()),
                _ => return Err(EngineError::CallableNotRegistered(invocation.job.clone())),
            },
        };
        Ok(JobSpec::new(
            invocation.job.as_str(),
            &invocation.schedule,
            task,
            invocation.config.clone(),
        )?)
    }

    /// Execute a run-job payload
    pub async fn run_invocation<N: NotifyAdapter>(
        &self,
        invocation: &JobInvocation,
        runner: &JobRunner<N>,
        now: DateTime<Local>,
    ) -> Result<ExecutionResult, EngineError> {
        let job = self.resolve(invocation)?;
        Ok(runner.run(&job, now).await)
    }

    /// Entry point for binaries that register jobs in code.
    ///
    /// Dispatches one tick, or runs one job when invoked as `run-job`.
    pub fn main(&self) -> ExitCode {
        let args: Vec<String> = std::env::args().skip(1).collect();
        match self.main_with_args(&args) {
            Ok(code) => code,
            Err(e) => {
                tracing::error!(error = %e, "tick failed");
                eprintln!("tk: {}", e);
                ExitCode::FAILURE
            }
        }
    }

    fn main_with_args(&self, args: &[String]) -> Result<ExitCode, EngineError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(EngineError::Runtime)?;
        let program = std::env::current_exe().map_err(EngineError::CurrentExe)?;
        let dispatcher = Dispatcher::new(TracedLauncher::new(ProcessLauncher::new()), program);
        let runner = JobRunner::new(
            TracedNotifyAdapter::new(SendmailNotifier::new()),
            self.host.clone(),
        );
        runtime.block_on(self.run_args(args, &dispatcher, &runner, SystemClock.now()))
    }

    /// Act on process arguments: run one job for `run-job`, otherwise
    /// dispatch a tick. Fails the process when any launch failed.
    pub async fn run_args<L: Launcher, N: NotifyAdapter>(
        &self,
        args: &[String],
        dispatcher: &Dispatcher<L>,
        runner: &JobRunner<N>,
        now: DateTime<Local>,
    ) -> Result<ExitCode, EngineError> {
        if args.first().map(String::as_str) == Some(RUN_JOB_ARG) {
            let invocation =
                JobInvocation::from_args(args)?.with_secrets(|key| std::env::var(key).ok());
            let result = self.run_invocation(&invocation, runner, now).await?;
            return Ok(exit_code(&result));
        }

        let report = self.tick(dispatcher, now).await;
        Ok(if report.failed.is_empty() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        })
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new()
    }
}

/// Process exit status for a finished run
pub fn exit_code(result: &ExecutionResult) -> ExitCode {
    match result {
        ExecutionResult::FailedNotified { .. } => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    }
}

#[cfg(test)]
#[path = "ticker_tests.rs"]
mod tests;
