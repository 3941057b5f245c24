//! Shell command runner for ciftify-env.
//!
//! Commands are handed to `sh -c` as a single line. There are two entry
//! points: [`run_line`] for a raw command line and [`run_tokens`] for a token
//! sequence, which is joined with single spaces and then treated exactly like
//! a raw line. Output is captured and decoded to text.
//!
//! Spawning goes through the [`Shell`] trait; production code uses
//! [`SystemShell`].

use crate::error::{CiftifyError, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::{Command, Output};
use tracing::{debug, error, info, warn};

/// Captured result of a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit status (-1 when the process was killed by a signal).
    pub status: i32,
    /// Standard output, decoded as UTF-8 (lossy).
    pub stdout: String,
    /// Standard error, decoded as UTF-8 (lossy).
    pub stderr: String,
    /// False when the command was skipped by a dry run.
    pub executed: bool,
}

impl CommandOutput {
    /// Build from a finished process.
    pub fn from_output(output: &Output) -> Self {
        Self {
            status: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            executed: true,
        }
    }

    /// Placeholder result for a command that was not executed.
    pub fn skipped() -> Self {
        Self {
            status: 0,
            stdout: String::new(),
            stderr: String::new(),
            executed: false,
        }
    }

    /// Returns true if the command exited with status 0.
    pub fn success(&self) -> bool {
        self.status == 0
    }
}

/// Options controlling a single run.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Log the command but do not execute it.
    pub dry_run: bool,
    /// Do not log the command line before running it.
    pub suppress_echo: bool,
    /// Log captured stdout at debug instead of info.
    pub suppress_stdout: bool,
    /// Log captured stderr at info instead of warn.
    pub suppress_stderr: bool,
    /// Extra variables layered over the inherited environment.
    pub env: BTreeMap<String, String>,
    /// Working directory for the child process.
    pub cwd: Option<PathBuf>,
}

impl RunOptions {
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn quiet(mut self) -> Self {
        self.suppress_echo = true;
        self.suppress_stdout = true;
        self.suppress_stderr = true;
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    pub fn cwd(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }
}

/// Something that can execute a shell command line.
pub trait Shell {
    fn spawn(&self, line: &str, options: &RunOptions) -> Result<CommandOutput>;
}

/// Runs command lines through `sh -c`, blocking until they finish.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn spawn(&self, line: &str, options: &RunOptions) -> Result<CommandOutput> {
        let mut cmd = Command::new("sh");
        cmd.arg("-c").arg(line).envs(&options.env);
        if let Some(dir) = &options.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output().map_err(|e| {
            CiftifyError::CommandFailed(format!("failed to execute '{}': {}", line, e))
        })?;

        Ok(CommandOutput::from_output(&output))
    }
}

/// Join command tokens into one line with single spaces.
///
/// Tokens are not quoted; `["touch", "./f.txt"]` becomes `touch ./f.txt`.
pub fn join_tokens<S: AsRef<str>>(tokens: &[S]) -> String {
    tokens
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run a raw command line.
///
/// A non-zero exit status is reported in the returned output, not as an error.
pub fn run_line(line: &str, options: &RunOptions) -> Result<CommandOutput> {
    run_line_with(&SystemShell, line, options)
}

/// Run a token sequence as the space-joined command line.
pub fn run_tokens<S: AsRef<str>>(tokens: &[S], options: &RunOptions) -> Result<CommandOutput> {
    run_tokens_with(&SystemShell, tokens, options)
}

/// Run a command line and return its stdout, failing on a non-zero status.
pub fn check_output(line: &str) -> Result<String> {
    check_output_with(&SystemShell, line)
}

pub fn run_tokens_with<Sh, S>(
    shell: &Sh,
    tokens: &[S],
    options: &RunOptions,
) -> Result<CommandOutput>
where
    Sh: Shell + ?Sized,
    S: AsRef<str>,
{
    run_line_with(shell, &join_tokens(tokens), options)
}

pub fn run_line_with<Sh: Shell + ?Sized>(
    shell: &Sh,
    line: &str,
    options: &RunOptions,
) -> Result<CommandOutput> {
    if line.trim().is_empty() {
        return Err(CiftifyError::UserError("command is empty".to_string()));
    }

    if !options.suppress_echo {
        info!("Running: {}", line);
    }

    if options.dry_run {
        info!("Doing a dry run, command not executed");
        return Ok(CommandOutput::skipped());
    }

    let output = shell.spawn(line, options)?;

    if !output.success() {
        error!("cmd: {}\n Failed with returncode {}", line, output.status);
    }
    if !output.stdout.is_empty() {
        if options.suppress_stdout {
            debug!("{}", output.stdout);
        } else {
            info!("{}", output.stdout);
        }
    }
    if !output.stderr.is_empty() {
        if options.suppress_stderr {
            info!("{}", output.stderr);
        } else {
            warn!("{}", output.stderr);
        }
    }

    Ok(output)
}

pub fn check_output_with<Sh: Shell + ?Sized>(shell: &Sh, line: &str) -> Result<String> {
    let options = RunOptions {
        suppress_echo: true,
        suppress_stdout: true,
        ..RunOptions::default()
    };
    let output = run_line_with(shell, line, &options)?;

    if output.success() {
        Ok(output.stdout)
    } else {
        let detail = if output.stderr.trim().is_empty() {
            output.stdout.trim().to_string()
        } else {
            output.stderr.trim().to_string()
        };
        Err(CiftifyError::CommandFailed(format!(
            "'{}' exited with status {}: {}",
            line, output.status, detail
        )))
    }
}
