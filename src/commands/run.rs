//! Implementation of the `run` and `check-output` commands.

use crate::cli::{CheckOutputArgs, RunArgs};
use crate::error::{CiftifyError, Result};
use crate::fs::{with_temp_dir, with_temp_dir_in};
use crate::process::{self, CommandOutput, RunOptions, join_tokens};
use std::path::Path;

/// Run the command, optionally inside a scratch directory.
///
/// The child's output is forwarded to our stdout/stderr. A non-zero exit
/// becomes a command failure.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let mut options = RunOptions::default().dry_run(args.dry_run);
    for (key, value) in parse_env(&args.env)? {
        options = options.env(key, value);
    }
    if args.quiet {
        options = options.quiet();
    }

    let in_dir = |dir: &Path| spawn(&args.command, &options.clone().cwd(dir));
    let output = match (&args.scratch_in, args.scratch) {
        (Some(parent), _) => with_temp_dir_in(parent, in_dir)?,
        (None, true) => with_temp_dir(in_dir)?,
        (None, false) => spawn(&args.command, &options)?,
    };

    if !output.executed {
        println!("Dry run: {}", join_tokens(&args.command));
        return Ok(());
    }

    forward(&output);

    if output.success() {
        Ok(())
    } else {
        Err(CiftifyError::CommandFailed(format!(
            "'{}' exited with status {}",
            join_tokens(&args.command),
            output.status
        )))
    }
}

/// Run a command line and print only its standard output.
pub fn cmd_check_output(args: CheckOutputArgs) -> Result<()> {
    let stdout = process::check_output(&args.command)?;
    print!("{}", stdout);
    Ok(())
}

/// One argument is a complete shell line; several are tokens to join.
fn spawn(command: &[String], options: &RunOptions) -> Result<CommandOutput> {
    match command {
        [line] => process::run_line(line, options),
        tokens => process::run_tokens(tokens, options),
    }
}

fn parse_env(entries: &[String]) -> Result<Vec<(String, String)>> {
    let mut env = Vec::new();
    for entry in entries {
        let (key, value) = entry.split_once('=').ok_or_else(|| {
            CiftifyError::UserError(format!("--env expects KEY=VALUE, got '{}'", entry))
        })?;
        if key.is_empty() {
            return Err(CiftifyError::UserError(format!(
                "--env entry '{}' has no variable name",
                entry
            )));
        }
        env.push((key.to_string(), value.to_string()));
    }
    Ok(env)
}

fn forward(output: &CommandOutput) {
    print!("{}", output.stdout);
    eprint!("{}", output.stderr);
}
