//! Command implementations for ciftify-env.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod config;
mod run;
mod settings;
mod subjects;

use crate::cli::{Command, MkdirArgs};
use crate::config::DEFAULT_CONFIG_YAML;
use crate::error::Result;
use crate::fs::make_dir;
use crate::settings::Environment;

/// Dispatch a command to its implementation.
///
/// `env` is the environment snapshot captured by `main`; commands never read
/// process variables themselves.
pub fn dispatch(command: Command, env: &Environment) -> Result<()> {
    match command {
        Command::Subjects(args) => subjects::cmd_subjects(args),
        Command::Mkdir(args) => cmd_mkdir(args),
        Command::Run(args) => run::cmd_run(args),
        Command::CheckOutput(args) => run::cmd_check_output(args),
        Command::Settings(args) => settings::cmd_settings(args, env),
        Command::WorkDir(args) => settings::cmd_work_dir(args, env),
        Command::CheckConfig(args) => config::cmd_check_config(args),
        Command::DefaultConfig => cmd_default_config(),
    }
}

fn cmd_mkdir(args: MkdirArgs) -> Result<()> {
    make_dir(&args.path, args.dry_run)?;
    if args.dry_run {
        println!("Would create: {}", args.path.display());
    }
    Ok(())
}

fn cmd_default_config() -> Result<()> {
    print!("{}", DEFAULT_CONFIG_YAML);
    Ok(())
}
