//! CLI argument parsing for ciftify-env.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// ciftify-env: environment and settings helpers for ciftify pipelines.
///
/// Finds subjects in a study directory, resolves FSL/ciftify/working
/// directory settings, and runs shell commands with dry-run support.
#[derive(Parser, Debug)]
#[command(name = "ciftify-env")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for ciftify-env.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List subject directories under a study root.
    ///
    /// Hidden directories are skipped. Prints nothing if the root is missing.
    Subjects(SubjectsArgs),

    /// Create a directory and any missing parents.
    Mkdir(MkdirArgs),

    /// Run a command through the shell.
    ///
    /// A single argument is used as the command line as-is; several are
    /// joined with single spaces.
    Run(RunArgs),

    /// Run a command line and print its standard output.
    ///
    /// Fails if the command exits with a non-zero status.
    CheckOutput(CheckOutputArgs),

    /// Resolve and print workflow settings for a subject.
    ///
    /// Locates FSL, the ciftify data directory and the working directory,
    /// and loads the YAML settings file (or the bundled default).
    Settings(SettingsArgs),

    /// Resolve and print the working directory.
    ///
    /// A directory passed on the command line is created when missing.
    WorkDir(WorkDirArgs),

    /// Validate a workflow settings file and print it normalized.
    ///
    /// Checks the bundled default when no file is given.
    CheckConfig(CheckConfigArgs),

    /// Print the bundled default workflow settings YAML.
    DefaultConfig,
}

/// Arguments for the `subjects` command.
#[derive(Parser, Debug)]
pub struct SubjectsArgs {
    /// Study directory containing one directory per subject.
    pub root: PathBuf,

    /// Only list subjects whose name contains this tag (e.g. a site code).
    #[arg(long)]
    pub filter: Option<String>,
}

/// Arguments for the `mkdir` command.
#[derive(Parser, Debug)]
pub struct MkdirArgs {
    /// Directory to create.
    pub path: PathBuf,

    /// Report what would be created without touching the filesystem.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Print the command without executing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Run inside a temporary directory that is removed afterwards.
    #[arg(long)]
    pub scratch: bool,

    /// Create the scratch directory inside DIR (implies --scratch).
    #[arg(long, value_name = "DIR")]
    pub scratch_in: Option<PathBuf>,

    /// Extra environment variable for the command (repeatable).
    #[arg(long = "env", value_name = "KEY=VALUE")]
    pub env: Vec<String>,

    /// Do not echo the command or log its output.
    #[arg(short, long)]
    pub quiet: bool,

    /// Command tokens.
    #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub command: Vec<String>,
}

/// Arguments for the `check-output` command.
#[derive(Parser, Debug)]
pub struct CheckOutputArgs {
    /// Command line to run.
    pub command: String,
}

/// Arguments for the `settings` command.
#[derive(Parser, Debug)]
pub struct SettingsArgs {
    /// Subject identifier (directory name under the working directory).
    pub subject: String,

    /// Working directory holding subject outputs.
    #[arg(long)]
    pub ciftify_work_dir: Option<PathBuf>,

    /// Deprecated alias for --ciftify-work-dir.
    #[arg(long)]
    pub hcp_data_dir: Option<PathBuf>,

    /// YAML settings file overriding the bundled defaults.
    #[arg(long)]
    pub ciftify_conf: Option<PathBuf>,

    /// FSL installation root (defaults to $FSLDIR).
    #[arg(long)]
    pub fsl_dir: Option<PathBuf>,

    /// Surface registration method.
    #[arg(long, default_value = "MSMSulc", value_parser = ["MSMSulc", "FS"])]
    pub surf_reg: String,

    /// Number of CPUs to use (defaults to $OMP_NUM_THREADS, else 1).
    #[arg(long)]
    pub n_cpus: Option<u32>,

    /// Do not create a missing working directory.
    #[arg(long)]
    pub dry_run: bool,

    /// Print settings as JSON instead of YAML.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `work-dir` command.
#[derive(Parser, Debug)]
pub struct WorkDirArgs {
    /// Working directory holding subject outputs.
    #[arg(long)]
    pub ciftify_work_dir: Option<PathBuf>,

    /// Deprecated alias for --ciftify-work-dir.
    #[arg(long)]
    pub hcp_data_dir: Option<PathBuf>,

    /// Do not create a missing working directory.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `check-config` command.
#[derive(Parser, Debug)]
pub struct CheckConfigArgs {
    /// Settings file to check.
    pub path: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
