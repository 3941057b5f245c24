//! Implementation of the `ciftify-env settings` and `work-dir` commands.

use crate::cli;
use crate::config::{Config, SurfaceRegistration};
use crate::error::{CiftifyError, Result};
use crate::settings::{
    Environment, PathProbe, RealFs, SettingsArgs, SettingsResolver, WorkDirArgs, WorkDirSettings,
    WorkflowSettings,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Printable view of resolved settings.
#[derive(Debug, Serialize)]
struct SettingsReport<'a> {
    subject: &'a str,
    subject_dir: PathBuf,
    work_dir: &'a Path,
    fsl_dir: &'a Path,
    ciftify_data_dir: &'a Path,
    surf_reg: SurfaceRegistration,
    #[serde(skip_serializing_if = "Option::is_none")]
    msm_dir: Option<&'a Path>,
    n_cpus: u32,
    registration: RegistrationDirs,
    config: &'a Config,
}

/// Registration directories for the subject.
#[derive(Debug, Serialize)]
struct RegistrationDirs {
    src_dir: PathBuf,
    dest_dir: PathBuf,
    xfms_dir: PathBuf,
}

impl<'a> From<&'a WorkflowSettings> for SettingsReport<'a> {
    fn from(settings: &'a WorkflowSettings) -> Self {
        let (src_dir, dest_dir, xfms_dir) = settings.registration_dirs();
        Self {
            subject: settings.subject(),
            subject_dir: settings.subject_dir(),
            work_dir: settings.work_dir(),
            fsl_dir: settings.fsl_dir(),
            ciftify_data_dir: settings.ciftify_data_dir(),
            surf_reg: settings.surf_reg(),
            msm_dir: settings.msm_dir(),
            n_cpus: settings.n_cpus(),
            registration: RegistrationDirs {
                src_dir,
                dest_dir,
                xfms_dir,
            },
            config: settings.config(),
        }
    }
}

/// Resolve settings for one subject and print them.
pub fn cmd_settings(args: cli::SettingsArgs, env: &Environment) -> Result<()> {
    let json = args.json;
    let settings_args = to_settings_args(args)?;

    let settings = SettingsResolver::new(env, &RealFs).workflow_settings(&settings_args)?;

    println!("{}", render(&settings, json)?);
    Ok(())
}

/// Resolve the working directory and print it.
pub fn cmd_work_dir(args: cli::WorkDirArgs, env: &Environment) -> Result<()> {
    let settings = resolve_work_dir(args, env, &RealFs)?;
    println!("{}", settings.work_dir().display());
    Ok(())
}

fn resolve_work_dir<P: PathProbe + ?Sized>(
    args: cli::WorkDirArgs,
    env: &Environment,
    probe: &P,
) -> Result<WorkDirSettings> {
    let work_dir_args = WorkDirArgs {
        ciftify_work_dir: args.ciftify_work_dir,
        hcp_data_dir: args.hcp_data_dir,
    };
    SettingsResolver::new(env, probe).work_dir_settings(&work_dir_args, args.dry_run)
}

fn to_settings_args(args: cli::SettingsArgs) -> Result<SettingsArgs> {
    let surf_reg = SurfaceRegistration::from_str(&args.surf_reg).ok_or_else(|| {
        CiftifyError::UserError(format!(
            "unknown surface registration '{}' (expected MSMSulc or FS)",
            args.surf_reg
        ))
    })?;

    Ok(SettingsArgs {
        subject: args.subject,
        work_dir: WorkDirArgs {
            ciftify_work_dir: args.ciftify_work_dir,
            hcp_data_dir: args.hcp_data_dir,
        },
        ciftify_conf: args.ciftify_conf,
        fsl_dir: args.fsl_dir,
        surf_reg,
        n_cpus: args.n_cpus,
        dry_run: args.dry_run,
    })
}

fn render(settings: &WorkflowSettings, json: bool) -> Result<String> {
    let report = SettingsReport::from(settings);
    if json {
        serde_json::to_string_pretty(&report).map_err(|e| {
            CiftifyError::UserError(format!("failed to serialize settings to JSON: {}", e))
        })
    } else {
        serde_yaml::to_string(&report).map_err(|e| {
            CiftifyError::UserError(format!("failed to serialize settings to YAML: {}", e))
        })
    }
}
