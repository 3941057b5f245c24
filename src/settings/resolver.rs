//! Settings resolution.
//!
//! Resolution runs a fixed chain of checks: FSL, ciftify data, working
//! directory, config, surface registration dependencies, CPU count. The
//! first failing step ends the chain with an error; there is no partially
//! resolved state. A working directory that has to be created is only
//! created once every step has passed.

use super::environment::{Environment, OMP_NUM_THREADS};
use super::locate;
use super::model::{SettingsArgs, WorkDirArgs, WorkDirSettings, WorkflowSettings};
use super::probe::PathProbe;
use crate::config::{Config, SurfaceRegistration};
use crate::error::{CiftifyError, Result};
use crate::fs::make_dir;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Resolves settings against an explicit environment and filesystem probe.
pub struct SettingsResolver<'a, P: PathProbe + ?Sized> {
    env: &'a Environment,
    probe: &'a P,
}

/// A resolved working directory, possibly not yet on disk.
struct PendingWorkDir {
    path: PathBuf,
    create: bool,
}

impl PendingWorkDir {
    /// Create the directory if needed and hand back its path.
    fn finish(self, dry_run: bool) -> Result<PathBuf> {
        if self.create {
            info!(path = %self.path.display(), "creating working directory");
            make_dir(&self.path, dry_run)?;
        }
        Ok(self.path)
    }
}

impl<'a, P: PathProbe + ?Sized> SettingsResolver<'a, P> {
    pub fn new(env: &'a Environment, probe: &'a P) -> Self {
        Self { env, probe }
    }

    /// Resolve only the working directory.
    pub fn work_dir_settings(&self, args: &WorkDirArgs, dry_run: bool) -> Result<WorkDirSettings> {
        let work_dir = self.resolve_work_dir(args)?.finish(dry_run)?;
        Ok(WorkDirSettings { work_dir })
    }

    /// Resolve every setting a workflow run needs.
    pub fn workflow_settings(&self, args: &SettingsArgs) -> Result<WorkflowSettings> {
        let subject = validate_subject(&args.subject)?;
        let fsl_dir = self.resolve_fsl_dir(args.fsl_dir.as_deref())?;
        let ciftify_data_dir = self.resolve_ciftify_data_dir()?;
        let work_dir = self.resolve_work_dir(&args.work_dir)?;
        let config = self.resolve_config(args.ciftify_conf.as_deref())?;
        let msm_dir = self.resolve_msm_dir(args.surf_reg)?;
        let n_cpus = self.resolve_n_cpus(args.n_cpus)?;

        let work_dir = work_dir.finish(args.dry_run)?;

        info!(
            subject = %subject,
            work_dir = %work_dir.display(),
            fsl_dir = %fsl_dir.display(),
            surf_reg = args.surf_reg.as_str(),
            low_res = ?config.low_res_values(),
            "resolved workflow settings"
        );

        Ok(WorkflowSettings {
            work_dir,
            subject,
            fsl_dir,
            ciftify_data_dir,
            surf_reg: args.surf_reg,
            msm_dir,
            n_cpus,
            config,
        })
    }

    fn resolve_fsl_dir(&self, explicit: Option<&Path>) -> Result<PathBuf> {
        let fsl_dir = match explicit {
            Some(dir) => dir.to_path_buf(),
            None => locate::find_fsl(self.env, self.probe).ok_or_else(|| {
                CiftifyError::DependencyNotFound {
                    what: "FSL installation".to_string(),
                    hint: "Set FSLDIR, pass --fsl-dir, or put fslmaths on PATH.".to_string(),
                }
            })?,
        };

        self.require_dir("FSL directory", fsl_dir)
    }

    fn resolve_ciftify_data_dir(&self) -> Result<PathBuf> {
        let data_dir = locate::find_ciftify_global(self.env).ok_or_else(|| {
            CiftifyError::DependencyNotFound {
                what: "ciftify data directory".to_string(),
                hint: "Set CIFTIFY_DATA to the ciftify templates directory.".to_string(),
            }
        })?;

        self.require_dir("Ciftify data directory", data_dir)
    }

    fn resolve_work_dir(&self, args: &WorkDirArgs) -> Result<PendingWorkDir> {
        let explicit = match (&args.ciftify_work_dir, &args.hcp_data_dir) {
            (Some(dir), _) => Some(dir.clone()),
            (None, Some(dir)) => {
                warn!("--hcp-data-dir is deprecated, use --ciftify-work-dir instead");
                Some(dir.clone())
            }
            (None, None) => None,
        };

        match explicit {
            // Naming a directory on the command line implies permission to create it.
            Some(dir) => {
                let path = absolute(&dir)?;
                if !self.probe.exists(&path) {
                    return Ok(PendingWorkDir { path, create: true });
                }
                let path = self.require_dir("Working directory", path)?;
                Ok(PendingWorkDir {
                    path,
                    create: false,
                })
            }
            None => {
                let dir = locate::find_work_dir(self.env).ok_or_else(|| {
                    CiftifyError::DependencyNotFound {
                        what: "working directory".to_string(),
                        hint: "Pass --ciftify-work-dir or set CIFTIFY_WORKDIR.".to_string(),
                    }
                })?;
                let path = self.require_dir("Working directory", absolute(&dir)?)?;
                Ok(PendingWorkDir {
                    path,
                    create: false,
                })
            }
        }
    }

    fn resolve_config(&self, path: Option<&Path>) -> Result<Config> {
        match path {
            Some(path) => {
                let path = self.require_exists("Config file", path.to_path_buf())?;
                debug!(path = %path.display(), "reading config file");
                Config::load(&path)
            }
            None => {
                debug!("no config file given, using bundled settings");
                Config::bundled()
            }
        }
    }

    fn resolve_msm_dir(&self, surf_reg: SurfaceRegistration) -> Result<Option<PathBuf>> {
        match surf_reg {
            SurfaceRegistration::FreeSurfer => Ok(None),
            SurfaceRegistration::MsmSulc => locate::find_msm(self.env, self.probe)
                .map(Some)
                .ok_or_else(|| CiftifyError::DependencyNotFound {
                    what: "msm binary".to_string(),
                    hint: "MSMSulc registration needs msm on PATH; use --surf-reg FS otherwise."
                        .to_string(),
                }),
        }
    }

    fn resolve_n_cpus(&self, explicit: Option<u32>) -> Result<u32> {
        match explicit {
            Some(0) => Err(CiftifyError::UserError(
                "--n-cpus must be greater than 0".to_string(),
            )),
            Some(n) => Ok(n),
            None => {
                let from_env = self
                    .env
                    .var(OMP_NUM_THREADS)
                    .and_then(|v| v.to_str())
                    .and_then(|v| v.trim().parse::<u32>().ok())
                    .filter(|n| *n > 0);
                Ok(from_env.unwrap_or(1))
            }
        }
    }

    fn require_exists(&self, what: &str, path: PathBuf) -> Result<PathBuf> {
        if self.probe.exists(&path) {
            Ok(path)
        } else {
            Err(CiftifyError::missing(what, path))
        }
    }

    fn require_dir(&self, what: &str, path: PathBuf) -> Result<PathBuf> {
        let path = self.require_exists(what, path)?;
        if self.probe.is_dir(&path) {
            Ok(path)
        } else {
            Err(CiftifyError::NotADirectory {
                what: what.to_string(),
                path,
            })
        }
    }
}

fn validate_subject(subject: &str) -> Result<String> {
    if subject.trim().is_empty() {
        return Err(CiftifyError::UserError(
            "subject must not be empty".to_string(),
        ));
    }
    if subject.trim() != subject {
        return Err(CiftifyError::UserError(format!(
            "subject '{}' has leading or trailing whitespace",
            subject
        )));
    }
    if subject.contains(std::path::MAIN_SEPARATOR) || subject.starts_with('.') {
        return Err(CiftifyError::UserError(format!(
            "subject '{}' must be a plain directory name",
            subject
        )));
    }
    Ok(subject.to_string())
}

fn absolute(path: &Path) -> Result<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        CiftifyError::io(format!("failed to resolve path '{}'", path.display()), e)
    })
}
