//! Resolved settings objects.
//!
//! Both types are only built by [`SettingsResolver`](super::SettingsResolver),
//! which has already checked every path they hold. Fields are private and
//! exposed through accessors, so a value never changes after resolution.

use crate::config::{Config, SurfaceRegistration};
use std::path::{Path, PathBuf};

/// Arguments that select the working directory.
#[derive(Debug, Clone, Default)]
pub struct WorkDirArgs {
    /// `--ciftify-work-dir`.
    pub ciftify_work_dir: Option<PathBuf>,
    /// `--hcp-data-dir`, the deprecated spelling of the same thing.
    pub hcp_data_dir: Option<PathBuf>,
}

/// Everything a workflow run can pass on the command line.
#[derive(Debug, Clone, Default)]
pub struct SettingsArgs {
    pub subject: String,
    pub work_dir: WorkDirArgs,
    /// `--ciftify-conf`: YAML settings overriding the bundled defaults.
    pub ciftify_conf: Option<PathBuf>,
    /// `--fsl-dir`: explicit FSL install root.
    pub fsl_dir: Option<PathBuf>,
    pub surf_reg: SurfaceRegistration,
    pub n_cpus: Option<u32>,
    /// Report directory creation instead of performing it.
    pub dry_run: bool,
}

/// Working directory only, for tools that do not need FSL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkDirSettings {
    pub(super) work_dir: PathBuf,
}

impl WorkDirSettings {
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }
}

/// Fully resolved settings for one subject's workflow run.
#[derive(Debug, Clone)]
pub struct WorkflowSettings {
    pub(super) work_dir: PathBuf,
    pub(super) subject: String,
    pub(super) fsl_dir: PathBuf,
    pub(super) ciftify_data_dir: PathBuf,
    pub(super) surf_reg: SurfaceRegistration,
    pub(super) msm_dir: Option<PathBuf>,
    pub(super) n_cpus: u32,
    pub(super) config: Config,
}

impl WorkflowSettings {
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// `<work_dir>/<subject>`.
    pub fn subject_dir(&self) -> PathBuf {
        self.work_dir.join(&self.subject)
    }

    pub fn fsl_dir(&self) -> &Path {
        &self.fsl_dir
    }

    pub fn ciftify_data_dir(&self) -> &Path {
        &self.ciftify_data_dir
    }

    pub fn surf_reg(&self) -> SurfaceRegistration {
        self.surf_reg
    }

    /// Set only for MSMSulc registration.
    pub fn msm_dir(&self) -> Option<&Path> {
        self.msm_dir.as_deref()
    }

    pub fn n_cpus(&self) -> u32 {
        self.n_cpus
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Registration directories resolved against the subject directory.
    pub fn registration_dirs(&self) -> (PathBuf, PathBuf, PathBuf) {
        let subject_dir = self.subject_dir();
        let reg = &self.config.registration;
        (
            subject_dir.join(&reg.src_dir),
            subject_dir.join(&reg.dest_dir),
            subject_dir.join(&reg.xfms_dir),
        )
    }
}
