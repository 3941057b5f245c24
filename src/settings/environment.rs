//! Explicit snapshot of the environment consulted during settings resolution.
//!
//! The resolver never reads process-wide state itself; `main` captures an
//! [`Environment`] once and tests build one by hand.

use std::collections::BTreeMap;
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// FSL installation root.
pub const FSLDIR: &str = "FSLDIR";
/// Ciftify template and atlas data directory.
pub const CIFTIFY_DATA: &str = "CIFTIFY_DATA";
/// Preferred working directory variable.
pub const CIFTIFY_WORKDIR: &str = "CIFTIFY_WORKDIR";
/// Legacy working directory variable from the HCP pipelines.
pub const HCP_DATA: &str = "HCP_DATA";
/// CPU count hint shared with OpenMP tools.
pub const OMP_NUM_THREADS: &str = "OMP_NUM_THREADS";
/// Executable search path.
pub const PATH: &str = "PATH";

const TRACKED_VARS: [&str; 6] = [
    FSLDIR,
    CIFTIFY_DATA,
    CIFTIFY_WORKDIR,
    HCP_DATA,
    OMP_NUM_THREADS,
    PATH,
];

/// Variables and defaults the settings resolver is allowed to see.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    vars: BTreeMap<String, OsString>,
    bundled_data_dir: Option<PathBuf>,
}

impl Environment {
    /// An environment with no variables and no bundled data directory.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Capture the tracked variables from the running process.
    ///
    /// The bundled data directory defaults to `share/ciftify/data` next to the
    /// installed binary (`<prefix>/bin/ciftify-env`).
    pub fn from_process() -> Self {
        let captured = TRACKED_VARS
            .iter()
            .filter_map(|key| env::var_os(key).map(|value| (*key, value)))
            .fold(Self::empty(), |env, (key, value)| env.with_var(key, value));

        let bundled_data_dir = env::current_exe().ok().and_then(|exe| {
            exe.parent()
                .and_then(Path::parent)
                .map(|prefix| prefix.join("share").join("ciftify").join("data"))
        });

        match bundled_data_dir {
            Some(dir) => captured.with_bundled_data_dir(dir),
            None => captured,
        }
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_bundled_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.bundled_data_dir = Some(dir.into());
        self
    }

    /// Value of `key`; empty values count as unset.
    pub fn var(&self, key: &str) -> Option<&OsStr> {
        self.vars
            .get(key)
            .map(OsString::as_os_str)
            .filter(|v| !v.is_empty())
    }

    /// Value of `key` as a path.
    pub fn path_var(&self, key: &str) -> Option<PathBuf> {
        self.var(key).map(PathBuf::from)
    }

    /// Directories listed in `PATH`, in search order.
    pub fn search_path(&self) -> Vec<PathBuf> {
        self.var(PATH)
            .map(|p| env::split_paths(p).collect())
            .unwrap_or_default()
    }

    pub fn bundled_data_dir(&self) -> Option<&Path> {
        self.bundled_data_dir.as_deref()
    }
}
