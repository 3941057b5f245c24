//! Locating external installations.
//!
//! Each lookup returns `None` when nothing was found; deciding whether that
//! is fatal belongs to the resolver.

use super::environment::{CIFTIFY_DATA, CIFTIFY_WORKDIR, Environment, FSLDIR, HCP_DATA};
use super::probe::PathProbe;
use std::path::{Path, PathBuf};

/// Binary whose location identifies an FSL install (`<fsl>/bin/fslmaths`).
const FSL_MARKER_BINARY: &str = "fslmaths";

/// Binary required for MSMSulc surface registration.
const MSM_BINARY: &str = "msm";

/// First `PATH` entry containing `name`, as a full path.
pub fn find_on_path<P: PathProbe + ?Sized>(
    env: &Environment,
    probe: &P,
    name: &str,
) -> Option<PathBuf> {
    env.search_path()
        .into_iter()
        .map(|dir| dir.join(name))
        .find(|candidate| probe.exists(candidate))
}

/// FSL root from `FSLDIR`, else inferred from `fslmaths` on `PATH`.
pub fn find_fsl<P: PathProbe + ?Sized>(env: &Environment, probe: &P) -> Option<PathBuf> {
    if let Some(dir) = env.path_var(FSLDIR) {
        return Some(dir);
    }

    let binary = find_on_path(env, probe, FSL_MARKER_BINARY)?;
    // <fsl>/bin/fslmaths -> <fsl>
    let bin_dir = binary.parent()?;
    bin_dir.parent().map(Path::to_path_buf)
}

/// Ciftify data directory from `CIFTIFY_DATA`, else the bundled one.
pub fn find_ciftify_global(env: &Environment) -> Option<PathBuf> {
    env.path_var(CIFTIFY_DATA)
        .or_else(|| env.bundled_data_dir().map(Path::to_path_buf))
}

/// Working directory from `CIFTIFY_WORKDIR`, else legacy `HCP_DATA`.
pub fn find_work_dir(env: &Environment) -> Option<PathBuf> {
    env.path_var(CIFTIFY_WORKDIR)
        .or_else(|| env.path_var(HCP_DATA))
}

/// Directory holding the `msm` binary.
pub fn find_msm<P: PathProbe + ?Sized>(env: &Environment, probe: &P) -> Option<PathBuf> {
    find_on_path(env, probe, MSM_BINARY).and_then(|bin| bin.parent().map(Path::to_path_buf))
}
