use crate::settings::{Environment, vars};
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// A throwaway directory laid out like a machine with FSL, MSM and ciftify
/// data installed.
pub(crate) struct FakeInstall {
    pub(crate) root: TempDir,
    pub(crate) fsl_dir: PathBuf,
    pub(crate) msm_bin_dir: PathBuf,
    pub(crate) data_dir: PathBuf,
    pub(crate) work_dir: PathBuf,
}

impl FakeInstall {
    pub(crate) fn new() -> Self {
        let root = TempDir::new().unwrap();
        let base = root.path().to_path_buf();

        let fsl_dir = base.join("fsl");
        let msm_bin_dir = base.join("msm/bin");
        let data_dir = base.join("ciftify/data");
        let work_dir = base.join("work");

        for dir in [
            fsl_dir.join("bin"),
            msm_bin_dir.clone(),
            data_dir.clone(),
            work_dir.clone(),
        ] {
            std::fs::create_dir_all(dir).unwrap();
        }
        touch(&fsl_dir.join("bin/fslmaths"));
        touch(&msm_bin_dir.join("msm"));

        Self {
            root,
            fsl_dir,
            msm_bin_dir,
            data_dir,
            work_dir,
        }
    }

    /// Environment finding everything through `PATH` and `CIFTIFY_DATA`.
    pub(crate) fn environment(&self) -> Environment {
        let bin_dirs = [self.fsl_dir.join("bin"), self.msm_bin_dir.clone()];
        let path = std::env::join_paths(bin_dirs).unwrap();
        Environment::empty()
            .with_var(vars::PATH, path)
            .with_var(vars::CIFTIFY_DATA, self.data_dir.as_os_str())
            .with_var(vars::CIFTIFY_WORKDIR, self.work_dir.as_os_str())
    }

    pub(crate) fn path(&self) -> &Path {
        self.root.path()
    }
}

fn touch(path: &Path) {
    std::fs::write(path, "").unwrap();
}
