//! RAII scratch directory.

use crate::error::{CiftifyError, Result};
use std::path::Path;
use tracing::{debug, warn};

const PREFIX: &str = "ciftify_";

/// A uniquely named temporary directory owned for one scope.
///
/// The directory and everything in it is removed when the guard is dropped,
/// including during unwinding. Removal failures on drop are logged, never
/// panicked on.
#[derive(Debug)]
pub struct ScopedTempDir {
    inner: Option<tempfile::TempDir>,
}

impl ScopedTempDir {
    /// Create a fresh directory under the system temp location.
    pub fn new() -> Result<Self> {
        let inner = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir()
            .map_err(|e| CiftifyError::io("failed to create temporary directory", e))?;
        debug!(path = %inner.path().display(), "created temporary directory");
        Ok(Self { inner: Some(inner) })
    }

    /// Create a fresh directory inside `parent`.
    pub fn new_in<P: AsRef<Path>>(parent: P) -> Result<Self> {
        let parent = parent.as_ref();
        let inner = tempfile::Builder::new()
            .prefix(PREFIX)
            .tempdir_in(parent)
            .map_err(|e| {
                CiftifyError::io(
                    format!("failed to create temporary directory in '{}'", parent.display()),
                    e,
                )
            })?;
        debug!(path = %inner.path().display(), "created temporary directory");
        Ok(Self { inner: Some(inner) })
    }

    /// Path of the owned directory.
    pub fn path(&self) -> &Path {
        // Only `close` and `drop` take the inner value, and both consume the guard.
        self.inner
            .as_ref()
            .map(tempfile::TempDir::path)
            .unwrap_or_else(|| Path::new(""))
    }

    /// Remove the directory now and report any failure.
    pub fn close(mut self) -> Result<()> {
        match self.inner.take() {
            Some(dir) => {
                let path = dir.path().to_path_buf();
                dir.close().map_err(|e| {
                    CiftifyError::io(
                        format!("failed to remove temporary directory '{}'", path.display()),
                        e,
                    )
                })
            }
            None => Ok(()),
        }
    }
}

impl Drop for ScopedTempDir {
    fn drop(&mut self) {
        if let Some(dir) = self.inner.take() {
            let path = dir.path().to_path_buf();
            match dir.close() {
                Ok(()) => debug!(path = %path.display(), "removed temporary directory"),
                Err(e) => warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to remove temporary directory"
                ),
            }
        }
    }
}

/// Run `f` with a fresh temporary directory that is removed afterwards.
///
/// The directory is removed whether `f` succeeds, fails, or panics. An error
/// from `f` takes precedence over a cleanup error.
pub fn with_temp_dir<T, F>(f: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    within(ScopedTempDir::new()?, f)
}

/// Same as [`with_temp_dir`], with the directory created inside `parent`.
pub fn with_temp_dir_in<T, F>(parent: &Path, f: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    within(ScopedTempDir::new_in(parent)?, f)
}

fn within<T, F>(dir: ScopedTempDir, f: F) -> Result<T>
where
    F: FnOnce(&Path) -> Result<T>,
{
    let value = f(dir.path())?;
    dir.close()?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::path::PathBuf;

    #[test]
    fn directory_exists_inside_scope_and_not_after() {
        let mut seen = PathBuf::new();

        with_temp_dir(|path| {
            seen = path.to_path_buf();
            assert!(path.is_dir());
            std::fs::write(path.join("scratch.txt"), "data").unwrap();
            Ok(())
        })
        .unwrap();

        assert!(!seen.as_os_str().is_empty());
        assert!(!seen.exists());
    }

    #[test]
    fn temp_dir_removed_when_error_occurs() {
        let mut seen = PathBuf::new();

        let result: Result<()> = with_temp_dir(|path| {
            seen = path.to_path_buf();
            assert!(path.exists());
            Err(CiftifyError::UserError("boom".to_string()))
        });

        assert!(matches!(result, Err(CiftifyError::UserError(_))));
        assert!(!seen.exists());
    }

    #[test]
    fn temp_dir_removed_when_scope_panics() {
        let mut seen = PathBuf::new();

        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let dir = ScopedTempDir::new().unwrap();
            seen = dir.path().to_path_buf();
            std::fs::create_dir(dir.path().join("nested")).unwrap();
            panic!("inside scope");
        }));

        assert!(result.is_err());
        assert!(!seen.as_os_str().is_empty());
        assert!(!seen.exists());
    }

    #[test]
    fn each_acquisition_gets_its_own_directory() {
        let a = ScopedTempDir::new().unwrap();
        let b = ScopedTempDir::new().unwrap();
        assert_ne!(a.path(), b.path());
        assert!(
            a.path()
                .file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with(PREFIX)
        );
    }

    #[test]
    fn scoped_directory_can_live_under_a_chosen_parent() {
        let parent = tempfile::TempDir::new().unwrap();
        let mut seen = PathBuf::new();

        let answer = with_temp_dir_in(parent.path(), |path| {
            seen = path.to_path_buf();
            assert!(path.is_dir());
            Ok(42)
        })
        .unwrap();

        assert_eq!(answer, 42);
        assert!(seen.starts_with(parent.path()));
        assert!(!seen.exists());
        assert_eq!(std::fs::read_dir(parent.path()).unwrap().count(), 0);
    }

    #[test]
    fn missing_parent_is_an_io_error() {
        let parent = tempfile::TempDir::new().unwrap();
        let missing = parent.path().join("absent");

        let result = with_temp_dir_in(&missing, |_| Ok(()));

        assert!(matches!(result, Err(CiftifyError::Io { .. })));
    }

    #[test]
    fn close_removes_directory() {
        let parent = tempfile::TempDir::new().unwrap();
        let dir = ScopedTempDir::new_in(parent.path()).unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.starts_with(parent.path()));

        dir.close().unwrap();
        assert!(!path.exists());
    }
}
