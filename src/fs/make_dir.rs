//! Dry-run aware directory creation.

use crate::error::{CiftifyError, Result};
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

/// Create `path` and any missing parents.
///
/// With `dry_run` set nothing touches the filesystem. A directory that
/// already exists is not an error. A regular file in the way is, as is any
/// other failure.
pub fn make_dir<P: AsRef<Path>>(path: P, dry_run: bool) -> Result<()> {
    make_dir_with(path.as_ref(), dry_run, |p| fs::create_dir_all(p))
}

/// Same as [`make_dir`] with the creation call supplied by the caller.
pub fn make_dir_with<F>(path: &Path, dry_run: bool, create: F) -> Result<()>
where
    F: FnOnce(&Path) -> io::Result<()>,
{
    if dry_run {
        info!(path = %path.display(), "dry run: would create directory");
        return Ok(());
    }

    match create(path) {
        Ok(()) => {
            debug!(path = %path.display(), "created directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists && path.is_dir() => {
            debug!(path = %path.display(), "directory already exists");
            Ok(())
        }
        Err(e) => Err(CiftifyError::io(
            format!("failed to create directory '{}'", path.display()),
            e,
        )),
    }
}
