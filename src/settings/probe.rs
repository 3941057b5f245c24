//! Filesystem checks used by the resolver.

use std::path::Path;

/// Answers "is this path present?" for the settings resolver.
///
/// Closures `Fn(&Path) -> bool` implement it, which lets callers pretend any
/// set of paths exists. Such imagined paths count as directories.
pub trait PathProbe {
    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool {
        self.exists(path)
    }
}

/// The real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealFs;

impl PathProbe for RealFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }
}

impl<F> PathProbe for F
where
    F: Fn(&Path) -> bool,
{
    fn exists(&self, path: &Path) -> bool {
        self(path)
    }
}
