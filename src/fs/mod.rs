//! Filesystem utilities for ciftify-env.
//!
//! Subject discovery under a study root, dry-run aware directory creation,
//! and scoped scratch directories.

mod make_dir;
mod subjects;
mod temp_dir;

pub use make_dir::{make_dir, make_dir_with};
pub use subjects::{filter_subjects, list_subjects};
pub use temp_dir::{ScopedTempDir, with_temp_dir, with_temp_dir_in};
