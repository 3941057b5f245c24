//! Settings resolution for ciftify workflows.
//!
//! Turns command-line arguments plus an [`Environment`] snapshot into a
//! validated [`WorkflowSettings`]. Filesystem existence checks go through a
//! [`PathProbe`] so the whole chain can run against an imagined filesystem.

mod environment;
mod locate;
mod model;
mod probe;
mod resolver;


pub use environment::Environment;
pub use model::{SettingsArgs, WorkDirArgs, WorkDirSettings, WorkflowSettings};
pub use probe::{PathProbe, RealFs};
pub use resolver::SettingsResolver;

/// Environment variable names the resolver understands.
pub mod vars {
    pub use super::environment::{
        CIFTIFY_DATA, CIFTIFY_WORKDIR, FSLDIR, HCP_DATA, OMP_NUM_THREADS, PATH,
    };
}
