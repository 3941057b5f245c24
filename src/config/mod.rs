//! Configuration model for ciftify-env.
//!
//! This module defines the Config struct that represents a ciftify workflow
//! settings file. Required keys are strict; unknown keys are carried along
//! untouched.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::Config;
pub use operations::DEFAULT_CONFIG_YAML;
pub use types::{MeshResolution, Registration, SurfaceRegistration};
