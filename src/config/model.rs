//! Config struct definition.

use super::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Workflow configuration read from a ciftify settings YAML file.
///
/// `high_res`, `low_res` and `grayord_res` are required. Keys this crate
/// does not interpret (FNIRT settings, dscalar definitions, ...) are kept
/// in `extra` so they survive a load/serialize round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// High resolution (native-like) mesh, e.g. `"164"`.
    pub high_res: MeshResolution,

    /// Low resolution meshes to resample to, e.g. `["32"]`.
    pub low_res: Vec<MeshResolution>,

    /// Grayordinate voxel resolutions in mm, e.g. `[2]`.
    pub grayord_res: Vec<u32>,

    #[serde(default)]
    pub registration: Registration,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}
