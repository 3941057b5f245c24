//! Configuration value types and defaults.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// A mesh resolution in thousands of vertices, e.g. `"164"` or `"32"`.
///
/// YAML files write these both quoted and bare, so both forms are accepted
/// and normalized to text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MeshResolution(pub String);

impl MeshResolution {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the value is a non-empty run of ASCII digits.
    pub fn is_numeric(&self) -> bool {
        !self.0.is_empty() && self.0.bytes().all(|b| b.is_ascii_digit())
    }
}

impl fmt::Display for MeshResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MeshResolution {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for MeshResolution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s.trim().to_string()),
            Raw::Number(n) => Self(n.to_string()),
        })
    }
}

/// Where registration inputs and outputs live relative to a subject directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Registration {
    /// Native-space volume directory.
    pub src_dir: String,
    /// Standard-space output directory.
    pub dest_dir: String,
    /// Transform directory.
    pub xfms_dir: String,
}

impl Default for Registration {
    fn default() -> Self {
        Self {
            src_dir: default_src_dir(),
            dest_dir: default_dest_dir(),
            xfms_dir: default_xfms_dir(),
        }
    }
}

/// Surface registration method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SurfaceRegistration {
    /// Multimodal surface matching on sulcal depth; needs the `msm` binary.
    #[default]
    #[serde(rename = "MSMSulc")]
    MsmSulc,
    /// FreeSurfer's own sphere registration.
    #[serde(rename = "FS")]
    FreeSurfer,
}

impl SurfaceRegistration {
    /// Parse the command-line spelling.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MSMSulc" => Some(Self::MsmSulc),
            "FS" => Some(Self::FreeSurfer),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MsmSulc => "MSMSulc",
            Self::FreeSurfer => "FS",
        }
    }
}

pub(crate) fn default_src_dir() -> String {
    "T1w".to_string()
}
pub(crate) fn default_dest_dir() -> String {
    "MNINonLinear".to_string()
}
pub(crate) fn default_xfms_dir() -> String {
    "MNINonLinear/xfms".to_string()
}
