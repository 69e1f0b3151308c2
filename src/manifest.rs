//! Release manifest (hashes.json)
//!
//! One row per published script with the version, stable identifier and
//! content fingerprint at publish time. The manifest written at the end of
//! a run becomes the "previous" baseline consulted by the next run.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PackError, Result};

/// Manifest file name inside the output directory
pub const MANIFEST_FILE: &str = "hashes.json";

/// One published script entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReleaseRecord {
    pub name: String,
    pub version: String,
    pub uuid: String,
    pub content_hash: String,
}

/// The aggregated release manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub scripts: Vec<ReleaseRecord>,
    pub generated_at: DateTime<Utc>,
}

impl Manifest {
    /// Create a manifest stamped with the current time
    pub fn new(scripts: Vec<ReleaseRecord>) -> Self {
        Self {
            scripts,
            generated_at: Utc::now(),
        }
    }

    /// Load a previous manifest as the release baseline
    ///
    /// A missing file is no history (`None`); an existing file that cannot
    /// be read or parsed is an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| PackError::ManifestReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        let manifest =
            serde_json::from_str(&content).map_err(|e| PackError::ManifestReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        Ok(Some(manifest))
    }

    /// Write the manifest into the output directory (pretty-printed)
    pub fn save(&self, output_dir: &Path) -> Result<PathBuf> {
        let path = output_dir.join(MANIFEST_FILE);

        let json =
            serde_json::to_string_pretty(self).map_err(|e| PackError::ManifestWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        std::fs::write(&path, json + "\n").map_err(|e| PackError::ManifestWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Ok(path)
    }

    /// Index records by script name for baseline lookups
    pub fn by_name(&self) -> HashMap<&str, &ReleaseRecord> {
        self.scripts
            .iter()
            .map(|record| (record.name.as_str(), record))
            .collect()
    }
}
