//! Script descriptor (script.json) loading and saving
//!
//! The descriptor is modelled as a known typed subset (name, version,
//! optional remote resource) plus flattened bags for any extra fields, so
//! author-added keys survive the release rewrite untouched.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{PackError, Result};
use crate::version::Version;

/// Descriptor file name inside every script directory
pub const DESCRIPTOR_FILE: &str = "script.json";

/// The `remoteResource` sub-record of a descriptor
///
/// The `hash` field is repurposed by the release pipeline to carry the
/// stable per-release identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RemoteResource {
    #[serde(default)]
    pub hash: String,

    #[serde(default)]
    pub url: String,

    /// Unrecognized fields, preserved through round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Parsed script.json contents
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptDescriptor {
    pub name: String,

    #[serde(default)]
    pub version: String,

    #[serde(rename = "remoteResource", skip_serializing_if = "Option::is_none")]
    pub remote_resource: Option<RemoteResource>,

    /// Unrecognized fields, preserved through round-trips
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ScriptDescriptor {
    /// Path of the descriptor file inside a script directory
    pub fn path_in(script_dir: &Path) -> PathBuf {
        script_dir.join(DESCRIPTOR_FILE)
    }

    /// Load and parse the descriptor from a script directory
    pub fn load(script_dir: &Path) -> Result<Self> {
        let path = Self::path_in(script_dir);

        let content =
            std::fs::read_to_string(&path).map_err(|e| PackError::DescriptorReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        serde_json::from_str(&content).map_err(|e| PackError::DescriptorParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Write the descriptor back to its script directory (pretty-printed,
    /// trailing newline)
    pub fn save(&self, script_dir: &Path) -> Result<()> {
        let path = Self::path_in(script_dir);

        let json =
            serde_json::to_string_pretty(self).map_err(|e| PackError::DescriptorWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;

        std::fs::write(&path, json + "\n").map_err(|e| PackError::DescriptorWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Parsed declared version (lenient)
    pub fn declared_version(&self) -> Version {
        Version::parse(&self.version)
    }

    /// Stamp the resolved version and release identifier into the
    /// descriptor, creating the remote resource record if absent
    pub fn set_release(&mut self, version: &Version, release_id: &str) {
        self.version = version.to_string();
        self.remote_resource.get_or_insert_default().hash = release_id.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_descriptor(dir: &Path, content: &str) {
        std::fs::write(dir.join(DESCRIPTOR_FILE), content).unwrap();
    }

    #[test]
    fn test_load_minimal() {
        let temp = TempDir::new().unwrap();
        write_descriptor(temp.path(), r#"{"name": "clock", "version": "1.0.0"}"#);

        let descriptor = ScriptDescriptor::load(temp.path()).unwrap();
        assert_eq!(descriptor.name, "clock");
        assert_eq!(descriptor.version, "1.0.0");
        assert!(descriptor.remote_resource.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = ScriptDescriptor::load(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            PackError::DescriptorReadFailed { .. }
        ));
    }

    #[test]
    fn test_load_malformed_json() {
        let temp = TempDir::new().unwrap();
        write_descriptor(temp.path(), "{not json");

        let result = ScriptDescriptor::load(temp.path());
        assert!(matches!(
            result.unwrap_err(),
            PackError::DescriptorParseFailed { .. }
        ));
    }

    #[test]
    fn test_set_release_creates_remote_resource() {
        let temp = TempDir::new().unwrap();
        write_descriptor(temp.path(), r#"{"name": "clock", "version": "1.0.0"}"#);

        let mut descriptor = ScriptDescriptor::load(temp.path()).unwrap();
        descriptor.set_release(&Version::new(1, 0, 1), "ABCD-1234");

        assert_eq!(descriptor.version, "1.0.1");
        assert_eq!(descriptor.remote_resource.unwrap().hash, "ABCD-1234");
    }

    #[test]
    fn test_roundtrip_preserves_unknown_fields() {
        let temp = TempDir::new().unwrap();
        write_descriptor(
            temp.path(),
            r#"{
  "name": "clock",
  "version": "1.0.0",
  "icon": "clock.fill",
  "remoteResource": { "hash": "", "url": "https://example.com", "autoUpdateInterval": 86400 }
}"#,
        );

        let mut descriptor = ScriptDescriptor::load(temp.path()).unwrap();
        descriptor.set_release(&Version::new(1, 0, 1), "NEW-ID");
        descriptor.save(temp.path()).unwrap();

        let reloaded = ScriptDescriptor::load(temp.path()).unwrap();
        assert_eq!(reloaded.extra.get("icon").unwrap(), "clock.fill");
        let remote = reloaded.remote_resource.unwrap();
        assert_eq!(remote.url, "https://example.com");
        assert_eq!(remote.hash, "NEW-ID");
        assert_eq!(
            remote.extra.get("autoUpdateInterval").unwrap(),
            &serde_json::json!(86400)
        );
    }

    #[test]
    fn test_save_ends_with_newline() {
        let temp = TempDir::new().unwrap();
        write_descriptor(temp.path(), r#"{"name": "clock", "version": "1.0.0"}"#);

        let descriptor = ScriptDescriptor::load(temp.path()).unwrap();
        descriptor.save(temp.path()).unwrap();

        let content = std::fs::read_to_string(temp.path().join(DESCRIPTOR_FILE)).unwrap();
        assert!(content.ends_with('\n'));
    }
}
