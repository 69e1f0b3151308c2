//! Content fingerprinting for script directories
//!
//! A fingerprint is a truncated BLAKE3 digest over a script directory's
//! file tree, folded in sorted sibling order so on-disk listing order never
//! affects the result. The two fields the release pipeline itself rewrites
//! (descriptor `version` and `remoteResource.hash`) are stripped from the
//! hash input, so re-running the packager without real content changes does
//! not register as a change. Dot-prefixed entries are excluded at every
//! level.

use std::path::Path;

use blake3::Hasher;
use serde_json::Value;
use walkdir::{DirEntry, WalkDir};

use crate::descriptor::DESCRIPTOR_FILE;
use crate::error::{PackError, Result};

/// Fingerprints are truncated to this many hex characters
pub const FINGERPRINT_LEN: usize = 16;

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .is_some_and(|name| name.starts_with('.'))
}

/// Canonical hash input for a descriptor: parsed JSON with the volatile
/// fields removed, re-serialized with sorted keys. Returns None when the
/// descriptor does not parse; the caller falls back to raw bytes.
fn canonical_descriptor_bytes(raw: &[u8]) -> Option<Vec<u8>> {
    let mut value: Value = serde_json::from_slice(raw).ok()?;

    if let Value::Object(map) = &mut value {
        map.remove("version");
        if let Some(Value::Object(remote)) = map.get_mut("remoteResource") {
            remote.remove("hash");
        }
    }

    serde_json::to_vec(&value).ok()
}

/// Compute the content fingerprint of a script directory
///
/// Deterministic across runs on a byte-identical tree. Read-only.
pub fn fingerprint_dir(dir: &Path) -> Result<String> {
    let mut hasher = Hasher::new();

    let walker = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e));

    for entry in walker {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();

        if entry.file_type().is_dir() {
            hasher.update(format!("dir:{name}").as_bytes());
            continue;
        }

        let raw = std::fs::read(entry.path()).map_err(|e| PackError::FileReadFailed {
            path: entry.path().display().to_string(),
            reason: e.to_string(),
        })?;

        let content = if name == DESCRIPTOR_FILE {
            canonical_descriptor_bytes(&raw).unwrap_or(raw)
        } else {
            raw
        };

        hasher.update(format!("file:{name}:{}:", content.len()).as_bytes());
        hasher.update(&content);
    }

    let hex = hasher.finalize().to_hex();
    Ok(hex[..FINGERPRINT_LEN].to_string())
}
