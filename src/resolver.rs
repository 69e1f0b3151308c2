//! Version and identity resolution
//!
//! The per-script decision procedure: given the repo-declared version, the
//! fresh content fingerprint and the previous release record (if any),
//! decide the published version, the stable release identifier and the
//! result status. Evaluated once per script per run.

use uuid::Uuid;

use crate::manifest::ReleaseRecord;
use crate::version::Version;

/// Outcome classification of one script in one run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PackStatus {
    Updated,
    Unchanged,
    Skipped,
}

impl PackStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PackStatus::Updated => "updated",
            PackStatus::Unchanged => "unchanged",
            PackStatus::Skipped => "skipped",
        }
    }
}

/// Resolved version, identifier and status for one script
#[derive(Debug, Clone)]
pub struct Resolution {
    pub version: Version,
    pub uuid: String,
    pub status: PackStatus,
}

/// Generate a fresh stable release identifier
///
/// Random v4 UUID rendered uppercase. No collision check against existing
/// identifiers.
pub fn new_release_id() -> String {
    Uuid::new_v4().to_string().to_uppercase()
}

/// Decide the published version and identifier for one script
///
/// Branch order matters: the patch-0 gate first, then first-release/force,
/// then an author-driven major.minor bump, then the content comparison.
/// A declared major.minor *below* the previous release is not treated
/// specially; it falls through to the content comparison and the published
/// triple keeps following the previous record's lineage.
pub fn resolve(
    declared: Version,
    content_hash: &str,
    prev: Option<&ReleaseRecord>,
    force: bool,
) -> Resolution {
    if !declared.is_release_ready() {
        return Resolution {
            version: declared,
            uuid: String::new(),
            status: PackStatus::Skipped,
        };
    }

    let prev = match (prev, force) {
        (Some(prev), false) => prev,
        // First release, or forced republish: fresh lineage from the
        // declared major.minor
        _ => {
            return Resolution {
                version: declared.with_patch(1),
                uuid: new_release_id(),
                status: PackStatus::Updated,
            };
        }
    };

    let prev_version = Version::parse(&prev.version);

    if declared.bumps_past(&prev_version) {
        // Deliberate major.minor bump restarts the patch lineage at 1;
        // a simultaneous content change does not additionally bump patch
        Resolution {
            version: declared.with_patch(1),
            uuid: new_release_id(),
            status: PackStatus::Updated,
        }
    } else if content_hash != prev.content_hash {
        Resolution {
            version: prev_version.with_patch(prev_version.patch + 1),
            uuid: new_release_id(),
            status: PackStatus::Updated,
        }
    } else {
        Resolution {
            version: prev_version,
            uuid: prev.uuid.clone(),
            status: PackStatus::Unchanged,
        }
    }
}
