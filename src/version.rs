//! Lenient `major.minor.patch` version triples
//!
//! Descriptor versions are parsed permissively: missing or non-numeric
//! components read as 0, matching how the release pipeline has always
//! treated sloppy descriptors. Validation happens at release time via
//! [`Version::is_release_ready`], not at parse time.

use std::fmt;

/// A parsed `major.minor.patch` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a dot-separated version string, reading any missing or
    /// unparseable component as 0. Never fails.
    pub fn parse(version: &str) -> Self {
        let mut parts = version
            .split('.')
            .map(|p| p.trim().parse::<u64>().unwrap_or(0));

        Self {
            major: parts.next().unwrap_or(0),
            minor: parts.next().unwrap_or(0),
            patch: parts.next().unwrap_or(0),
        }
    }

    /// The committed patch component must be 0 for a script to be releasable;
    /// any other value marks it as an illegal state and it is skipped.
    pub fn is_release_ready(&self) -> bool {
        self.patch == 0
    }

    /// Same triple with a different patch component
    pub fn with_patch(self, patch: u64) -> Self {
        Self { patch, ..self }
    }

    /// True when this major.minor pair is strictly greater than `other`'s
    /// (major greater, or major equal and minor greater). Patch is ignored:
    /// this detects a deliberate author-driven bump, which starts a fresh
    /// patch lineage.
    pub fn bumps_past(&self, other: &Version) -> bool {
        self.major > other.major || (self.major == other.major && self.minor > other.minor)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}
