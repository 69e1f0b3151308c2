//! Packager configuration
//!
//! Input and output roots are explicit values threaded through every stage,
//! so test mode is just a different `PackConfig` pointing at a sandbox copy
//! rather than mutated global state.

use std::path::{Path, PathBuf};

use console::Style;

use crate::archive::ARCHIVE_EXT;
use crate::error::{PackError, Result};
use crate::fsutil;

/// Sandbox root for test mode, created under the working directory
pub const SANDBOX_DIR: &str = ".pack-test";

/// Resolved input/output roots for one run
#[derive(Debug, Clone)]
pub struct PackConfig {
    /// Root directory containing one sub-directory per script
    pub scripts_dir: PathBuf,
    /// Directory receiving archives and the manifest
    pub output_dir: PathBuf,
}

impl PackConfig {
    pub fn new(scripts_dir: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            scripts_dir: dunce::canonicalize(&scripts_dir).unwrap_or(scripts_dir),
            output_dir,
        }
    }

    /// Directory of one script unit
    pub fn script_dir(&self, name: &str) -> PathBuf {
        self.scripts_dir.join(name)
    }

    /// Archive destination for one script
    pub fn archive_path(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.{ARCHIVE_EXT}"))
    }

    /// Build the test-mode configuration: the scripts tree is copied into
    /// a sandbox and both roots are redirected there, so the run can never
    /// mutate the real inputs or outputs.
    pub fn sandboxed(&self) -> Result<Self> {
        self.sandboxed_in(Path::new(SANDBOX_DIR))
    }

    fn sandboxed_in(&self, sandbox: &Path) -> Result<Self> {
        if sandbox.exists() {
            std::fs::remove_dir_all(sandbox).map_err(|e| PackError::SandboxFailed {
                reason: e.to_string(),
            })?;
        }

        let scripts_dir = sandbox.join("scripts");
        fsutil::copy_dir_recursive(&self.scripts_dir, &scripts_dir).map_err(|e| {
            PackError::SandboxFailed {
                reason: e.to_string(),
            }
        })?;

        let output_dir = sandbox.join("dist");
        std::fs::create_dir_all(&output_dir).map_err(|e| PackError::SandboxFailed {
            reason: e.to_string(),
        })?;

        println!(
            "{}",
            Style::new().bold().apply_to("Test mode: operating on a sandbox copy")
        );
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Scripts:"),
            scripts_dir.display()
        );
        println!(
            "  {} {}",
            Style::new().bold().apply_to("Output:"),
            output_dir.display()
        );
        println!();

        Ok(Self {
            scripts_dir,
            output_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_join_under_roots() {
        let config = PackConfig {
            scripts_dir: PathBuf::from("scripts"),
            output_dir: PathBuf::from("dist"),
        };
        assert_eq!(config.script_dir("clock"), PathBuf::from("scripts/clock"));
        assert_eq!(
            config.archive_path("clock"),
            PathBuf::from("dist/clock.scripting")
        );
    }

    #[test]
    fn test_sandboxed_copies_tree_and_redirects_roots() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        std::fs::create_dir_all(scripts.join("clock")).unwrap();
        std::fs::write(scripts.join("clock/script.json"), "{}").unwrap();

        let config = PackConfig {
            scripts_dir: scripts.clone(),
            output_dir: temp.path().join("dist"),
        };

        let sandbox = temp.path().join(".pack-test");
        let sandboxed = config.sandboxed_in(&sandbox).unwrap();

        assert_eq!(sandboxed.scripts_dir, sandbox.join("scripts"));
        assert_eq!(sandboxed.output_dir, sandbox.join("dist"));
        assert!(sandbox.join("scripts/clock/script.json").exists());
        // Original untouched
        assert!(scripts.join("clock/script.json").exists());
    }

    #[test]
    fn test_sandboxed_clears_previous_sandbox() {
        let temp = TempDir::new().unwrap();
        let scripts = temp.path().join("scripts");
        std::fs::create_dir_all(&scripts).unwrap();

        let sandbox = temp.path().join(".pack-test");
        std::fs::create_dir_all(sandbox.join("scripts/stale")).unwrap();

        let config = PackConfig {
            scripts_dir: scripts,
            output_dir: temp.path().join("dist"),
        };
        config.sandboxed_in(&sandbox).unwrap();

        assert!(!sandbox.join("scripts/stale").exists());
    }
}
