//! Common test utilities for scriptpack integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A test workspace holding a scripts tree and an output directory
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace with an empty scripts directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("scripts")).expect("Failed to create scripts directory");
        Self { temp, path }
    }

    /// Create a script directory with a descriptor and one source file
    pub fn create_script(&self, name: &str, version: &str) -> PathBuf {
        let script_path = self.path.join("scripts").join(name);
        std::fs::create_dir_all(&script_path).expect("Failed to create script directory");

        self.write_file(
            &format!("scripts/{name}/script.json"),
            &format!(
                r#"{{
  "name": "{name}",
  "version": "{version}",
  "remoteResource": {{
    "hash": "",
    "url": "https://example.com/{name}.scripting"
  }}
}}
"#
            ),
        );
        self.write_file(&format!("scripts/{name}/index.js"), &format!("// {name}\n"));

        script_path
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read raw bytes from workspace
    pub fn read_bytes(&self, path: &str) -> Vec<u8> {
        std::fs::read(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Parse the manifest in the output directory
    pub fn read_manifest(&self, path: &str) -> serde_json::Value {
        serde_json::from_str(&self.read_file(path)).expect("Failed to parse manifest")
    }
}
