//! Error types and handling for scriptpack
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Errors split into two tiers: per-script errors (descriptor, fingerprint,
//! archive) are caught at the per-script boundary and reported without
//! aborting the batch; setup errors (scripts root, supplied manifest,
//! sandbox) abort the whole run.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for scriptpack operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackError {
    // Script errors
    #[error("Script '{name}' not found")]
    #[diagnostic(
        code(scriptpack::script::not_found),
        help("Run 'scriptpack list' to see available scripts")
    )]
    ScriptNotFound { name: String },

    // Descriptor errors
    #[error("Failed to read descriptor: {path}: {reason}")]
    #[diagnostic(
        code(scriptpack::descriptor::read_failed),
        help("Every script directory must contain a readable script.json")
    )]
    DescriptorReadFailed { path: String, reason: String },

    #[error("Failed to parse descriptor: {path}: {reason}")]
    #[diagnostic(code(scriptpack::descriptor::parse_failed))]
    DescriptorParseFailed { path: String, reason: String },

    #[error("Failed to write descriptor: {path}: {reason}")]
    #[diagnostic(code(scriptpack::descriptor::write_failed))]
    DescriptorWriteFailed { path: String, reason: String },

    // Manifest errors
    #[error("Failed to read manifest: {path}: {reason}")]
    #[diagnostic(
        code(scriptpack::manifest::read_failed),
        help("A missing manifest counts as no history; an existing one must parse as hashes.json")
    )]
    ManifestReadFailed { path: String, reason: String },

    #[error("Failed to write manifest: {path}: {reason}")]
    #[diagnostic(code(scriptpack::manifest::write_failed))]
    ManifestWriteFailed { path: String, reason: String },

    // Archive errors
    #[error("Failed to archive script '{name}': {reason}")]
    #[diagnostic(code(scriptpack::archive::failed))]
    ArchiveFailed { name: String, reason: String },

    // Setup errors (fatal for the whole run)
    #[error("Failed to list scripts directory: {path}: {reason}")]
    #[diagnostic(
        code(scriptpack::fs::scripts_dir_unreadable),
        help("Check --scripts-dir (or SCRIPTPACK_SCRIPTS_DIR) points at a readable directory")
    )]
    ScriptsDirUnreadable { path: String, reason: String },

    #[error("Failed to set up test sandbox: {reason}")]
    #[diagnostic(code(scriptpack::sandbox::setup_failed))]
    SandboxFailed { reason: String },

    // File system errors
    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(scriptpack::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(scriptpack::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for PackError {
    fn from(err: std::io::Error) -> Self {
        PackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for PackError {
    fn from(err: walkdir::Error) -> Self {
        PackError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for PackError {
    fn from(err: serde_json::Error) -> Self {
        PackError::DescriptorParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PackError>;
