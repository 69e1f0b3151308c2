//! Script archive creation
//!
//! Archives a script directory tree into a single zip file, excluding OS
//! metadata junk. Glob matching uses wax against forward-slash-normalized
//! relative paths so exclusion behaves the same on every platform.

use std::fs::File;
use std::io;
use std::path::Path;

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{PackError, Result};

/// File extension of produced script archives
pub const ARCHIVE_EXT: &str = "scripting";

/// OS metadata junk never included in archives
const EXCLUDE_PATTERNS: &[&str] = &["**/.DS_Store", "__MACOSX/**"];

/// Normalize a relative path to forward slashes for glob matching and
/// archive entry names
fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn is_excluded(relative: &str) -> bool {
    let candidate = CandidatePath::from(relative);
    EXCLUDE_PATTERNS.iter().any(|pattern| {
        Glob::new(pattern)
            .ok()
            .is_some_and(|glob| glob.matched(&candidate).is_some())
    })
}

/// Archive the full tree under `src` into the zip file at `dest`
///
/// Entry names are relative to `src`. Hidden files are included (the
/// archive mirrors the directory at the moment of packaging); only the
/// junk patterns are dropped.
pub fn archive_dir(src: &Path, dest: &Path) -> Result<()> {
    let file = File::create(dest)?;
    let mut writer = ZipWriter::new(file);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    for entry in WalkDir::new(src).sort_by_file_name() {
        let entry = entry?;
        if entry.depth() == 0 {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| PackError::IoError {
                message: e.to_string(),
            })?;
        let name = to_forward_slashes(relative);

        if is_excluded(&name) {
            continue;
        }

        if entry.file_type().is_dir() {
            writer
                .add_directory(&name, options)
                .map_err(|e| PackError::IoError {
                    message: e.to_string(),
                })?;
        } else {
            writer
                .start_file(&name, options)
                .map_err(|e| PackError::IoError {
                    message: e.to_string(),
                })?;
            let mut input = File::open(entry.path()).map_err(|e| PackError::FileReadFailed {
                path: entry.path().display().to_string(),
                reason: e.to_string(),
            })?;
            io::copy(&mut input, &mut writer)?;
        }
    }

    writer.finish().map_err(|e| PackError::IoError {
        message: e.to_string(),
    })?;

    Ok(())
}
