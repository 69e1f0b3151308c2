//! Common file system operations

use std::fs;
use std::io;
use std::path::Path;

/// Copy a directory tree recursively
///
/// Everything is copied byte for byte, hidden entries included: the sandbox
/// copy must fingerprint identically to the tree it mirrors.
pub fn copy_dir_recursive<P1, P2>(src: P1, dst: P2) -> io::Result<()>
where
    P1: AsRef<Path>,
    P2: AsRef<Path>,
{
    let src_ref = src.as_ref();
    let dst_ref = dst.as_ref();

    if !dst_ref.exists() {
        fs::create_dir_all(dst_ref)?;
    }

    for entry in fs::read_dir(src_ref)? {
        let entry = entry?;
        let entry_path = entry.path();
        let dst_path = dst_ref.join(entry.file_name());

        if entry_path.is_dir() {
            copy_dir_recursive(&entry_path, &dst_path)?;
        } else {
            fs::copy(&entry_path, &dst_path)?;
        }
    }

    Ok(())
}
