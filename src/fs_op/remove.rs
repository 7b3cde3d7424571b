use std::fs;
use std::path::Path;

use crate::fs_op::error::FsOpError;

/// Delete the file or empty directory at `path`.
///
/// Symlinks are removed themselves, never their target. Every OS error is
/// propagated unchanged, including `NotFound` and "directory not empty".
pub fn delete<P: AsRef<Path>>(path: P) -> Result<(), FsOpError> {
    let p = path.as_ref();
    if fs::symlink_metadata(p)?.is_dir() {
        fs::remove_dir(p)?;
    } else {
        fs::remove_file(p)?;
    }
    Ok(())
}
